//! write-response: the acknowledgment a replica sends the coordinator
//! after applying a mutation, and its versioned binary codec.
//!
//! ```
//! use write_response::{serializer, MessagingVersion, WriteResponse, SERIALIZER};
//!
//! let key = [0xDEu8, 0xAD, 0xBE, 0xEF];
//! let msg = WriteResponse::new("ks1", &key[..], true);
//! let bytes = serializer::serialize(&msg, &SERIALIZER, MessagingVersion::CURRENT)?;
//! assert_eq!(bytes.len(), 12);
//!
//! let back: WriteResponse = serializer::deserialize(&bytes, &SERIALIZER, MessagingVersion::CURRENT)?;
//! assert_eq!(back, msg);
//! # Ok::<(), write_response::Error>(())
//! ```

pub mod error;
pub mod frame;
pub mod port;
pub mod protocol;
pub mod reply;
pub mod serializer;
pub mod sizes;
pub mod version;
pub mod wire;
pub mod write_response;

pub use error::{EncodingError, Error, ErrorKind, Field, Result, TruncatedInputError};
pub use reply::{make_write_response_message, Envelope, Verb};
pub use serializer::VersionedSerializer;
pub use sizes::TypeSizes;
pub use version::{MessagingVersion, WireLayout};
pub use write_response::{WriteResponse, WriteResponseSerializer, SERIALIZER};

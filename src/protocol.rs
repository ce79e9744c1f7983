//! Wire protocol types for the codec port.
//!
//! Every frame on stdin/stdout is:
//!   [4-byte big-endian length] [bincode payload]
//!
//! Payload is always (ref_id: u64, Request) or (ref_id: u64, Response).

use crate::error::ErrorKind;
use crate::reply::Envelope;
use crate::version::MessagingVersion;
use serde::{Deserialize, Serialize};

/// Unique per-request id so the host can match replies.
pub type RefId = u64;

// ── Requests ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    /// Encode a write response with the given messaging version.
    Encode {
        version: MessagingVersion,
        table: String,
        key: Vec<u8>,
        status: bool,
    },

    /// Decode a complete write response body.
    Decode { version: MessagingVersion, bytes: Vec<u8> },

    /// Report the encoded size without encoding.
    SizeOf {
        version: MessagingVersion,
        table: String,
        key: Vec<u8>,
        status: bool,
    },

    /// Encode a write response and wrap it as the reply to `original`.
    Reply {
        original: Envelope,
        table: String,
        key: Vec<u8>,
        status: bool,
    },
}

// ── Responses ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Encoded {
        bytes: Vec<u8>,
    },

    Decoded {
        table: String,
        key: Vec<u8>,
        status: bool,
    },

    Size {
        size: u64,
    },

    Reply {
        envelope: Envelope,
    },

    Error {
        kind: ErrorKind,
        message: String,
    },
}

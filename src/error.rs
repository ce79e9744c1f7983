//! Error types for the write-response codec.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::Utf8Error;
use thiserror::Error;

/// Which part of the message an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Table,
    Key,
    Status,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Table => "table name",
            Field::Key => "partition key",
            Field::Status => "status",
        })
    }
}

/// The value cannot be represented on the wire, or the bytes do not
/// describe a valid value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("{field} is {len} bytes, longer than the {max} bytes a short length prefix allows", max = u16::MAX)]
    TooLong { field: Field, len: usize },

    #[error("{field} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        field: Field,
        #[source]
        source: Utf8Error,
    },

    #[error("status byte must be 0 or 1, got {0:#04x}")]
    InvalidStatus(u8),

    #[error("{0} trailing bytes after message")]
    TrailingBytes(usize),
}

/// Fewer bytes remained than the field being read declares.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("truncated input reading {field}: need {needed} bytes, {remaining} remaining")]
pub struct TruncatedInputError {
    pub field: Field,
    pub needed: usize,
    pub remaining: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Truncated(#[from] TruncatedInputError),

    #[error("unsupported messaging version {0}")]
    UnsupportedVersion(u32),
}

/// Coarse classification of [`Error`], carried across the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Encoding,
    Truncated,
    UnsupportedVersion,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Encoding(_) => ErrorKind::Encoding,
            Error::Truncated(_) => ErrorKind::Truncated,
            Error::UnsupportedVersion(_) => ErrorKind::UnsupportedVersion,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! The write acknowledgment a replica sends back to the coordinator after
//! applying a mutation, and its wire codec.
//!
//! Layout (every supported version, big-endian, no padding):
//!   [u16 table len][table utf-8][u16 key len][key bytes][u8 status]

use crate::error::{EncodingError, Field, Result};
use crate::serializer::VersionedSerializer;
use crate::version::{MessagingVersion, WireLayout};
use crate::wire;
use std::borrow::Cow;

/// Outcome of applying one mutation for one partition key of one table.
///
/// Built over borrowed data on the sending side; decoded messages own
/// their bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WriteResponse<'a> {
    table: Cow<'a, str>,
    key: Cow<'a, [u8]>,
    status: bool,
}

impl<'a> WriteResponse<'a> {
    pub fn new(table: impl Into<Cow<'a, str>>, key: impl Into<Cow<'a, [u8]>>, status: bool) -> Self {
        Self {
            table: table.into(),
            key: key.into(),
            status,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn is_success(&self) -> bool {
        self.status
    }

    pub fn into_owned(self) -> WriteResponse<'static> {
        WriteResponse {
            table: Cow::Owned(self.table.into_owned()),
            key: Cow::Owned(self.key.into_owned()),
            status: self.status,
        }
    }
}

/// Stateless codec for [`WriteResponse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteResponseSerializer;

/// Shared instance; the serializer carries no state.
pub static SERIALIZER: WriteResponseSerializer = WriteResponseSerializer;

impl<'a> VersionedSerializer<WriteResponse<'a>> for WriteResponseSerializer {
    fn serialize(
        &self,
        value: &WriteResponse<'a>,
        out: &mut Vec<u8>,
        version: MessagingVersion,
    ) -> Result<()> {
        match version.layout()? {
            WireLayout::ShortLengthPrefixed => {
                let table = value.table().as_bytes();
                let key = value.key();
                // Both lengths are checked before anything is written.
                let table_len = wire::short_length(Field::Table, table.len())?;
                let key_len = wire::short_length(Field::Key, key.len())?;

                out.reserve(self.serialized_size(value, version)?);
                wire::put_with_short_length(out, table_len, table);
                wire::put_with_short_length(out, key_len, key);
                wire::put_bool(out, value.is_success());
                Ok(())
            }
        }
    }

    fn deserialize(&self, input: &mut &[u8], version: MessagingVersion) -> Result<WriteResponse<'a>> {
        match version.layout()? {
            WireLayout::ShortLengthPrefixed => {
                let mut cur = *input;
                let table = wire::get_with_short_length(&mut cur, Field::Table)?;
                let table = std::str::from_utf8(table).map_err(|source| EncodingError::InvalidUtf8 {
                    field: Field::Table,
                    source,
                })?;
                let key = wire::get_with_short_length(&mut cur, Field::Key)?;
                let status = wire::get_bool(&mut cur, Field::Status)?;
                *input = cur;
                Ok(WriteResponse::new(table.to_owned(), key.to_vec(), status))
            }
        }
    }

    fn serialized_size(&self, value: &WriteResponse<'a>, version: MessagingVersion) -> Result<usize> {
        match version.layout()? {
            layout @ WireLayout::ShortLengthPrefixed => {
                let sizes = layout.type_sizes();
                Ok(sizes.sizeof_with_short_length(value.table().len())
                    + sizes.sizeof_with_short_length(value.key().len())
                    + sizes.sizeof_bool())
            }
        }
    }
}

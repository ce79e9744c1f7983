//! The versioned serializer abstraction shared by every message codec.

use crate::error::{EncodingError, Result};
use crate::version::MessagingVersion;

/// Encodes, decodes and sizes values of `T` for a given messaging version.
///
/// Implementations are stateless; one instance may be shared across
/// threads.
pub trait VersionedSerializer<T> {
    /// Append the encoding of `value` to `out`. On error `out` is left as
    /// it was.
    fn serialize(&self, value: &T, out: &mut Vec<u8>, version: MessagingVersion) -> Result<()>;

    /// Decode one value from the front of `input` and advance past it. On
    /// error `input` is left as it was.
    fn deserialize(&self, input: &mut &[u8], version: MessagingVersion) -> Result<T>;

    /// Exact number of bytes [`serialize`](Self::serialize) writes for
    /// `value`.
    fn serialized_size(&self, value: &T, version: MessagingVersion) -> Result<usize>;
}

/// Serialize `value` into a buffer allocated to its exact size.
pub fn serialize<T, S>(value: &T, serializer: &S, version: MessagingVersion) -> Result<Vec<u8>>
where
    S: VersionedSerializer<T> + ?Sized,
{
    let size = serializer.serialized_size(value, version)?;
    let mut out = Vec::with_capacity(size);
    serializer.serialize(value, &mut out, version)?;
    debug_assert_eq!(out.len(), size, "serialized_size disagrees with serialize");
    Ok(out)
}

/// Decode a buffer that must hold exactly one value.
pub fn deserialize<T, S>(bytes: &[u8], serializer: &S, version: MessagingVersion) -> Result<T>
where
    S: VersionedSerializer<T> + ?Sized,
{
    let mut cur = bytes;
    let value = serializer.deserialize(&mut cur, version)?;
    if !cur.is_empty() {
        return Err(EncodingError::TrailingBytes(cur.len()).into());
    }
    Ok(value)
}

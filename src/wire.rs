//! Big-endian primitive reads and writes over byte slices.
//!
//! Readers take a `&mut &[u8]` cursor and advance it past what they
//! consume. Writers append to a `Vec<u8>`.

use crate::error::{EncodingError, Field, Result, TruncatedInputError};

/// Length of `len` as a short prefix, or `TooLong` if it does not fit.
pub fn short_length(field: Field, len: usize) -> Result<u16> {
    u16::try_from(len).map_err(|_| EncodingError::TooLong { field, len }.into())
}

/// Write a `u16` prefix that was already checked with [`short_length`],
/// followed by `bytes`.
pub fn put_with_short_length(out: &mut Vec<u8>, len: u16, bytes: &[u8]) {
    debug_assert_eq!(usize::from(len), bytes.len());
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(bytes);
}

pub fn put_bool(out: &mut Vec<u8>, value: bool) {
    out.push(u8::from(value));
}

/// Split `n` bytes off the front of `input`.
pub fn get_bytes<'a>(input: &mut &'a [u8], n: usize, field: Field) -> Result<&'a [u8]> {
    if input.len() < n {
        return Err(TruncatedInputError {
            field,
            needed: n,
            remaining: input.len(),
        }
        .into());
    }
    let (head, tail) = input.split_at(n);
    *input = tail;
    Ok(head)
}

pub fn get_u16(input: &mut &[u8], field: Field) -> Result<u16> {
    let b = get_bytes(input, 2, field)?;
    Ok(u16::from_be_bytes([b[0], b[1]]))
}

/// Read a `u16` length and then that many bytes.
pub fn get_with_short_length<'a>(input: &mut &'a [u8], field: Field) -> Result<&'a [u8]> {
    let len = get_u16(input, field)?;
    get_bytes(input, usize::from(len), field)
}

/// Read a boolean. Only `0` and `1` are accepted.
pub fn get_bool(input: &mut &[u8], field: Field) -> Result<bool> {
    match get_bytes(input, 1, field)?[0] {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(EncodingError::InvalidStatus(other).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_short_length_bounds() {
        assert_eq!(short_length(Field::Key, 0), Ok(0));
        assert_eq!(short_length(Field::Key, 65535), Ok(u16::MAX));
        assert_eq!(
            short_length(Field::Key, 65536),
            Err(Error::Encoding(EncodingError::TooLong { field: Field::Key, len: 65536 }))
        );
    }

    #[test]
    fn test_get_with_short_length_advances() {
        let buf = [0x00, 0x02, b'a', b'b', 0xff];
        let mut cur = &buf[..];
        assert_eq!(get_with_short_length(&mut cur, Field::Table).unwrap(), b"ab");
        assert_eq!(cur, &[0xffu8]);
    }

    #[test]
    fn test_truncated_prefix_and_payload() {
        let mut cur = &[0x00][..];
        assert_eq!(
            get_u16(&mut cur, Field::Key),
            Err(Error::Truncated(TruncatedInputError { field: Field::Key, needed: 2, remaining: 1 }))
        );

        let mut cur = &[0x00, 0x05, 1, 2][..];
        assert_eq!(
            get_with_short_length(&mut cur, Field::Key),
            Err(Error::Truncated(TruncatedInputError { field: Field::Key, needed: 5, remaining: 2 }))
        );
    }

    #[test]
    fn test_get_bool_is_strict() {
        assert_eq!(get_bool(&mut &[0u8][..], Field::Status), Ok(false));
        assert_eq!(get_bool(&mut &[1u8][..], Field::Status), Ok(true));
        assert_eq!(
            get_bool(&mut &[2u8][..], Field::Status),
            Err(Error::Encoding(EncodingError::InvalidStatus(2)))
        );
    }
}

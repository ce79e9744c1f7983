//! Length-prefixed frame I/O: `[4-byte big-endian length][payload]`.

use anyhow::{bail, Context, Result};
use std::io::{self, Read, Write};

/// Read one frame. `Ok(None)` means the stream ended cleanly between frames.
pub fn read_frame(r: &mut impl Read, max_len: usize) -> Result<Option<Vec<u8>>> {
    let mut len_buf = [0u8; 4];
    let mut filled = 0;
    while filled < len_buf.len() {
        match r.read(&mut len_buf[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => bail!("stream ended after {filled} of 4 frame length bytes"),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    let len = u32::from_be_bytes(len_buf) as usize;
    if len > max_len {
        bail!("frame of {len} bytes exceeds limit of {max_len}");
    }
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)
        .context("reading frame body")?;
    Ok(Some(buf))
}

pub fn write_frame(w: &mut impl Write, data: &[u8]) -> Result<()> {
    let len = u32::try_from(data.len())
        .context("frame too large for 4-byte length")?
        .to_be_bytes();
    w.write_all(&len)?;
    w.write_all(data)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_frames_back_to_back() {
        let mut buf: Vec<u8> = Vec::new();
        write_frame(&mut buf, b"hello").unwrap();
        write_frame(&mut buf, b"").unwrap();
        assert_eq!(&buf[..4], &[0u8, 0, 0, 5]);

        let mut r = Cursor::new(buf);
        assert_eq!(read_frame(&mut r, 1024).unwrap(), Some(b"hello".to_vec()));
        assert_eq!(read_frame(&mut r, 1024).unwrap(), Some(Vec::new()));
        assert_eq!(read_frame(&mut r, 1024).unwrap(), None);
    }

    #[test]
    fn test_oversized_frame_rejected() {
        let mut buf: Vec<u8> = Vec::new();
        write_frame(&mut buf, &[0u8; 32]).unwrap();
        assert!(read_frame(&mut Cursor::new(buf), 16).is_err());
    }

    #[test]
    fn test_partial_length_prefix_is_error() {
        for cut in 1..4 {
            let buf = vec![0u8; cut];
            let err = read_frame(&mut Cursor::new(buf), 1024).unwrap_err();
            assert!(err.to_string().contains(&format!("{cut} of 4")), "{err}");
        }
    }

    #[test]
    fn test_empty_stream_is_clean_eof() {
        assert_eq!(read_frame(&mut Cursor::new(Vec::<u8>::new()), 1024).unwrap(), None);
    }

    #[test]
    fn test_truncated_body_is_error() {
        let buf = vec![0u8, 0, 0, 8, 1, 2];
        assert!(read_frame(&mut Cursor::new(buf), 1024).is_err());
    }
}

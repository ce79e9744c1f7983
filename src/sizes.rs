//! On-wire widths of primitive values.

/// A family of primitive encodings. Sizes are always in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSizes {
    /// Fixed-width big-endian integers, one-byte booleans.
    Native,
}

impl TypeSizes {
    pub const fn sizeof_short(self) -> usize {
        match self {
            TypeSizes::Native => 2,
        }
    }

    pub const fn sizeof_bool(self) -> usize {
        match self {
            TypeSizes::Native => 1,
        }
    }

    /// Prefix plus payload for a short-length-prefixed field of `len` bytes.
    pub const fn sizeof_with_short_length(self, len: usize) -> usize {
        self.sizeof_short() + len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_sizes() {
        assert_eq!(TypeSizes::Native.sizeof_short(), 2);
        assert_eq!(TypeSizes::Native.sizeof_bool(), 1);
        assert_eq!(TypeSizes::Native.sizeof_with_short_length(0), 2);
        assert_eq!(TypeSizes::Native.sizeof_with_short_length(3), 5);
    }
}

//! Messaging versions and the wire layouts they select.
//!
//! Nodes in a mixed-version cluster negotiate a messaging version per
//! connection. Every codec resolves that number to a [`WireLayout`] before
//! touching bytes, so a layout change in a future version is a new variant
//! and a new match arm rather than a silent assumption.

use crate::error::{Error, Result};
use crate::sizes::TypeSizes;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessagingVersion(u32);

impl MessagingVersion {
    pub const VERSION_07: Self = Self(1);
    pub const VERSION_080: Self = Self(2);
    pub const VERSION_10: Self = Self(3);
    pub const VERSION_11: Self = Self(4);
    pub const VERSION_12: Self = Self(5);

    pub const CURRENT: Self = Self::VERSION_12;

    /// Every version this build can speak, oldest first.
    pub const SUPPORTED: [Self; 5] = [
        Self::VERSION_07,
        Self::VERSION_080,
        Self::VERSION_10,
        Self::VERSION_11,
        Self::VERSION_12,
    ];

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Resolve to the layout this version uses on the wire.
    pub fn layout(self) -> Result<WireLayout> {
        if Self::SUPPORTED.contains(&self) {
            Ok(WireLayout::ShortLengthPrefixed)
        } else {
            Err(Error::UnsupportedVersion(self.get()))
        }
    }

    pub fn is_supported(self) -> bool {
        self.layout().is_ok()
    }
}

impl fmt::Display for MessagingVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of byte layouts a message may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireLayout {
    /// `u16` length-prefixed table and key followed by a one-byte status.
    ShortLengthPrefixed,
}

impl WireLayout {
    pub const fn type_sizes(self) -> TypeSizes {
        match self {
            WireLayout::ShortLengthPrefixed => TypeSizes::Native,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions_resolve() {
        for v in MessagingVersion::SUPPORTED {
            assert_eq!(v.layout(), Ok(WireLayout::ShortLengthPrefixed));
        }
        assert!(MessagingVersion::CURRENT.is_supported());
    }

    #[test]
    fn test_layout_follows_supported_set() {
        let first = MessagingVersion::SUPPORTED[0];
        let last = MessagingVersion::SUPPORTED[MessagingVersion::SUPPORTED.len() - 1];
        assert_eq!(first, MessagingVersion::VERSION_07);
        assert_eq!(last, MessagingVersion::CURRENT);
        for raw in first.get()..=last.get() {
            assert!(MessagingVersion::new(raw).is_supported(), "version {raw}");
        }
    }

    #[test]
    fn test_unsupported_versions() {
        assert_eq!(
            MessagingVersion::new(0).layout(),
            Err(Error::UnsupportedVersion(0))
        );
        let past_current = MessagingVersion::new(MessagingVersion::CURRENT.get() + 1);
        assert_eq!(past_current.layout(), Err(Error::UnsupportedVersion(6)));
        assert!(!past_current.is_supported());
        assert!(!MessagingVersion::new(u32::MAX).is_supported());
    }
}

//! Sneaker size label.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A sneaker size label.
///
/// Sizes are opaque labels as the catalog publishes them (`"42"`,
/// `"10.5 US"`, `"9 UK"`). Together with a `ProductId` a size forms the
/// identity key of a cart line: the same product at two different sizes is
/// two distinct lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Size(String);

impl Size {
    /// Create a size from a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the size label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Size` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Size {
    fn from(label: &str) -> Self {
        Self(label.to_owned())
    }
}

impl From<String> for Size {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Size {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_labels_are_distinct() {
        assert_ne!(Size::new("42"), Size::new("10.5 US"));
        assert_eq!(Size::new("42"), Size::from("42"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Size::new("10.5 US")), "10.5 US");
    }

    #[test]
    fn test_serde_roundtrip() {
        let size = Size::new("42");
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, "\"42\"");
        let parsed: Size = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, size);
    }
}

//! Opaque path type handed to file bridges.

use smol_str::SmolStr;

/// A path as the bridge receives it: an opaque string.
///
/// No validation, normalization, or canonicalization happens on this side of
/// the bridge; the bridge alone decides what the string refers to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BridgePath(SmolStr);

impl BridgePath {
    /// Creates a new path from the given string.
    pub fn new(path: impl Into<SmolStr>) -> Self {
        Self(path.into())
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BridgePath {
    fn from(value: &str) -> Self {
        Self(SmolStr::from(value))
    }
}

impl From<String> for BridgePath {
    fn from(value: String) -> Self {
        Self(SmolStr::from(value))
    }
}

impl From<&BridgePath> for BridgePath {
    fn from(value: &BridgePath) -> Self {
        value.clone()
    }
}

impl AsRef<str> for BridgePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for BridgePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

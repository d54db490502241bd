//! Shared string wrapper type for cheaply cloned file content.

use smol_str::SmolStr;

/// A wrapper around [`smol_str::SmolStr`] for text payloads shared across
/// call sites without reallocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SharedString(pub SmolStr);

impl SharedString {
    /// Creates a new SharedString from the given string.
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Self(value.into())
    }

    /// Returns the underlying string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length of the string in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SharedString {
    fn from(value: &str) -> Self {
        Self(SmolStr::from(value))
    }
}

impl From<String> for SharedString {
    fn from(value: String) -> Self {
        Self(SmolStr::from(value))
    }
}

impl AsRef<str> for SharedString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::ops::Deref for SharedString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<str> for SharedString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for SharedString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::fmt::Display for SharedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::SharedString;

    #[test]
    fn clones_share_content() {
        let original = SharedString::from("hello world");
        let clone = original.clone();
        assert_eq!(original, clone);
        assert_eq!(clone, "hello world");
    }

    #[test]
    fn reports_length_and_emptiness() {
        assert!(SharedString::default().is_empty());
        assert_eq!(SharedString::from("abc").len(), 3);
    }
}

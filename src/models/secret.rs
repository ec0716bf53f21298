//! Secret string handling
//!
//! Passwords typed into the wizard are wiped from memory when the draft is
//! dropped and never appear in debug output or serialized logs.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Placeholder written wherever a secret would otherwise be printed
pub const REDACTED: &str = "[REDACTED]";

/// A string that zeros its contents on drop
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    /// Create a new SecretString
    pub fn new(s: impl Into<String>) -> Self {
        Self { inner: s.into() }
    }

    /// Get the string contents
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.inner.chars().count()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Replace the contents, wiping the previous value first
    pub fn replace(&mut self, s: impl Into<String>) {
        self.inner.zeroize();
        self.inner = s.into();
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretString")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

// Serialization only ever emits the placeholder; draft files can still
// carry a real value on the way in.
impl Serialize for SecretString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_hide_contents() {
        let secret = SecretString::new("hunter2!");
        assert!(!format!("{:?}", secret).contains("hunter2"));
        assert_eq!(secret.to_string(), REDACTED);
        assert_eq!(secret.expose(), "hunter2!");
    }

    #[test]
    fn test_serialize_redacts() {
        let secret = SecretString::new("Abcdef1!");
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"[REDACTED]\"");
    }

    #[test]
    fn test_deserialize_keeps_value() {
        let secret: SecretString = serde_json::from_str("\"Abcdef1!\"").unwrap();
        assert_eq!(secret.expose(), "Abcdef1!");
    }

    #[test]
    fn test_replace_and_char_count() {
        let mut secret = SecretString::new("abc");
        secret.replace("żółw123");
        assert_eq!(secret.char_count(), 7);
        assert!(!secret.is_empty());
    }
}

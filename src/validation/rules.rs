//! Validation predicates
//!
//! Each rule looks at one value in isolation; no rule depends on another
//! field.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A password must contain at least one of these
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

// <non-space>@<non-space>.<non-space>, anchored to the whole value
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex")
});

/// True when the value is empty or whitespace only
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when the trimmed value has the `<x>@<y>.<z>` shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Outcome of the four password complexity predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordCheck {
    pub long_enough: bool,
    pub has_uppercase: bool,
    pub has_special: bool,
    pub has_digit: bool,
}

impl PasswordCheck {
    /// Evaluate every predicate against `password`
    pub fn evaluate(password: &str) -> Self {
        Self {
            long_enough: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// All four predicates hold
    pub fn is_strong(&self) -> bool {
        self.long_enough && self.has_uppercase && self.has_special && self.has_digit
    }

    /// Short descriptions of the predicates that failed
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.long_enough {
            missing.push("at least 8 characters");
        }
        if !self.has_uppercase {
            missing.push("an uppercase letter");
        }
        if !self.has_special {
            missing.push("a special character");
        }
        if !self.has_digit {
            missing.push("a number");
        }
        missing
    }

    /// Inline message for a weak password
    pub fn message(&self) -> String {
        format!("Password must contain {}", self.missing().join(", "))
    }
}

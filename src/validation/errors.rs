//! Validation error map
//!
//! Errors are keyed by field and ordered by wizard position, so rendering
//! and CLI output list them the same way every time.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::Field;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationErrorKind {
    /// Nothing was entered
    RequiredField,
    /// The value does not have the expected shape (email)
    InvalidFormat,
    /// The password misses one or more complexity rules
    WeakPassword,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiredField => write!(f, "required"),
            Self::InvalidFormat => write!(f, "invalid format"),
            Self::WeakPassword => write!(f, "weak password"),
        }
    }
}

/// One field-level failure with its inline message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// A `RequiredField` error worded after the field label
    pub fn required(field: Field) -> Self {
        Self::new(
            ValidationErrorKind::RequiredField,
            format!("{} is required", field.label()),
        )
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Field-level validation errors, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any previous one for the field
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Remove the error for a field, returning it if one was set
    pub fn clear_field(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn kind_of(&self, field: Field) -> Option<ValidationErrorKind> {
        self.get(field).map(|e| e.kind)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }
}

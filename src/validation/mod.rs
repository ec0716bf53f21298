//! Field validation
//!
//! Pure predicates for the registration rules and the error map the wizard
//! stores when a step refuses to advance.

pub mod errors;
pub mod rules;

pub use errors::{FieldError, ValidationErrorKind, ValidationErrors};
pub use rules::{is_blank, is_valid_email, PasswordCheck, MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS};

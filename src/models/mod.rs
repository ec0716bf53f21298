//! Core data models for NixCI onboarding
//!
//! The registration draft, its enumerated choices and field identifiers,
//! qualification entries, and the ID and secret wrappers they rely on.

pub mod choices;
pub mod draft;
pub mod field;
pub mod ids;
pub mod qualification;
pub mod secret;

pub use choices::{AccountType, Choice, Gender, MedicalStatus, OccupationType};
pub use draft::{Languages, RegistrationDraft, DEFAULT_LANGUAGE};
pub use field::{Field, FieldKind, FieldValue};
pub use ids::SubmissionId;
pub use qualification::{Qualification, QualificationField};
pub use secret::{SecretString, REDACTED};

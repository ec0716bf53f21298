//! Registration wizard
//!
//! A seven-step state machine over a [`RegistrationDraft`]. Steps advance
//! one at a time behind their validator and retreat one at a time without
//! validation.
//!
//! [`RegistrationDraft`]: crate::models::RegistrationDraft

pub mod controller;
pub mod step;
pub mod visibility;

pub use controller::{AdvanceOutcome, WizardController};
pub use step::Step;
pub use visibility::{is_visible, visible_fields};

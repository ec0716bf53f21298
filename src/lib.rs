//! NixCI - onboarding flow for the NixCI construction management app
//!
//! This library holds the registration wizard that takes a new user from
//! the welcome screen through seven steps of account details, plus the
//! terminal and command-line front ends that host it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The registration draft and its field identifiers
//! - `validation`: Field rules and the validation error map
//! - `wizard`: The step state machine
//! - `navigation`: Named routes and the navigator seam
//! - `submission`: Append-only log of submitted drafts
//! - `welcome`: Welcome screen content
//! - `display`: Plain-text formatting for CLI output
//! - `cli`: Non-interactive subcommands
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use nixci::models::Field;
//! use nixci::wizard::{AdvanceOutcome, WizardController};
//!
//! let mut wizard = WizardController::new();
//! wizard.set_field(Field::Password, "abc")?;
//! assert_eq!(wizard.advance(), AdvanceOutcome::Rejected);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod navigation;
pub mod submission;
pub mod tui;
pub mod validation;
pub mod welcome;
pub mod wizard;

pub use error::{NixciError, NixciResult};

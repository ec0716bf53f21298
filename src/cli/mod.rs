//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the wizard and submission log.

pub mod config;
pub mod submissions;
pub mod validate;

pub use config::handle_config_command;
pub use submissions::handle_submissions_command;
pub use validate::{handle_validate_command, load_draft, validate_draft, DraftFormat};

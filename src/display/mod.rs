//! Terminal output formatting
//!
//! Plain-text renderers used by the CLI commands.

pub mod submission;
pub mod validation;

pub use submission::{format_submission_details, format_submission_list};
pub use validation::format_validation_report;

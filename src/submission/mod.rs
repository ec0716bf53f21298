//! Submission logging
//!
//! Completing the wizard sends nothing anywhere: the draft is recorded in
//! an append-only JSON-lines log, with secrets redacted.
//!
//! - `SubmissionEntry`: one submitted draft with timestamp and summary
//!   fields.
//! - `SubmissionLog`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::SubmissionEntry;
pub use logger::SubmissionLog;

//! Submission log commands

use crate::config::paths::NixciPaths;
use crate::display::{format_submission_details, format_submission_list};
use crate::error::{NixciError, NixciResult};
use crate::models::SubmissionId;
use crate::submission::SubmissionLog;

/// Handle the submissions command
///
/// Lists the most recent `limit` submissions, or shows one submission in
/// full when `id` is given.
pub fn handle_submissions_command(
    paths: &NixciPaths,
    limit: usize,
    id: Option<&str>,
) -> NixciResult<()> {
    let log = SubmissionLog::new(paths.submission_log());

    if let Some(id) = id {
        let wanted: SubmissionId = id
            .parse()
            .map_err(|_| NixciError::Validation(format!("Invalid submission ID: '{}'", id)))?;

        let entry = log
            .read_all()?
            .into_iter()
            .find(|e| e.id == wanted)
            .ok_or_else(|| NixciError::Validation(format!("Submission not found: {}", id)))?;

        print!("{}", format_submission_details(&entry));
        return Ok(());
    }

    let entries = log.read_recent(limit)?;
    println!("{}", format_submission_list(&entries));
    Ok(())
}

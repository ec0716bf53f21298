//! Submission display formatting
//!
//! Formats logged submissions for terminal output in table and detail views.

use crate::submission::SubmissionEntry;

/// Format submissions as a table, most recent last
pub fn format_submission_list(entries: &[SubmissionEntry]) -> String {
    if entries.is_empty() {
        return "No submissions found.".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let email_width = entries
        .iter()
        .map(|e| e.email.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<16}  {:<name_width$}  {:<email_width$}  {}\n",
        "ID",
        "Submitted",
        "Name",
        "Email",
        "Account Type",
        name_width = name_width,
        email_width = email_width,
    ));

    output.push_str(&format!(
        "{:-<12}  {:-<16}  {:-<name_width$}  {:-<email_width$}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        email_width = email_width,
    ));

    for entry in entries {
        let account_type = entry
            .account_type
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{:<12}  {:<16}  {:<name_width$}  {:<email_width$}  {}\n",
            entry.id.to_string(),
            entry.submitted_at.format("%Y-%m-%d %H:%M"),
            entry.name,
            entry.email,
            account_type,
            name_width = name_width,
            email_width = email_width,
        ));
    }

    output.push_str(&format!("\n{} submission(s)\n", entries.len()));
    output
}

/// Format one submission with its redacted draft
pub fn format_submission_details(entry: &SubmissionEntry) -> String {
    let mut output = String::new();
    output.push_str(&format!("Submission: {}\n", entry.id));
    output.push_str(&format!(
        "  Submitted:    {}\n",
        entry.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("  Name:         {}\n", entry.name));
    output.push_str(&format!("  Email:        {}\n", entry.email));
    if let Some(account_type) = entry.account_type {
        output.push_str(&format!("  Account Type: {}\n", account_type));
    }

    let draft = serde_json::to_string_pretty(&entry.draft).unwrap_or_default();
    output.push_str("  Draft:\n");
    for line in draft.lines() {
        output.push_str(&format!("    {}\n", line));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, RegistrationDraft};

    fn entry() -> SubmissionEntry {
        let draft = RegistrationDraft {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Abcdef1!".into(),
            account_type: Some(AccountType::Company),
            ..RegistrationDraft::default()
        };
        SubmissionEntry::from_draft(&draft).unwrap()
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_submission_list(&[]), "No submissions found.");
    }

    #[test]
    fn test_list_has_row_per_entry() {
        let entry = entry();
        let output = format_submission_list(&[entry.clone()]);
        assert!(output.contains(&entry.id.to_string()));
        assert!(output.contains("Ada Lovelace"));
        assert!(output.contains("ada@example.com"));
        assert!(output.contains("1 submission(s)"));
    }

    #[test]
    fn test_details_never_show_password() {
        let output = format_submission_details(&entry());
        assert!(output.contains("Account Type:"));
        assert!(!output.contains("Abcdef1!"));
    }
}

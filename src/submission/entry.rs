//! Submission entry data structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NixciResult;
use crate::models::{AccountType, RegistrationDraft, SubmissionId};

/// A single submitted registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionEntry {
    /// Unique ID of the submission
    pub id: SubmissionId,

    /// When the draft was submitted (UTC)
    pub submitted_at: DateTime<Utc>,

    /// Account type chosen in step 2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,

    /// Email entered in step 1
    pub email: String,

    /// Full name entered in step 1
    pub name: String,

    /// The redacted draft
    pub draft: serde_json::Value,
}

impl SubmissionEntry {
    /// Snapshot a draft for logging
    pub fn from_draft(draft: &RegistrationDraft) -> NixciResult<Self> {
        Ok(Self {
            id: SubmissionId::new(),
            submitted_at: Utc::now(),
            account_type: draft.account_type,
            email: draft.email.trim().to_string(),
            name: format!("{} {}", draft.first_name.trim(), draft.last_name.trim())
                .trim()
                .to_string(),
            draft: serde_json::to_value(draft)?,
        })
    }
}

//! Draft validation command
//!
//! Loads a draft from a JSON or YAML file and runs every step validator
//! over it, in wizard order.

use std::fs;
use std::path::Path;

use crate::display::format_validation_report;
use crate::error::{NixciError, NixciResult};
use crate::models::RegistrationDraft;
use crate::validation::ValidationErrors;
use crate::wizard::Step;

/// Serialization format of a draft file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFormat {
    Json,
    Yaml,
}

impl DraftFormat {
    /// Parse a format name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(Self::Json)
    }
}

/// Read a draft file
pub fn load_draft(path: &Path, format: DraftFormat) -> NixciResult<RegistrationDraft> {
    let contents = fs::read_to_string(path)
        .map_err(|e| NixciError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let draft: RegistrationDraft = match format {
        DraftFormat::Json => serde_json::from_str(&contents)?,
        DraftFormat::Yaml => serde_yaml::from_str(&contents)?,
    };
    Ok(draft)
}

/// Run every step's validator against the draft
pub fn validate_draft(draft: &RegistrationDraft) -> Vec<(Step, ValidationErrors)> {
    Step::ALL
        .iter()
        .map(|step| (*step, step.validate(draft)))
        .collect()
}

/// Handle the validate command
pub fn handle_validate_command(file: &Path, format: Option<&str>) -> NixciResult<()> {
    let format = match format {
        Some(name) => DraftFormat::parse(name).ok_or_else(|| {
            NixciError::Validation(format!(
                "Invalid format: '{}'. Valid formats: json, yaml",
                name
            ))
        })?,
        None => DraftFormat::from_path(file),
    };

    let draft = load_draft(file, format)?;
    let results = validate_draft(&draft);
    print!("{}", format_validation_report(&results));

    let failed_steps = results.iter().filter(|(_, e)| !e.is_empty()).count();
    if failed_steps > 0 {
        return Err(NixciError::DraftRejected { failed_steps });
    }

    Ok(())
}

//! Wizard controller
//!
//! Owns the current step, the draft and the field error map. All mutation
//! happens synchronously through the methods below.

use crate::error::NixciResult;
use crate::models::{
    Field, FieldValue, QualificationField, RegistrationDraft, SubmissionId, DEFAULT_LANGUAGE,
};
use crate::navigation::{Navigator, Route};
use crate::submission::{SubmissionEntry, SubmissionLog};
use crate::validation::ValidationErrors;

use super::step::Step;
use super::visibility::visible_fields;

/// Result of calling [`WizardController::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Validation passed and the wizard moved forward
    Advanced { from: Step, to: Step },
    /// Validation failed; errors are stored on the controller
    Rejected,
    /// Validation passed on the last step; the caller should submit
    ReadyToSubmit,
}

/// The registration wizard state machine
#[derive(Debug, Clone)]
pub struct WizardController {
    current_step: Step,
    draft: RegistrationDraft,
    errors: ValidationErrors,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    /// A wizard on step 1 with an empty draft
    pub fn new() -> Self {
        Self::with_language(DEFAULT_LANGUAGE)
    }

    /// A wizard whose draft's language list is seeded with `language`
    pub fn with_language(language: impl Into<String>) -> Self {
        Self::with_draft(RegistrationDraft::with_language(language))
    }

    /// A wizard on step 1 over an existing draft
    pub fn with_draft(draft: RegistrationDraft) -> Self {
        Self {
            current_step: Step::FIRST,
            draft,
            errors: ValidationErrors::new(),
        }
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Fields of the current step that apply to this draft
    pub fn visible_fields(&self) -> Vec<Field> {
        visible_fields(self.current_step, &self.draft)
    }

    /// Validate the current step and move forward if it passes
    pub fn advance(&mut self) -> AdvanceOutcome {
        let errors = self.current_step.validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return AdvanceOutcome::Rejected;
        }

        self.errors.clear();
        match self.current_step.next() {
            Some(next) => {
                let from = self.current_step;
                self.current_step = next;
                AdvanceOutcome::Advanced { from, to: next }
            }
            None => AdvanceOutcome::ReadyToSubmit,
        }
    }

    /// Step back one page without validating. Returns whether the step
    /// changed; errors are left as they are.
    pub fn retreat(&mut self) -> bool {
        match self.current_step.prev() {
            Some(prev) => {
                self.current_step = prev;
                true
            }
            None => false,
        }
    }

    /// Overwrite a draft field, clearing any error recorded for it
    ///
    /// # Errors
    ///
    /// Returns a validation error if the value's kind doesn't match the
    /// field. The field's error is cleared either way.
    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) -> NixciResult<()> {
        self.errors.clear_field(field);
        self.draft.set(field, value.into())
    }

    /// Edit the qualification edit buffer
    pub fn set_qualification_field(&mut self, field: QualificationField, value: impl Into<String>) {
        self.draft.current_qualification.set(field, value);
    }

    /// Append the edit buffer to the qualification list and reset it.
    /// Does nothing while the buffer has no title.
    pub fn add_qualification(&mut self) -> bool {
        if !self.draft.current_qualification.has_title() {
            return false;
        }
        let entry = std::mem::take(&mut self.draft.current_qualification);
        self.draft.qualifications.push(entry);
        self.errors.clear_field(Field::Qualifications);
        true
    }

    /// Add a spoken language; empty or duplicate values are ignored
    pub fn add_language(&mut self, value: &str) -> bool {
        self.errors.clear_field(Field::Languages);
        self.draft.languages.add(value)
    }

    /// Remove a spoken language; absent values are ignored
    pub fn remove_language(&mut self, value: &str) -> bool {
        self.errors.clear_field(Field::Languages);
        self.draft.languages.remove(value)
    }

    /// Finish the wizard: log the redacted draft and go home
    ///
    /// Callers invoke this after [`AdvanceOutcome::ReadyToSubmit`]. The
    /// wizard and its draft are consumed.
    pub fn submit(
        self,
        log: &SubmissionLog,
        navigator: &mut dyn Navigator,
    ) -> NixciResult<SubmissionId> {
        let entry = SubmissionEntry::from_draft(&self.draft)?;
        log.log(&entry)?;
        navigator.navigate(Route::Home);
        Ok(entry.id)
    }
}

//! Wizard steps and their validators

use std::fmt;

use crate::models::{Field, RegistrationDraft};
use crate::validation::{
    is_blank, is_valid_email, FieldError, PasswordCheck, ValidationErrorKind, ValidationErrors,
};

/// One numbered page of the registration flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Identity,
    AccountType,
    PersonalDetails,
    Qualifications,
    Medical,
    CompanyDetails,
    CompanyProfile,
}

impl Step {
    pub const ALL: [Self; 7] = [
        Self::Identity,
        Self::AccountType,
        Self::PersonalDetails,
        Self::Qualifications,
        Self::Medical,
        Self::CompanyDetails,
        Self::CompanyProfile,
    ];

    pub const FIRST: Self = Self::Identity;
    pub const LAST: Self = Self::CompanyProfile;

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::AccountType => 2,
            Self::PersonalDetails => 3,
            Self::Qualifications => 4,
            Self::Medical => 5,
            Self::CompanyDetails => 6,
            Self::CompanyProfile => 7,
        }
    }

    /// Step for a 1-based number
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.number() == n)
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(&self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    /// Heading shown at the top of the step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Identity => "Create Your Account",
            Self::AccountType => "Are you a company or individual?",
            Self::PersonalDetails => "Personal Information",
            Self::Qualifications => "Qualifications",
            Self::Medical => "Medical Information",
            Self::CompanyDetails => "Company Information",
            Self::CompanyProfile => "Complete Your Profile",
        }
    }

    /// Fields owned by this step, in display order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::Identity => &[
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
            ],
            Self::AccountType => &[Field::AccountType],
            Self::PersonalDetails => &[
                Field::PhoneNumber,
                Field::Address,
                Field::OccupationType,
                Field::Age,
                Field::About,
                Field::Languages,
                Field::Gender,
                Field::Nationality,
            ],
            Self::Qualifications => &[Field::HasQualifications, Field::Qualifications],
            Self::Medical => &[
                Field::MedicalStatus,
                Field::MedicalHistory,
                Field::EmergencyContactName,
                Field::EmergencyContactNumber,
            ],
            Self::CompanyDetails => &[
                Field::CompanyName,
                Field::CompanyWebsite,
                Field::CompanyAddress,
                Field::CompanyPhone,
                Field::CompanyRegNo,
            ],
            Self::CompanyProfile => &[
                Field::CompanyDescription,
                Field::UtrNumber,
                Field::VatNumber,
            ],
        }
    }

    /// The step that owns `field`
    pub fn of(field: Field) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.fields().contains(&field))
            .unwrap_or(Self::FIRST)
    }

    /// Run this step's validator. Every rule runs; the full error set is
    /// returned in one pass.
    pub fn validate(&self, draft: &RegistrationDraft) -> ValidationErrors {
        match self {
            Self::Identity => validate_identity(draft),
            Self::AccountType => validate_account_type(draft),
            _ => ValidationErrors::new(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

fn validate_identity(draft: &RegistrationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in [Field::FirstName, Field::LastName] {
        if draft.text(field).map_or(true, is_blank) {
            errors.insert(field, FieldError::required(field));
        }
    }

    if is_blank(&draft.email) {
        errors.insert(Field::Email, FieldError::required(Field::Email));
    } else if !is_valid_email(&draft.email) {
        errors.insert(
            Field::Email,
            FieldError::new(
                ValidationErrorKind::InvalidFormat,
                "Please enter a valid email address",
            ),
        );
    }

    if draft.password.is_empty() {
        errors.insert(Field::Password, FieldError::required(Field::Password));
    } else {
        let check = PasswordCheck::evaluate(draft.password.expose());
        if !check.is_strong() {
            errors.insert(
                Field::Password,
                FieldError::new(ValidationErrorKind::WeakPassword, check.message()),
            );
        }
    }

    errors
}

fn validate_account_type(draft: &RegistrationDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    if draft.account_type.is_none() {
        errors.insert(
            Field::AccountType,
            FieldError::new(
                ValidationErrorKind::RequiredField,
                "Please choose an account type",
            ),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, FieldValue};

    fn valid_identity() -> RegistrationDraft {
        let mut draft = RegistrationDraft::default();
        draft.set(Field::FirstName, "Ada".into()).unwrap();
        draft.set(Field::LastName, "Lovelace".into()).unwrap();
        draft.set(Field::Email, "a@b.co".into()).unwrap();
        draft.set(Field::Password, "Abcdef1!".into()).unwrap();
        draft
    }

    #[test]
    fn test_numbering_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(8), None);
    }

    #[test]
    fn test_next_and_prev_bounds() {
        assert_eq!(Step::FIRST.prev(), None);
        assert_eq!(Step::LAST.next(), None);
        assert_eq!(Step::Identity.next(), Some(Step::AccountType));
        assert_eq!(Step::CompanyProfile.prev(), Some(Step::CompanyDetails));
    }

    #[test]
    fn test_every_field_has_one_step() {
        for field in Field::ALL {
            let owners = Step::ALL.iter().filter(|s| s.fields().contains(&field)).count();
            assert_eq!(owners, 1, "{} owned by {} steps", field, owners);
        }
        assert_eq!(Step::of(Field::VatNumber), Step::CompanyProfile);
    }

    #[test]
    fn test_identity_valid() {
        assert!(Step::Identity.validate(&valid_identity()).is_empty());
    }

    #[test]
    fn test_identity_empty_draft_reports_all_fields() {
        let errors = Step::Identity.validate(&RegistrationDraft::default());
        assert_eq!(errors.len(), 4);
        for field in [Field::FirstName, Field::LastName, Field::Email, Field::Password] {
            assert_eq!(errors.kind_of(field), Some(ValidationErrorKind::RequiredField));
        }
        assert!(!errors.contains(Field::ConfirmPassword));
    }

    #[test]
    fn test_identity_whitespace_names_are_required() {
        let mut draft = valid_identity();
        draft.set(Field::FirstName, "   ".into()).unwrap();
        let errors = Step::Identity.validate(&draft);
        assert_eq!(errors.kind_of(Field::FirstName), Some(ValidationErrorKind::RequiredField));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_identity_bad_email_and_weak_password_together() {
        let mut draft = valid_identity();
        draft.set(Field::Email, "not-an-email".into()).unwrap();
        draft.set(Field::Password, "abc".into()).unwrap();

        let errors = Step::Identity.validate(&draft);
        assert_eq!(errors.kind_of(Field::Email), Some(ValidationErrorKind::InvalidFormat));
        assert_eq!(errors.kind_of(Field::Password), Some(ValidationErrorKind::WeakPassword));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_identity_ignores_confirm_password() {
        let mut draft = valid_identity();
        draft.set(Field::ConfirmPassword, "different".into()).unwrap();
        assert!(Step::Identity.validate(&draft).is_empty());
    }

    #[test]
    fn test_account_type_required() {
        let mut draft = RegistrationDraft::default();
        let errors = Step::AccountType.validate(&draft);
        assert_eq!(
            errors.kind_of(Field::AccountType),
            Some(ValidationErrorKind::RequiredField)
        );

        draft
            .set(Field::AccountType, FieldValue::from(AccountType::Company))
            .unwrap();
        assert!(Step::AccountType.validate(&draft).is_empty());
    }

    #[test]
    fn test_later_steps_always_pass() {
        let draft = RegistrationDraft::default();
        for step in &Step::ALL[2..] {
            assert!(step.validate(&draft).is_empty(), "{} rejected", step);
        }
    }
}

//! Per-step field visibility
//!
//! Which fields apply depends on choices made earlier in the draft.
//! Visibility only affects presentation: validators and transitions are
//! unchanged by it.

use crate::models::{Field, MedicalStatus, RegistrationDraft};

use super::step::Step;

/// Whether `field` applies given the rest of the draft
pub fn is_visible(field: Field, draft: &RegistrationDraft) -> bool {
    match field {
        Field::MedicalHistory => draft.medical_status == Some(MedicalStatus::History),
        Field::Qualifications => draft.has_qualifications,
        _ => true,
    }
}

/// The fields of `step` that currently apply, in display order
pub fn visible_fields(step: Step, draft: &RegistrationDraft) -> Vec<Field> {
    step.fields()
        .iter()
        .copied()
        .filter(|field| is_visible(*field, draft))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_history_follows_status() {
        let mut draft = RegistrationDraft::default();
        assert!(!visible_fields(Step::Medical, &draft).contains(&Field::MedicalHistory));

        draft.medical_status = Some(MedicalStatus::Fit);
        assert!(!is_visible(Field::MedicalHistory, &draft));

        draft.medical_status = Some(MedicalStatus::History);
        assert_eq!(
            visible_fields(Step::Medical, &draft),
            vec![
                Field::MedicalStatus,
                Field::MedicalHistory,
                Field::EmergencyContactName,
                Field::EmergencyContactNumber,
            ]
        );
    }

    #[test]
    fn test_qualifications_hidden_when_opted_out() {
        let mut draft = RegistrationDraft::default();
        assert!(is_visible(Field::Qualifications, &draft));

        draft.has_qualifications = false;
        assert_eq!(
            visible_fields(Step::Qualifications, &draft),
            vec![Field::HasQualifications]
        );
    }

    #[test]
    fn test_company_fields_shown_for_every_account_type() {
        use crate::models::{AccountType, Choice};

        let mut draft = RegistrationDraft::default();
        for account_type in AccountType::ALL {
            draft.account_type = Some(*account_type);
            assert_eq!(
                visible_fields(Step::CompanyDetails, &draft),
                Step::CompanyDetails.fields()
            );
            assert_eq!(
                visible_fields(Step::CompanyProfile, &draft),
                vec![Field::CompanyDescription, Field::UtrNumber, Field::VatNumber]
            );
        }
    }

    #[test]
    fn test_identity_fields_always_visible() {
        let draft = RegistrationDraft::default();
        assert_eq!(visible_fields(Step::Identity, &draft), Step::Identity.fields());
    }
}

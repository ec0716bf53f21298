//! The registration draft
//!
//! `RegistrationDraft` accumulates everything the wizard collects. It lives
//! only as long as the wizard that owns it; nothing here touches disk.

use serde::{Deserialize, Serialize};

use super::choices::{AccountType, Gender, MedicalStatus, OccupationType};
use super::field::{Field, FieldKind, FieldValue};
use super::qualification::Qualification;
use super::secret::SecretString;
use crate::error::{NixciError, NixciResult};

/// Language every draft starts with unless configured otherwise
pub const DEFAULT_LANGUAGE: &str = "English";

/// Ordered, duplicate-free list of spoken languages
///
/// Deserialized lists go through [`Languages::add`], so empty and repeated
/// entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Languages(Vec<String>);

impl Languages {
    /// Languages seeded with a single value
    pub fn seeded(language: impl Into<String>) -> Self {
        Self(vec![language.into()])
    }

    /// Append `value` unless it is empty or already present.
    /// Returns whether the list changed.
    pub fn add(&mut self, value: &str) -> bool {
        if value.is_empty() || self.contains(value) {
            return false;
        }
        self.0.push(value.to_string());
        true
    }

    /// Remove `value` if present. Returns whether the list changed.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|lang| lang != value);
        self.0.len() != before
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|lang| lang == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::seeded(DEFAULT_LANGUAGE)
    }
}

impl From<Vec<String>> for Languages {
    fn from(values: Vec<String>) -> Self {
        let mut languages = Self(Vec::with_capacity(values.len()));
        for value in &values {
            languages.add(value);
        }
        languages
    }
}

impl From<Languages> for Vec<String> {
    fn from(languages: Languages) -> Self {
        languages.0
    }
}

fn default_true() -> bool {
    true
}

fn default_medical_status() -> Option<MedicalStatus> {
    Some(MedicalStatus::Fit)
}

/// Everything collected by the registration wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    // Step 1: identity
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: SecretString,
    #[serde(default)]
    pub confirm_password: SecretString,

    // Step 2: account type
    #[serde(default)]
    pub account_type: Option<AccountType>,

    // Step 3: personal details
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub occupation_type: Option<OccupationType>,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub languages: Languages,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub nationality: String,

    // Step 4: qualifications
    #[serde(default = "default_true")]
    pub has_qualifications: bool,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    #[serde(default, skip_serializing)]
    pub current_qualification: Qualification,

    // Step 5: medical
    #[serde(default = "default_medical_status")]
    pub medical_status: Option<MedicalStatus>,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default)]
    pub emergency_contact_name: String,
    #[serde(default)]
    pub emergency_contact_number: String,

    // Step 6: company details
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub company_website: String,
    #[serde(default)]
    pub company_address: String,
    #[serde(default)]
    pub company_phone: String,
    #[serde(default)]
    pub company_reg_no: String,

    // Step 7: company profile
    #[serde(default)]
    pub company_description: String,
    #[serde(default)]
    pub utr_number: String,
    #[serde(default)]
    pub vat_number: String,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self::with_language(DEFAULT_LANGUAGE)
    }
}

impl RegistrationDraft {
    /// An empty draft whose language list is seeded with `language`
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: SecretString::default(),
            confirm_password: SecretString::default(),
            account_type: None,
            phone_number: String::new(),
            address: String::new(),
            occupation_type: None,
            age: String::new(),
            about: String::new(),
            languages: Languages::seeded(language),
            gender: None,
            nationality: String::new(),
            has_qualifications: true,
            qualifications: Vec::new(),
            current_qualification: Qualification::default(),
            medical_status: default_medical_status(),
            medical_history: String::new(),
            emergency_contact_name: String::new(),
            emergency_contact_number: String::new(),
            company_name: String::new(),
            company_website: String::new(),
            company_address: String::new(),
            company_phone: String::new(),
            company_reg_no: String::new(),
            company_description: String::new(),
            utr_number: String::new(),
            vat_number: String::new(),
        }
    }

    /// Overwrite a field with a typed value
    ///
    /// # Errors
    ///
    /// Returns a validation error when the value's kind does not match the
    /// field, including list fields which have dedicated operations.
    pub fn set(&mut self, field: Field, value: FieldValue) -> NixciResult<()> {
        if !value.fits(field.kind()) {
            return Err(NixciError::Validation(format!(
                "{} cannot hold {:?}",
                field.key(),
                value
            )));
        }

        match value {
            FieldValue::Text(text) => {
                if field.kind() == FieldKind::Secret {
                    self.secret_mut(field)
                        .ok_or_else(|| mismatch(field))?
                        .replace(text);
                } else {
                    *self.text_mut(field).ok_or_else(|| mismatch(field))? = text;
                }
            }
            FieldValue::Flag(flag) => self.has_qualifications = flag,
            FieldValue::AccountType(v) => self.account_type = v,
            FieldValue::Occupation(v) => self.occupation_type = v,
            FieldValue::Gender(v) => self.gender = v,
            FieldValue::Medical(v) => self.medical_status = v,
        }

        Ok(())
    }

    /// Current text of a textual field; secrets are exposed so inputs can
    /// echo them masked. Returns `None` for non-textual fields.
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => return Some(self.password.expose()),
            Field::ConfirmPassword => return Some(self.confirm_password.expose()),
            Field::PhoneNumber => &self.phone_number,
            Field::Address => &self.address,
            Field::Age => &self.age,
            Field::About => &self.about,
            Field::Nationality => &self.nationality,
            Field::MedicalHistory => &self.medical_history,
            Field::EmergencyContactName => &self.emergency_contact_name,
            Field::EmergencyContactNumber => &self.emergency_contact_number,
            Field::CompanyName => &self.company_name,
            Field::CompanyWebsite => &self.company_website,
            Field::CompanyAddress => &self.company_address,
            Field::CompanyPhone => &self.company_phone,
            Field::CompanyRegNo => &self.company_reg_no,
            Field::CompanyDescription => &self.company_description,
            Field::UtrNumber => &self.utr_number,
            Field::VatNumber => &self.vat_number,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Human-readable value of any field, with secrets masked
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Password | Field::ConfirmPassword => {
                let len = self.secret(field).map(SecretString::char_count).unwrap_or(0);
                "*".repeat(len)
            }
            Field::AccountType => label_or_blank(self.account_type.map(|v| v.to_string())),
            Field::OccupationType => label_or_blank(self.occupation_type.map(|v| v.to_string())),
            Field::Gender => label_or_blank(self.gender.map(|v| v.to_string())),
            Field::MedicalStatus => label_or_blank(self.medical_status.map(|v| v.to_string())),
            Field::HasQualifications => {
                let answer = if self.has_qualifications { "Yes" } else { "No" };
                answer.to_string()
            }
            Field::Languages => self.languages.iter().collect::<Vec<_>>().join(", "),
            Field::Qualifications => format!("{} added", self.qualifications.len()),
            _ => self.text(field).unwrap_or_default().to_string(),
        }
    }

    fn secret(&self, field: Field) -> Option<&SecretString> {
        match field {
            Field::Password => Some(&self.password),
            Field::ConfirmPassword => Some(&self.confirm_password),
            _ => None,
        }
    }

    fn secret_mut(&mut self, field: Field) -> Option<&mut SecretString> {
        match field {
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Address => &mut self.address,
            Field::Age => &mut self.age,
            Field::About => &mut self.about,
            Field::Nationality => &mut self.nationality,
            Field::MedicalHistory => &mut self.medical_history,
            Field::EmergencyContactName => &mut self.emergency_contact_name,
            Field::EmergencyContactNumber => &mut self.emergency_contact_number,
            Field::CompanyName => &mut self.company_name,
            Field::CompanyWebsite => &mut self.company_website,
            Field::CompanyAddress => &mut self.company_address,
            Field::CompanyPhone => &mut self.company_phone,
            Field::CompanyRegNo => &mut self.company_reg_no,
            Field::CompanyDescription => &mut self.company_description,
            Field::UtrNumber => &mut self.utr_number,
            Field::VatNumber => &mut self.vat_number,
            _ => return None,
        };
        Some(value)
    }
}

fn mismatch(field: Field) -> NixciError {
    NixciError::Validation(format!("{} is not a text field", field.key()))
}

fn label_or_blank(label: Option<String>) -> String {
    label.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_defaults() {
        let draft = RegistrationDraft::default();
        assert!(draft.first_name.is_empty());
        assert!(draft.account_type.is_none());
        assert!(draft.has_qualifications);
        assert_eq!(draft.medical_status, Some(MedicalStatus::Fit));
        assert_eq!(draft.display_value(Field::MedicalStatus), "I am fit for work");
        assert_eq!(draft.languages.iter().collect::<Vec<_>>(), vec!["English"]);
    }

    #[test]
    fn test_deserialized_medical_status_defaults_to_fit() {
        let draft: RegistrationDraft = serde_json::from_str(r#"{"firstName":"Ada"}"#).unwrap();
        assert_eq!(draft.medical_status, Some(MedicalStatus::Fit));

        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"medicalStatus\":\"fit\""));
    }

    #[test]
    fn test_deserialized_languages_drop_duplicates_and_blanks() {
        let draft: RegistrationDraft =
            serde_json::from_str(r#"{"languages":["English","English","","Polish"]}"#).unwrap();
        assert_eq!(
            draft.languages.iter().collect::<Vec<_>>(),
            vec!["English", "Polish"]
        );

        let json = serde_json::to_string(&draft.languages).unwrap();
        assert_eq!(json, r#"["English","Polish"]"#);
    }

    #[test]
    fn test_set_text_fields() {
        let mut draft = RegistrationDraft::default();
        draft.set(Field::FirstName, "Ada".into()).unwrap();
        draft.set(Field::CompanyRegNo, "01234567".into()).unwrap();

        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.text(Field::CompanyRegNo), Some("01234567"));
    }

    #[test]
    fn test_set_secret_field() {
        let mut draft = RegistrationDraft::default();
        draft.set(Field::Password, "Abcdef1!".into()).unwrap();

        assert_eq!(draft.password.expose(), "Abcdef1!");
        assert_eq!(draft.display_value(Field::Password), "********");
    }

    #[test]
    fn test_set_choice_fields() {
        let mut draft = RegistrationDraft::default();
        draft.set(Field::AccountType, AccountType::Worker.into()).unwrap();
        draft.set(Field::MedicalStatus, MedicalStatus::History.into()).unwrap();
        draft.set(Field::HasQualifications, false.into()).unwrap();

        assert_eq!(draft.account_type, Some(AccountType::Worker));
        assert_eq!(draft.medical_status, Some(MedicalStatus::History));
        assert!(!draft.has_qualifications);

        draft.set(Field::AccountType, FieldValue::AccountType(None)).unwrap();
        assert!(draft.account_type.is_none());
    }

    #[test]
    fn test_set_rejects_mismatched_kind() {
        let mut draft = RegistrationDraft::default();
        let err = draft.set(Field::Gender, "male".into()).unwrap_err();
        assert!(err.is_validation());

        assert!(draft.set(Field::Languages, "French".into()).is_err());
        assert!(draft.set(Field::Email, true.into()).is_err());
    }

    #[test]
    fn test_languages_set_semantics() {
        let mut languages = Languages::default();
        assert!(languages.add("French"));
        assert!(!languages.add("French"));
        assert!(!languages.add(""));
        assert_eq!(languages.len(), 2);

        assert!(languages.remove("English"));
        assert!(!languages.remove("Klingon"));
        assert_eq!(languages.iter().collect::<Vec<_>>(), vec!["French"]);
    }

    #[test]
    fn test_serialize_redacts_passwords_and_skips_buffer() {
        let mut draft = RegistrationDraft::default();
        draft.set(Field::Password, "Abcdef1!".into()).unwrap();
        draft.current_qualification.title = "half typed".into();

        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("Abcdef1!"));
        assert!(json.contains("\"password\":\"[REDACTED]\""));
        assert!(!json.contains("half typed"));
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let draft: RegistrationDraft = serde_json::from_str(
            r#"{"firstName":"Ada","accountType":"soleTrader","password":"Abcdef1!"}"#,
        )
        .unwrap();

        assert_eq!(draft.first_name, "Ada");
        assert_eq!(draft.account_type, Some(AccountType::SoleTrader));
        assert_eq!(draft.password.expose(), "Abcdef1!");
        assert!(draft.has_qualifications);
        assert!(draft.languages.contains("English"));
    }
}

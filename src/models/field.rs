//! Draft field identifiers and values
//!
//! Every field the registration wizard edits has a `Field` variant, so
//! lookups are checked at compile time instead of going through string
//! keys. `FieldValue` carries the typed payload for `set_field`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::choices::{AccountType, Gender, MedicalStatus, OccupationType};

/// The kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Free text that must never be displayed or logged
    Secret,
    /// On/off toggle
    Flag,
    /// Account type picker
    AccountType,
    /// Occupation radio group
    Occupation,
    /// Gender picker
    Gender,
    /// Medical status radio group
    Medical,
    /// Managed through dedicated add/remove operations
    List,
}

/// Identifier of a registration draft field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    AccountType,
    PhoneNumber,
    Address,
    OccupationType,
    Age,
    About,
    Languages,
    Gender,
    Nationality,
    HasQualifications,
    Qualifications,
    MedicalStatus,
    MedicalHistory,
    EmergencyContactName,
    EmergencyContactNumber,
    CompanyName,
    CompanyWebsite,
    CompanyAddress,
    CompanyPhone,
    CompanyRegNo,
    CompanyDescription,
    UtrNumber,
    VatNumber,
}

impl Field {
    /// Every field in wizard order
    pub const ALL: [Self; 28] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::AccountType,
        Self::PhoneNumber,
        Self::Address,
        Self::OccupationType,
        Self::Age,
        Self::About,
        Self::Languages,
        Self::Gender,
        Self::Nationality,
        Self::HasQualifications,
        Self::Qualifications,
        Self::MedicalStatus,
        Self::MedicalHistory,
        Self::EmergencyContactName,
        Self::EmergencyContactNumber,
        Self::CompanyName,
        Self::CompanyWebsite,
        Self::CompanyAddress,
        Self::CompanyPhone,
        Self::CompanyRegNo,
        Self::CompanyDescription,
        Self::UtrNumber,
        Self::VatNumber,
    ];

    /// The camelCase key used in draft files and logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::AccountType => "accountType",
            Self::PhoneNumber => "phoneNumber",
            Self::Address => "address",
            Self::OccupationType => "occupationType",
            Self::Age => "age",
            Self::About => "about",
            Self::Languages => "languages",
            Self::Gender => "gender",
            Self::Nationality => "nationality",
            Self::HasQualifications => "hasQualifications",
            Self::Qualifications => "qualifications",
            Self::MedicalStatus => "medicalStatus",
            Self::MedicalHistory => "medicalHistory",
            Self::EmergencyContactName => "emergencyContactName",
            Self::EmergencyContactNumber => "emergencyContactNumber",
            Self::CompanyName => "companyName",
            Self::CompanyWebsite => "companyWebsite",
            Self::CompanyAddress => "companyAddress",
            Self::CompanyPhone => "companyPhone",
            Self::CompanyRegNo => "companyRegNo",
            Self::CompanyDescription => "companyDescription",
            Self::UtrNumber => "utrNumber",
            Self::VatNumber => "vatNumber",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::AccountType => "Account Type",
            Self::PhoneNumber => "Phone Number",
            Self::Address => "Address",
            Self::OccupationType => "Occupation Type",
            Self::Age => "Age",
            Self::About => "About Yourself",
            Self::Languages => "Languages",
            Self::Gender => "Gender",
            Self::Nationality => "Nationality",
            Self::HasQualifications => "I have training qualifications",
            Self::Qualifications => "Qualifications",
            Self::MedicalStatus => "Medical Status",
            Self::MedicalHistory => "Medical History Details",
            Self::EmergencyContactName => "Emergency Contact Name",
            Self::EmergencyContactNumber => "Emergency Contact Number",
            Self::CompanyName => "Company Name",
            Self::CompanyWebsite => "Company Website",
            Self::CompanyAddress => "Company Address",
            Self::CompanyPhone => "Company Phone",
            Self::CompanyRegNo => "Company House Registration Number",
            Self::CompanyDescription => "Company Business Description",
            Self::UtrNumber => "UTR Number",
            Self::VatNumber => "VAT Number (if applicable)",
        }
    }

    /// What kind of value the field holds
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Password | Self::ConfirmPassword => FieldKind::Secret,
            Self::AccountType => FieldKind::AccountType,
            Self::OccupationType => FieldKind::Occupation,
            Self::Gender => FieldKind::Gender,
            Self::MedicalStatus => FieldKind::Medical,
            Self::HasQualifications => FieldKind::Flag,
            Self::Languages | Self::Qualifications => FieldKind::List,
            _ => FieldKind::Text,
        }
    }

    /// Whether the field is edited through a text input
    pub fn is_textual(&self) -> bool {
        matches!(self.kind(), FieldKind::Text | FieldKind::Secret)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Unknown field: '{}'", s))
    }
}

/// A typed value for a draft field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    AccountType(Option<AccountType>),
    Occupation(Option<OccupationType>),
    Gender(Option<Gender>),
    Medical(Option<MedicalStatus>),
}

impl FieldValue {
    /// Whether this value can be stored in a field of `kind`
    pub fn fits(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (Self::Text(_), FieldKind::Text | FieldKind::Secret)
                | (Self::Flag(_), FieldKind::Flag)
                | (Self::AccountType(_), FieldKind::AccountType)
                | (Self::Occupation(_), FieldKind::Occupation)
                | (Self::Gender(_), FieldKind::Gender)
                | (Self::Medical(_), FieldKind::Medical)
        )
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Flag(b)
    }
}

impl From<AccountType> for FieldValue {
    fn from(v: AccountType) -> Self {
        Self::AccountType(Some(v))
    }
}

impl From<OccupationType> for FieldValue {
    fn from(v: OccupationType) -> Self {
        Self::Occupation(Some(v))
    }
}

impl From<Gender> for FieldValue {
    fn from(v: Gender) -> Self {
        Self::Gender(Some(v))
    }
}

impl From<MedicalStatus> for FieldValue {
    fn from(v: MedicalStatus) -> Self {
        Self::Medical(Some(v))
    }
}

//! Qualification entries
//!
//! A qualification is built up in an edit buffer and appended to the draft
//! as a snapshot. Appended entries are never edited or removed.

use serde::{Deserialize, Serialize};

/// Fields of the qualification edit buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualificationField {
    Title,
    Year,
    Description,
    Certificate,
}

impl QualificationField {
    pub const ALL: [Self; 4] = [Self::Title, Self::Year, Self::Description, Self::Certificate];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Course/Qualification Title",
            Self::Year => "Year Completed",
            Self::Description => "Description",
            Self::Certificate => "Certificate",
        }
    }
}

/// A training qualification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualification {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub year: String,

    #[serde(default)]
    pub description: String,

    /// Opaque reference to an uploaded certificate
    #[serde(default)]
    pub certificate: Option<String>,
}

impl Qualification {
    /// Overwrite one field; an empty certificate reference clears it
    pub fn set(&mut self, field: QualificationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            QualificationField::Title => self.title = value,
            QualificationField::Year => self.year = value,
            QualificationField::Description => self.description = value,
            QualificationField::Certificate => {
                self.certificate = if value.is_empty() { None } else { Some(value) };
            }
        }
    }

    /// Read one field as text
    pub fn get(&self, field: QualificationField) -> &str {
        match field {
            QualificationField::Title => &self.title,
            QualificationField::Year => &self.year,
            QualificationField::Description => &self.description,
            QualificationField::Certificate => self.certificate.as_deref().unwrap_or(""),
        }
    }

    /// Whether the entry may be appended to the list
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut q = Qualification::default();
        q.set(QualificationField::Title, "CSCS Card");
        q.set(QualificationField::Year, "2021");
        assert_eq!(q.get(QualificationField::Title), "CSCS Card");
        assert_eq!(q.get(QualificationField::Year), "2021");
        assert!(q.has_title());
    }

    #[test]
    fn test_empty_certificate_clears() {
        let mut q = Qualification::default();
        q.set(QualificationField::Certificate, "cert-001.pdf");
        assert_eq!(q.certificate.as_deref(), Some("cert-001.pdf"));

        q.set(QualificationField::Certificate, "");
        assert!(q.certificate.is_none());
        assert_eq!(q.get(QualificationField::Certificate), "");
    }
}

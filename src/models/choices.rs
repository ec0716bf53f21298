//! Enumerated selections made through pickers and radio groups
//!
//! Each enum serializes with the same camelCase values the mobile client
//! used, so drafts exported from either side stay interchangeable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of options a selection widget can cycle through
pub trait Choice: Copy + PartialEq + 'static {
    /// Every option, in display order
    const ALL: &'static [Self];

    /// Human-readable label
    fn label(&self) -> &'static str;

    /// Next option after `current`, wrapping; `None` selects the first
    fn next_choice(current: Option<Self>) -> Option<Self> {
        let idx = match current.and_then(|c| Self::ALL.iter().position(|o| *o == c)) {
            Some(i) => (i + 1) % Self::ALL.len(),
            None => 0,
        };
        Self::ALL.get(idx).copied()
    }

    /// Previous option before `current`, wrapping; `None` selects the last
    fn prev_choice(current: Option<Self>) -> Option<Self> {
        let len = Self::ALL.len();
        let idx = match current.and_then(|c| Self::ALL.iter().position(|o| *o == c)) {
            Some(0) | None => len.checked_sub(1)?,
            Some(i) => i - 1,
        };
        Self::ALL.get(idx).copied()
    }
}

/// Role chosen in step 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    /// Works for themselves as an independent contractor
    SoleTrader,
    /// Represents a business looking for workers
    Company,
    /// Looking for work with a company (site access)
    Worker,
}

impl AccountType {
    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "soletrader" => Some(Self::SoleTrader),
            "company" => Some(Self::Company),
            "worker" | "siteaccess" => Some(Self::Worker),
            _ => None,
        }
    }

    /// One-line description shown under the option
    pub fn description(&self) -> &'static str {
        match self {
            Self::SoleTrader => "I work for myself as an independent contractor",
            Self::Company => "I represent a business looking for workers",
            Self::Worker => "I'm looking for work opportunities",
        }
    }
}

impl Choice for AccountType {
    const ALL: &'static [Self] = &[Self::SoleTrader, Self::Company, Self::Worker];

    fn label(&self) -> &'static str {
        match self {
            Self::SoleTrader => "Sole Trader",
            Self::Company => "Company",
            Self::Worker => "Worker for Company",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Occupation category from step 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OccupationType {
    Professional,
    Labour,
}

impl Choice for OccupationType {
    const ALL: &'static [Self] = &[Self::Professional, Self::Labour];

    fn label(&self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Labour => "Labour",
        }
    }
}

impl fmt::Display for OccupationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female, Self::Other, Self::PreferNotToSay];

    fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Medical declaration from step 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MedicalStatus {
    /// Fit for work
    Fit,
    /// Has a medical history to declare
    History,
}

impl Choice for MedicalStatus {
    const ALL: &'static [Self] = &[Self::Fit, Self::History];

    fn label(&self) -> &'static str {
        match self {
            Self::Fit => "I am fit for work",
            Self::History => "I have medical history",
        }
    }
}

impl fmt::Display for MedicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_serde_values() {
        assert_eq!(
            serde_json::to_string(&AccountType::SoleTrader).unwrap(),
            "\"soleTrader\""
        );
        assert_eq!(
            serde_json::to_string(&Gender::PreferNotToSay).unwrap(),
            "\"preferNotToSay\""
        );
        let status: MedicalStatus = serde_json::from_str("\"history\"").unwrap();
        assert_eq!(status, MedicalStatus::History);
    }

    #[test]
    fn test_account_type_parse() {
        assert_eq!(AccountType::parse("sole_trader"), Some(AccountType::SoleTrader));
        assert_eq!(AccountType::parse("Company"), Some(AccountType::Company));
        assert_eq!(AccountType::parse("site-access"), Some(AccountType::Worker));
        assert_eq!(AccountType::parse("landlord"), None);
    }

    #[test]
    fn test_next_choice_wraps() {
        assert_eq!(AccountType::next_choice(None), Some(AccountType::SoleTrader));
        assert_eq!(
            AccountType::next_choice(Some(AccountType::SoleTrader)),
            Some(AccountType::Company)
        );
        assert_eq!(
            AccountType::next_choice(Some(AccountType::Worker)),
            Some(AccountType::SoleTrader)
        );
    }

    #[test]
    fn test_prev_choice_wraps() {
        assert_eq!(Gender::prev_choice(None), Some(Gender::PreferNotToSay));
        assert_eq!(Gender::prev_choice(Some(Gender::Male)), Some(Gender::PreferNotToSay));
        assert_eq!(Gender::prev_choice(Some(Gender::Female)), Some(Gender::Male));
    }
}

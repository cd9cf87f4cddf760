//! Error types for the recipe engine
//!
//! Every error carries a message in German and English so the UI can show it
//! in the active language.

use thiserror::Error;

use crate::types::Language;

/// Which part of the eating moment failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    EatingDate,
    EatingTime,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateField::EatingDate => write!(f, "eating_date"),
            DateField::EatingTime => write!(f, "eating_time"),
        }
    }
}

/// The eating date or time could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field}: '{value}'")]
pub struct DateParseError {
    pub field: DateField,
    pub value: String,
}

impl DateParseError {
    pub fn new(field: DateField, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// Localized message for the UI
    pub fn message(&self, language: Language) -> String {
        match (language, self.field) {
            (Language::De, DateField::EatingDate) => {
                format!("Ungültiges Datum: '{}' (erwartet JJJJ-MM-TT)", self.value)
            }
            (Language::De, DateField::EatingTime) => {
                format!("Ungültige Uhrzeit: '{}' (erwartet HH:MM)", self.value)
            }
            (Language::En, DateField::EatingDate) => {
                format!("Invalid date: '{}' (expected YYYY-MM-DD)", self.value)
            }
            (Language::En, DateField::EatingTime) => {
                format!("Invalid time: '{}' (expected HH:MM)", self.value)
            }
        }
    }
}

/// Errors raised while turning a raw configuration into a usable one
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(transparent)]
    DateParse(#[from] DateParseError),

    #[error("Invalid configuration JSON: {0}")]
    Malformed(String),
}

impl ConfigurationError {
    pub fn message(&self, language: Language) -> String {
        match self {
            ConfigurationError::DateParse(e) => e.message(language),
            ConfigurationError::Malformed(detail) => match language {
                Language::De => format!("Ungültige Konfiguration: {}", detail),
                Language::En => format!("Invalid configuration: {}", detail),
            },
        }
    }
}

/// A selection identifier that does not name any known option
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}'")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownOption {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of portal errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PortalErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    FormatError,
    ConfigError,
}

impl fmt::Display for PortalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalErrorKind::NotFound => write!(f, "NotFound"),
            PortalErrorKind::BadRequest => write!(f, "BadRequest"),
            PortalErrorKind::ValidationError => write!(f, "ValidationError"),
            PortalErrorKind::Conflict => write!(f, "Conflict"),
            PortalErrorKind::FormatError => write!(f, "FormatError"),
            PortalErrorKind::ConfigError => write!(f, "ConfigError"),
        }
    }
}

/// Structured error shared by the record store, filters and formatters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalError {
    pub kind: PortalErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl PortalError {
    fn new(kind: PortalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: PortalErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::Conflict, message)
    }

    /// A timestamp that cannot be rendered: unparseable, or later than "now".
    pub fn format(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::FormatError, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::ConfigError, message)
    }

    /// Attach a single field error, keeping any already present.
    pub fn with_field(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors.insert(field.into(), message.into());
        self
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PortalError {}

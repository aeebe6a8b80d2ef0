use std::fmt;

use serde::Serialize;

/// Health verdict of one object or of a whole run.
///
/// Ordered so that `Critical > Warning > Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Warning => f.write_str("warning"),
            Self::Critical => f.write_str("critical"),
        }
    }
}

/// Outcome of evaluating one object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub object_key: String,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn new(object_key: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            object_key: object_key.into(),
            severity,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

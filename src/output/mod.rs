mod json;
mod text;

pub use json::JsonFormatter;
pub use text::NagiosFormatter;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checker::Severity;
use crate::error::{ProbeError, Result};
use crate::perfdata::PerformanceRecord;
use crate::probe::ProbeOutcome;
use crate::{EXIT_CRITICAL, EXIT_OK, EXIT_UNKNOWN, EXIT_WARNING};

/// Reported plugin status, including the out-of-band UNKNOWN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => EXIT_OK,
            Self::Warning => EXIT_WARNING,
            Self::Critical => EXIT_CRITICAL,
            Self::Unknown => EXIT_UNKNOWN,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for Status {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Normal => Self::Ok,
            Severity::Warning => Self::Warning,
            Severity::Critical => Self::Critical,
        }
    }
}

/// Everything printed for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub status: Status,
    pub message: String,
    pub records: Vec<PerformanceRecord>,
}

impl From<ProbeOutcome> for Report {
    fn from(outcome: ProbeOutcome) -> Self {
        Self {
            status: outcome.severity.into(),
            message: outcome.message,
            records: outcome.records,
        }
    }
}

impl From<&ProbeError> for Report {
    fn from(err: &ProbeError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
            records: Vec::new(),
        }
    }
}

/// Trait for rendering a report.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Nagios,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Nagios => Box::new(NagiosFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nagios" | "text" => Ok(Self::Nagios),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

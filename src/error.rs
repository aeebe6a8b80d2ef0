use thiserror::Error;

use crate::output::Status;

/// Coarse classification of a [`ProbeError`], used to pick the reported status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or configuration, detected before any remote access.
    Usage,
    /// The initially requested object does not exist.
    NotFound,
    /// The transport failed for a reason other than a missing object.
    Infrastructure,
}

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Invalid threshold '{raw}': expected a positive integer with an optional unit")]
    InvalidThresholdFormat { raw: String },

    #[error("Unknown unit '{unit}' for property {property}")]
    UnknownUnit { unit: String, property: String },

    #[error("Critical threshold ({critical}) must be greater than warning threshold ({warning})")]
    ThresholdOrdering { warning: String, critical: String },

    #[error("Critical file count ({critical}) must be greater than warning file count ({warning})")]
    CountOrdering { warning: u64, critical: u64 },

    #[error("Missing required option: {0}")]
    MissingOption(String),

    #[error("Invalid host '{0}': expected a single host name")]
    InvalidHost(String),

    #[error("Invalid regular expression: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("File not found: {path} ({source})")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to {operation} {path}: {source}")]
    Transport {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProbeError {
    /// Wrap an I/O error from a transport operation, keeping "not found" distinct.
    #[must_use]
    pub fn from_io(operation: &'static str, path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_string(),
                source,
            }
        } else {
            Self::Transport {
                operation,
                path: path.to_string(),
                source,
            }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Transport { .. } => ErrorKind::Infrastructure,
            Self::InvalidThresholdFormat { .. }
            | Self::UnknownUnit { .. }
            | Self::ThresholdOrdering { .. }
            | Self::CountOrdering { .. }
            | Self::MissingOption(_)
            | Self::InvalidHost(_)
            | Self::InvalidPattern { .. }
            | Self::InvalidGlob { .. }
            | Self::Config(_)
            | Self::TomlParse(_)
            | Self::JsonSerialize(_) => ErrorKind::Usage,
        }
    }

    /// Status reported when this error ends a run.
    ///
    /// Usage errors are UNKNOWN. A missing object and transport failures during
    /// a scan are CRITICAL.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self.kind() {
            ErrorKind::Usage => Status::Unknown,
            ErrorKind::NotFound | ErrorKind::Infrastructure => Status::Critical,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

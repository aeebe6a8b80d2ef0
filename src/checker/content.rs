use regex::bytes::{Regex, RegexBuilder};

use crate::error::{ProbeError, Result};
use crate::transport::{Chunk, Transport};

use super::{Finding, Severity};

/// Size of each read issued while scanning content.
pub const CHUNK_SIZE: usize = 1024;

/// Searches object content for warning and critical patterns.
///
/// Content is read in [`CHUNK_SIZE`] windows and each window is searched on
/// its own. A match that straddles two windows is not detected.
#[derive(Debug, Clone, Default)]
pub struct ContentScanner {
    warning: Option<Regex>,
    critical: Option<Regex>,
}

fn compile(pattern: &str, case_sensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|source| ProbeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

impl ContentScanner {
    /// # Errors
    /// Returns `InvalidPattern` if either pattern fails to compile.
    pub fn new(warning: Option<&str>, critical: Option<&str>, case_sensitive: bool) -> Result<Self> {
        Ok(Self {
            warning: warning.map(|p| compile(p, case_sensitive)).transpose()?,
            critical: critical.map(|p| compile(p, case_sensitive)).transpose()?,
        })
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.warning.is_some() || self.critical.is_some()
    }

    /// Scan one object, stopping at the first chunk that matches.
    ///
    /// Within a chunk the critical pattern is tried first. Returns `None`
    /// when no pattern is configured or nothing matched.
    ///
    /// # Errors
    /// Returns an error if the object cannot be opened or read.
    pub fn scan<T: Transport>(&self, transport: &T, path: &str, key: &str) -> Result<Option<Finding>> {
        if !self.is_configured() {
            return Ok(None);
        }

        let mut handle = transport.open_for_read(path)?;
        let outcome = self.scan_handle(transport, &mut handle, key);
        let closed = transport.close(handle);
        let finding = outcome?;
        closed?;

        if let Some(finding) = &finding {
            tracing::debug!(key, severity = %finding.severity, "content matched");
        }
        Ok(finding)
    }

    fn scan_handle<T: Transport>(
        &self,
        transport: &T,
        handle: &mut T::Handle,
        key: &str,
    ) -> Result<Option<Finding>> {
        loop {
            let bytes = match transport.read_chunk(handle, CHUNK_SIZE)? {
                Chunk::Data(bytes) => bytes,
                Chunk::EndOfStream => return Ok(None),
            };

            if let Some(critical) = &self.critical
                && critical.is_match(&bytes)
            {
                return Ok(Some(Finding::new(
                    key,
                    Severity::Critical,
                    format!("File {key} matches critical pattern '{}'", critical.as_str()),
                )));
            }
            if let Some(warning) = &self.warning
                && warning.is_match(&bytes)
            {
                return Ok(Some(Finding::new(
                    key,
                    Severity::Warning,
                    format!("File {key} matches warning pattern '{}'", warning.as_str()),
                )));
            }
        }
    }
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;

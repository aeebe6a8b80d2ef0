use crate::error::{ProbeError, Result};

/// Limits on the number of objects matched by a directory scan.
///
/// Reaching a limit (`>=`) trips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountThresholds {
    pub warning: Option<u64>,
    pub critical: Option<u64>,
}

impl CountThresholds {
    /// # Errors
    /// Returns `CountOrdering` when both are set and critical is not above warning.
    pub fn new(warning: Option<u64>, critical: Option<u64>) -> Result<Self> {
        if let (Some(warning), Some(critical)) = (warning, critical)
            && critical <= warning
        {
            return Err(ProbeError::CountOrdering { warning, critical });
        }
        Ok(Self { warning, critical })
    }

    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.warning.is_some() || self.critical.is_some()
    }
}

//! Parsing of threshold expressions such as `10days`, `800KB` or `5`.

mod count;

pub use count::CountThresholds;

use std::fmt;

use crate::catalog::{Property, Unit, default_unit};
use crate::error::{ProbeError, Result};

/// A magnitude paired with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub magnitude: u64,
    pub unit: Unit,
}

impl Threshold {
    /// Parse `<positive-integer><optional-unit>` for the given property.
    ///
    /// The unit suffix is matched case-insensitively against the units of the
    /// property's measure kind. Without a suffix the property's default unit
    /// is used.
    ///
    /// # Errors
    /// Returns `InvalidThresholdFormat` if the numeric prefix is missing, zero
    /// or malformed, and `UnknownUnit` if the suffix is not a unit of the
    /// property's measure kind.
    pub fn parse(raw: &str, property: Property) -> Result<Self> {
        let trimmed = raw.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, suffix) = trimmed.split_at(split);
        let suffix = suffix.trim();

        let invalid = || ProbeError::InvalidThresholdFormat {
            raw: raw.to_string(),
        };

        let magnitude: u64 = digits.parse().map_err(|_| invalid())?;
        if magnitude == 0 || !suffix.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let unit = if suffix.is_empty() {
            default_unit(property)
        } else {
            Unit::lookup(property.kind(), suffix).ok_or_else(|| ProbeError::UnknownUnit {
                unit: suffix.to_string(),
                property: property.name().to_string(),
            })?
        };

        tracing::debug!(raw, magnitude, unit = %unit, "parsed threshold");
        Ok(Self { magnitude, unit })
    }

    /// Value in base units: seconds or bytes.
    #[must_use]
    pub const fn base_value(&self) -> u64 {
        self.magnitude.saturating_mul(self.unit.scale())
    }

    /// Whether an observed base-unit value lies strictly above this threshold.
    #[must_use]
    pub fn is_exceeded_by(&self, observed: i64) -> bool {
        i128::from(observed) > i128::from(self.base_value())
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

/// Optional warning and critical thresholds for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThresholdPair {
    pub warning: Option<Threshold>,
    pub critical: Option<Threshold>,
}

impl ThresholdPair {
    /// Parse both thresholds and check their ordering.
    ///
    /// # Errors
    /// Returns a parse error for either string, or `ThresholdOrdering` when
    /// both are present and critical is not strictly greater than warning.
    pub fn parse(property: Property, warning: Option<&str>, critical: Option<&str>) -> Result<Self> {
        let pair = Self {
            warning: warning.map(|raw| Threshold::parse(raw, property)).transpose()?,
            critical: critical.map(|raw| Threshold::parse(raw, property)).transpose()?,
        };
        pair.validate()?;
        Ok(pair)
    }

    /// # Errors
    /// Returns `ThresholdOrdering` when critical does not resolve above warning.
    pub fn validate(&self) -> Result<()> {
        if let (Some(warning), Some(critical)) = (self.warning, self.critical)
            && critical.base_value() <= warning.base_value()
        {
            return Err(ProbeError::ThresholdOrdering {
                warning: warning.to_string(),
                critical: critical.to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.warning.is_none() && self.critical.is_none()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

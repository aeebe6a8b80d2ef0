//! Static registry of measurable properties and the units they can be expressed in.

mod property;
mod unit;

pub use property::{Property, PropertySpec};
pub use unit::{MeasureKind, Unit};

use crate::error::{ProbeError, Result};

/// Look up the scale factor of a unit name within a measure kind.
///
/// The name is matched case-insensitively against the unit's accepted spellings.
///
/// # Errors
/// Returns `UnknownUnit` if `unit_name` is not registered under `kind`.
pub fn unit_scale(kind: MeasureKind, unit_name: &str) -> Result<u64> {
    Unit::lookup(kind, unit_name)
        .map(Unit::scale)
        .ok_or_else(|| ProbeError::UnknownUnit {
            unit: unit_name.to_string(),
            property: kind.to_string(),
        })
}

/// Default unit for a property when a threshold omits one.
#[must_use]
pub const fn default_unit(property: Property) -> Unit {
    property.spec().default_unit
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

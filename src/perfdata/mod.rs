//! Normalized measurement records for monitoring-system ingestion.

use std::fmt;

use serde::Serialize;

use crate::catalog::{Property, Unit};
use crate::threshold::{Threshold, ThresholdPair};
use crate::transport::ObjectStat;

/// One measurement, expressed in a single display unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRecord {
    pub label: String,
    pub value: f64,
    pub warning: Option<f64>,
    pub critical: Option<f64>,
    /// Unit-of-measure annotation, possibly empty.
    pub unit: &'static str,
}

impl PerformanceRecord {
    /// Prefix the label with an object key so records of a directory scan stay distinct.
    #[must_use]
    pub fn scoped(mut self, key: &str) -> Self {
        self.label = format!("{key} {}", self.label);
        self
    }
}

fn two_decimals(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}

impl fmt::Display for PerformanceRecord {
    /// Labels are single-quoted, so an embedded `'` is written as `''`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}'={:.2}{};{};{};;",
            self.label.replace('\'', "''"),
            self.value,
            self.unit,
            two_decimals(self.warning),
            two_decimals(self.critical)
        )
    }
}

/// Unit shared by the value and both thresholds of a record.
///
/// With both thresholds present the one with the larger resolved value wins,
/// critical on a tie. With one present its unit is used, otherwise the
/// property's default unit.
#[must_use]
pub fn display_unit(property: Property, thresholds: &ThresholdPair) -> Unit {
    match (thresholds.warning, thresholds.critical) {
        (Some(warning), Some(critical)) => {
            if critical.base_value() >= warning.base_value() {
                critical.unit
            } else {
                warning.unit
            }
        }
        (Some(only), None) | (None, Some(only)) => only.unit,
        (None, None) => property.spec().default_unit,
    }
}

#[allow(clippy::cast_precision_loss)]
fn scaled(base: f64, unit: Unit) -> f64 {
    base / unit.scale() as f64
}

/// Build the record for one object's active property.
#[must_use]
pub fn build(
    property: Property,
    thresholds: &ThresholdPair,
    stat: &ObjectStat,
    now: i64,
) -> PerformanceRecord {
    let unit = display_unit(property, thresholds);
    #[allow(clippy::cast_precision_loss)]
    let observed = property.observed(stat, now) as f64;
    #[allow(clippy::cast_precision_loss)]
    let threshold_value = |t: Option<Threshold>| t.map(|t| scaled(t.base_value() as f64, unit));

    PerformanceRecord {
        label: property.label().to_string(),
        value: scaled(observed, unit),
        warning: threshold_value(thresholds.warning),
        critical: threshold_value(thresholds.critical),
        unit: unit.perf_suffix(),
    }
}

/// Concatenate records into the performance-data section of the status line.
#[must_use]
pub fn render(records: &[PerformanceRecord]) -> String {
    records.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use chrono::{Local, TimeZone};

use crate::catalog::{MeasureKind, Property};
use crate::threshold::{Threshold, ThresholdPair};
use crate::transport::ObjectStat;

use super::{Finding, Severity};

/// Compares one property of an object against thresholds.
///
/// `now` is fixed for the lifetime of the evaluator so every object of a run
/// is aged against the same instant.
#[derive(Debug, Clone, Copy)]
pub struct PropertyEvaluator {
    property: Property,
    now: i64,
}

impl PropertyEvaluator {
    #[must_use]
    pub const fn new(property: Property, now: i64) -> Self {
        Self { property, now }
    }

    #[must_use]
    pub const fn property(&self) -> Property {
        self.property
    }

    #[must_use]
    pub const fn now(&self) -> i64 {
        self.now
    }

    /// Explain why `stat` breaches `threshold`, or `None` if it does not.
    ///
    /// The comparison is strict: a value equal to the threshold is not a breach.
    #[must_use]
    pub fn evaluate(&self, threshold: &Threshold, stat: &ObjectStat) -> Option<String> {
        let observed = self.property.observed(stat, self.now);
        if !threshold.is_exceeded_by(observed) {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let converted = observed as f64 / threshold.unit.scale() as f64;
        let explanation = match self.property.kind() {
            MeasureKind::Size => format!("File size {converted:.2}{}", threshold.unit),
            MeasureKind::Time => {
                let verb = match self.property {
                    Property::Accessed => "accessed",
                    Property::Modified | Property::Size => "modified",
                };
                let raw = (self.property.spec().read)(stat);
                format!(
                    "File last {verb} {converted:.2} {} ago ({})",
                    threshold.unit,
                    local_timestamp(raw)
                )
            }
        };
        Some(explanation)
    }

    /// Check the critical threshold first, then the warning threshold.
    #[must_use]
    pub fn classify(&self, key: &str, thresholds: &ThresholdPair, stat: &ObjectStat) -> Option<Finding> {
        let check = |threshold: Option<Threshold>, severity| {
            threshold
                .and_then(|t| self.evaluate(&t, stat))
                .map(|message| Finding::new(key, severity, message))
        };
        check(thresholds.critical, Severity::Critical)
            .or_else(|| check(thresholds.warning, Severity::Warning))
    }
}

/// Render an epoch timestamp in the local time zone, `ctime` style.
fn local_timestamp(epoch: i64) -> String {
    Local.timestamp_opt(epoch, 0).single().map_or_else(
        || epoch.to_string(),
        |time| time.format("%a %b %e %H:%M:%S %Y").to_string(),
    )
}

#[cfg(test)]
#[path = "property_tests.rs"]
mod tests;

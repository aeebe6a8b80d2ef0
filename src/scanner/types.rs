use std::fmt::Write;

use indexmap::IndexMap;

use crate::checker::{Finding, Severity};
use crate::perfdata::PerformanceRecord;
use crate::threshold::CountThresholds;
use crate::transport::ObjectStat;

/// Final output of a directory scan.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub severity: Severity,
    pub summary: String,
    pub records: Vec<PerformanceRecord>,
}

/// How a single matched object was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    CriticalBreach,
    WarningBreach,
    CriticalMatch,
    WarningMatch,
    Clean,
}

/// Per-scan accumulator, owned by one [`aggregate`](super::DirectoryScanner::aggregate) call.
#[derive(Debug, Default)]
pub struct ScanTally {
    /// Matched objects keyed by share-relative path, in listing order.
    pub matched: IndexMap<String, ObjectStat>,
    pub critical_breaches: usize,
    pub warning_breaches: usize,
    pub critical_matches: usize,
    pub warning_matches: usize,
    pub findings: Vec<Finding>,
    pub records: Vec<PerformanceRecord>,
}

impl ScanTally {
    pub fn record(&mut self, class: ObjectClass, finding: Option<Finding>) {
        match class {
            ObjectClass::CriticalBreach => self.critical_breaches += 1,
            ObjectClass::WarningBreach => self.warning_breaches += 1,
            ObjectClass::CriticalMatch => self.critical_matches += 1,
            ObjectClass::WarningMatch => self.warning_matches += 1,
            ObjectClass::Clean => {}
        }
        self.findings.extend(finding);
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.matched.len()
    }

    /// Fold the tallies into one verdict.
    ///
    /// Threshold breaches, then pattern matches, then the file count are
    /// consulted in that order; the first that applies decides. Among
    /// breaches or matches, critical wins only when it strictly outnumbers
    /// warning.
    #[must_use]
    pub fn verdict(&self, counts: &CountThresholds) -> (Severity, String) {
        let total = self.total();

        if self.critical_breaches + self.warning_breaches > 0 {
            let severity = majority(self.critical_breaches, self.warning_breaches);
            let summary = format!(
                "{} critical and {} warning threshold breaches in {total} files checked.",
                self.critical_breaches, self.warning_breaches
            );
            return (severity, summary);
        }

        if self.critical_matches + self.warning_matches > 0 {
            let severity = majority(self.critical_matches, self.warning_matches);
            let summary = format!(
                "{} critical and {} warning pattern matches in {total} files checked.",
                self.critical_matches, self.warning_matches
            );
            return (severity, summary);
        }

        let total_count = total as u64;
        if let Some(critical) = counts.critical
            && total_count >= critical
        {
            return (
                Severity::Critical,
                format!("{total} files found, critical count is {critical}."),
            );
        }
        if let Some(warning) = counts.warning
            && total_count >= warning
        {
            return (
                Severity::Warning,
                format!("{total} files found, warning count is {warning}."),
            );
        }

        (Severity::Normal, format!("{total} files checked."))
    }

    /// Summary with the worst per-object explanation appended.
    #[must_use]
    pub fn detailed_summary(&self, summary: &str) -> String {
        let mut out = summary.to_string();
        if let Some(worst) = crate::checker::worst(&self.findings) {
            let _ = write!(out, " {}: {}", worst.object_key, worst.message);
        }
        out
    }
}

const fn majority(critical: usize, warning: usize) -> Severity {
    if critical > warning {
        Severity::Critical
    } else {
        Severity::Warning
    }
}

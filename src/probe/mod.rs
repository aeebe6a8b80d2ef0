//! Runs one check in either single-object or directory mode.

use crate::catalog::Property;
use crate::checker::{ContentScanner, Finding, PropertyEvaluator, Severity, resolve};
use crate::error::Result;
use crate::perfdata::{self, PerformanceRecord};
use crate::scanner::{DirectoryScanner, NameMatcher};
use crate::threshold::{CountThresholds, ThresholdPair};
use crate::transport::Transport;

/// What to do with the target path.
#[derive(Debug, Clone, Default)]
pub enum Mode {
    /// Check one object.
    #[default]
    Single,
    /// Check every matching entry of a directory.
    Directory {
        matcher: NameMatcher,
        counts: CountThresholds,
    },
}

/// Fully validated description of one check.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    /// Share-relative path of the object or directory.
    pub path: String,
    pub property: Property,
    pub thresholds: ThresholdPair,
    pub content: ContentScanner,
    pub mode: Mode,
    pub collect_perf: bool,
    /// Append the worst per-object explanation to directory summaries.
    pub details: bool,
}

impl ProbeRequest {
    #[must_use]
    pub fn new(path: impl Into<String>, property: Property) -> Self {
        Self {
            path: path.into(),
            property,
            thresholds: ThresholdPair::default(),
            content: ContentScanner::default(),
            mode: Mode::Single,
            collect_perf: true,
            details: false,
        }
    }
}

/// Verdict of a completed check.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub severity: Severity,
    pub message: String,
    pub records: Vec<PerformanceRecord>,
}

/// Run the check described by `request`, comparing ages against `now`.
///
/// The target is stat'ed before anything else, so a missing object fails
/// the run before thresholds or patterns are looked at.
///
/// # Errors
/// Returns `NotFound` if the target does not exist, or a transport error if
/// the target cannot be read or listed.
pub fn run<T: Transport>(transport: &T, request: &ProbeRequest, now: i64) -> Result<ProbeOutcome> {
    let stat = transport.stat(&request.path)?;
    let evaluator = PropertyEvaluator::new(request.property, now);

    match &request.mode {
        Mode::Single => {
            let findings: Vec<Finding> = evaluator
                .classify(&request.path, &request.thresholds, &stat)
                .into_iter()
                .chain(request.content.scan(transport, &request.path, &request.path)?)
                .collect();

            let records = if request.collect_perf {
                vec![perfdata::build(request.property, &request.thresholds, &stat, now)]
            } else {
                Vec::new()
            };

            Ok(ProbeOutcome {
                severity: resolve(findings.iter().map(|f| f.severity)),
                message: single_message(&request.path, findings),
                records,
            })
        }
        Mode::Directory { matcher, counts } => {
            let result = DirectoryScanner::new(matcher.clone(), evaluator)
                .with_thresholds(request.thresholds)
                .with_content(request.content.clone())
                .with_count_thresholds(*counts)
                .with_perfdata(request.collect_perf)
                .with_details(request.details)
                .aggregate(transport, &request.path)?;

            Ok(ProbeOutcome {
                severity: result.severity,
                message: result.summary,
                records: result.records,
            })
        }
    }
}

/// Worst findings first; `File <path> OK` when there are none.
fn single_message(path: &str, mut findings: Vec<Finding>) -> String {
    if findings.is_empty() {
        return format!("File {path} OK");
    }
    findings.sort_by(|a, b| b.severity.cmp(&a.severity));
    findings
        .into_iter()
        .map(|f| f.message)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

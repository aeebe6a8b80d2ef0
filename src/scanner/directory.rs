use crate::checker::{ContentScanner, Finding, PropertyEvaluator, Severity};
use crate::error::Result;
use crate::perfdata;
use crate::threshold::{CountThresholds, ThresholdPair};
use crate::transport::{ObjectStat, Transport, join};

use super::{AggregateResult, NameFilter, ObjectClass, ScanTally};

/// Message reported when no directory entry matches the name filter.
pub const NO_FILES_FOUND: &str = "No files found";

/// Scans one directory and combines per-object verdicts into one.
pub struct DirectoryScanner<F: NameFilter> {
    filter: F,
    evaluator: PropertyEvaluator,
    thresholds: ThresholdPair,
    content: ContentScanner,
    counts: CountThresholds,
    collect_perf: bool,
    details: bool,
}

impl<F: NameFilter> DirectoryScanner<F> {
    #[must_use]
    pub fn new(filter: F, evaluator: PropertyEvaluator) -> Self {
        Self {
            filter,
            evaluator,
            thresholds: ThresholdPair::default(),
            content: ContentScanner::default(),
            counts: CountThresholds::default(),
            collect_perf: true,
            details: false,
        }
    }

    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: ThresholdPair) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: ContentScanner) -> Self {
        self.content = content;
        self
    }

    #[must_use]
    pub const fn with_count_thresholds(mut self, counts: CountThresholds) -> Self {
        self.counts = counts;
        self
    }

    #[must_use]
    pub const fn with_perfdata(mut self, collect: bool) -> Self {
        self.collect_perf = collect;
        self
    }

    /// Append the worst object's explanation to non-normal summaries.
    #[must_use]
    pub const fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Scan `dir` and produce the aggregate verdict.
    ///
    /// Zero matching entries always yields CRITICAL.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed or a matched object
    /// cannot be stat'ed or read.
    pub fn aggregate<T: Transport>(&self, transport: &T, dir: &str) -> Result<AggregateResult> {
        let mut tally = ScanTally::default();
        self.collect_matches(transport, dir, &mut tally)?;

        if tally.matched.is_empty() {
            tracing::info!(dir, "no directory entries matched");
            return Ok(AggregateResult {
                severity: Severity::Critical,
                summary: NO_FILES_FOUND.to_string(),
                records: Vec::new(),
            });
        }

        let matched = std::mem::take(&mut tally.matched);
        for (key, stat) in &matched {
            let (class, finding) = self.classify(transport, key, stat)?;
            tracing::debug!(key, ?class, "classified object");
            tally.record(class, finding);

            if self.collect_perf {
                let record = perfdata::build(
                    self.evaluator.property(),
                    &self.thresholds,
                    stat,
                    self.evaluator.now(),
                );
                tally.records.push(record.scoped(key));
            }
        }
        tally.matched = matched;

        let (severity, summary) = tally.verdict(&self.counts);
        let summary = if self.details && severity != Severity::Normal {
            tally.detailed_summary(&summary)
        } else {
            summary
        };

        Ok(AggregateResult {
            severity,
            summary,
            records: tally.records,
        })
    }

    fn collect_matches<T: Transport>(&self, transport: &T, dir: &str, tally: &mut ScanTally) -> Result<()> {
        for entry in transport.list_directory(dir)? {
            if entry.is_dir || entry.name == "." || entry.name == ".." {
                continue;
            }
            if !self.filter.matches(&entry.name) {
                continue;
            }
            let key = join(dir, &entry.name);
            let stat = transport.stat(&key)?;
            // listings report links as-is; the stat follows them
            if stat.is_dir {
                tracing::debug!(key, "skipping linked directory");
                continue;
            }
            tally.matched.insert(key, stat);
        }
        tracing::debug!(dir, matched = tally.matched.len(), "listed directory");
        Ok(())
    }

    fn classify<T: Transport>(
        &self,
        transport: &T,
        key: &str,
        stat: &ObjectStat,
    ) -> Result<(ObjectClass, Option<Finding>)> {
        if let Some(finding) = self.evaluator.classify(key, &self.thresholds, stat) {
            let class = if finding.is_critical() {
                ObjectClass::CriticalBreach
            } else {
                ObjectClass::WarningBreach
            };
            return Ok((class, Some(finding)));
        }

        let Some(finding) = self.content.scan(transport, key, key)? else {
            return Ok((ObjectClass::Clean, None));
        };
        let class = if finding.is_critical() {
            ObjectClass::CriticalMatch
        } else {
            ObjectClass::WarningMatch
        };
        Ok((class, Some(finding)))
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;

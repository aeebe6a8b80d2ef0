use super::{Finding, Severity};

/// Worst severity among `severities`, or `Normal` when there are none.
pub fn resolve(severities: impl IntoIterator<Item = Severity>) -> Severity {
    severities.into_iter().max().unwrap_or_default()
}

/// The first finding carrying the worst severity.
#[must_use]
pub fn worst(findings: &[Finding]) -> Option<&Finding> {
    findings
        .iter()
        .reduce(|best, next| if next.severity > best.severity { next } else { best })
}

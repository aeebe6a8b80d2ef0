use super::*;
use crate::checker::Severity;
use crate::threshold::CountThresholds;
use crate::transport::ObjectStat;

fn tally_with(total: usize) -> ScanTally {
    let mut tally = ScanTally::default();
    for i in 0..total {
        tally.matched.insert(format!("dir/f{i}"), ObjectStat::default());
    }
    tally
}

fn record_n(tally: &mut ScanTally, class: ObjectClass, n: usize) {
    for _ in 0..n {
        tally.record(class, None);
    }
}

#[test]
fn more_critical_than_warning_breaches_is_critical() {
    let mut tally = tally_with(10);
    record_n(&mut tally, ObjectClass::CriticalBreach, 5);
    record_n(&mut tally, ObjectClass::WarningBreach, 3);

    let (severity, summary) = tally.verdict(&CountThresholds::default());

    assert_eq!(severity, Severity::Critical);
    assert_eq!(
        summary,
        "5 critical and 3 warning threshold breaches in 10 files checked."
    );
}

#[test]
fn equal_breach_counts_resolve_to_warning() {
    let mut tally = tally_with(10);
    record_n(&mut tally, ObjectClass::CriticalBreach, 2);
    record_n(&mut tally, ObjectClass::WarningBreach, 2);

    assert_eq!(tally.verdict(&CountThresholds::default()).0, Severity::Warning);
}

#[test]
fn fewer_critical_than_warning_breaches_is_warning() {
    let mut tally = tally_with(10);
    record_n(&mut tally, ObjectClass::CriticalBreach, 3);
    record_n(&mut tally, ObjectClass::WarningBreach, 5);

    assert_eq!(tally.verdict(&CountThresholds::default()).0, Severity::Warning);
}

#[test]
fn breaches_take_precedence_over_pattern_matches() {
    let mut tally = tally_with(4);
    record_n(&mut tally, ObjectClass::WarningBreach, 1);
    record_n(&mut tally, ObjectClass::CriticalMatch, 3);

    let (severity, summary) = tally.verdict(&CountThresholds::default());

    assert_eq!(severity, Severity::Warning);
    assert!(summary.contains("threshold breaches"));
}

#[test]
fn pattern_matches_are_reported_separately() {
    let mut tally = tally_with(6);
    record_n(&mut tally, ObjectClass::CriticalMatch, 2);
    record_n(&mut tally, ObjectClass::WarningMatch, 1);

    let (severity, summary) = tally.verdict(&CountThresholds::default());

    assert_eq!(severity, Severity::Critical);
    assert_eq!(summary, "2 critical and 1 warning pattern matches in 6 files checked.");
}

#[test]
fn pattern_matches_take_precedence_over_file_count() {
    let mut tally = tally_with(50);
    record_n(&mut tally, ObjectClass::WarningMatch, 1);
    let counts = CountThresholds::new(Some(5), Some(10)).unwrap();

    let (severity, summary) = tally.verdict(&counts);

    assert_eq!(severity, Severity::Warning);
    assert!(summary.contains("pattern matches"));
}

#[test]
fn file_count_checks_critical_first() {
    let counts = CountThresholds::new(Some(5), Some(10)).unwrap();

    assert_eq!(tally_with(10).verdict(&counts).0, Severity::Critical);
    assert_eq!(tally_with(5).verdict(&counts).0, Severity::Warning);
    assert_eq!(tally_with(4).verdict(&counts).0, Severity::Normal);
}

#[test]
fn clean_scan_reports_total() {
    let mut tally = tally_with(4);
    record_n(&mut tally, ObjectClass::Clean, 4);

    let (severity, summary) = tally.verdict(&CountThresholds::default());

    assert_eq!(severity, Severity::Normal);
    assert_eq!(summary, "4 files checked.");
}

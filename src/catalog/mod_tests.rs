use super::*;
use crate::transport::ObjectStat;

fn stat(size_bytes: u64, accessed_epoch: i64, modified_epoch: i64) -> ObjectStat {
    ObjectStat {
        size_bytes,
        accessed_epoch,
        modified_epoch,
        is_dir: false,
    }
}

#[test]
fn unit_scale_resolves_registered_units() {
    assert_eq!(unit_scale(MeasureKind::Time, "days").unwrap(), 86_400);
    assert_eq!(unit_scale(MeasureKind::Time, "Minutes").unwrap(), 60);
    assert_eq!(unit_scale(MeasureKind::Size, "MB").unwrap(), 1_048_576);
    assert_eq!(unit_scale(MeasureKind::Size, "kb").unwrap(), 1_024);
}

#[test]
fn unit_scale_rejects_unit_from_other_kind() {
    let err = unit_scale(MeasureKind::Size, "days").unwrap_err();
    assert!(matches!(err, ProbeError::UnknownUnit { ref unit, .. } if unit == "days"));
}

#[test]
fn unit_scale_rejects_unregistered_name() {
    assert!(unit_scale(MeasureKind::Time, "fortnights").is_err());
}

#[test]
fn units_belong_to_one_kind() {
    for unit in Unit::ALL {
        assert!(Unit::lookup(unit.kind(), unit.name()).is_some(), "{unit}");
    }
    assert_eq!(Unit::lookup(MeasureKind::Time, "m"), Some(Unit::Minutes));
    assert_eq!(Unit::lookup(MeasureKind::Size, "m"), None);
}

#[test]
fn perf_suffix_only_annotates_seconds_among_time_units() {
    assert_eq!(Unit::Seconds.perf_suffix(), "s");
    assert_eq!(Unit::Minutes.perf_suffix(), "");
    assert_eq!(Unit::Days.perf_suffix(), "");
    assert_eq!(Unit::Megabytes.perf_suffix(), "MB");
}

#[test]
fn default_units_follow_property_kind() {
    assert_eq!(default_unit(Property::Size), Unit::Kilobytes);
    assert_eq!(default_unit(Property::Modified), Unit::Seconds);
    assert_eq!(default_unit(Property::Accessed), Unit::Seconds);
    for property in [Property::Size, Property::Modified, Property::Accessed] {
        assert_eq!(default_unit(property).kind(), property.kind());
    }
}

#[test]
fn observed_reads_the_selected_attribute() {
    let s = stat(2_048, 900, 500);
    assert_eq!(Property::Size.observed(&s, 1_000), 2_048);
    assert_eq!(Property::Modified.observed(&s, 1_000), 500);
    assert_eq!(Property::Accessed.observed(&s, 1_000), 100);
}

#[test]
fn property_from_str_accepts_aliases() {
    assert_eq!("SIZE".parse::<Property>().unwrap(), Property::Size);
    assert_eq!("mtime".parse::<Property>().unwrap(), Property::Modified);
    assert_eq!("accessed".parse::<Property>().unwrap(), Property::Accessed);
    assert!("owner".parse::<Property>().is_err());
}

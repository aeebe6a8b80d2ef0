use std::fmt;
use std::str::FromStr;

use crate::transport::ObjectStat;

use super::{MeasureKind, Unit};

/// The file attribute under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Property {
    Size,
    #[default]
    Modified,
    Accessed,
}

/// Catalog record attached to each [`Property`].
#[derive(Debug, Clone, Copy)]
pub struct PropertySpec {
    pub kind: MeasureKind,
    pub default_unit: Unit,
    /// Label used for performance data.
    pub label: &'static str,
    /// Raw stat attribute: bytes for size, epoch seconds for timestamps.
    pub read: fn(&ObjectStat) -> i64,
}

fn read_size(stat: &ObjectStat) -> i64 {
    i64::try_from(stat.size_bytes).unwrap_or(i64::MAX)
}

const fn read_modified(stat: &ObjectStat) -> i64 {
    stat.modified_epoch
}

const fn read_accessed(stat: &ObjectStat) -> i64 {
    stat.accessed_epoch
}

const SIZE_SPEC: PropertySpec = PropertySpec {
    kind: MeasureKind::Size,
    default_unit: Unit::Kilobytes,
    label: "size",
    read: read_size,
};

const MODIFIED_SPEC: PropertySpec = PropertySpec {
    kind: MeasureKind::Time,
    default_unit: Unit::Seconds,
    label: "last_modified",
    read: read_modified,
};

const ACCESSED_SPEC: PropertySpec = PropertySpec {
    kind: MeasureKind::Time,
    default_unit: Unit::Seconds,
    label: "last_accessed",
    read: read_accessed,
};

impl Property {
    #[must_use]
    pub const fn spec(self) -> &'static PropertySpec {
        match self {
            Self::Size => &SIZE_SPEC,
            Self::Modified => &MODIFIED_SPEC,
            Self::Accessed => &ACCESSED_SPEC,
        }
    }

    #[must_use]
    pub const fn kind(self) -> MeasureKind {
        self.spec().kind
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.spec().label
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Modified => "modified",
            Self::Accessed => "accessed",
        }
    }

    /// Observed value in base units: size in bytes, or age in seconds relative to `now`.
    #[must_use]
    pub fn observed(self, stat: &ObjectStat, now: i64) -> i64 {
        let raw = (self.spec().read)(stat);
        match self.kind() {
            MeasureKind::Size => raw,
            MeasureKind::Time => now.saturating_sub(raw),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "size" => Ok(Self::Size),
            "modified" | "mtime" => Ok(Self::Modified),
            "accessed" | "atime" => Ok(Self::Accessed),
            _ => Err(format!("Unknown property: {s}")),
        }
    }
}

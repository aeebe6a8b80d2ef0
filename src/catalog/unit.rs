use std::fmt;

/// Groups units that are mutually convertible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureKind {
    Time,
    Size,
}

impl fmt::Display for MeasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => f.write_str("time"),
            Self::Size => f.write_str("size"),
        }
    }
}

/// A named scale factor within a measure kind.
///
/// Time units scale to seconds, size units scale to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl Unit {
    pub const ALL: [Self; 7] = [
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Kilobytes,
        Self::Megabytes,
        Self::Gigabytes,
    ];

    #[must_use]
    pub const fn kind(self) -> MeasureKind {
        match self {
            Self::Seconds | Self::Minutes | Self::Hours | Self::Days => MeasureKind::Time,
            Self::Kilobytes | Self::Megabytes | Self::Gigabytes => MeasureKind::Size,
        }
    }

    /// Number of base units (seconds or bytes) in one of this unit.
    #[must_use]
    pub const fn scale(self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 3_600,
            Self::Days => 86_400,
            Self::Kilobytes => 1_024,
            Self::Megabytes => 1_048_576,
            Self::Gigabytes => 1_073_741_824,
        }
    }

    /// Canonical name, used in check messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
            Self::Kilobytes => "KB",
            Self::Megabytes => "MB",
            Self::Gigabytes => "GB",
        }
    }

    /// Unit-of-measure annotation for performance data.
    ///
    /// Time is left unannotated except for plain seconds.
    #[must_use]
    pub const fn perf_suffix(self) -> &'static str {
        match self {
            Self::Seconds => "s",
            Self::Minutes | Self::Hours | Self::Days => "",
            Self::Kilobytes | Self::Megabytes | Self::Gigabytes => self.name(),
        }
    }

    /// Lowercase spellings accepted by the threshold parser.
    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Seconds => &["s", "sec", "secs", "second", "seconds"],
            Self::Minutes => &["m", "min", "mins", "minute", "minutes"],
            Self::Hours => &["h", "hr", "hrs", "hour", "hours"],
            Self::Days => &["d", "day", "days"],
            Self::Kilobytes => &["kb"],
            Self::Megabytes => &["mb"],
            Self::Gigabytes => &["gb"],
        }
    }

    /// Resolve a unit name within one measure kind, ignoring case.
    #[must_use]
    pub fn lookup(kind: MeasureKind, name: &str) -> Option<Self> {
        let normalized = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .filter(|unit| unit.kind() == kind)
            .find(|unit| unit.aliases().contains(&normalized.as_str()))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

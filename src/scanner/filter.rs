use globset::{GlobBuilder, GlobMatcher};
use regex::{Regex, RegexBuilder};

use crate::error::{ProbeError, Result};

pub trait NameFilter {
    fn matches(&self, name: &str) -> bool;
}

/// Selects directory entries by name.
#[derive(Debug, Clone, Default)]
pub enum NameMatcher {
    /// Every entry matches.
    #[default]
    Any,
    /// Unanchored regular-expression search.
    Regex(Regex),
    /// Glob matched against the whole name.
    Glob(GlobMatcher),
}

impl NameMatcher {
    /// # Errors
    /// Returns `InvalidPattern` if the expression does not compile.
    pub fn regex(pattern: &str, case_sensitive: bool) -> Result<Self> {
        RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map(Self::Regex)
            .map_err(|source| ProbeError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// # Errors
    /// Returns `InvalidGlob` if the glob does not compile.
    pub fn glob(pattern: &str, case_sensitive: bool) -> Result<Self> {
        GlobBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .literal_separator(true)
            .build()
            .map(|glob| Self::Glob(glob.compile_matcher()))
            .map_err(|source| ProbeError::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Build from optional user input; no pattern matches everything.
    ///
    /// # Errors
    /// Returns an error if the pattern does not compile.
    pub fn from_options(pattern: Option<&str>, glob: bool, case_sensitive: bool) -> Result<Self> {
        match pattern {
            None => Ok(Self::Any),
            Some(p) if glob => Self::glob(p, case_sensitive),
            Some(p) => Self::regex(p, case_sensitive),
        }
    }
}

impl NameFilter for NameMatcher {
    fn matches(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Regex(regex) => regex.is_match(name),
            Self::Glob(matcher) => matcher.is_match(name),
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

//! Directory-mode aggregation: enumerate, filter, evaluate and fold.

mod directory;
mod filter;
mod types;

pub use directory::{DirectoryScanner, NO_FILES_FOUND};
pub use filter::{NameFilter, NameMatcher};
pub use types::{AggregateResult, ObjectClass, ScanTally};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

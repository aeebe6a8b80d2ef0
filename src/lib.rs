pub mod catalog;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod perfdata;
pub mod probe;
pub mod scanner;
pub mod threshold;
pub mod transport;

pub use error::{ProbeError, Result};

pub const EXIT_OK: i32 = 0;
pub const EXIT_WARNING: i32 = 1;
pub const EXIT_CRITICAL: i32 = 2;
pub const EXIT_UNKNOWN: i32 = 3;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

use crate::error::Result;
use crate::perfdata;

use super::{OutputFormatter, Report};

/// Classic one-line plugin output: `STATUS: message|perfdata`.
pub struct NagiosFormatter;

impl OutputFormatter for NagiosFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        // '|' separates perfdata, so it must not appear in the message
        let message = report.message.replace('|', "/");
        let mut line = format!("{}: {message}", report.status);
        if !report.records.is_empty() {
            line.push('|');
            line.push_str(&perfdata::render(&report.records));
        }
        Ok(line)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

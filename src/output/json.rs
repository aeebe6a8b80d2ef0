use serde::Serialize;

use crate::error::Result;
use crate::perfdata::PerformanceRecord;

use super::{OutputFormatter, Report};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    status: &'static str,
    exit_code: i32,
    message: &'a str,
    perfdata: &'a [PerformanceRecord],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            status: report.status.as_str(),
            exit_code: report.status.exit_code(),
            message: &report.message,
            perfdata: &report.records,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

//
//  insightly-rs
//  smoke/report.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use console::style;
use tracing::debug;

use crate::api::common::Result;
use crate::exit_codes;

/// Tally of smoke-test outcomes.
///
/// Each check prints one line as it is recorded, so progress is visible
/// while the scenario runs.
#[derive(Debug)]
pub struct SmokeReport {
    passed: usize,
    failed: usize,
    color: bool,
    quiet: bool,
}

impl Default for SmokeReport {
    fn default() -> Self {
        Self::new()
    }
}

impl SmokeReport {
    /// Creates a report that prints to stdout, colored when the terminal supports it.
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
            color: console::colors_enabled(),
            quiet: false,
        }
    }

    /// Creates a report that only counts and prints nothing.
    pub fn quiet() -> Self {
        Self {
            passed: 0,
            failed: 0,
            color: false,
            quiet: true,
        }
    }

    /// Records the outcome of a call and hands back its value on success.
    pub fn check<T>(&mut self, name: &str, outcome: Result<T>) -> Option<T> {
        match outcome {
            Ok(value) => {
                self.pass(name);
                Some(value)
            }
            Err(err) => {
                self.fail(name, &err.to_string());
                None
            }
        }
    }

    /// Records a call that is expected to fail with 404 Not Found.
    pub fn check_not_found<T>(&mut self, name: &str, outcome: Result<T>) {
        match outcome {
            Err(err) if err.is_not_found() => self.pass(name),
            Err(err) => self.fail(name, &err.to_string()),
            Ok(_) => self.fail(name, "expected a not-found error"),
        }
    }

    /// Records a check that was decided without an API call.
    pub fn check_that(&mut self, name: &str, condition: bool, detail: &str) {
        if condition {
            self.pass(name);
        } else {
            self.fail(name, detail);
        }
    }

    fn pass(&mut self, name: &str) {
        self.passed += 1;
        self.print(&self.line(name, true, None));
    }

    fn fail(&mut self, name: &str, detail: &str) {
        self.failed += 1;
        debug!(check = name, detail, "Smoke check failed");
        self.print(&self.line(name, false, Some(detail)));
    }

    fn print(&self, line: &str) {
        if !self.quiet {
            println!("{line}");
        }
    }

    fn line(&self, name: &str, passed: bool, detail: Option<&str>) -> String {
        let label = match (passed, self.color) {
            (true, true) => style("PASS").green().bold().to_string(),
            (false, true) => style("FAIL").red().bold().to_string(),
            (true, false) => "PASS".to_string(),
            (false, false) => "FAIL".to_string(),
        };

        match detail {
            Some(detail) => format!("{label}: {name} ({detail})"),
            None => format!("{label}: {name}"),
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// `true` when nothing failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// One-line summary, e.g. `42 passed, 1 failed, 43 total`.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} total",
            self.passed,
            self.failed,
            self.total()
        )
    }

    /// Exit status for the binary.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            exit_codes::SUCCESS
        } else {
            exit_codes::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    use crate::api::common::{InsightlyError, RawResponse};

    fn status_error(code: u16) -> InsightlyError {
        InsightlyError::Status(Box::new(RawResponse::new(
            StatusCode::from_u16(code).unwrap(),
            HeaderMap::new(),
            "",
        )))
    }

    #[test]
    fn test_counts_and_exit_code() {
        let mut report = SmokeReport::quiet();
        assert_eq!(report.check("users", Ok(3)), Some(3));
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);

        assert_eq!(report.check::<()>("contact", Err(status_error(500))), None);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.summary(), "1 passed, 1 failed, 2 total");
    }

    #[test]
    fn test_not_found_expectation() {
        let mut report = SmokeReport::quiet();
        report.check_not_found::<()>("gone", Err(status_error(404)));
        assert_eq!(report.passed(), 1);

        report.check_not_found::<()>("wrong error", Err(status_error(500)));
        report.check_not_found("still there", Ok(()));
        assert_eq!(report.failed(), 2);
    }

    #[test]
    fn test_plain_lines() {
        let report = SmokeReport::quiet();
        assert_eq!(report.line("countries", true, None), "PASS: countries");
        assert_eq!(
            report.line("contact", false, Some("Server returned status code 404")),
            "FAIL: contact (Server returned status code 404)"
        );
    }
}

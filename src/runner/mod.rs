//! Sequential smoke-test runner.
//!
//! Each case is sent exactly once, in order. Failures are recorded and the
//! run always continues to the next case; nothing escapes a case boundary.

pub mod report;

use crate::case::TestCase;
use crate::error::{Error, status_line};
use crate::http::HttpClient;
use std::fmt::Display;
use std::io::Write;

/// Outcome of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub name: String,
    pub succeeded: bool,
}

/// Runs a fixed case list and writes a transcript to `out`.
pub struct TestRunner<W: Write> {
    cases: Vec<TestCase>,
    client: HttpClient,
    out: W,
}

impl<W: Write> TestRunner<W> {
    pub fn new(cases: Vec<TestCase>, client: HttpClient, out: W) -> Self {
        Self { cases, client, out }
    }

    /// Hand back the transcript writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every case in declaration order, then print the summary.
    pub async fn run(&mut self) -> Vec<TestResult> {
        self.line("Running all tests...\n");

        let cases = std::mem::take(&mut self.cases);
        let mut results = Vec::with_capacity(cases.len());
        for case in &cases {
            results.push(self.execute_test(case).await);
        }
        self.cases = cases;

        self.print_summary(&results);
        results
    }

    /// Send one case and report what happened.
    pub async fn execute_test(&mut self, case: &TestCase) -> TestResult {
        let rule = report::rule();
        self.line(format_args!("\n{rule}"));
        self.line(format_args!("Test: {}", case.name));
        self.line(&rule);

        self.line(format_args!("\nPOST {}", case.url));
        self.line(format_args!("Headers: {}", report::headers_json(&case.headers)));
        self.line(format_args!("Body: {}\n", report::pretty(&case.body)));

        let outcome = self.client.send(case).await;
        let succeeded = match outcome {
            Ok(response) => {
                self.line("✅ SUCCESS!");
                self.line("\nResponse:");
                self.line(report::response_text(&response));
                true
            }
            Err(Error::Status { status, body }) => {
                tracing::warn!(case = %case.name, %status, "gateway returned an error status");
                self.line(format_args!("❌ HTTP Error: {}", status_line(status)));
                if let Some(body) = body {
                    self.line(format_args!("Error details: {}", report::error_excerpt(&body)));
                }
                false
            }
            Err(e) => {
                tracing::warn!(case = %case.name, error = %e, "request failed");
                self.line(format_args!("❌ Error: {}", report::error_chain(&e)));
                false
            }
        };

        TestResult {
            name: case.name.clone(),
            succeeded,
        }
    }

    fn print_summary(&mut self, results: &[TestResult]) {
        let rule = report::rule();
        self.line(format_args!("\n{rule}"));
        self.line("TEST SUMMARY");
        self.line(&rule);
        for result in results {
            self.line(report::summary_line(&result.name, result.succeeded));
        }
        let passed = results.iter().filter(|r| r.succeeded).count();
        self.line(format_args!("{passed}/{} passed", results.len()));
        self.line(&rule);
    }

    /// Write one transcript line. A broken output stream must not stop the run.
    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{text}") {
            tracing::debug!(error = %e, "transcript write failed");
        }
    }
}

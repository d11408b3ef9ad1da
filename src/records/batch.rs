//! Multi-line and batch employee parsing
//!
//! Input is split on newlines; each trimmed, non-blank line is parsed on its
//! own with [`employee_parser`]. Three policies are offered for lines that
//! do not parse:
//!
//! - [`multi_employee_parser`] drops them silently
//! - [`parse_employees_report`] drops them but lists them in the report
//! - [`parse_employees_strict`] stops at the first one with an error
//!
//! # Feature Flag
//!
//! [`parse_batch`] parses independent inputs in parallel when the
//! `parallel` feature is enabled and sequentially otherwise:
//!
//! ```toml
//! [dependencies]
//! parsel = { version = "0.1", features = ["parallel"] }
//! ```

use serde::Serialize;

use super::employee::{employee_parser, Employee};
use super::error::RecordError;
use crate::combinator::{ParseResult, Parser};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A non-blank line that did not parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the original input
    pub line: usize,
    /// The trimmed line text
    pub content: String,
}

/// Records parsed from a block of lines, plus the lines that were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeReport {
    /// Successfully parsed records in input order
    pub employees: Vec<Employee>,
    /// Lines that were not valid records, in input order
    pub skipped: Vec<SkippedLine>,
}

impl EmployeeReport {
    /// Whether every non-blank line parsed
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Encode the report as JSON
    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string(self).map_err(|e| RecordError::Serialization {
            message: e.to_string(),
        })
    }
}

/// Parsed or rejected outcome of one non-blank line
enum LineOutcome {
    Parsed(Employee),
    Rejected(SkippedLine),
}

/// Parse each trimmed, non-blank line of `input` with `parser`
fn parse_lines<'p>(
    parser: &'p Parser<Employee>,
    input: &'p str,
) -> impl Iterator<Item = LineOutcome> + 'p {
    input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(move |(line_number, line)| match parser.parse(line) {
            Some(result) => LineOutcome::Parsed(result.value),
            None => {
                log_debug!("Skipping malformed line {}: {:?}", line_number, line);
                LineOutcome::Rejected(SkippedLine {
                    line: line_number,
                    content: line.to_string(),
                })
            }
        })
}

fn collect_report(parser: &Parser<Employee>, input: &str) -> EmployeeReport {
    let mut report = EmployeeReport::default();
    for outcome in parse_lines(parser, input) {
        match outcome {
            LineOutcome::Parsed(employee) => report.employees.push(employee),
            LineOutcome::Rejected(skipped) => report.skipped.push(skipped),
        }
    }
    report
}

/// Parse every valid line, silently dropping malformed ones
///
/// Never fails and consumes the whole input. The number of records may be
/// smaller than the number of lines.
pub fn multi_employee_parser() -> Parser<Vec<Employee>> {
    let employee = employee_parser();
    Parser::new(move |input| {
        let employees = collect_report(&employee, input).employees;
        Some(ParseResult::new(employees, &input[input.len()..]))
    })
}

/// Parse every valid line of `input`, silently dropping malformed ones
pub fn parse_employees(input: &str) -> Vec<Employee> {
    collect_report(&employee_parser(), input).employees
}

/// Parse every valid line and report the dropped ones
pub fn parse_employees_report(input: &str) -> EmployeeReport {
    let report = collect_report(&employee_parser(), input);
    log_debug!(
        "Parsed {} employees, skipped {} lines",
        report.employees.len(),
        report.skipped.len()
    );
    report
}

/// Parse every non-blank line, failing on the first malformed one
pub fn parse_employees_strict(input: &str) -> Result<Vec<Employee>, RecordError> {
    let parser = employee_parser();
    parse_lines(&parser, input)
        .map(|outcome| match outcome {
            LineOutcome::Parsed(employee) => Ok(employee),
            LineOutcome::Rejected(SkippedLine { line, content }) => {
                Err(RecordError::MalformedLine { line, content })
            }
        })
        .collect()
}

/// Configuration for batch parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of worker threads (None = rayon's global pool)
    pub num_threads: Option<usize>,
    /// Minimum number of inputs handed to one worker
    pub min_chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            min_chunk_size: 1,
        }
    }
}

impl BatchConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    /// Set the minimum chunk size for parallel processing
    pub fn with_min_chunk_size(mut self, size: usize) -> Self {
        self.min_chunk_size = size.max(1);
        self
    }
}

/// Parse multiple independent inputs in parallel
///
/// One parser value is shared by every worker. Results are in the same
/// order as `inputs`. When `config.num_threads` is set the work runs on a
/// dedicated pool of that size.
#[cfg(feature = "rayon")]
pub fn parse_batch(inputs: &[&str], config: &BatchConfig) -> Vec<EmployeeReport> {
    log_debug!("Parsing batch of {} inputs in parallel", inputs.len());
    let parser = employee_parser();
    let run = || {
        inputs
            .par_iter()
            .with_min_len(config.min_chunk_size)
            .map(|input| collect_report(&parser, input))
            .collect::<Vec<_>>()
    };

    match config.num_threads {
        Some(n) => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(run),
            Err(_e) => {
                log_debug!("Falling back to the global pool: {}", _e);
                run()
            }
        },
        None => run(),
    }
}

/// Parse multiple independent inputs sequentially (fallback when rayon is not available)
#[cfg(not(feature = "rayon"))]
pub fn parse_batch(inputs: &[&str], _config: &BatchConfig) -> Vec<EmployeeReport> {
    log_debug!("Parsing batch of {} inputs sequentially", inputs.len());
    let parser = employee_parser();
    inputs
        .iter()
        .map(|input| collect_report(&parser, input))
        .collect()
}

//! Structured-format parsers
//!
//! A small line-oriented, comma-separated format built on the combinator
//! engine. Each record line is `name,age,position`, optionally extended
//! with an ID, a department or a salary.
//!
//! # Module Organization
//!
//! - [`fields`] - `csv_field`, `comma`, `integer_parser`, `whitespace`, `decimal_parser`
//! - [`employee`] - [`Employee`] and its record variants, [`ValidationConfig`]
//! - [`batch`] - Multi-line parsing with silent, reported or strict handling of bad lines
//! - [`error`] - [`RecordError`]

pub mod batch;
pub mod employee;
pub mod error;
pub mod fields;

pub use batch::{
    multi_employee_parser, parse_batch, parse_employees, parse_employees_report,
    parse_employees_strict, BatchConfig, EmployeeReport, SkippedLine,
};
pub use employee::{
    employee_parser, employee_with_department_parser, employee_with_optional_id_parser,
    employee_with_salary_parser, validating_employee_parser, validating_employee_parser_with,
    Employee, EmployeeWithDepartment, EmployeeWithId, EmployeeWithSalary, ValidationConfig,
    DEFAULT_MAX_AGE, DEFAULT_MIN_AGE,
};
pub use error::RecordError;
pub use fields::{comma, csv_field, decimal_parser, integer_parser, whitespace};

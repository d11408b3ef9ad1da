//! Employee records and their line grammars
//!
//! The base grammar is `name "," age "," position`. Every variant layers
//! extra fields or checks on top of it with the same fail-fast discipline:
//! the first missing piece fails the whole record.
//!
//! # Example
//!
//! ```rust
//! use parsel::records::{employee_with_optional_id_parser, Employee};
//!
//! let parser = employee_with_optional_id_parser();
//!
//! let with_id = parser.parse("7,Ada,36,Analyst").unwrap().value;
//! assert_eq!(with_id.id, Some(7));
//!
//! let without_id = parser.parse("Ada,36,Analyst").unwrap().value;
//! assert_eq!(without_id.id, None);
//! assert_eq!(without_id.employee, Employee::new("Ada", 36, "Analyst"));
//! ```

use serde::{Deserialize, Serialize};

use super::error::RecordError;
use super::fields::{comma, csv_field, decimal_parser, integer_parser};
use crate::combinator::{optional, ParseResult, Parser};

/// Default lowest accepted age for validating parsers
pub const DEFAULT_MIN_AGE: u32 = 18;

/// Default highest accepted age for validating parsers
pub const DEFAULT_MAX_AGE: u32 = 65;

/// A parsed employee record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Employee name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Job title
    pub position: String,
}

impl Employee {
    /// Create a new employee record
    pub fn new(name: impl Into<String>, age: u32, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            position: position.into(),
        }
    }
}

/// Employee record with an optional leading numeric ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeWithId {
    /// Leading ID, if the line carried one
    pub id: Option<u32>,
    /// The record itself
    pub employee: Employee,
}

/// Employee record with an optional trailing department
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeWithDepartment {
    /// The record itself
    pub employee: Employee,
    /// Trailing department, if present
    pub department: Option<String>,
}

/// Employee record with a trailing salary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWithSalary {
    /// The record itself
    pub employee: Employee,
    /// Salary, possibly with a fractional part
    pub salary: f64,
}

/// Age bounds applied by [`validating_employee_parser_with`]
///
/// Can be loaded from JSON; missing keys fall back to the defaults.
///
/// ```rust
/// use parsel::records::ValidationConfig;
///
/// let config = ValidationConfig::from_json(r#"{ "max_age": 70 }"#).unwrap();
/// assert_eq!(config.min_age, 18);
/// assert!(config.accepts(70));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Lowest accepted age (inclusive)
    pub min_age: u32,
    /// Highest accepted age (inclusive)
    pub max_age: u32,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration with the given inclusive bounds
    pub fn new(min_age: u32, max_age: u32) -> Result<Self, RecordError> {
        Self { min_age, max_age }.validated()
    }

    /// Decode a configuration from JSON and check its bounds
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let config: Self = serde_json::from_str(json).map_err(|e| RecordError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validated()
    }

    /// Set the lowest accepted age
    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.min_age = min_age;
        self
    }

    /// Set the highest accepted age
    pub fn with_max_age(mut self, max_age: u32) -> Self {
        self.max_age = max_age;
        self
    }

    /// Check that the minimum does not exceed the maximum
    pub fn validated(self) -> Result<Self, RecordError> {
        if self.min_age > self.max_age {
            return Err(RecordError::InvalidAgeRange {
                min_age: self.min_age,
                max_age: self.max_age,
            });
        }
        Ok(self)
    }

    /// Whether `age` lies within the bounds
    #[inline]
    pub fn accepts(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Base grammar: `name "," age "," position`
///
/// Each step runs on the previous step's remainder and the first failure
/// aborts the record; later fields are never attempted.
pub fn employee_parser() -> Parser<Employee> {
    let field = csv_field();
    let separator = comma();
    let number = integer_parser();
    Parser::new(move |input| {
        let name = field.parse(input)?;
        let after_name = separator.parse(name.remaining)?;
        let age = number.parse(after_name.remaining)?;
        let after_age = separator.parse(age.remaining)?;
        let position = field.parse(after_age.remaining)?;
        Some(ParseResult::new(
            Employee {
                name: name.value,
                age: age.value,
                position: position.value,
            },
            position.remaining,
        ))
    })
}

/// `id "," <base>` tried first, then the plain base grammar
///
/// First match wins: a line such as `42,30,Dev` fails the ID branch (no age
/// after `30`) and falls back to a record named `42`.
pub fn employee_with_optional_id_parser() -> Parser<EmployeeWithId> {
    let with_id = integer_parser()
        .skip(comma())
        .then(employee_parser())
        .map(|(id, employee)| EmployeeWithId {
            id: Some(id),
            employee,
        });
    let without_id = employee_parser().map(|employee| EmployeeWithId { id: None, employee });
    with_id | without_id
}

/// `<base>` optionally followed by `"," department`
pub fn employee_with_department_parser() -> Parser<EmployeeWithDepartment> {
    let department = optional(comma().skip_left(csv_field()));
    employee_parser()
        .then(department)
        .map(|(employee, department)| EmployeeWithDepartment {
            employee,
            department,
        })
}

/// `<base> "," salary`, salary being digits with an optional fraction
pub fn employee_with_salary_parser() -> Parser<EmployeeWithSalary> {
    employee_parser()
        .skip(comma())
        .then(decimal_parser())
        .map(|(employee, salary)| EmployeeWithSalary { employee, salary })
}

/// Base grammar plus an age check against the default bounds
pub fn validating_employee_parser() -> Parser<Employee> {
    validating_employee_parser_with(ValidationConfig::default())
}

/// Base grammar plus an age check against `config`
///
/// A record that parses but falls outside the bounds is a failure.
pub fn validating_employee_parser_with(config: ValidationConfig) -> Parser<Employee> {
    employee_parser().filter(move |employee| {
        let accepted = config.accepts(employee.age);
        if !accepted {
            log_debug!(
                "Rejecting employee {:?}: age {} outside {}..={}",
                employee.name,
                employee.age,
                config.min_age,
                config.max_age
            );
        }
        accepted
    })
}

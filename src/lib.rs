//! Parsel - Small Applicative Parser-Combinator Engine
//!
//! This is a generic parser-combinator library for structured text.
//! It provides:
//! - A `Parser<T>` abstraction: a pure function from input to an optional
//!   [`ParseResult`] (value plus unconsumed remainder)
//! - Functor, applicative and alternative combinators (`pure`, `fmap`,
//!   `apply`, `or`) with ordered, fully backtracking choice
//! - Stack-safe repetition (`many`, `some1`) driven by an explicit step loop
//! - ASCII character-class primitives and derived combinators
//! - CSV-style field parsers and a family of employee-record parsers
//! - Optional parallel batch parsing and optional debug logging
//!
//! ## Quick Start
//!
//! ```rust
//! use parsel::prelude::*;
//!
//! let number = two_digit_number();
//! let result = parenthesized(number).parse("(42)abc").unwrap();
//!
//! assert_eq!(result.value, 42);
//! assert_eq!(result.remaining, "abc");
//! ```
//!
//! ## Records
//!
//! ```rust
//! use parsel::records::{employee_parser, Employee};
//!
//! let parsed = employee_parser().parse("John,25,Engineer").unwrap();
//! assert_eq!(parsed.value, Employee::new("John", 25, "Engineer"));
//! assert!(parsed.remaining.is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate
//! - `parallel` - Parse batches of independent inputs with `rayon`

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
// Allow some pedantic lints that are too noisy
#![allow(clippy::module_inception)]
#![allow(clippy::redundant_closure)]

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

// Prelude module for convenient imports
pub mod prelude;

// Parsing engine
pub mod combinator;

// Structured-format parsers built on the engine
pub mod records;

/// Re-export commonly used types for convenience
pub use combinator::{apply, fmap, many, or, pure, some1, ParseResult, Parser};

pub use records::{Employee, RecordError};

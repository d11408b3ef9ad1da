//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from parsel.
//! Importing this module with a wildcard import brings the core API into scope:
//!
//! ```
//! use parsel::prelude::*;
//! ```
//!
//! # Re-exported Items
//!
//! ## Core Types
//! - [`Parser`] - Composable parser handle
//! - [`ParseResult`] - Value plus unconsumed remainder
//!
//! ## Combinators
//! - [`pure()`], [`fmap()`], [`apply()`], [`or()`] - Functor / applicative / alternative
//! - [`many()`], [`some1()`] - Stack-safe repetition
//!
//! ## Primitives and Derived Parsers
//! - [`char_()`], [`digit()`], [`letter()`], [`letter_or_digit()`]
//! - [`identifier()`], [`two_digit_number()`], [`parenthesized()`]
//!
//! ## Records
//! - [`Employee`] - Parsed employee record
//! - [`employee_parser()`], [`multi_employee_parser()`]

// ============================================================================
// Core Types
// ============================================================================

pub use crate::combinator::{ParseResult, Parser};

// ============================================================================
// Combinators
// ============================================================================

pub use crate::combinator::{apply, choice, fail, fmap, lift_a2, many, optional, or, pure, some1};

// ============================================================================
// Primitives and Derived Parsers
// ============================================================================

pub use crate::combinator::{
    any_char, char_, digit, identifier, letter, letter_or_digit, literal, parenthesized, satisfy,
    sequence2, two_digit_number, whitespace_char, CharClass,
};

// ============================================================================
// Records
// ============================================================================

pub use crate::records::{
    comma, csv_field, employee_parser, integer_parser, multi_employee_parser, whitespace, Employee,
    RecordError,
};

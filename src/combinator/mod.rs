//! Parser-combinator engine
//!
//! This module contains the generic parsing core: a parser is a pure
//! function from an input string to an optional [`ParseResult`], and larger
//! parsers are built by composing smaller ones.
//!
//! # Module Organization
//!
//! ## Core Types
//! - [`ParseResult`] - Parsed value plus unconsumed remainder
//! - [`Parser`] - Clonable, thread-safe parser handle
//!
//! ## Combinators
//! - [`applicative`] - `pure`, `fmap`, `apply`, `or`, `lift_a2`, `optional`, `choice`
//! - [`repeat`] - `many`, `some1` and the step driver behind them
//!
//! ## Primitives
//! - [`char_class`] - ASCII character classes and single-character parsers
//!
//! ## Derived Parsers
//! - [`derived`] - `sequence2`, `two_digit_number`, `identifier`, `parenthesized`

// ============================================================================
// Module Declarations
// ============================================================================

pub mod applicative;
pub mod char_class;
pub mod derived;
pub mod parser;
pub mod repeat;
pub mod result;

// ============================================================================
// Core Types
// ============================================================================

pub use parser::Parser;
pub use result::ParseResult;

// ============================================================================
// Combinators
// ============================================================================

pub use applicative::{apply, choice, fail, fmap, lift_a2, optional, or, pure};
pub use repeat::{drive, many, some1, Step};

// ============================================================================
// Primitives
// ============================================================================

pub use char_class::{
    any_char, char_, class, digit, letter, letter_or_digit, literal, satisfy, whitespace_char,
    CharClass,
};

// ============================================================================
// Derived Parsers
// ============================================================================

pub use derived::{identifier, parenthesized, sequence2, two_digit_number};

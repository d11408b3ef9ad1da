//! Parse result type
//!
//! A successful parse step produces a value together with the part of the
//! input it did not consume. Failure is represented by `None` at the
//! [`Parser`](super::Parser) level, so this type only ever describes success.

/// Result of a successful parse step
///
/// `remaining` is always a suffix of the input handed to the parser that
/// produced this result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseResult<'a, T> {
    /// The parsed value
    pub value: T,
    /// Unconsumed remainder of the input
    pub remaining: &'a str,
}

impl<'a, T> ParseResult<'a, T> {
    /// Create a new parse result
    #[inline]
    pub fn new(value: T, remaining: &'a str) -> Self {
        Self { value, remaining }
    }

    /// Transform the value, keeping the remainder untouched
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ParseResult<'a, U> {
        ParseResult {
            value: f(self.value),
            remaining: self.remaining,
        }
    }

    /// Number of bytes consumed from `input` to produce this result
    ///
    /// `input` must be the string originally passed to the parser.
    #[inline]
    pub fn consumed_len(&self, input: &str) -> usize {
        input.len() - self.remaining.len()
    }

    /// The prefix of `input` consumed to produce this result
    #[inline]
    pub fn consumed<'i>(&self, input: &'i str) -> &'i str {
        &input[..self.consumed_len(input)]
    }

    /// Split into `(value, remaining)`
    #[inline]
    pub fn into_parts(self) -> (T, &'a str) {
        (self.value, self.remaining)
    }
}

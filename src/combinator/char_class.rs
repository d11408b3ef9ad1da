//! Character classes and single-character primitive parsers
//!
//! Classification is ASCII only: a non-ASCII character never counts as a
//! digit, letter or whitespace.
//!
//! # Example
//!
//! ```rust
//! use parsel::combinator::char_class::{class, CharClass};
//!
//! assert!(CharClass::Alnum.matches('7'));
//! assert!(!CharClass::Alpha.matches('é'));
//!
//! let result = class(CharClass::Digit).parse("5x").unwrap();
//! assert_eq!(result.value, '5');
//! ```

use super::parser::Parser;
use super::result::ParseResult;

/// ASCII character class used by the primitive parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Decimal digit: [0-9]
    Digit,
    /// Alphabetic: [a-zA-Z]
    Alpha,
    /// Alphanumeric: [a-zA-Z0-9]
    Alnum,
    /// Whitespace: [ \t\n\r\f]
    Space,
}

impl CharClass {
    /// Check whether `c` belongs to this class
    #[inline]
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Alpha => c.is_ascii_alphabetic(),
            CharClass::Alnum => c.is_ascii_alphanumeric(),
            CharClass::Space => c.is_ascii_whitespace(),
        }
    }
}

/// Consume one character satisfying `predicate`
pub fn satisfy<F>(predicate: F) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::new(move |input| {
        let mut chars = input.chars();
        let c = chars.next()?;
        if predicate(c) {
            Some(ParseResult::new(c, chars.as_str()))
        } else {
            None
        }
    })
}

/// Consume one character of the given class
pub fn class(kind: CharClass) -> Parser<char> {
    satisfy(move |c| kind.matches(c))
}

/// Consume exactly the character `expected`
pub fn char_(expected: char) -> Parser<char> {
    satisfy(move |c| c == expected)
}

/// Consume any single character
pub fn any_char() -> Parser<char> {
    satisfy(|_| true)
}

/// Consume one ASCII decimal digit
pub fn digit() -> Parser<char> {
    class(CharClass::Digit)
}

/// Consume one ASCII letter
pub fn letter() -> Parser<char> {
    class(CharClass::Alpha)
}

/// Consume one ASCII letter or digit
pub fn letter_or_digit() -> Parser<char> {
    class(CharClass::Alnum)
}

/// Consume one ASCII whitespace character
pub fn whitespace_char() -> Parser<char> {
    class(CharClass::Space)
}

/// Consume the exact string `expected`
pub fn literal(expected: impl Into<String>) -> Parser<String> {
    let expected = expected.into();
    Parser::new(move |input| {
        input
            .strip_prefix(expected.as_str())
            .map(|rest| ParseResult::new(expected.clone(), rest))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_matches_first_only() {
        assert_eq!(char_('a').parse("abc"), Some(ParseResult::new('a', "bc")));
        assert!(char_('a').parse("bac").is_none());
        assert!(char_('a').parse("").is_none());
    }

    #[test]
    fn test_digit() {
        assert_eq!(digit().parse("42"), Some(ParseResult::new('4', "2")));
        assert!(digit().parse("x").is_none());
        assert!(digit().parse("").is_none());
    }

    #[test]
    fn test_letter() {
        assert_eq!(letter().parse("Zz"), Some(ParseResult::new('Z', "z")));
        assert!(letter().parse("1").is_none());
        assert!(letter().parse("_").is_none());
    }

    #[test]
    fn test_letter_or_digit() {
        assert!(letter_or_digit().parse("a").is_some());
        assert!(letter_or_digit().parse("5").is_some());
        assert!(letter_or_digit().parse(" ").is_none());
    }

    #[test]
    fn test_non_ascii_is_not_classified() {
        assert!(letter().parse("été").is_none());
        assert!(digit().parse("٣").is_none());
    }

    #[test]
    fn test_multibyte_char_consumed_whole() {
        let result = any_char().parse("éa").unwrap();
        assert_eq!(result.value, 'é');
        assert_eq!(result.remaining, "a");
    }

    #[test]
    fn test_whitespace_char() {
        assert!(whitespace_char().parse("\tx").is_some());
        assert!(whitespace_char().parse("x").is_none());
    }

    #[test]
    fn test_literal() {
        let result = literal("let").parse("let x").unwrap();
        assert_eq!(result.value, "let");
        assert_eq!(result.remaining, " x");
        assert!(literal("let").parse("le").is_none());
    }

    #[test]
    fn test_class_matches() {
        assert!(CharClass::Alnum.matches('z'));
        assert!(!CharClass::Alpha.matches('3'));
        assert!(CharClass::Space.matches('\r'));
    }
}

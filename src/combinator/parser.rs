//! The parser handle and its combinator methods
//!
//! A [`Parser<T>`] wraps a pure function from an input string to an
//! optional [`ParseResult`]. Parsers hold no mutable state, so one value can
//! be cloned freely and invoked from many threads at once.
//!
//! # Example
//!
//! ```rust
//! use parsel::combinator::{char_, digit, Parser};
//!
//! let signed: Parser<(char, char)> = char_('-').then(digit());
//! let result = signed.parse("-7 rest").unwrap();
//!
//! assert_eq!(result.value, ('-', '7'));
//! assert_eq!(result.remaining, " rest");
//! ```

use std::fmt;
use std::ops::{BitOr, Shr};
use std::sync::Arc;

use super::result::ParseResult;

type ParseFn<T> = Arc<dyn for<'a> Fn(&'a str) -> Option<ParseResult<'a, T>> + Send + Sync>;

/// A composable, stateless parser producing values of type `T`
pub struct Parser<T> {
    run: ParseFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: 'static> Parser<T> {
    /// Wrap a parse function
    ///
    /// The function must return `None` on failure and otherwise a result
    /// whose `remaining` is a suffix of its argument.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'a> Fn(&'a str) -> Option<ParseResult<'a, T>> + Send + Sync + 'static,
    {
        Parser { run: Arc::new(f) }
    }

    /// Run the parser against `input`
    #[inline]
    pub fn parse<'a>(&self, input: &'a str) -> Option<ParseResult<'a, T>> {
        (self.run)(input)
    }

    /// Run the parser and require that it consumes the whole input
    pub fn parse_complete(&self, input: &str) -> Option<T> {
        self.parse(input)
            .filter(|result| result.remaining.is_empty())
            .map(|result| result.value)
    }

    /// Functor map: transform the value, leave the remainder untouched
    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        Parser::new(move |input| self.parse(input).map(|result| result.map(&f)))
    }

    /// Map with a partial function; `None` turns the step into a failure
    pub fn filter_map<U, F>(self, f: F) -> Parser<U>
    where
        F: Fn(T) -> Option<U> + Send + Sync + 'static,
        U: 'static,
    {
        Parser::new(move |input| {
            let result = self.parse(input)?;
            let value = f(result.value)?;
            Some(ParseResult::new(value, result.remaining))
        })
    }

    /// Keep a successful result only if `predicate` accepts its value
    pub fn filter<P>(self, predicate: P) -> Parser<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Parser::new(move |input| self.parse(input).filter(|result| predicate(&result.value)))
    }

    /// Applicative sequencing: `self` yields a function, `arg` its argument
    ///
    /// Runs `self` first, then `arg` on the remainder. Fails if either fails.
    pub fn apply<A, B>(self, arg: Parser<A>) -> Parser<B>
    where
        T: FnOnce(A) -> B,
        A: 'static,
        B: 'static,
    {
        Parser::new(move |input| {
            let func = self.parse(input)?;
            let value = arg.parse(func.remaining)?;
            Some(ParseResult::new((func.value)(value.value), value.remaining))
        })
    }

    /// Ordered choice with backtracking
    ///
    /// `other` runs against the original input, and only when `self` fails.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        Parser::new(move |input| self.parse(input).or_else(|| other.parse(input)))
    }

    /// Monadic bind: pick the next parser from this parser's value
    pub fn and_then<U, F>(self, f: F) -> Parser<U>
    where
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
        U: 'static,
    {
        Parser::new(move |input| {
            let first = self.parse(input)?;
            f(first.value).parse(first.remaining)
        })
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn then<U: 'static>(self, other: Parser<U>) -> Parser<(T, U)> {
        Parser::new(move |input| {
            let a = self.parse(input)?;
            let b = other.parse(a.remaining)?;
            Some(ParseResult::new((a.value, b.value), b.remaining))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: Parser<U>) -> Parser<T> {
        Parser::new(move |input| {
            let a = self.parse(input)?;
            let b = other.parse(a.remaining)?;
            Some(ParseResult::new(a.value, b.remaining))
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: Parser<U>) -> Parser<U> {
        Parser::new(move |input| {
            let a = self.parse(input)?;
            other.parse(a.remaining)
        })
    }

    /// Optional: parse zero or one, never fails
    pub fn optional(self) -> Parser<Option<T>> {
        super::applicative::optional(self)
    }

    /// Parse zero or more occurrences
    pub fn many(self) -> Parser<Vec<T>> {
        super::repeat::many(self)
    }

    /// Parse one or more occurrences
    pub fn some1(self) -> Parser<Vec<T>> {
        super::repeat::some1(self)
    }
}

// === Operator Overloading ===

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<Parser<T>> for Parser<T> {
    type Output = Parser<T>;

    fn bitor(self, rhs: Parser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + Send + Sync + 'static> Shr<F> for Parser<T> {
    type Output = Parser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

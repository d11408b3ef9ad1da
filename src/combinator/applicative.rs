//! Functor, applicative and alternative combinators
//!
//! Free-function forms of the core combinators. Each one is expressed once,
//! parametrically over the value types, and delegates to the matching
//! [`Parser`] method where one exists.
//!
//! # Laws
//!
//! - `pure(v).parse(s) == Some(ParseResult { value: v, remaining: s })`
//! - `fmap(id, p)` behaves exactly like `p`
//! - `fmap(g, fmap(f, p))` behaves exactly like `fmap(|x| g(f(x)), p)`
//! - `or(p1, p2)` returns `p1`'s result whenever `p1` succeeds

use std::sync::Arc;

use super::parser::Parser;
use super::result::ParseResult;

/// Lift a value: always succeeds, consumes nothing
pub fn pure<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::new(move |input| Some(ParseResult::new(value.clone(), input)))
}

/// The parser that never succeeds; identity element for [`or`]
pub fn fail<T: 'static>() -> Parser<T> {
    Parser::new(|_| None)
}

/// Functor map over a parser's value
pub fn fmap<T, U, F>(f: F, parser: Parser<T>) -> Parser<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    parser.map(f)
}

/// Applicative sequencing of a function parser and a value parser
pub fn apply<A, B, F>(pf: Parser<F>, pv: Parser<A>) -> Parser<B>
where
    F: FnOnce(A) -> B + 'static,
    A: 'static,
    B: 'static,
{
    pf.apply(pv)
}

/// Ordered alternative: `second` is tried on the original input if `first` fails
pub fn or<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    first.or(second)
}

/// Lift a binary function over two parsers run in sequence
///
/// Built from [`Parser::map`] and [`apply`]: the first parser's value is
/// partially applied, then the second parser supplies the last argument.
pub fn lift_a2<A, B, C, F>(f: F, pa: Parser<A>, pb: Parser<B>) -> Parser<C>
where
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A, B) -> C + Send + Sync + 'static,
{
    let f = Arc::new(f);
    let partial = pa.map(move |a| {
        let f = Arc::clone(&f);
        move |b| (*f)(a, b)
    });
    apply(partial, pb)
}

/// Zero or one occurrence; yields `None` without consuming on failure
pub fn optional<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::new(move |input| match parser.parse(input) {
        Some(result) => Some(result.map(Some)),
        None => Some(ParseResult::new(None, input)),
    })
}

/// Ordered n-ary choice; the first alternative that succeeds wins
pub fn choice<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    Parser::new(move |input| parsers.iter().find_map(|parser| parser.parse(input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{char_, digit, letter};

    #[test]
    fn test_pure_consumes_nothing() {
        let result = pure(7).parse("abc").unwrap();
        assert_eq!(result.value, 7);
        assert_eq!(result.remaining, "abc");
    }

    #[test]
    fn test_pure_on_empty_input() {
        assert_eq!(pure("x").parse(""), Some(ParseResult::new("x", "")));
    }

    #[test]
    fn test_fail_is_identity_for_or() {
        let parser = or(fail(), digit());
        assert_eq!(parser.parse("1a"), digit().parse("1a"));
        let parser = or(digit(), fail());
        assert_eq!(parser.parse("1a"), digit().parse("1a"));
    }

    #[test]
    fn test_fmap_identity() {
        let mapped = fmap(|c| c, letter());
        for input in ["abc", "1bc", ""] {
            assert_eq!(mapped.parse(input), letter().parse(input));
        }
    }

    #[test]
    fn test_apply_with_pure_function() {
        let add_one = pure(|n: u32| n + 1);
        let number = digit().map(|c| c.to_digit(10).unwrap_or(0));
        let result = apply(add_one, number).parse("4!").unwrap();
        assert_eq!(result.value, 5);
        assert_eq!(result.remaining, "!");
    }

    #[test]
    fn test_lift_a2_combines_in_order() {
        let pair = lift_a2(|a: char, b: char| format!("{b}{a}"), letter(), digit());
        let result = pair.parse("x9y").unwrap();
        assert_eq!(result.value, "9x");
        assert_eq!(result.remaining, "y");
        assert!(pair.parse("9x").is_none());
    }

    #[test]
    fn test_optional_never_fails() {
        let parser = optional(char_('-'));
        assert_eq!(parser.parse("-1"), Some(ParseResult::new(Some('-'), "1")));
        assert_eq!(parser.parse("1"), Some(ParseResult::new(None, "1")));
    }

    #[test]
    fn test_choice_first_match_wins() {
        let parser = choice(vec![
            char_('a').map(|_| 1),
            letter().map(|_| 2),
            char_('a').map(|_| 3),
        ]);
        assert_eq!(parser.parse("a").map(|r| r.value), Some(1));
        assert_eq!(parser.parse("b").map(|r| r.value), Some(2));
        assert!(parser.parse("1").is_none());
    }

    #[test]
    fn test_empty_choice_fails() {
        let parser: Parser<char> = choice(Vec::new());
        assert!(parser.parse("a").is_none());
    }
}

//! Derived combinators
//!
//! Small parsers built purely by composing the primitives with the
//! applicative and repetition combinators.

use std::iter;

use super::applicative::lift_a2;
use super::char_class::{char_, digit, letter, letter_or_digit};
use super::parser::Parser;
use super::repeat::many;

/// Run two character parsers in sequence, yielding a two-character string
pub fn sequence2(first: Parser<char>, second: Parser<char>) -> Parser<String> {
    lift_a2(
        |a: char, b: char| [a, b].iter().collect::<String>(),
        first,
        second,
    )
}

/// Exactly two decimal digits read as `tens * 10 + ones`
pub fn two_digit_number() -> Parser<u32> {
    lift_a2(
        |tens, ones| digit_value(tens) * 10 + digit_value(ones),
        digit(),
        digit(),
    )
}

/// A letter followed by any number of letters or digits
pub fn identifier() -> Parser<String> {
    lift_a2(
        |first: char, rest: Vec<char>| -> String { iter::once(first).chain(rest).collect() },
        letter(),
        many(letter_or_digit()),
    )
}

/// `inner` surrounded by parentheses; the value is `inner`'s
pub fn parenthesized<T: 'static>(inner: Parser<T>) -> Parser<T> {
    char_('(').skip_left(inner).skip(char_(')'))
}

// `digit()` only yields '0'..='9'
fn digit_value(c: char) -> u32 {
    c as u32 - '0' as u32
}

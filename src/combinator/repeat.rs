//! Repetition combinators
//!
//! `many` and `some1` may run over inputs of unbounded length, so they never
//! recurse per match. Each repetition step returns a [`Step`]: either the
//! state for the next step or the finished result. [`drive`] forces steps in
//! a plain loop until one is done, so native stack depth stays constant no
//! matter how many matches are collected.

use super::parser::Parser;
use super::result::ParseResult;

/// Outcome of a single step of an iterative computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<S, R> {
    /// More work remains; carries the state for the next step
    Continue(S),
    /// Finished with a result
    Done(R),
}

/// Run `step` from `state` until it reports [`Step::Done`]
pub fn drive<S, R, F>(mut state: S, mut step: F) -> R
where
    F: FnMut(S) -> Step<S, R>,
{
    loop {
        match step(state) {
            Step::Continue(next) => state = next,
            Step::Done(result) => return result,
        }
    }
}

/// Accumulated matches and the input still to be examined
struct Repetition<'a, T> {
    items: Vec<T>,
    remaining: &'a str,
}

/// Apply `parser` to successive remainders, appending to `items`
///
/// Stops at the first failure, or at a success that consumes nothing; that
/// zero-width match is not recorded.
fn collect_from<'a, T: 'static>(
    parser: &Parser<T>,
    items: Vec<T>,
    input: &'a str,
) -> ParseResult<'a, Vec<T>> {
    let start = Repetition {
        items,
        remaining: input,
    };
    drive(start, |mut state| match parser.parse(state.remaining) {
        Some(next) if next.remaining.len() < state.remaining.len() => {
            state.items.push(next.value);
            state.remaining = next.remaining;
            Step::Continue(state)
        }
        _ => Step::Done(ParseResult::new(state.items, state.remaining)),
    })
}

/// Zero or more occurrences; never fails
pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input| Some(collect_from(&parser, Vec::new(), input)))
}

/// One or more occurrences; fails iff the first application fails
pub fn some1<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |input| {
        let first = parser.parse(input)?;
        Some(collect_from(&parser, vec![first.value], first.remaining))
    })
}

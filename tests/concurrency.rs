//! Parsers hold no mutable state, so a single parser value can be shared
//! across threads and invoked concurrently on independent inputs.

use std::sync::Arc;
use std::thread;

use parsel::combinator::{digit, identifier, letter, many, sequence2, Parser};
use parsel::records::{multi_employee_parser, Employee};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_parser_is_send_and_sync() {
    assert_send_sync::<Parser<String>>();
    assert_send_sync::<Parser<Vec<Employee>>>();
}

#[test]
fn test_shared_parser_across_threads() {
    let parser = Arc::new(identifier());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                let input = format!("worker{} done", i);
                let result = parser.parse(&input).map(|r| (r.value, r.remaining.to_string()));
                (i, result)
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.join().unwrap();
        assert_eq!(result, Some((format!("worker{}", i), " done".to_string())));
    }
}

#[test]
fn test_cloned_parsers_in_scoped_threads() {
    let pairs = many(sequence2(letter(), digit()));
    let inputs = ["a1b2", "c3", "zz", "d4e5f6!"];

    let results: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let parser = pairs.clone();
                scope.spawn(move || parser.parse(input).map_or(0, |r| r.value.len()))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, vec![2, 1, 0, 3]);
}

#[test]
fn test_multi_employee_parser_shared() {
    let parser = multi_employee_parser();
    let blocks = ["Ann,30,Dev\nBob,40,Ops", "broken\nCat,50,HR", ""];

    thread::scope(|scope| {
        for block in blocks {
            let parser = &parser;
            scope.spawn(move || {
                let expected = parser.parse(block).unwrap().value;
                for _ in 0..100 {
                    assert_eq!(parser.parse(block).unwrap().value, expected);
                }
            });
        }
    });
}

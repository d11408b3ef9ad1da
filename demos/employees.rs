//! Employee Records Example
//!
//! Parses a small block of employee lines three ways: dropping bad lines
//! silently, reporting them, and failing on the first one.
//!
//! Run with: cargo run --example employees

use parsel::prelude::*;
use parsel::records::{
    employee_with_optional_id_parser, parse_employees_report, parse_employees_strict,
    validating_employee_parser,
};

const INPUT: &str = "\
John,25,Engineer
7,Jane,30,Manager
oops,no age here
Tim,16,Intern
";

fn main() {
    println!("Employee Records - Parser Combinators");
    println!("=====================================\n");

    let employees = multi_employee_parser()
        .parse(INPUT)
        .map(|r| r.value)
        .unwrap_or_default();
    println!("Silently parsed {} records:", employees.len());
    for employee in &employees {
        println!("  {:?}", employee);
    }

    let report = parse_employees_report(INPUT);
    println!("\nSkipped lines:");
    for skipped in &report.skipped {
        println!("  line {}: {}", skipped.line, skipped.content);
    }
    match report.to_json() {
        Ok(json) => println!("\nReport as JSON:\n  {}", json),
        Err(e) => println!("\nError: {}", e),
    }

    match parse_employees_strict(INPUT) {
        Ok(all) => println!("\nStrict parse: {} records", all.len()),
        Err(e) => println!("\nStrict parse failed: {}", e),
    }

    println!("\nPer-line variants:");
    let with_id = employee_with_optional_id_parser();
    let validating = validating_employee_parser();
    for line in INPUT.lines() {
        let id = with_id.parse(line).map(|r| r.value.id);
        let valid = validating.parse(line).is_some();
        println!("  {:<20} id={:?} valid_age={}", line, id, valid);
    }

    println!("\nCombinators:");
    println!(
        "  identifier on \"hello123 world\": {:?}",
        identifier().parse("hello123 world")
    );
    println!(
        "  parenthesized number on \"(42)abc\": {:?}",
        parenthesized(two_digit_number()).parse("(42)abc")
    );
}

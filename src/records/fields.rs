//! Field-level parsers for comma-separated, line-oriented text

use crate::combinator::{char_, digit, optional, whitespace_char, ParseResult, Parser};

/// Longest non-empty run of characters up to a comma or newline
///
/// Fails on empty input and on an empty field (input starting with `,` or
/// `\n`). The delimiter itself is not consumed.
pub fn csv_field() -> Parser<String> {
    Parser::new(|input| {
        // Both delimiters are ASCII, so the byte offset is a char boundary
        let end = memchr::memchr2(b',', b'\n', input.as_bytes()).unwrap_or(input.len());
        if end == 0 {
            return None;
        }
        Some(ParseResult::new(input[..end].to_string(), &input[end..]))
    })
}

/// A single field separator
pub fn comma() -> Parser<char> {
    char_(',')
}

/// One or more digits read as an unsigned base-10 integer
///
/// Fails when no digit is present or the value does not fit in `u32`.
pub fn integer_parser() -> Parser<u32> {
    digit()
        .some1()
        .filter_map(|digits| digits.into_iter().collect::<String>().parse::<u32>().ok())
}

/// Zero or more whitespace characters; always succeeds
pub fn whitespace() -> Parser<String> {
    whitespace_char()
        .many()
        .map(|chars| chars.into_iter().collect::<String>())
}

/// Digits with an optional fractional part, e.g. `75000` or `75000.50`
///
/// Fails when the value is too large to be represented as a finite `f64`.
pub fn decimal_parser() -> Parser<f64> {
    let digits = || digit().some1().map(|ds| ds.into_iter().collect::<String>());
    let fraction = optional(char_('.').skip_left(digits()));
    digits()
        .then(fraction)
        .filter_map(|(whole, fraction)| match fraction {
            Some(fraction) => format!("{}.{}", whole, fraction).parse::<f64>().ok(),
            None => whole.parse::<f64>().ok(),
        })
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_stops_at_comma() {
        assert_eq!(
            csv_field().parse("John,25"),
            Some(ParseResult::new("John".to_string(), ",25"))
        );
    }

    #[test]
    fn test_csv_field_stops_at_newline() {
        assert_eq!(
            csv_field().parse("Engineer\nJane"),
            Some(ParseResult::new("Engineer".to_string(), "\nJane"))
        );
    }

    #[test]
    fn test_csv_field_takes_rest_of_input() {
        assert_eq!(
            csv_field().parse("Senior Engineer"),
            Some(ParseResult::new("Senior Engineer".to_string(), ""))
        );
    }

    #[test]
    fn test_csv_field_rejects_empty() {
        assert!(csv_field().parse("").is_none());
        assert!(csv_field().parse(",x").is_none());
        assert!(csv_field().parse("\nx").is_none());
    }

    #[test]
    fn test_csv_field_keeps_multibyte_text() {
        let result = csv_field().parse("José,30").unwrap();
        assert_eq!(result.value, "José");
        assert_eq!(result.remaining, ",30");
    }

    #[test]
    fn test_integer_parser() {
        assert_eq!(integer_parser().parse("25,x"), Some(ParseResult::new(25, ",x")));
        assert!(integer_parser().parse("x25").is_none());
        assert!(integer_parser().parse("").is_none());
    }

    #[test]
    fn test_integer_parser_overflow_fails() {
        assert!(integer_parser().parse("99999999999").is_none());
        assert_eq!(
            integer_parser().parse("4294967295"),
            Some(ParseResult::new(u32::MAX, ""))
        );
    }

    #[test]
    fn test_whitespace_always_succeeds() {
        assert_eq!(
            whitespace().parse("  \tx"),
            Some(ParseResult::new("  \t".to_string(), "x"))
        );
        assert_eq!(
            whitespace().parse("x"),
            Some(ParseResult::new(String::new(), "x"))
        );
    }

    #[test]
    fn test_decimal_parser() {
        assert_eq!(decimal_parser().parse("75000").map(|r| r.value), Some(75000.0));
        assert_eq!(decimal_parser().parse("75000.50").map(|r| r.value), Some(75000.5));
    }

    #[test]
    fn test_decimal_parser_overflow_fails() {
        let huge = "9".repeat(400);
        assert!(decimal_parser().parse(&huge).is_none());
        assert!(decimal_parser().parse(&format!("{}.5", huge)).is_none());
    }

    #[test]
    fn test_decimal_parser_trailing_dot_not_consumed() {
        let result = decimal_parser().parse("12.x").unwrap();
        assert_eq!(result.value, 12.0);
        assert_eq!(result.remaining, ".x");
    }
}

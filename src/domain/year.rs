//! Arbitrary-size calendar year
//!
//! Divisibility by 4, 100 and 400 only depends on the value modulo 400, and
//! 10000 is a multiple of 400, so the last four decimal digits are all the
//! arithmetic a year of any length needs.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::leap::is_leap;

/// A signed integer year of unbounded size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Year {
    negative: bool,
    /// Decimal digits without leading zeros ("0" for zero)
    digits: String,
}

/// Year text that is not an integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid year '{0}': expected an integer")]
pub struct ParseYearError(pub String);

impl Year {
    /// Absolute value modulo 400.
    pub fn residue(&self) -> u16 {
        let tail = &self.digits[self.digits.len().saturating_sub(4)..];
        // at most four ASCII digits
        let last_four = tail
            .bytes()
            .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
        last_four % 400
    }

    pub fn is_leap(&self) -> bool {
        is_leap(i64::from(self.residue()))
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl FromStr for Year {
    type Err = ParseYearError;

    /// Accepts surrounding whitespace, an optional `+`/`-` sign and ASCII
    /// digits, with single underscores allowed between digits (`1_000_000`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseYearError(s.to_string());
        let text = s.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
            return Err(invalid());
        }

        let mut digits = String::with_capacity(body.len());
        for c in body.chars() {
            match c {
                '0'..='9' => digits.push(c),
                '_' => {}
                _ => return Err(invalid()),
            }
        }

        let trimmed = digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };
        let negative = negative && digits != "0";
        Ok(Self { negative, digits })
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024", "2024")]
    #[case("+2024", "2024")]
    #[case(" 1900 ", "1900")]
    #[case("-0400", "-400")]
    #[case("-0", "0")]
    #[case("000", "0")]
    #[case("1_000_000", "1000000")]
    #[case("123456789012345678901234567890", "123456789012345678901234567890")]
    fn given_integer_text_when_parsing_then_normalised(#[case] input: &str, #[case] shown: &str) {
        let year: Year = input.parse().unwrap();
        assert_eq!(year.to_string(), shown);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("abc")]
    #[case("20x4")]
    #[case("2024.0")]
    #[case("_2024")]
    #[case("20__24")]
    #[case("2024_")]
    #[case("--4")]
    fn given_non_integer_text_when_parsing_then_error(#[case] input: &str) {
        assert_eq!(input.parse::<Year>(), Err(ParseYearError(input.to_string())));
    }

    #[rstest]
    #[case("100000000000000000000", true)]
    #[case("100000000000000000100", false)]
    #[case("100000000000000000004", true)]
    #[case("100000000000000000001", false)]
    #[case("-99999999999999999999999996", true)]
    fn given_year_beyond_machine_width_when_checking_then_rule_applies(
        #[case] input: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(input.parse::<Year>().unwrap().is_leap(), expected);
    }

    #[test]
    fn given_machine_integer_when_converted_then_agrees_with_predicate() {
        for y in (-5000..=5000_i64).chain([i64::MIN, i64::MAX]) {
            let year = Year::from(y);
            assert_eq!(year.is_leap(), is_leap(y), "year {y}");
            assert_eq!(year.to_string(), y.to_string());
            assert_eq!(year.is_negative(), y < 0);
        }
    }
}

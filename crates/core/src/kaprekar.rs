//! Kaprekar number check
//!
//! A number `n` is a Kaprekar number when the decimal digits of `n²` can be
//! split into a left and a non-zero right part that add up to `n`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KaprekarError {
    #[error("The value must be a non-negative whole number (9 digits maximum)")]
    InvalidNumber,
}

impl KaprekarError {
    pub fn code(&self) -> &'static str {
        match self {
            KaprekarError::InvalidNumber => "invalid_number",
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct KaprekarOutput {
    pub number: u32,
    pub is_kaprekar: bool,
    /// Split points tried before answering
    pub operations: u32,
}

/// Accept the textual form of a non-negative `i32`
pub fn parse_number(raw: &str) -> Result<u32, KaprekarError> {
    match raw.trim().parse::<i32>() {
        Ok(n) if n >= 0 => Ok(n as u32),
        _ => Err(KaprekarError::InvalidNumber),
    }
}

pub fn check(number: u32) -> KaprekarOutput {
    let n = u64::from(number);
    let square = (n * n).to_string();
    let mut operations = 0;

    for split in 1..square.len() {
        operations += 1;

        let (left, right) = square.split_at(split);
        // Both halves are at most 19 decimal digits, so they fit in u64
        let left: u64 = left.parse().unwrap_or(u64::MAX);
        let right: u64 = right.parse().unwrap_or(u64::MAX);

        if right != 0 && left.checked_add(right) == Some(n) {
            return KaprekarOutput {
                number,
                is_kaprekar: true,
                operations,
            };
        }
    }

    KaprekarOutput {
        number,
        is_kaprekar: false,
        operations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kaprekar_numbers() {
        for n in [9, 45, 55, 99, 297, 703, 999, 2223, 2728, 4879, 4950, 5050] {
            assert!(check(n).is_kaprekar, "{n} should be a Kaprekar number");
        }
    }

    #[test]
    fn test_non_kaprekar_numbers() {
        for n in [2, 3, 10, 100, 1000, 46] {
            assert!(!check(n).is_kaprekar, "{n} should not be a Kaprekar number");
        }
    }

    #[test]
    fn test_one_and_zero_are_not_kaprekar() {
        // single-digit squares have no split point
        let one = check(1);
        assert!(!one.is_kaprekar);
        assert_eq!(one.operations, 0);
        assert!(!check(0).is_kaprekar);
    }

    #[test]
    fn test_operations_stop_at_first_hit() {
        // 45² = 2025 -> 2 + 025 (1), 20 + 25 = 45 (2)
        let out = check(45);
        assert_eq!(out.operations, 2);
    }

    #[test]
    fn test_operations_count_all_splits_on_miss() {
        // 10² = 100 -> two split points, both rejected
        let out = check(10);
        assert_eq!(out.operations, 2);
        assert!(!out.is_kaprekar);
    }

    #[test]
    fn test_large_input_does_not_overflow() {
        let out = check(i32::MAX as u32);
        assert_eq!(out.number, 2_147_483_647);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("297").unwrap(), 297);
        assert_eq!(parse_number("0").unwrap(), 0);
        assert_eq!(parse_number("-5").unwrap_err(), KaprekarError::InvalidNumber);
        assert_eq!(parse_number("abc").unwrap_err(), KaprekarError::InvalidNumber);
        assert_eq!(
            parse_number("99999999999").unwrap_err(),
            KaprekarError::InvalidNumber
        );
    }
}

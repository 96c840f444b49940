//! Text exercises: counting, case conversion, repeated words, brand
//! replacement and repeated concatenation.

use serde::Serialize;
use std::collections::HashMap;

pub const MAX_CONCAT_TIMES: i64 = 100_000;

/// Largest concatenation result, in bytes
pub const MAX_CONCAT_LEN: usize = 64 * 1024 * 1024;

pub const BRAND: &str = "Proconsi";
pub const BRAND_REPLACEMENT: &str = "Isnocorp";

/// Used whenever a caller submits an empty text.
pub const DEFAULT_TEXT: &str = "Proconsi is an Information and Communication Technologies company \
specialised in developing and integrating software solutions for every kind of business. \
More than three decades of experience back a company that is as flexible as it is reliable. \
It has a multidisciplinary team of more than 120 qualified professionals, experts committed \
to a single goal: finding the exact technological solution for each client. Proconsi \
specialises in building management software, technology consulting, managing R&D projects \
based on ICT, technical support, mobile applications and promoting new technology trends \
such as cloud computing.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    #[error("The number of repetitions cannot be greater than 100000")]
    TooManyRepetitions,

    #[error("The number of repetitions cannot be negative")]
    NegativeRepetitions,

    #[error("The concatenated text cannot be longer than 64 MiB")]
    ResultTooLong,
}

impl TextError {
    pub fn code(&self) -> &'static str {
        match self {
            TextError::TooManyRepetitions => "too_many_repetitions",
            TextError::NegativeRepetitions => "negative_repetitions",
            TextError::ResultTooLong => "result_too_long",
        }
    }
}

/// Substitute [`DEFAULT_TEXT`] for an empty input
pub fn or_default(text: &str) -> &str {
    if text.is_empty() {
        DEFAULT_TEXT
    } else {
        text
    }
}

pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

pub fn to_upper(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower(text: &str) -> String {
    text.to_lowercase()
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Words (split on spaces, case-sensitive) that occur more than once, in
/// order of first occurrence.
pub fn repeated_words(text: &str) -> Vec<WordCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|word| match counts[word] {
            count if count > 1 => Some(WordCount {
                word: word.to_string(),
                count,
            }),
            _ => None,
        })
        .collect()
}

pub fn replace_brand(text: &str) -> String {
    text.replace(BRAND, BRAND_REPLACEMENT)
}

/// `text` repeated `times` times
pub fn concatenate(text: &str, times: i64) -> Result<String, TextError> {
    if times > MAX_CONCAT_TIMES {
        return Err(TextError::TooManyRepetitions);
    }
    if times < 0 {
        return Err(TextError::NegativeRepetitions);
    }

    let times = times as usize;
    match text.len().checked_mul(times) {
        Some(len) if len <= MAX_CONCAT_LEN => Ok(text.repeat(times)),
        _ => Err(TextError::ResultTooLong),
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CountOutput {
    pub characters: usize,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ConvertedOutput {
    pub text: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RepeatedOutput {
    pub repeated_words: Vec<WordCount>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ConcatOutput {
    pub message: String,
    pub elapsed_ms: u128,
    pub length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(""), DEFAULT_TEXT);
        assert_eq!(or_default(" "), " ");
    }

    #[test]
    fn test_count_chars_unicode() {
        assert_eq!(count_chars("año"), 3);
        assert_eq!(count_chars(""), 0);
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_upper("Straße"), "STRASSE");
        assert_eq!(to_lower("ÁRBOL"), "árbol");
    }

    #[test]
    fn test_repeated_words_order_and_counts() {
        let words = repeated_words("b a b  c a b");
        assert_eq!(
            words,
            vec![
                WordCount {
                    word: "b".to_string(),
                    count: 3
                },
                WordCount {
                    word: "a".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_repeated_words_case_sensitive() {
        assert!(repeated_words("Word word").is_empty());
    }

    #[test]
    fn test_repeated_words_default_text() {
        let words = repeated_words(DEFAULT_TEXT);
        let brand = words.iter().find(|w| w.word == "Proconsi").unwrap();
        assert_eq!(brand.count, 2);
    }

    #[test]
    fn test_replace_brand() {
        assert_eq!(
            replace_brand("Proconsi and Proconsi"),
            "Isnocorp and Isnocorp"
        );
        assert_eq!(replace_brand("nothing here"), "nothing here");
    }

    #[test]
    fn test_concatenate() {
        assert_eq!(concatenate("ab", 3).unwrap(), "ababab");
        assert_eq!(concatenate("ab", 0).unwrap(), "");
    }

    #[test]
    fn test_concatenate_limit() {
        assert_eq!(concatenate("x", MAX_CONCAT_TIMES).unwrap().len(), 100_000);
        assert_eq!(
            concatenate("x", MAX_CONCAT_TIMES + 1).unwrap_err(),
            TextError::TooManyRepetitions
        );
    }

    #[test]
    fn test_concatenate_result_too_long() {
        let text = "x".repeat(2_000_000);
        assert_eq!(
            concatenate(&text, MAX_CONCAT_TIMES).unwrap_err(),
            TextError::ResultTooLong
        );
        assert_eq!(
            concatenate(&text, MAX_CONCAT_TIMES).unwrap_err().code(),
            "result_too_long"
        );
    }

    #[test]
    fn test_default_text_fits_max_repetitions() {
        assert!(DEFAULT_TEXT.len() * MAX_CONCAT_TIMES as usize <= MAX_CONCAT_LEN);
    }

    #[test]
    fn test_concatenate_negative() {
        assert_eq!(
            concatenate("x", -1).unwrap_err(),
            TextError::NegativeRepetitions
        );
    }
}

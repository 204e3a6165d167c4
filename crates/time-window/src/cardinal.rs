//! Spelled-out cardinal numbers ("ten", "twenty one") to integers.
//!
//! The vocabulary is the small closed set used by sampling-interval labels:
//! zero through nineteen, the tens, and `tens ones` compounds. Anything
//! outside it is rejected instead of guessed.

use crate::error::WindowError;

const ONES: [(&str, u32); 20] = [
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: [(&str, u32); 8] = [
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

fn ones_value(word: &str) -> Option<u32> {
    ONES.iter().find(|(w, _)| *w == word).map(|(_, n)| *n)
}

fn tens_value(word: &str) -> Option<u32> {
    TENS.iter().find(|(w, _)| *w == word).map(|(_, n)| *n)
}

/// Whether `word` is a tens word that can lead a two-word compound.
pub fn is_tens_word(word: &str) -> bool {
    tens_value(word).is_some()
}

/// Parse a cardinal phrase into its value.
///
/// Accepts one word (`"ten"`, `"forty"`), a `tens ones` compound separated
/// by a space or hyphen (`"twenty one"`, `"thirty-five"`), or plain digits.
///
/// # Errors
///
/// Returns [`WindowError::InvalidQuantity`] for anything else.
///
/// # Examples
///
/// ```
/// use time_window::cardinal::parse_cardinal;
///
/// assert_eq!(parse_cardinal("twenty one").unwrap(), 21);
/// assert_eq!(parse_cardinal("ten").unwrap(), 10);
/// assert!(parse_cardinal("twenty twenty").is_err());
/// ```
pub fn parse_cardinal(phrase: &str) -> Result<u32, WindowError> {
    let invalid = || WindowError::InvalidQuantity(format!("'{}'", phrase.trim()));

    let normalized = phrase.trim().to_lowercase();
    if !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_digit()) {
        return normalized.parse().map_err(|_| invalid());
    }

    let words: Vec<&str> = normalized
        .split(|c: char| c == ' ' || c == '-')
        .filter(|w| !w.is_empty())
        .collect();

    match words.as_slice() {
        [word] => ones_value(word).or_else(|| tens_value(word)).ok_or_else(invalid),
        [tens, ones] => {
            let tens = tens_value(tens).ok_or_else(invalid)?;
            // "twenty zero" and "twenty eleven" are not cardinals.
            match ones_value(ones) {
                Some(n) if (1..=9).contains(&n) => Ok(tens + n),
                _ => Err(invalid()),
            }
        }
        _ => Err(invalid()),
    }
}

//! Letter sum command
//!
//! Scores words given on the command line; no word list is needed.

use crate::core::letter_sum;

/// Letter sum of one input word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumResult {
    pub word: String,
    pub sum: i64,
}

/// Score each input word
#[must_use]
pub fn sum_words<S: AsRef<str>>(words: &[S]) -> Vec<SumResult> {
    words
        .iter()
        .map(|word| SumResult {
            word: word.as_ref().to_string(),
            sum: letter_sum(word.as_ref()),
        })
        .collect()
}

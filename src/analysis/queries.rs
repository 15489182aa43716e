//! Letter sum puzzle queries
//!
//! Each query is a pure function over a word list or its sum index.

use crate::core::{SumBucket, SumIndex, Word, WordList};
use rayon::prelude::*;

/// Sum searched for by default: the only word at 319
pub const TARGET_SUM: i64 = 319;

/// Length difference searched for by default
pub const LENGTH_GAP: usize = 11;

/// Sum of the known disjoint pair (`cytotoxicity`, `unreservedness`)
pub const KNOWN_DISJOINT_SUM: i64 = 188;

/// A letter sum and how many words have it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumCount {
    pub sum: i64,
    pub count: usize,
}

/// Ordered pair of words from the same sum bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPair<'a> {
    pub first: &'a Word,
    pub second: &'a Word,
    pub sum: i64,
}

impl<'a> WordPair<'a> {
    /// Both words as text
    #[must_use]
    pub fn texts(&self) -> (&'a str, &'a str) {
        (self.first.text(), self.second.text())
    }
}

/// First word in list order with the given letter sum
///
/// # Examples
/// ```
/// use letter_value_sum::analysis::find_by_sum;
/// use letter_value_sum::core::WordList;
///
/// let list = WordList::from_entries(["cab", "excellent", "abc"]);
/// assert_eq!(find_by_sum(&list, 6).map(|w| w.text()), Some("cab"));
/// assert!(find_by_sum(&list, 7).is_none());
/// ```
#[must_use]
pub fn find_by_sum(list: &WordList, target: i64) -> Option<&Word> {
    list.iter().find(|word| word.sum() == target)
}

/// Number of words whose letter sum is odd
#[must_use]
pub fn count_odd_sums(list: &WordList) -> usize {
    list.iter().filter(|word| word.sum() % 2 != 0).count()
}

/// Number of words whose letter sum is even
#[must_use]
pub fn count_even_sums(list: &WordList) -> usize {
    list.iter().filter(|word| word.sum() % 2 == 0).count()
}

/// Most common letter sum
///
/// Ties go to the bucket whose sum appeared last in the list. Returns `None`
/// for an empty index.
#[must_use]
pub fn most_common_sum(index: &SumIndex<'_>) -> Option<SumCount> {
    // max_by_key keeps the last of equal maxima
    index
        .buckets()
        .iter()
        .max_by_key(|bucket| bucket.len())
        .map(|bucket| SumCount {
            sum: bucket.sum(),
            count: bucket.len(),
        })
}

/// Ordered pairs with equal sums where the first word is `gap` letters longer
///
/// Pairs come out in bucket order, then first-word order, then second-word
/// order.
#[must_use]
pub fn length_gap_pairs<'a>(index: &SumIndex<'a>, gap: usize) -> Vec<WordPair<'a>> {
    pairs_where(index, |first, second| first.len() == second.len() + gap)
}

/// Ordered pairs with equal sums that share no letter
///
/// Both orderings of each pair are reported. A word only pairs with itself
/// when it has no letters at all.
#[must_use]
pub fn disjoint_letter_pairs<'a>(index: &SumIndex<'a>) -> Vec<WordPair<'a>> {
    pairs_where(index, Word::shares_no_letters)
}

fn pairs_where<'a, F>(index: &SumIndex<'a>, accept: F) -> Vec<WordPair<'a>>
where
    F: Fn(&Word, &Word) -> bool + Sync,
{
    let pairs: Vec<WordPair<'a>> = index
        .buckets()
        .par_iter()
        .flat_map_iter(|bucket| bucket_pairs(bucket, &accept))
        .collect();

    tracing::debug!(
        buckets = index.len(),
        pairs = pairs.len(),
        "collected word pairs"
    );
    pairs
}

fn bucket_pairs<'a, F>(bucket: &SumBucket<'a>, accept: &F) -> Vec<WordPair<'a>>
where
    F: Fn(&Word, &Word) -> bool,
{
    let words = bucket.words();
    let mut pairs = Vec::new();

    for &first in words {
        for &second in words {
            if accept(first, second) {
                pairs.push(WordPair {
                    first,
                    second,
                    sum: bucket.sum(),
                });
            }
        }
    }

    pairs
}

//! Grouping of words by letter sum
//!
//! Buckets keep the order in which their sum first appeared in the list, and
//! each bucket keeps its words in list order.

use super::{Word, WordList};
use rustc_hash::FxHashMap;

/// Words sharing one letter sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumBucket<'a> {
    sum: i64,
    words: Vec<&'a Word>,
}

impl<'a> SumBucket<'a> {
    #[inline]
    #[must_use]
    pub const fn sum(&self) -> i64 {
        self.sum
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Mapping from letter sum to the words with that sum
#[derive(Debug, Clone, Default)]
pub struct SumIndex<'a> {
    buckets: Vec<SumBucket<'a>>,
    positions: FxHashMap<i64, usize>,
}

impl<'a> SumIndex<'a> {
    /// Build the index in a single pass over the list
    ///
    /// # Examples
    /// ```
    /// use letter_value_sum::core::{SumIndex, WordList};
    ///
    /// let list = WordList::from_entries(["cab", "abc", "z"]);
    /// let index = SumIndex::build(&list);
    /// assert_eq!(index.bucket(6).map(|b| b.len()), Some(2));
    /// assert_eq!(index.len(), 2);
    /// ```
    #[must_use]
    pub fn build(list: &'a WordList) -> Self {
        let mut buckets: Vec<SumBucket<'a>> = Vec::new();
        let mut positions: FxHashMap<i64, usize> = FxHashMap::default();

        for word in list {
            let slot = *positions.entry(word.sum()).or_insert_with(|| {
                buckets.push(SumBucket {
                    sum: word.sum(),
                    words: Vec::new(),
                });
                buckets.len() - 1
            });
            buckets[slot].words.push(word);
        }

        tracing::debug!(
            words = list.len(),
            buckets = buckets.len(),
            "built letter sum index"
        );

        Self { buckets, positions }
    }

    /// Bucket for a given sum, if any word has it
    #[must_use]
    pub fn bucket(&self, sum: i64) -> Option<&SumBucket<'a>> {
        self.positions.get(&sum).map(|&slot| &self.buckets[slot])
    }

    /// All buckets in first-appearance order
    #[inline]
    #[must_use]
    pub fn buckets(&self) -> &[SumBucket<'a>] {
        &self.buckets
    }

    /// Number of distinct sums
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of indexed words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.buckets.iter().map(SumBucket::len).sum()
    }

    /// The `n` largest buckets, largest first
    ///
    /// Among equally sized buckets the one whose sum appeared later in the
    /// list comes first, so `top_buckets(1)` agrees with the most common sum.
    #[must_use]
    pub fn top_buckets(&self, n: usize) -> Vec<&SumBucket<'a>> {
        let mut ranked: Vec<&SumBucket<'a>> = self.buckets.iter().collect();
        ranked.sort_by_key(|bucket| bucket.len());
        ranked.into_iter().rev().take(n).collect()
    }
}

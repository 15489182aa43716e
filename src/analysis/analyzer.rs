//! Word value analyzer
//!
//! Owns a word source and loads its list at most once, on first use. Every
//! query then runs over the cached list.

use super::chain::{Chain, longest_chain};
use super::queries::{
    SumCount, WordPair, count_odd_sums, disjoint_letter_pairs, find_by_sum, length_gap_pairs,
    most_common_sum,
};
use crate::core::{SumIndex, Word, WordList, letter_sum};
use crate::wordlists::WordSource;
use std::cell::OnceCell;
use std::io;

/// Letter sum queries over a lazily loaded word list
pub struct Analyzer<S: WordSource> {
    source: S,
    list: OnceCell<WordList>,
}

impl<S: WordSource> Analyzer<S> {
    /// Create an analyzer; nothing is read until the first query
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            list: OnceCell::new(),
        }
    }

    /// True once the word list has been read
    pub fn is_loaded(&self) -> bool {
        self.list.get().is_some()
    }

    /// The word list, loading it on first access
    ///
    /// # Errors
    ///
    /// Returns the source's I/O error if the first load fails. A failed load
    /// is retried on the next call.
    pub fn words(&self) -> io::Result<&WordList> {
        if let Some(list) = self.list.get() {
            return Ok(list);
        }

        tracing::debug!(source = %self.source.describe(), "loading word list");
        let list = self.source.load()?;
        Ok(self.list.get_or_init(|| list))
    }

    /// Fresh sum index over the cached list
    ///
    /// The index is rebuilt on every call; only the list is cached.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the word list cannot be loaded.
    pub fn index(&self) -> io::Result<SumIndex<'_>> {
        Ok(SumIndex::build(self.words()?))
    }

    /// Letter sum of an arbitrary word; needs no list
    #[must_use]
    pub fn letter_sum(&self, word: &str) -> i64 {
        letter_sum(word)
    }

    /// First word with the given sum
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the word list cannot be loaded.
    pub fn find_by_sum(&self, target: i64) -> io::Result<Option<&Word>> {
        Ok(find_by_sum(self.words()?, target))
    }

    /// Number of words with an odd sum
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the word list cannot be loaded.
    pub fn count_odd_sums(&self) -> io::Result<usize> {
        Ok(count_odd_sums(self.words()?))
    }

    /// Most common sum and its word count
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the word list cannot be loaded.
    pub fn most_common_sum(&self) -> io::Result<Option<SumCount>> {
        Ok(most_common_sum(&self.index()?))
    }

    /// Same-sum pairs whose lengths differ by `gap`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the word list cannot be loaded.
    pub fn length_gap_pairs(&self, gap: usize) -> io::Result<Vec<WordPair<'_>>> {
        Ok(length_gap_pairs(&self.index()?, gap))
    }

    /// Same-sum pairs with no letter in common
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the word list cannot be loaded.
    pub fn disjoint_letter_pairs(&self) -> io::Result<Vec<WordPair<'_>>> {
        Ok(disjoint_letter_pairs(&self.index()?))
    }

    /// Longest greedy chain of distinct lengths and sums
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the word list cannot be loaded.
    pub fn longest_chain(&self, limit: Option<usize>) -> io::Result<Chain<'_>> {
        Ok(longest_chain(self.words()?, limit))
    }
}

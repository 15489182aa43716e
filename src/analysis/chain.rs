//! Longest chain of words with pairwise distinct lengths and sums
//!
//! Greedy left-to-right construction: every word extends each existing chain
//! it is compatible with, then starts a chain of its own. The result is the
//! longest chain produced, not a proven optimum.
//!
//! The number of chains grows with every word, so a full run over a large list
//! takes a long time. Use `limit` to cap the scan.

use crate::core::{Word, WordList};
use rayon::prelude::*;

/// Chains below this count are extended sequentially
const PARALLEL_MIN_CHAINS: usize = 4096;

/// Words whose members pairwise differ in both length and letter sum
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain<'a> {
    words: Vec<&'a Word>,
}

impl<'a> Chain<'a> {
    fn single(word: &'a Word) -> Self {
        Self { words: vec![word] }
    }

    /// True when `word` differs from every member in length and in sum
    #[inline]
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        self.words
            .iter()
            .all(|member| member.len() != word.len() && member.sum() != word.sum())
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

/// Incremental chain construction, one word at a time
#[derive(Debug, Default)]
pub struct ChainBuilder<'a> {
    chains: Vec<Chain<'a>>,
}

impl<'a> ChainBuilder<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Feed the next word in list order
    pub fn push(&mut self, word: &'a Word) {
        if self.chains.len() < PARALLEL_MIN_CHAINS {
            for chain in &mut self.chains {
                if chain.accepts(word) {
                    chain.words.push(word);
                }
            }
        } else {
            self.chains.par_iter_mut().for_each(|chain| {
                if chain.accepts(word) {
                    chain.words.push(word);
                }
            });
        }

        self.chains.push(Chain::single(word));
    }

    /// Number of chains built so far
    #[must_use]
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Length of the longest chain so far
    #[must_use]
    pub fn best_len(&self) -> usize {
        self.chains.iter().map(Chain::len).max().unwrap_or(0)
    }

    /// The longest chain, the last one created winning ties
    #[must_use]
    pub fn finish(self) -> Chain<'a> {
        let chain = self
            .chains
            .into_iter()
            .max_by_key(Chain::len)
            .unwrap_or_default();

        tracing::debug!(len = chain.len(), "finished chain search");
        chain
    }
}

/// Longest greedy chain over the list, optionally scanning only the first `limit` words
///
/// # Examples
/// ```
/// use letter_value_sum::analysis::longest_chain;
/// use letter_value_sum::core::WordList;
///
/// let list = WordList::from_entries(["geographically", "eavesdropper", "woodworker", "oxymorons"]);
/// let chain = longest_chain(&list, None);
/// assert_eq!(chain.len(), 4);
/// ```
#[must_use]
pub fn longest_chain(list: &WordList, limit: Option<usize>) -> Chain<'_> {
    let mut builder = ChainBuilder::new();
    for word in list.iter().take(limit.unwrap_or(list.len())) {
        builder.push(word);
    }
    builder.finish()
}

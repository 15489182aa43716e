//! Puzzle report
//!
//! Answers the list-based questions in one pass, sharing a single sum index.

use crate::analysis::{
    LENGTH_GAP, SumCount, TARGET_SUM, WordPair, count_even_sums, count_odd_sums,
    disjoint_letter_pairs, find_by_sum, length_gap_pairs, most_common_sum,
};
use crate::core::{SumIndex, Word, WordList};
use std::time::{Duration, Instant};

/// Parameters for the report queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Sum to look up
    pub target: i64,
    /// Length difference for same-sum pairs
    pub gap: usize,
    /// Number of buckets kept for the histogram
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            target: TARGET_SUM,
            gap: LENGTH_GAP,
            top: 5,
        }
    }
}

/// Odd and even sum counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParityCounts {
    pub odd: usize,
    pub even: usize,
}

impl ParityCounts {
    #[must_use]
    pub fn of(list: &WordList) -> Self {
        Self {
            odd: count_odd_sums(list),
            even: count_even_sums(list),
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.odd + self.even
    }
}

/// Results of the list-based questions
pub struct QueryReport<'a> {
    pub config: ReportConfig,
    pub total_words: usize,
    pub distinct_sums: usize,
    pub found: Option<&'a Word>,
    pub parity: ParityCounts,
    pub most_common: Option<SumCount>,
    pub top_buckets: Vec<SumCount>,
    pub gap_pairs: Vec<WordPair<'a>>,
    pub disjoint_pairs: Vec<WordPair<'a>>,
    pub duration: Duration,
}

/// Run every list query over `list`
#[must_use]
pub fn build_report<'a>(list: &'a WordList, config: ReportConfig) -> QueryReport<'a> {
    let start = Instant::now();
    let index = SumIndex::build(list);

    let top_buckets = index
        .top_buckets(config.top)
        .into_iter()
        .map(|bucket| SumCount {
            sum: bucket.sum(),
            count: bucket.len(),
        })
        .collect();

    let report = QueryReport {
        config,
        total_words: list.len(),
        distinct_sums: index.len(),
        found: find_by_sum(list, config.target),
        parity: ParityCounts::of(list),
        most_common: most_common_sum(&index),
        top_buckets,
        gap_pairs: length_gap_pairs(&index, config.gap),
        disjoint_pairs: disjoint_letter_pairs(&index),
        duration: start.elapsed(),
    };

    tracing::info!(
        words = report.total_words,
        elapsed_ms = report.duration.as_millis() as u64,
        "report complete"
    );
    report
}

/// Pairs whose shared sum is strictly above `min_sum`
#[must_use]
pub fn pairs_above<'a>(pairs: &[WordPair<'a>], min_sum: Option<i64>) -> Vec<WordPair<'a>> {
    match min_sum {
        Some(min) => pairs.iter().filter(|pair| pair.sum > min).copied().collect(),
        None => pairs.to_vec(),
    }
}

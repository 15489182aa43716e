//! Letter sum analysis
//!
//! Pure queries over a word list and its sum index, the greedy chain search,
//! and an [`Analyzer`] that loads the list on demand.

mod analyzer;
pub mod chain;
pub mod queries;

pub use analyzer::Analyzer;
pub use chain::{Chain, ChainBuilder, longest_chain};
pub use queries::{
    KNOWN_DISJOINT_SUM, LENGTH_GAP, SumCount, TARGET_SUM, WordPair, count_even_sums,
    count_odd_sums, disjoint_letter_pairs, find_by_sum, length_gap_pairs, most_common_sum,
};

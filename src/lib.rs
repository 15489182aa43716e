//! Letter Value Sum
//!
//! Letter value sums (a=1 … z=26) over the enable1 word list, and the puzzle
//! questions built on them: lookup by sum, parity counts, the most common sum,
//! same-sum pairs and a greedy chain of distinct lengths and sums.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_value_sum::analysis::Analyzer;
//! use letter_value_sum::core::letter_sum;
//! use letter_value_sum::wordlists::StaticSource;
//!
//! assert_eq!(letter_sum("excellent"), 100);
//!
//! let analyzer = Analyzer::new(StaticSource::new("zyzzyva\nbiodegradabilities"));
//! let pairs = analyzer.length_gap_pairs(11).unwrap();
//! assert_eq!(pairs[0].texts(), ("biodegradabilities", "zyzzyva"));
//! ```

// Core domain types
pub mod core;

// Puzzle queries
pub mod analysis;

// Word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing setup for the binary
pub mod logging;

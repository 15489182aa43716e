//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_chain_result, print_find_result, print_most_common, print_pairs, print_parity,
    print_report, print_sums,
};

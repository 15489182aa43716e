//! Command implementations

pub mod chain;
pub mod report;
pub mod sum;

pub use chain::{ChainMember, ChainResult, run_chain_search};
pub use report::{ParityCounts, QueryReport, ReportConfig, build_report, pairs_above};
pub use sum::{SumResult, sum_words};

//! Chain search command
//!
//! Drives the greedy chain builder over the list with a progress bar.

use crate::analysis::ChainBuilder;
use crate::core::WordList;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::{Duration, Instant};

/// One member of the reported chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainMember {
    pub word: String,
    pub len: usize,
    pub sum: i64,
}

/// Outcome of a chain search
#[derive(Debug, Clone)]
pub struct ChainResult {
    pub members: Vec<ChainMember>,
    pub scanned: usize,
    pub chains_built: usize,
    pub duration: Duration,
}

impl ChainResult {
    /// True when lengths strictly descend while sums strictly ascend
    #[must_use]
    pub fn is_sorted_both_ways(&self) -> bool {
        self.members
            .windows(2)
            .all(|pair| pair[0].len > pair[1].len && pair[0].sum < pair[1].sum)
    }
}

/// Run the chain search over the first `limit` words (all when `None`)
///
/// Members are reported in descending length order.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_chain_search(list: &WordList, limit: Option<usize>, show_progress: bool) -> ChainResult {
    let scanned = limit.map_or(list.len(), |n| n.min(list.len()));
    let start = Instant::now();

    let pb = ProgressBar::new(scanned as u64);
    if show_progress {
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
    } else {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    let mut builder = ChainBuilder::new();
    for (idx, word) in list.iter().take(scanned).enumerate() {
        builder.push(word);

        if idx % 500 == 0 {
            pb.set_message(format!("Best: {}", builder.best_len()));
        }
        pb.inc(1);
    }

    let chains_built = builder.chain_count();
    let chain = builder.finish();
    pb.finish_with_message(format!("Best: {}", chain.len()));

    let mut members: Vec<ChainMember> = chain
        .words()
        .iter()
        .map(|word| ChainMember {
            word: word.text().to_string(),
            len: word.len(),
            sum: word.sum(),
        })
        .collect();
    members.sort_by_key(|member| std::cmp::Reverse(member.len));

    let duration = start.elapsed();
    tracing::info!(
        scanned,
        chains_built,
        best = members.len(),
        elapsed_ms = duration.as_millis() as u64,
        "chain search complete"
    );

    ChainResult {
        members,
        scanned,
        chains_built,
        duration,
    }
}

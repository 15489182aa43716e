//! Letter Value Sum - CLI
//!
//! Letter sums of words and the enable1 puzzle questions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_value_sum::{
    analysis::{Analyzer, KNOWN_DISJOINT_SUM, LENGTH_GAP, SumCount, TARGET_SUM, most_common_sum},
    commands::{
        ParityCounts, ReportConfig, build_report, pairs_above, run_chain_search, sum_words,
    },
    logging::setup_logging,
    output::{
        print_chain_result, print_find_result, print_most_common, print_pairs, print_parity,
        print_report, print_sums,
    },
    wordlists::{DEFAULT_WORDLIST_PATH, FileSource},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letter_value_sum",
    about = "Letter value sums and the enable1 word list puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: newline-delimited words
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "LETTER_SUM_WORDLIST",
        default_value = DEFAULT_WORDLIST_PATH
    )]
    wordlist: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Letter sum of each given word
    Sum {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Find the first word with a given sum
    Bonus1 {
        #[arg(short, long, default_value_t = TARGET_SUM)]
        target: i64,
    },

    /// Count words with an odd sum
    Bonus2,

    /// Most common sum and how many words have it
    Bonus3 {
        /// Buckets shown in the histogram
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Same-sum pairs whose lengths differ by a gap
    Bonus4 {
        #[arg(short, long, default_value_t = LENGTH_GAP)]
        gap: usize,

        /// Pairs to print
        #[arg(short, long, default_value = "20")]
        show: usize,
    },

    /// Same-sum pairs with no letters in common
    ///
    /// By default only pairs above the puzzle's threshold of 188 are shown,
    /// which hides the 188 pair itself; pass --all-sums to see every pair.
    Bonus5 {
        /// Keep only pairs with a sum strictly above this (puzzle threshold: 188)
        #[arg(short, long, default_value_t = KNOWN_DISJOINT_SUM)]
        min_sum: i64,

        /// Report every pair regardless of sum, including the 188 pair
        #[arg(long, conflicts_with = "min_sum")]
        all_sums: bool,

        /// Pairs to print
        #[arg(short, long, default_value = "20")]
        show: usize,
    },

    /// Longest greedy chain of distinct lengths and sums (slow)
    Bonus6 {
        /// Scan only the first N words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Answer bonus 1 through 5, optionally bonus 6
    All {
        /// Also run the chain search
        #[arg(long)]
        with_chain: bool,

        /// Scan only the first N words in the chain search
        #[arg(short, long)]
        limit: Option<usize>,

        /// Pairs to print per question
        #[arg(short, long, default_value = "10")]
        show: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let analyzer = Analyzer::new(FileSource::new(&cli.wordlist));
    let show_progress = !cli.quiet;

    match cli.command {
        Commands::Sum { words } => {
            print_sums(&sum_words(&words));
            Ok(())
        }
        Commands::Bonus1 { target } => {
            let found = analyzer
                .find_by_sum(target)
                .with_context(|| load_error(&cli.wordlist))?;
            print_find_result(target, found);
            Ok(())
        }
        Commands::Bonus2 => {
            let words = analyzer.words().with_context(|| load_error(&cli.wordlist))?;
            print_parity(ParityCounts::of(words));
            Ok(())
        }
        Commands::Bonus3 { top } => {
            let index = analyzer.index().with_context(|| load_error(&cli.wordlist))?;
            let buckets: Vec<_> = index
                .top_buckets(top)
                .into_iter()
                .map(|bucket| SumCount {
                    sum: bucket.sum(),
                    count: bucket.len(),
                })
                .collect();
            print_most_common(most_common_sum(&index), &buckets);
            Ok(())
        }
        Commands::Bonus4 { gap, show } => {
            let pairs = analyzer
                .length_gap_pairs(gap)
                .with_context(|| load_error(&cli.wordlist))?;
            print_pairs(&format!("Length gap of {gap}"), &pairs, show);
            Ok(())
        }
        Commands::Bonus5 {
            min_sum,
            all_sums,
            show,
        } => {
            let pairs = analyzer
                .disjoint_letter_pairs()
                .with_context(|| load_error(&cli.wordlist))?;
            let min_sum = (!all_sums).then_some(min_sum);
            let pairs = pairs_above(&pairs, min_sum);
            print_pairs("No shared letters", &pairs, show);
            Ok(())
        }
        Commands::Bonus6 { limit } => {
            let words = analyzer.words().with_context(|| load_error(&cli.wordlist))?;
            print_chain_result(&run_chain_search(words, limit, show_progress));
            Ok(())
        }
        Commands::All {
            with_chain,
            limit,
            show,
        } => {
            let words = analyzer.words().with_context(|| load_error(&cli.wordlist))?;
            let report = build_report(words, ReportConfig::default());
            print_report(&report, Some(KNOWN_DISJOINT_SUM), show);

            if with_chain {
                print_chain_result(&run_chain_search(words, limit, show_progress));
            }
            Ok(())
        }
    }
}

fn load_error(path: &Path) -> String {
    format!("Failed to read word list {}", path.display())
}

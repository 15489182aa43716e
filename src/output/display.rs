//! Display functions for command results

use super::formatters::{create_progress_bar, display_word, format_pair};
use crate::analysis::{SumCount, WordPair};
use crate::commands::{ChainResult, ParityCounts, QueryReport, SumResult, pairs_above};
use crate::core::Word;
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print letter sums of input words
pub fn print_sums(results: &[SumResult]) {
    for result in results {
        println!(
            "{:>28}  {}",
            display_word(&result.word),
            result.sum.to_string().bright_yellow().bold()
        );
    }
}

/// Print the word found for a target sum
pub fn print_find_result(target: i64, found: Option<&Word>) {
    match found {
        Some(word) => println!(
            "🔎 Sum {}: {}",
            target,
            display_word(word.text()).bright_yellow().bold()
        ),
        None => println!("🔎 Sum {}: {}", target, "no word found".red()),
    }
}

/// Print odd/even sum counts
pub fn print_parity(parity: ParityCounts) {
    println!(
        "⚖️  Odd sums:  {}",
        parity.odd.to_string().bright_yellow().bold()
    );
    println!("   Even sums: {}", parity.even);
    println!("   Total:     {}", parity.total());
}

/// Print the most common sum with a histogram of the largest buckets
pub fn print_most_common(most_common: Option<SumCount>, top: &[SumCount]) {
    let Some(mode) = most_common else {
        println!("📈 {}", "No words loaded".red());
        return;
    };

    println!(
        "📈 Most common sum: {} ({} words)",
        mode.sum.to_string().bright_yellow().bold(),
        mode.count
    );

    let max = top.first().map_or(1, |bucket| bucket.count) as f64;
    for bucket in top {
        let bar = create_progress_bar(bucket.count as f64, max, 40);
        println!("   {:>4}: {} {:5}", bucket.sum, bar.green(), bucket.count);
    }
}

/// Print up to `show` pairs under a heading
pub fn print_pairs(title: &str, pairs: &[WordPair<'_>], show: usize) {
    println!(
        "🔗 {}: {}",
        title,
        pairs.len().to_string().bright_yellow().bold()
    );
    for pair in pairs.iter().take(show) {
        println!("   {:>4}  {}", pair.sum, format_pair(pair));
    }
    if pairs.len() > show {
        println!(
            "   {}",
            format!("… {} more", pairs.len() - show).bright_black()
        );
    }
}

/// Print the result of a chain search
pub fn print_chain_result(result: &ChainResult) {
    print_header("LONGEST CHAIN");

    println!(
        "\n🧵 {} words (scanned {}, {} chains in {:.2}s)",
        result.members.len().to_string().bright_yellow().bold(),
        result.scanned,
        result.chains_built,
        result.duration.as_secs_f64()
    );
    for member in &result.members {
        println!(
            "   {:>28}  len {:>2}  sum {:>3}",
            display_word(&member.word),
            member.len,
            member.sum
        );
    }

    if !result.members.is_empty() {
        if result.is_sorted_both_ways() {
            println!("   {}", "✅ lengths descend while sums ascend".green());
        } else {
            println!("   {}", "lengths and sums are not co-sorted".yellow());
        }
    }
}

/// Print the full puzzle report
pub fn print_report(report: &QueryReport<'_>, min_sum: Option<i64>, show: usize) {
    print_header("LETTER SUM REPORT");

    println!(
        "\n📚 {} words, {} distinct sums ({:.2}s)\n",
        report.total_words,
        report.distinct_sums,
        report.duration.as_secs_f64()
    );

    print_find_result(report.config.target, report.found);
    print_parity(report.parity);
    print_most_common(report.most_common, &report.top_buckets);
    print_pairs(
        &format!("Length gap of {}", report.config.gap),
        &report.gap_pairs,
        show,
    );

    let disjoint = pairs_above(&report.disjoint_pairs, min_sum);
    let title = min_sum.map_or_else(
        || "No shared letters".to_string(),
        |min| format!("No shared letters, sum above {min}"),
    );
    print_pairs(&title, &disjoint, show);
}

//! Checks against the enable1 word list
//!
//! The list is read from `LETTER_SUM_WORDLIST` or `data/enable1.txt`. It is not
//! bundled, so these tests are ignored by default; run them with
//! `cargo test -- --ignored` once the list is in place. A missing list then
//! fails instead of passing silently.
//!
//! Entries are compared after trimming so a CRLF copy of the list gives the
//! same answers.

use letter_value_sum::analysis::{
    KNOWN_DISJOINT_SUM, LENGTH_GAP, SumCount, TARGET_SUM, WordPair, count_even_sums,
    count_odd_sums, disjoint_letter_pairs, find_by_sum, length_gap_pairs, longest_chain,
    most_common_sum,
};
use letter_value_sum::commands::pairs_above;
use letter_value_sum::core::{SumIndex, Word, WordList, letter_sum};
use letter_value_sum::wordlists::loader::load_from_file;
use std::path::PathBuf;

fn wordlist_path() -> PathBuf {
    std::env::var_os("LETTER_SUM_WORDLIST").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/enable1.txt"),
        PathBuf::from,
    )
}

fn reference_list() -> WordList {
    let path = wordlist_path();
    load_from_file(&path).unwrap_or_else(|e| {
        panic!(
            "word list {} is required for this test: {e}",
            path.display()
        )
    })
}

fn text(word: &Word) -> &str {
    word.text().trim()
}

fn pair_texts<'a>(pair: &WordPair<'a>) -> (&'a str, &'a str) {
    (pair.first.text().trim(), pair.second.text().trim())
}

fn contains_pair(pairs: &[WordPair<'_>], first: &str, second: &str) -> bool {
    pairs.iter().any(|pair| pair_texts(pair) == (first, second))
}

#[test]
#[ignore = "needs data/enable1.txt"]
fn target_sum_word_is_reinstitutionalizations() {
    let list = reference_list();

    let word = find_by_sum(&list, TARGET_SUM).expect("a word sums to 319");
    assert_eq!(text(word), "reinstitutionalizations");
    assert_eq!(letter_sum(word.text()), TARGET_SUM);
    assert_eq!(
        find_by_sum(&list, 317).map(text),
        Some("microspectrophotometries")
    );
}

#[test]
#[ignore = "needs data/enable1.txt"]
fn parity_counts_cover_list() {
    let list = reference_list();
    assert_eq!(count_odd_sums(&list), 86_339);
    assert_eq!(count_odd_sums(&list) + count_even_sums(&list), list.len());
}

#[test]
#[ignore = "needs data/enable1.txt"]
fn sum_index_partitions_list() {
    let list = reference_list();
    let index = SumIndex::build(&list);
    assert_eq!(index.word_count(), list.len());
}

#[test]
#[ignore = "needs data/enable1.txt"]
fn most_common_sum_is_93() {
    let list = reference_list();
    let index = SumIndex::build(&list);

    assert_eq!(
        most_common_sum(&index),
        Some(SumCount {
            sum: 93,
            count: 1965
        })
    );

    let top = index.top_buckets(2);
    assert_eq!(top[1].sum(), 100);
    assert_eq!(top[1].len(), 1921);
}

#[test]
#[ignore = "needs data/enable1.txt"]
fn length_gap_pairs_are_the_two_known_pairs() {
    let list = reference_list();
    let index = SumIndex::build(&list);
    let pairs = length_gap_pairs(&index, LENGTH_GAP);

    assert!(contains_pair(&pairs, "biodegradabilities", "zyzzyva"));
    assert!(contains_pair(&pairs, "electroencephalographic", "voluptuously"));
    assert!(!contains_pair(&pairs, "zyzzyva", "biodegradabilities"));
    assert_eq!(pairs.len(), 2);
}

#[test]
#[ignore = "needs data/enable1.txt"]
fn disjoint_pairs_include_known_pair() {
    let list = reference_list();
    let index = SumIndex::build(&list);
    let pairs = disjoint_letter_pairs(&index);

    let known = pairs
        .iter()
        .find(|p| pair_texts(p) == ("cytotoxicity", "unreservedness"))
        .expect("known pair present");
    assert_eq!(known.sum, KNOWN_DISJOINT_SUM);
    assert!(contains_pair(&pairs, "unreservedness", "cytotoxicity"));

    // Two pairs above 188 share one word; each is reported in both orders
    let above = pairs_above(&pairs, Some(KNOWN_DISJOINT_SUM));
    assert_eq!(above.len(), 4);
    assert!(contains_pair(&above, "defenselessnesses", "microphotographic"));
    assert!(contains_pair(&above, "defenselessnesses", "photomicrographic"));
}

#[test]
#[ignore = "needs data/enable1.txt"]
fn queries_are_repeatable() {
    let list = reference_list();
    let index = SumIndex::build(&list);
    assert_eq!(most_common_sum(&index), most_common_sum(&index));
    assert_eq!(
        length_gap_pairs(&index, LENGTH_GAP),
        length_gap_pairs(&index, LENGTH_GAP)
    );
}

#[test]
#[ignore = "needs data/enable1.txt"]
fn chain_over_prefix_is_valid() {
    let list = reference_list();
    let chain = longest_chain(&list, Some(2000));
    let words = chain.words();

    assert!(!words.is_empty());
    for (i, a) in words.iter().enumerate() {
        for b in &words[i + 1..] {
            assert_ne!(a.len(), b.len());
            assert_ne!(a.sum(), b.sum());
        }
    }
}

#[test]
#[ignore = "needs data/enable1.txt; scans the whole list and takes a long time"]
fn chain_over_full_list() {
    let list = reference_list();
    let chain = longest_chain(&list, None);
    assert!(chain.len() >= 4);
}

#[test]
fn default_path_points_at_data_dir() {
    if std::env::var_os("LETTER_SUM_WORDLIST").is_none() {
        assert!(wordlist_path().ends_with("data/enable1.txt"));
    }
}

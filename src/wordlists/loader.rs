//! Word list loading utilities
//!
//! Raw entries are produced by splitting on `\n` and keeping every piece, so a
//! trailing newline yields a trailing empty entry.

use crate::core::WordList;
use std::fs;
use std::io;
use std::path::Path;

/// Split raw contents into list entries
///
/// # Examples
/// ```
/// use letter_value_sum::wordlists::loader::split_entries;
///
/// assert_eq!(split_entries("cab\nzyzzyva\n"), vec!["cab", "zyzzyva", ""]);
/// ```
#[must_use]
pub fn split_entries(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Load a word list from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_value_sum::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/enable1.txt").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = words_from_str(&content);

    tracing::info!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

/// Convert in-memory contents to a word list
#[must_use]
pub fn words_from_str(content: &str) -> WordList {
    WordList::from_entries(split_entries(content))
}

/// Convert a string slice to a word list, one entry per element
///
/// # Examples
/// ```
/// use letter_value_sum::wordlists::loader::words_from_slice;
///
/// let list = words_from_slice(&["cab", "excellent"]);
/// assert_eq!(list.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordList {
    WordList::from_entries(slice.iter().copied())
}

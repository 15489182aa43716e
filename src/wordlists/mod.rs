//! Word lists for letter sum analysis
//!
//! Sources supply raw newline-delimited entries; the loader turns them into a
//! [`WordList`](crate::core::WordList) without filtering anything.

pub mod loader;
mod source;

pub use source::{DEFAULT_WORDLIST_PATH, FileSource, StaticSource, WordSource};

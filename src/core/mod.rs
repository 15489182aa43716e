//! Core domain types for letter value sums
//!
//! Words, the word list and the sum index. Everything here is pure and
//! immutable once built.

mod index;
mod list;
mod word;

pub use index::{SumBucket, SumIndex};
pub use list::WordList;
pub use word::{LetterSet, Word, letter_sum, letter_value};

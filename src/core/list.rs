//! Ordered, immutable word list

use super::Word;
use std::ops::Index;

/// The full corpus of words in source order
///
/// Entries are kept exactly as the word source produced them, including a
/// trailing empty entry left behind by a final newline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build a list from raw entries
    ///
    /// # Examples
    /// ```
    /// use letter_value_sum::core::WordList;
    ///
    /// let list = WordList::from_entries(["cab", "excellent"]);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list[1].sum(), 100);
    /// ```
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(entries.into_iter().map(Word::new).collect())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl Index<usize> for WordList {
    type Output = Word;

    fn index(&self, index: usize) -> &Self::Output {
        &self.words[index]
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//! Word representation with precomputed letter value sum
//!
//! A Word stores the raw list entry along with its length, letter sum and set of
//! distinct letters, so the pairwise queries never rescan the text.

use std::fmt;

/// Value of a single letter: 1 for 'a' through 26 for 'z'
///
/// Characters outside 'a'..='z' keep the same codepoint arithmetic, so they
/// contribute a value outside [1, 26] (negative for most punctuation).
#[inline]
#[must_use]
pub const fn letter_value(ch: char) -> i64 {
    ch as i64 - 'a' as i64 + 1
}

/// Sum of the letter values of a word
///
/// The word is lower-cased and trimmed before scoring.
///
/// # Examples
/// ```
/// use letter_value_sum::core::letter_sum;
///
/// assert_eq!(letter_sum(""), 0);
/// assert_eq!(letter_sum("cab"), 6);
/// assert_eq!(letter_sum("excellent"), 100);
/// assert_eq!(letter_sum("  Excellent\n"), 100);
/// ```
#[must_use]
pub fn letter_sum(word: &str) -> i64 {
    word.to_lowercase().trim().chars().map(letter_value).sum()
}

/// Set of distinct characters in a word
///
/// Lowercase ASCII letters live in a bitmask; anything else (rare in a cleaned
/// list) goes into a small sorted vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSet {
    mask: u32,
    extra: Vec<char>,
}

impl LetterSet {
    /// Collect the distinct characters of `text`
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::default();
        for ch in text.chars() {
            if ch.is_ascii_lowercase() {
                set.mask |= 1 << (ch as u8 - b'a');
            } else if let Err(pos) = set.extra.binary_search(&ch) {
                set.extra.insert(pos, ch);
            }
        }
        set
    }

    /// Number of distinct characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize + self.extra.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mask == 0 && self.extra.is_empty()
    }

    /// True when the two sets share no character
    ///
    /// Equivalent to `|self ∪ other| == |self| + |other|`.
    #[inline]
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        if self.mask & other.mask != 0 {
            return false;
        }
        if self.extra.is_empty() || other.extra.is_empty() {
            return true;
        }
        !self.extra.iter().any(|ch| other.extra.binary_search(ch).is_ok())
    }
}

/// A word list entry with its derived measurements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    len: usize,
    sum: i64,
    letters: LetterSet,
}

impl Word {
    /// Create a Word from a raw list entry
    ///
    /// The text is stored as given; only the letter sum normalizes case and
    /// whitespace. Entries are never rejected.
    ///
    /// # Examples
    /// ```
    /// use letter_value_sum::core::Word;
    ///
    /// let word = Word::new("zyzzyva");
    /// assert_eq!(word.len(), 7);
    /// assert_eq!(word.sum(), 151);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let len = text.chars().count();
        let sum = letter_sum(&text);
        let letters = LetterSet::from_text(&text);

        Self {
            text,
            len,
            sum,
            letters,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the raw entry
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Letter value sum of the word
    #[inline]
    #[must_use]
    pub const fn sum(&self) -> i64 {
        self.sum
    }

    /// Distinct letters of the raw entry
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    /// True when the two words have no letter in common
    #[inline]
    #[must_use]
    pub fn shares_no_letters(&self, other: &Self) -> bool {
        self.letters().is_disjoint(other.letters())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_sum_known_values() {
        assert_eq!(letter_sum(""), 0);
        assert_eq!(letter_sum("a"), 1);
        assert_eq!(letter_sum("z"), 26);
        assert_eq!(letter_sum("cab"), 6);
        assert_eq!(letter_sum("excellent"), 100);
        assert_eq!(letter_sum("microspectrophotometries"), 317);
    }

    #[test]
    fn letter_sum_normalizes_case_and_whitespace() {
        assert_eq!(letter_sum("CAB"), 6);
        assert_eq!(letter_sum("  cab  "), 6);
        assert_eq!(letter_sum("Cab\r"), 6);
    }

    #[test]
    fn letter_sum_bounded_by_length() {
        for word in ["a", "zz", "zyzzyva", "biodegradabilities", "oxymorons"] {
            let sum = letter_sum(word);
            assert!(sum >= 0);
            assert!(sum <= 26 * word.len() as i64, "{word} exceeds bound");
        }
    }

    #[test]
    fn letter_sum_keeps_codepoint_arithmetic_for_non_letters() {
        // '-' is 45, 'a' is 97
        assert_eq!(letter_sum("-"), 45 - 97 + 1);
        assert_eq!(letter_sum("a-a"), 2 + (45 - 97 + 1));
    }

    #[test]
    fn letter_values_span_alphabet() {
        assert_eq!(letter_value('a'), 1);
        assert_eq!(letter_value('m'), 13);
        assert_eq!(letter_value('z'), 26);
    }

    #[test]
    fn letter_set_counts_distinct() {
        let set = LetterSet::from_text("cytotoxicity");
        assert_eq!(set.len(), 6); // c y t o x i
        assert!(set.is_disjoint(&LetterSet::from_text("e")));
        assert!(!set.is_disjoint(&LetterSet::from_text("x")));
    }

    #[test]
    fn letter_set_disjoint() {
        let a = LetterSet::from_text("cytotoxicity");
        let b = LetterSet::from_text("unreservedness");
        let c = LetterSet::from_text("excellent");
        assert!(a.is_disjoint(&b));
        assert!(b.is_disjoint(&a));
        assert!(!b.is_disjoint(&c));
    }

    #[test]
    fn letter_set_disjoint_with_non_letters() {
        let a = LetterSet::from_text("ab-");
        let b = LetterSet::from_text("cd-");
        let c = LetterSet::from_text("cd'");
        assert!(!a.is_disjoint(&b));
        assert!(a.is_disjoint(&c));
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn empty_set_is_disjoint_with_itself() {
        let empty = LetterSet::from_text("");
        assert!(empty.is_empty());
        assert!(empty.is_disjoint(&empty));
    }

    #[test]
    fn word_keeps_raw_text() {
        let word = Word::new("Cab ");
        assert_eq!(word.text(), "Cab ");
        assert_eq!(word.len(), 4);
        assert_eq!(word.sum(), 6);
    }

    #[test]
    fn word_measurements() {
        let word = Word::new("biodegradabilities");
        assert_eq!(word.len(), 18);
        assert_eq!(word.sum(), 151);
        assert!(!word.is_empty());
    }

    #[test]
    fn shared_letters_follow_letter_sets() {
        let a = Word::new("cytotoxicity");
        let b = Word::new("unreservedness");
        let c = Word::new("excellent");
        assert_eq!(a.shares_no_letters(&b), a.letters().is_disjoint(b.letters()));
        assert!(a.shares_no_letters(&b));
        assert!(!b.shares_no_letters(&c));
        assert_eq!(a.letters().len(), 6);
    }

    #[test]
    fn empty_word() {
        let word = Word::new("");
        assert!(word.is_empty());
        assert_eq!(word.sum(), 0);
        assert!(word.shares_no_letters(&word));
    }

    #[test]
    fn word_display() {
        let word = Word::new("excellent");
        assert_eq!(format!("{word}"), "excellent");
    }
}

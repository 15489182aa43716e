//! Word sources
//!
//! A word source supplies the raw list the analyzer works on. Loading is the
//! only fallible step; everything downstream is pure.

use super::loader::{load_from_file, words_from_str};
use crate::core::WordList;
use std::io;
use std::path::{Path, PathBuf};

/// Default location of the enable1 word list
pub const DEFAULT_WORDLIST_PATH: &str = "data/enable1.txt";

/// Provider of the raw word list
pub trait WordSource {
    /// Read the full list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying resource cannot be read.
    fn load(&self) -> io::Result<WordList>;

    /// Short human-readable description for logs and headers
    fn describe(&self) -> String;
}

/// Word list read from a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORDLIST_PATH)
    }
}

impl WordSource for FileSource {
    fn load(&self) -> io::Result<WordList> {
        load_from_file(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Word list held in memory as newline-delimited text
#[derive(Debug, Clone, Copy)]
pub struct StaticSource {
    content: &'static str,
}

impl StaticSource {
    #[must_use]
    pub const fn new(content: &'static str) -> Self {
        Self { content }
    }
}

impl WordSource for StaticSource {
    fn load(&self) -> io::Result<WordList> {
        Ok(words_from_str(self.content))
    }

    fn describe(&self) -> String {
        "in-memory list".to_string()
    }
}

impl<S: WordSource + ?Sized> WordSource for &S {
    fn load(&self) -> io::Result<WordList> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

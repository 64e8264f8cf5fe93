//! Fixed-length dictionary index.
//!
//! This module builds the O(1)-membership word set the search components run
//! against: exactly the distinct input words of one chosen length, immutable
//! after construction.

use std::collections::HashSet;
use std::path::Path;

use crate::error::LadderError;

/// A set of dictionary words all sharing one fixed length.
///
/// Built once from an external word list and never mutated afterwards; the
/// search components borrow it read-only. An empty dictionary is a valid
/// outcome of filtering (no input word had the requested length), not an
/// error.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    word_len: usize,
}

impl Dictionary {
    /// Build a dictionary from an iterable of words, keeping only the
    /// distinct words whose length equals `word_len`.
    ///
    /// No normalization is applied beyond whatever the input already carries.
    pub fn from_words<I, S>(words: I, word_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter(|w| w.as_ref().len() == word_len)
            .map(|w| w.as_ref().to_string())
            .collect();
        Self { words, word_len }
    }

    /// Read a whitespace-separated word list from `path` and build the
    /// dictionary for `word_len`.
    pub fn load_from_path<P: AsRef<Path>>(path: P, word_len: usize) -> Result<Self, LadderError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_words(contents.split_whitespace(), word_len))
    }

    /// The fixed length every member word has.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// O(1) membership check.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership check for a candidate built up as raw bytes.
    ///
    /// The searches mutate candidate words in a byte buffer; non-UTF-8 input
    /// is simply not a member.
    pub fn contains_bytes(&self, word: &[u8]) -> bool {
        std::str::from_utf8(word).is_ok_and(|w| self.words.contains(w))
    }

    /// Iterate over the member words in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

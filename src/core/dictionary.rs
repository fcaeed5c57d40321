//! Dictionary membership checks
//!
//! Membership is case-insensitive: both the word and the list entries are
//! lowercased before comparison.

use rustc_hash::FxHashSet;

/// Check whether `word` appears in `word_list`, ignoring case
///
/// An empty list contains nothing.
///
/// # Examples
/// ```
/// use wordle_rules::core::is_valid_word;
///
/// assert!(is_valid_word("Crane", &["crane", "apple"]));
/// assert!(!is_valid_word("slate", &["crane", "apple"]));
/// ```
#[must_use]
pub fn is_valid_word<S: AsRef<str>>(word: &str, word_list: &[S]) -> bool {
    let word = word.to_lowercase();
    word_list
        .iter()
        .any(|entry| entry.as_ref().to_lowercase() == word)
}

/// Prebuilt dictionary for repeated lookups
///
/// Same semantics as [`is_valid_word`], with entries lowercased once up front.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check membership, ignoring case
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct (lowercased) words
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

    /// Words in sorted order
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

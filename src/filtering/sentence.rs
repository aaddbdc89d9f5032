//! sentence-level filtering
use std::collections::HashSet;

use super::filter::FilterMut;
use super::Filter;
use crate::normalize::comparison_key;

/// Word count filter.
/// Returns `true` if the sentence has between [WordCount::min_words] and [WordCount::max_words]
/// whitespace-separated words (both inclusive).
///
/// Bounds are 4 and 25 by default.
#[derive(Debug, Clone)]
pub struct WordCount {
    min_words: usize,
    max_words: usize,
}

impl WordCount {
    pub fn new(min_words: usize, max_words: usize) -> Self {
        Self {
            min_words,
            max_words,
        }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }
}

impl Filter<&str> for WordCount {
    fn detect(&self, sentence: &str) -> bool {
        let count = sentence.split_whitespace().count();
        (self.min_words..=self.max_words).contains(&count)
    }
}

impl Default for WordCount {
    fn default() -> Self {
        WordCount {
            min_words: 4,
            max_words: 25,
        }
    }
}

/// Keeps sentences whose [comparison_key] has not been seen yet.
///
/// Can be seeded with already known sentences, see [Unseen::with_known].
#[derive(Debug, Default)]
pub struct Unseen {
    keys: HashSet<String>,
}

impl Unseen {
    pub fn with_known<'a>(known: impl IntoIterator<Item = &'a str>) -> Self {
        let keys = known
            .into_iter()
            .map(comparison_key)
            .filter(|k| !k.is_empty())
            .collect();
        Self { keys }
    }

    /// number of distinct keys seen so far
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FilterMut<&str> for Unseen {
    fn detect_mut(&mut self, sentence: &str) -> bool {
        let key = comparison_key(sentence);
        !key.is_empty() && self.keys.insert(key)
    }
}

impl Filter<&str> for Unseen {
    fn detect(&self, sentence: &str) -> bool {
        let key = comparison_key(sentence);
        !key.is_empty() && !self.keys.contains(&key)
    }
}

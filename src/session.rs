//! Query orchestration over the shared index: exact prefix match
//! first, fuzzy fallback second, ranked and truncated for display.

use std::collections::HashMap;

use crate::fuzzy::{fuzzy_search, DEFAULT_MAX_DISTANCE};
use crate::trie::Trie;
use crate::{rank_by_frequency, WordFrequency};

/// At most this many suggestions are returned per query.
pub const SUGGESTION_LIMIT: usize = 5;

/// Owns the index and runs one synchronous operation at a time
/// against it: a query per keystroke, a selection at a time.
/// Concurrency, persistence and rendering live with the callers.
#[derive(Debug, Default, Clone)]
pub struct SearchSession {
    index: Trie,
}

impl SearchSession {
    pub fn new() -> Self {
        SearchSession::default()
    }

    /// Add or overwrite one word. See [`Trie::insert`].
    pub fn insert(&mut self, word: &str, frequency: WordFrequency) {
        self.index.insert(word, frequency);
    }

    /// The suggestions for the typed text, best first.
    ///
    /// Empty text means empty suggestions. A prefix with no exact
    /// match falls back to fuzzy matching before giving up, and the
    /// final list is cut down to [`SUGGESTION_LIMIT`] entries.
    pub fn query(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut suggestions = match self.index.lookup_prefix(text) {
            Some(node) => {
                let mut words = node.collect_words(text);
                rank_by_frequency(&mut words);
                words.into_iter().map(|data| data.word).collect()
            }
            None => Vec::new(),
        };

        if suggestions.is_empty() {
            suggestions = fuzzy_search(&self.index, text, DEFAULT_MAX_DISTANCE);
        }

        suggestions.truncate(SUGGESTION_LIMIT);
        suggestions
    }

    /// Learn from a picked suggestion.
    /// True means the word was known and its frequency grew by one,
    /// which is the host's signal to persist the snapshot.
    pub fn record_selection(&mut self, word: &str) -> bool {
        self.index.increment_frequency(word)
    }

    /// The flat word -> frequency mapping for the persistence layer.
    pub fn snapshot(&self) -> HashMap<String, WordFrequency> {
        self.index.snapshot()
    }

    /// Repopulate the index from a persisted mapping.
    pub fn bulk_load<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, WordFrequency)>,
    {
        self.index.bulk_load(entries);
    }
}

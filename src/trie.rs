//! The in-memory prefix tree that every search runs against.
//! It stores complete words with their frequency and is the only
//! stateful part of the system: inserts grow it, selection learning
//! mutates the counters in place, and every query is a plain read.

use std::collections::{BTreeMap, HashMap};

use crate::{WordData, WordFrequency};

/// One character position reachable from the root.
/// A node is a complete word iff `frequency` is present.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Children keyed by their character, each one exclusively
    /// owned by this node. The map is ordered, so sibling traversal
    /// is committed to sorted character order.
    children: BTreeMap<char, TrieNode>,

    /// The associated frequency of the word,
    /// if the path down to this node spells a complete word.
    frequency: Option<WordFrequency>,
}

impl TrieNode {
    /// Enumerate every complete word at or below this node.
    /// `prefix` must be the path walked from the root to get here.
    /// Each call re-walks the structure and returns a fresh snapshot,
    /// siblings visited in sorted character order.
    pub fn collect_words(&self, prefix: &str) -> Vec<WordData> {
        let mut words = Vec::new();
        let mut prefix = prefix.to_string();
        self.collect_into(&mut prefix, &mut words);
        words
    }

    fn collect_into(&self, prefix: &mut String, words: &mut Vec<WordData>) {
        if let Some(frequency) = self.frequency {
            words.push(WordData {
                word: prefix.clone(),
                frequency,
            });
        }

        for (character, child) in &self.children {
            prefix.push(*character);
            child.collect_into(prefix, words);
            prefix.pop();
        }
    }
}

/// The search index itself. It owns the root node and, through it,
/// every other node: the trie is a strict tree, no sharing, no cycles.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Add the word with the given frequency, creating the missing
    /// part of its path. Re-inserting an existing word overwrites its
    /// frequency instead of adding to it; only selection learning adds.
    /// Inserting the empty word is a harmless no-op. Never fails.
    pub fn insert(&mut self, word: &str, frequency: WordFrequency) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for character in word.chars() {
            node = node.children.entry(character).or_default();
        }
        node.frequency = Some(frequency);
    }

    /// Walk down the prefix and return the node it ends on.
    /// The empty prefix is the root; a missing path is `None`,
    /// absence, never an error.
    pub fn lookup_prefix(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for character in prefix.chars() {
            node = node.children.get(&character)?;
        }
        Some(node)
    }

    /// Enumerate every stored word with its frequency.
    pub fn words(&self) -> Vec<WordData> {
        self.root.collect_words("")
    }

    /// Add one to the word's frequency and return true.
    /// An unknown word (or a bare prefix that is no word on its own)
    /// returns false: the designated "nothing learned" signal.
    pub fn increment_frequency(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for character in word.chars() {
            match node.children.get_mut(&character) {
                Some(child) => node = child,
                None => return false,
            }
        }

        match node.frequency.as_mut() {
            Some(frequency) => {
                *frequency = frequency.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Reshape the stored words into the flat word -> frequency
    /// mapping handed to the persistence layer.
    pub fn snapshot(&self) -> HashMap<String, WordFrequency> {
        self.words()
            .into_iter()
            .map(|data| (data.word, data.frequency))
            .collect()
    }

    /// Repopulate the index from a persisted mapping,
    /// one insert per entry.
    pub fn bulk_load<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, WordFrequency)>,
    {
        for (word, frequency) in entries {
            self.insert(&word, frequency);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Trie;

    #[test]
    fn insert_and_lookup() {
        let mut trie = Trie::new();
        trie.insert("car", 7);
        trie.insert("care", 3);

        let node = trie.lookup_prefix("car").expect("prefix should exist");
        let words: Vec<(String, u32)> = node
            .collect_words("car")
            .into_iter()
            .map(|data| (data.word, data.frequency))
            .collect();

        assert_eq!(vec![("car".to_string(), 7), ("care".to_string(), 3)], words);
        assert!(trie.lookup_prefix("cars").is_none());
        assert!(trie.lookup_prefix("x").is_none());
    }

    #[test]
    fn empty_prefix_is_the_root() {
        let mut trie = Trie::new();
        trie.insert("a", 1);
        trie.insert("b", 2);

        let all = trie.lookup_prefix("").expect("root is always there");
        assert_eq!(2, all.collect_words("").len());
    }

    #[test]
    fn reinsert_overwrites_the_frequency() {
        let mut trie = Trie::new();
        trie.insert("buy", 10);
        trie.insert("buy", 3);

        // Replaced, not summed.
        assert_eq!(Some(&3), trie.snapshot().get("buy"));
    }

    #[test]
    fn empty_word_is_a_no_op() {
        let mut trie = Trie::new();
        trie.insert("", 5);

        assert!(trie.words().is_empty());
        assert!(!trie.increment_frequency(""));
    }

    #[test]
    fn collection_order_is_sorted_by_character() {
        let mut trie = Trie::new();
        trie.insert("buy", 10);
        trie.insert("bear", 5);
        trie.insert("bid", 8);

        let words: Vec<String> = trie.words().into_iter().map(|data| data.word).collect();
        assert_eq!(vec!["bear", "bid", "buy"], words);
    }

    #[test]
    fn increment_frequency_learns_known_words_only() {
        let mut trie = Trie::new();
        trie.insert("camera", 6);

        assert!(trie.increment_frequency("camera"));
        assert_eq!(Some(&7), trie.snapshot().get("camera"));

        // Unknown word: nothing learned, nothing changed.
        assert!(!trie.increment_frequency("zzz"));
        // A prefix that is not a word on its own doesn't learn either.
        assert!(!trie.increment_frequency("cam"));
        assert_eq!(Some(&7), trie.snapshot().get("camera"));
    }

    #[test]
    fn bulk_load_and_snapshot_round_trip() {
        let mut trie = Trie::new();
        trie.bulk_load([("bear".to_string(), 5), ("bid".to_string(), 8)]);

        let snapshot = trie.snapshot();
        assert_eq!(2, snapshot.len());
        assert_eq!(Some(&5), snapshot.get("bear"));
        assert_eq!(Some(&8), snapshot.get("bid"));

        let mut reloaded = Trie::new();
        reloaded.bulk_load(snapshot);
        assert_eq!(trie.snapshot(), reloaded.snapshot());
    }
}

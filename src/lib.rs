pub mod dictionary;
pub mod distance;
pub mod fuzzy;
pub mod session;
pub mod trie;

/// Each word's data is its frequency: how many times the word
/// has been loaded into the index or picked by the user.
/// Zero is allowed as a bulk load may legitimately carry it;
/// whether a node is a word at all is encoded separately in the trie.
pub type WordFrequency = u32;

/// A single word enumerated from the search structure,
/// paired with the frequency stored at its terminal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordData {
    pub word: String,
    pub frequency: WordFrequency,
}

/// Order entries the way every result list is ranked:
/// frequency decreasing, ties kept in discovery order
/// (the sort is stable and the trie enumerates siblings
/// in sorted character order).
pub fn rank_by_frequency(entries: &mut [WordData]) {
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
}

#[cfg(test)]
mod tests {
    use super::{rank_by_frequency, WordData};

    #[test]
    fn ranking_is_stable() {
        let mut entries = vec![
            WordData { word: "bear".into(), frequency: 5 },
            WordData { word: "bell".into(), frequency: 8 },
            WordData { word: "bid".into(), frequency: 8 },
            WordData { word: "buy".into(), frequency: 10 },
        ];

        rank_by_frequency(&mut entries);

        let words: Vec<&str> = entries.iter().map(|data| data.word.as_str()).collect();
        // Equal frequencies keep their discovery order.
        assert_eq!(vec!["buy", "bell", "bid", "bear"], words);
    }
}

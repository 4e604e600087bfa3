//! Approximate matching used when a prefix has no exact match.

use crate::distance::levenshtein;
use crate::trie::Trie;
use crate::{rank_by_frequency, WordData};

/// How far a typo may be from a stored word and still be suggested.
pub const DEFAULT_MAX_DISTANCE: usize = 1;

/// Find stored words whose beginning is close to the mistyped text.
///
/// This is a full scan over every stored word rather than a bounded
/// search guided by the trie: the index is assumed to fit comfortably
/// in memory, so correctness wins over scale. Candidates must start
/// with the typo's first character (any word when the typo is empty),
/// and the distance is measured against the candidate truncated to
/// the typo's character length, so only the portion the user actually
/// typed is compared. A word shorter than the typo is compared whole.
pub fn fuzzy_search(index: &Trie, typo: &str, max_distance: usize) -> Vec<String> {
    let first_char = typo.chars().next();
    let typo_len = typo.chars().count();

    let mut close_words: Vec<WordData> = index
        .words()
        .into_iter()
        .filter(|data| match first_char {
            Some(first) => data.word.starts_with(first),
            None => true,
        })
        .filter(|data| {
            let truncated: String = data.word.chars().take(typo_len).collect();
            levenshtein(typo, &truncated) <= max_distance
        })
        .collect();

    rank_by_frequency(&mut close_words);
    close_words.into_iter().map(|data| data.word).collect()
}

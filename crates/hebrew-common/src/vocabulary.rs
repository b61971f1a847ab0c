use crate::gematria::compute_gematria;
use crate::hashing::word_id;
use crate::tokenization::{extract_unique_words, words_of};
use crate::types::{GematriaValue, VocabularyEntry};

/// One entry per distinct study word in `passage`, in first-occurrence order.
pub fn build_vocabulary(passage: &str) -> Vec<VocabularyEntry> {
    extract_unique_words(passage)
        .into_iter()
        .map(entry_for)
        .collect()
}

/// Entry for a single word as it appears in the text.
pub fn entry_for(word: String) -> VocabularyEntry {
    VocabularyEntry {
        word_id: word_id(&word),
        gematria: compute_gematria(&word),
        word,
    }
}

/// Sum of per-word gematria over every word chunk, repeats included.
///
/// Ordinal positions restart at each word, so this differs from
/// `compute_gematria(passage).ordinal` for multi-word input.
pub fn passage_gematria(passage: &str) -> GematriaValue {
    words_of(passage).map(compute_gematria).sum()
}

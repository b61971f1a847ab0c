use std::collections::HashSet;

use crate::letters::{is_consonant, is_major_punctuation, is_point, is_word_separator};

/// Extract distinct study words from a passage.
///
/// Splits on whitespace and BOMs, removes sof pasuq and paseq, and keeps chunks with at
/// least one consonant. Vowel points and cantillation stay in the returned
/// tokens, so differently pointed spellings are distinct words. Order is first
/// occurrence.
pub fn extract_unique_words(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for chunk in words_of(text) {
        let word = strip_major_punctuation(chunk);
        if !has_consonant(&word) {
            continue;
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    words
}

/// Non-empty chunks between word separators.
pub fn words_of(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|s| !s.is_empty())
}

/// Remove sof pasuq and paseq.
pub fn strip_major_punctuation(s: &str) -> String {
    s.chars().filter(|c| !is_major_punctuation(*c)).collect()
}

/// Remove vowel points and cantillation marks, keeping everything else.
pub fn strip_points(s: &str) -> String {
    s.chars().filter(|c| !is_point(*c)).collect()
}

/// Only the consonantal letters of `s`.
pub fn consonants(s: &str) -> String {
    s.chars().filter(|c| is_consonant(*c)).collect()
}

fn has_consonant(s: &str) -> bool {
    s.chars().any(is_consonant)
}

mod fixtures;

use hebrew_common::gematria::compute_gematria;
use hebrew_common::hashing::word_id;
use hebrew_common::tokenization::extract_unique_words;
use hebrew_common::types::GematriaValue;
use hebrew_common::vocabulary::*;

#[test]
fn vocabulary_follows_extraction_order() {
    let vocab = build_vocabulary(fixtures::GENESIS_1_1_2);
    let words: Vec<&str> = vocab.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, fixtures::GENESIS_1_1_2_WORDS);
    assert_eq!(vocab.len(), extract_unique_words(fixtures::GENESIS_1_1_2).len());
}

#[test]
fn entries_carry_gematria_and_id() {
    let vocab = build_vocabulary("בָּרָא");
    assert_eq!(vocab.len(), 1);
    assert_eq!(vocab[0].gematria, compute_gematria("ברא"));
    assert_eq!(vocab[0].word_id, word_id("בָּרָא"));
}

#[test]
fn empty_passage_has_no_vocabulary() {
    assert!(build_vocabulary("  ׃ ").is_empty());
}

#[test]
fn passage_gematria_restarts_ordinal_per_word() {
    // אב: ordinal 3, ג: ordinal 1
    let sum = passage_gematria("אב ג");
    assert_eq!(
        sum,
        GematriaValue {
            simple: 6,
            standard: 6,
            ordinal: 4
        }
    );
    assert_eq!(compute_gematria("אב ג").ordinal, 6);
}

#[test]
fn passage_gematria_counts_repeats() {
    assert_eq!(passage_gematria("א א").simple, 2);
}

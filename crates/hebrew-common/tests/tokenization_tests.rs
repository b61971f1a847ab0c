mod fixtures;

use hebrew_common::tokenization::*;

#[test]
fn deduplicates_in_first_occurrence_order() {
    let words = extract_unique_words("שלום שלום עולם");
    assert_eq!(words, vec!["שלום", "עולם"]);
}

#[test]
fn latin_text_yields_nothing() {
    assert!(extract_unique_words("hello world").is_empty());
}

#[test]
fn empty_string() {
    assert!(extract_unique_words("").is_empty());
}

#[test]
fn strips_sof_pasuq_keeps_points() {
    let words = extract_unique_words("בְּרֵאשִׁית׃");
    assert_eq!(words, vec!["בְּרֵאשִׁית"]);
}

#[test]
fn strips_paseq() {
    let words = extract_unique_words("אמר׀ אמר");
    assert_eq!(words, vec!["אמר"]);
}

#[test]
fn drops_chunks_without_consonants() {
    let words = extract_unique_words("\u{05B0}\u{05B8} ׃ ׀ 42 שלום");
    assert_eq!(words, vec!["שלום"]);
}

#[test]
fn different_pointing_is_a_different_word() {
    let words = extract_unique_words("בָּרָא ברא");
    assert_eq!(words.len(), 2);
}

#[test]
fn maqaf_joins_words() {
    let words = extract_unique_words("עַל־פְּנֵי תְהוֹם");
    assert_eq!(words, vec!["עַל־פְּנֵי", "תְהוֹם"]);
}

#[test]
fn splits_on_any_whitespace() {
    let words = extract_unique_words("שלום\tעולם\nשלום");
    assert_eq!(words, vec!["שלום", "עולם"]);
}

#[test]
fn mixed_latin_and_hebrew_chunk_is_kept() {
    let words = extract_unique_words("abcא");
    assert_eq!(words, vec!["abcא"]);
}

#[test]
fn demo_passage_words() {
    let words = extract_unique_words(fixtures::GENESIS_1_1_2);
    assert_eq!(words, fixtures::GENESIS_1_1_2_WORDS);
}

#[test]
fn repeated_extraction_is_stable() {
    let once = extract_unique_words(fixtures::GENESIS_1_1_2);
    let twice = extract_unique_words(fixtures::GENESIS_1_1_2);
    assert_eq!(once, twice);
}

#[test]
fn strip_points_leaves_consonants_and_maqaf() {
    assert_eq!(strip_points("עַל־פְּנֵי"), "על־פני");
}

#[test]
fn consonants_only() {
    assert_eq!(consonants("הָאָרֶץ׃ x"), "הארץ");
}

#[test]
fn bom_between_words_splits_them() {
    let words = extract_unique_words("שלום\u{FEFF}עולם");
    assert_eq!(words, vec!["שלום", "עולם"]);
}

#[test]
fn leading_bom_is_not_part_of_the_word() {
    let words = extract_unique_words("\u{FEFF}בְּרֵאשִׁית");
    assert_eq!(words, vec!["בְּרֵאשִׁית"]);
}

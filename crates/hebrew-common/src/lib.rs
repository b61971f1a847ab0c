//! Hebrew text processing for the Torah study app.
//!
//! Gematria is computed per code point over consonantal letters, skipping vowel
//! points and cantillation marks. Word extraction keeps points in the returned
//! tokens and deduplicates by exact string. Vocabulary entries and flashcard
//! decks are built on top of these two operations; deck snapshots use CBOR
//! serialization (ciborium).

pub mod deck;
pub mod direction;
pub mod gematria;
pub mod hashing;
pub mod letters;
pub mod normalization;
pub mod tokenization;
pub mod types;
pub mod vocabulary;

pub use direction::is_rtl;
pub use gematria::compute_gematria;
pub use tokenization::extract_unique_words;
pub use types::GematriaValue;

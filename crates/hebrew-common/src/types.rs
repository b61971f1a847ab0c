use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Gematria sums for one string.
///
/// `simple` and `standard` are currently computed identically; they stay separate
/// fields so stored values keep their shape if the standard method diverges.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GematriaValue {
    pub simple: u32,
    pub standard: u32,
    pub ordinal: u32,
}

impl GematriaValue {
    pub const ZERO: GematriaValue = GematriaValue {
        simple: 0,
        standard: 0,
        ordinal: 0,
    };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for GematriaValue {
    type Output = GematriaValue;

    fn add(self, rhs: GematriaValue) -> GematriaValue {
        GematriaValue {
            simple: self.simple.saturating_add(rhs.simple),
            standard: self.standard.saturating_add(rhs.standard),
            ordinal: self.ordinal.saturating_add(rhs.ordinal),
        }
    }
}

impl std::iter::Sum for GematriaValue {
    fn sum<I: Iterator<Item = GematriaValue>>(iter: I) -> GematriaValue {
        iter.fold(GematriaValue::ZERO, |acc, v| acc + v)
    }
}

/// A study word with its precomputed values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: String,
    pub word_id: [u8; 32],
    pub gematria: GematriaValue,
}

/// How well the learner knows a card.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Knowledge {
    #[default]
    Unseen,
    Learning,
    Known,
}

/// Where a deck is in its study pass.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeckPhase {
    #[default]
    Studying,
    Complete,
}

/// Per-level counts for a deck.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckSummary {
    pub total: u32,
    pub known: u32,
    pub learning: u32,
    pub unseen: u32,
    pub completion_percentage: u32,
}

//! Flashcard progression over a lesson's vocabulary.
//!
//! The learner sees one card at a time and marks it known or still learning;
//! marking the last card completes the pass. Persistence belongs to the caller,
//! which stores the CBOR snapshot from [`FlashcardDeck::to_bytes`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DeckPhase, DeckSummary, Knowledge, VocabularyEntry};
use crate::vocabulary::build_vocabulary;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck pass is complete; call retry to study again")]
    Complete,

    #[error("invalid deck snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("failed to encode deck snapshot: {0}")]
    Encode(String),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashcardDeck {
    entries: Vec<VocabularyEntry>,
    marks: Vec<Knowledge>,
    position: usize,
    phase: DeckPhase,
}

impl FlashcardDeck {
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        let phase = if entries.is_empty() {
            DeckPhase::Complete
        } else {
            DeckPhase::Studying
        };
        FlashcardDeck {
            marks: vec![Knowledge::Unseen; entries.len()],
            entries,
            position: 0,
            phase,
        }
    }

    pub fn from_passage(passage: &str) -> Self {
        Self::new(build_vocabulary(passage))
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn phase(&self) -> DeckPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == DeckPhase::Complete
    }

    /// Card being studied, or `None` once the pass is complete.
    pub fn current(&self) -> Option<&VocabularyEntry> {
        match self.phase {
            DeckPhase::Studying => self.entries.get(self.position),
            DeckPhase::Complete => None,
        }
    }

    pub fn knowledge_of(&self, word: &str) -> Option<Knowledge> {
        self.entries
            .iter()
            .position(|e| e.word == word)
            .map(|i| self.marks[i])
    }

    pub fn mark_known(&mut self) -> Result<DeckPhase, DeckError> {
        self.mark(Knowledge::Known)
    }

    pub fn mark_learning(&mut self) -> Result<DeckPhase, DeckError> {
        self.mark(Knowledge::Learning)
    }

    fn mark(&mut self, level: Knowledge) -> Result<DeckPhase, DeckError> {
        if self.phase == DeckPhase::Complete {
            return Err(DeckError::Complete);
        }
        self.marks[self.position] = level;
        tracing::debug!(
            "marked card {} of {} as {:?}",
            self.position + 1,
            self.entries.len(),
            level
        );
        if self.position + 1 < self.entries.len() {
            self.position += 1;
        } else {
            self.phase = DeckPhase::Complete;
            tracing::debug!("deck pass complete");
        }
        Ok(self.phase)
    }

    /// Start a new pass from the first card. Earlier marks stay until overwritten.
    pub fn retry(&mut self) {
        self.position = 0;
        if !self.entries.is_empty() {
            self.phase = DeckPhase::Studying;
        }
    }

    pub fn summary(&self) -> DeckSummary {
        let count = |k: Knowledge| self.marks.iter().filter(|m| **m == k).count();
        let total = self.entries.len();
        let known = count(Knowledge::Known);
        let learning = count(Knowledge::Learning);
        DeckSummary {
            total: narrow(total),
            known: narrow(known),
            learning: narrow(learning),
            unseen: narrow(count(Knowledge::Unseen)),
            completion_percentage: percent(known + learning, total),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DeckError> {
        let mut out = Vec::new();
        ciborium::ser::into_writer(self, &mut out).map_err(|e| DeckError::Encode(e.to_string()))?;
        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DeckError> {
        let deck: FlashcardDeck = ciborium::de::from_reader(bytes).map_err(|e| {
            tracing::warn!("deck snapshot decode failed: {}", e);
            DeckError::InvalidSnapshot(e.to_string())
        })?;
        deck.validate()?;
        Ok(deck)
    }

    fn validate(&self) -> Result<(), DeckError> {
        if self.marks.len() != self.entries.len() {
            return Err(DeckError::InvalidSnapshot(format!(
                "{} marks for {} cards",
                self.marks.len(),
                self.entries.len()
            )));
        }
        let in_range = match self.phase {
            DeckPhase::Studying => self.position < self.entries.len(),
            DeckPhase::Complete => self.position <= self.entries.len(),
        };
        if !in_range {
            return Err(DeckError::InvalidSnapshot(format!(
                "position {} out of range",
                self.position
            )));
        }
        Ok(())
    }
}

fn narrow(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Whole-number share of `marked` in `total`; an empty deck counts as done.
fn percent(marked: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    (marked as u64 * 100 / total as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_huge_deck_does_not_overflow() {
        assert_eq!(percent(50_000_000, 50_000_000), 100);
        assert_eq!(percent(25_000_000, 50_000_000), 50);
    }

    #[test]
    fn percent_of_empty_deck() {
        assert_eq!(percent(0, 0), 100);
    }

    #[test]
    fn narrow_saturates() {
        assert_eq!(narrow(7), 7);
        assert_eq!(narrow(usize::MAX), u32::MAX);
    }
}

use unicode_normalization::UnicodeNormalization;

use crate::letters::is_word_separator;

/// Normalize a lesson passage: Unicode NFC, then every run of whitespace or BOMs
/// becomes a single U+0020, with none at either end.
///
/// A BOM between two words separates them, matching how word extraction splits.
/// Maqaf, sof pasuq and paseq are kept where they are, so `על־פני` stays one word
/// and verse ends are still visible to the tokenizer.
///
/// Word extraction never calls this itself. Callers that want visually identical
/// pointed words to compare equal normalize first.
pub fn normalize_passage(text: &str) -> String {
    let nfc: String = text.nfc().collect();
    nfc.split(is_word_separator)
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True if `text` is already in NFC.
pub fn is_nfc(text: &str) -> bool {
    unicode_normalization::is_nfc(text)
}

use crate::letters::{is_point, letter_value};
use crate::tokenization::words_of;
use crate::types::GematriaValue;

/// Compute simple, standard and ordinal gematria for `text`.
///
/// Iterates code points, not grapheme clusters. Points and cantillation marks are
/// skipped; any other character without a letter value adds nothing and does not
/// advance the ordinal position.
pub fn compute_gematria(text: &str) -> GematriaValue {
    let mut result = GematriaValue::ZERO;
    let mut letter_index: u32 = 0;

    for c in text.chars() {
        if is_point(c) {
            continue;
        }
        let value = letter_value(c).unwrap_or(0);
        if value > 0 {
            result.simple = result.simple.saturating_add(value);
            result.standard = result.standard.saturating_add(value);
            letter_index = letter_index.saturating_add(1);
            result.ordinal = result.ordinal.saturating_add(letter_index);
        }
    }

    result
}

/// Gematria of each word chunk, in input order.
pub fn gematria_per_word(text: &str) -> Vec<(&str, GematriaValue)> {
    words_of(text)
        .map(|w| (w, compute_gematria(w)))
        .collect()
}

use sha2::{Digest, Sha256};

/// Stable identifier for a study word: sha256 of the exact UTF-8 token.
/// Differently pointed spellings get different ids.
pub fn word_id(word: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(word.as_bytes());
    hasher.finalize().into()
}

/// Lowercase hex form of [`word_id`].
pub fn word_id_hex(word: &str) -> String {
    word_id(word).iter().map(|b| format!("{:02x}", b)).collect()
}

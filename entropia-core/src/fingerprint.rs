// entropia-core/src/fingerprint.rs
use sha2::{Digest, Sha256};
use hex;

use entropia_stats::NormalizedText;

/// SHA-256 (hex) of a normalized text. Used as the text half of the n-gram
/// cache key, so equal texts share tables regardless of where they came from.
pub fn text_fingerprint(text: &NormalizedText) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_str().as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entropia_stats::normalize;

    #[test]
    fn test_equal_texts_share_fingerprint() {
        let a = text_fingerprint(&normalize("Hola, Mundo"));
        let b = text_fingerprint(&normalize("hola mundo!"));
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_different_texts_differ() {
        assert_ne!(
            text_fingerprint(&normalize("abc")),
            text_fingerprint(&normalize("abd"))
        );
    }
}

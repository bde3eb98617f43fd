// entropia-stats/src/normalize/mod.rs
//! Maps raw text onto the 27-symbol analysis alphabet.

extern crate alloc;
use alloc::string::String;
use core::fmt;

/// The fixed alphabet every normalized symbol belongs to.
pub const ALPHABET: [char; 27] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'ñ', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Returns true if `c` is part of [`ALPHABET`].
#[inline]
pub fn is_alphabet_symbol(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ñ'
}

/// Text reduced to [`ALPHABET`] symbols.
///
/// Only [`normalize`] builds values of this type, so the alphabet invariant
/// holds for every instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText {
    symbols: String,
    len: usize,
}

impl NormalizedText {
    /// The normalized symbols as a string slice.
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Number of symbols (not bytes; `ñ` is two bytes in UTF-8).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

/// Folds accented vowels onto their plain vowel. `ñ` is left alone.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        other => other,
    }
}

/// Lowercases `text`, folds accented vowels and drops everything outside
/// [`ALPHABET`].
///
/// Combining marks left behind by decomposed input are not in the alphabet,
/// so they are filtered out together with punctuation, digits and spaces.
pub fn normalize(text: &str) -> NormalizedText {
    let mut symbols = String::with_capacity(text.len());
    let mut len = 0usize;

    for c in text.chars().flat_map(char::to_lowercase).map(fold_accent) {
        if is_alphabet_symbol(c) {
            symbols.push(c);
            len += 1;
        }
    }

    NormalizedText { symbols, len }
}

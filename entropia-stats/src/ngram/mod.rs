// entropia-stats/src/ngram/mod.rs
//! Sliding-window n-gram counting over normalized text.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::normalize::NormalizedText;
use crate::table::FrequencyTable;

/// Counts every contiguous run of `n` symbols in `text` (stride 1).
///
/// A text of `L` symbols yields `max(0, L - n + 1)` windows. `n == 0`
/// produces an empty table.
pub fn count_ngrams(text: &NormalizedText, n: usize) -> FrequencyTable {
    let mut table = FrequencyTable::new(n);
    if n == 0 || text.len() < n {
        return table;
    }

    let symbols = text.as_str();
    // Byte offset of every symbol boundary, including the end of the string,
    // so that windows never split a multi-byte `ñ`.
    let boundaries: Vec<usize> = symbols
        .char_indices()
        .map(|(i, _)| i)
        .chain(core::iter::once(symbols.len()))
        .collect();

    for start in 0..=text.len() - n {
        let gram = &symbols[boundaries[start]..boundaries[start + n]];
        table.add(String::from(gram), 1);
    }

    table
}

// entropia-stats/src/lib.rs
//! Allocation-only statistics kernel for EntropiaCheck.
//!
//! Everything in here is a pure function over in-memory text or frequency
//! tables. Caching and file access live in `entropia-core`.
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod normalize;
pub mod table;
pub mod ngram;
pub mod entropy;
pub mod divergence;
pub mod statistics;
pub mod zipf;

pub use divergence::{js_divergence, kl_divergence, KL_FLOOR};
pub use entropy::{conditional_entropy, entropy, redundancy, relative_freq, uniform_entropy};
pub use ngram::count_ngrams;
pub use normalize::{is_alphabet_symbol, normalize, NormalizedText, ALPHABET};
pub use table::{FrequencyTable, RelativeFrequencyTable};
pub use zipf::{zipf_alpha, zipf_alpha_from_values, InsufficientData};


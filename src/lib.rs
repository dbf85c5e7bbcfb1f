//! # Literaki
//!
//! A multithreaded word finder: given a set of letters, optionally with one
//! blank written as a space, it lists every dictionary word spelled by
//! exactly those letters.
//!
//! Matching compares letter occurrence counts, so the order of letters does
//! not matter. A blank is tried as every letter of the alphabet in turn.

pub mod alphabet;
pub mod config;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod index;
pub mod multiset;
pub mod status;

pub use alphabet::{Alphabet, POLISH_LETTERS, WILDCARD};
pub use config::FinderConfig;
pub use coordinator::{DeliveryPolicy, DisplaySink, DisplayUpdate, InputOutcome, SearchCoordinator};
pub use engine::{sort_case_insensitive, MatchEngine};
pub use error::{FinderError, InputError, Result};
pub use index::WordIndex;
pub use multiset::{can_form_word, LetterMultiset};
pub use status::{Language, Status, Tone};

/// Load the dictionary compiled into the binary
pub fn load_dictionary() -> Vec<String> {
    include_str!("../dictionary/words.txt")
        .split_whitespace()
        .map(|s| s.to_lowercase())
        .collect()
}

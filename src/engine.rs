//! Word matching with single-letter wildcard expansion.
//!
//! Input without a wildcard is an exact anagram query: a word matches when it
//! uses the same letters the same number of times. With a wildcard, every
//! alphabet letter is tried in that position in turn and the matches of all
//! the concrete patterns are collected.

use std::sync::Arc;

use crate::alphabet::{Alphabet, WILDCARD};
use crate::multiset::can_form_word;
use rayon::prelude::*;

/// Finds the words of a word list that the input letters can spell.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    alphabet: Arc<Alphabet>,
}

impl MatchEngine {
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// All words in `words` matching normalized `input`, in word-list order
    /// (grouped by substituted letter when `input` has a wildcard).
    ///
    /// A word can only satisfy one substitution because the lengths must
    /// agree, so the result holds no duplicates beyond those in `words`.
    pub fn find_words(&self, input: &str, words: &[String]) -> Vec<String> {
        let Some(slot) = input.find(WILDCARD) else {
            return self.matching(input, words);
        };

        let mut found = Vec::new();
        for &letter in self.alphabet.letters() {
            let candidate = substitute(input, slot, letter);
            found.extend(self.matching(&candidate, words));
        }
        found
    }

    fn matching(&self, pattern: &str, words: &[String]) -> Vec<String> {
        words
            .par_iter()
            .filter(|word| !word.is_empty())
            .filter(|word| can_form_word(&self.alphabet, word, pattern))
            .cloned()
            .collect()
    }
}

/// Replace the wildcard at byte offset `slot` with `letter`.
fn substitute(input: &str, slot: usize, letter: char) -> String {
    let mut candidate = String::with_capacity(input.len() + letter.len_utf8());
    candidate.push_str(&input[..slot]);
    candidate.push(letter);
    candidate.push_str(&input[slot + WILDCARD.len_utf8()..]);
    candidate
}

/// Sort words ignoring case. The sort is stable and drops nothing.
pub fn sort_case_insensitive(words: &mut [String]) {
    words.sort_by_cached_key(|word| word.to_lowercase());
}

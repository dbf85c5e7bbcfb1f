//! Letter occurrence counts and the word containment test.

use crate::alphabet::{Alphabet, WILDCARD};

/// Occurrence count per alphabet letter, indexed by alphabet position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMultiset {
    counts: Box<[u32]>,
}

impl LetterMultiset {
    /// Every letter at zero.
    pub fn empty(alphabet: &Alphabet) -> Self {
        Self {
            counts: vec![0; alphabet.len()].into_boxed_slice(),
        }
    }

    /// Count the letters of `word`, ignoring case.
    ///
    /// Returns `None` if the word holds a character outside the alphabet.
    pub fn from_word(alphabet: &Alphabet, word: &str) -> Option<Self> {
        let mut set = Self::empty(alphabet);
        for c in word.chars().flat_map(char::to_lowercase) {
            set.counts[alphabet.index_of(c)?] += 1;
        }
        Some(set)
    }

    pub fn count(&self, alphabet: &Alphabet, letter: char) -> u32 {
        alphabet
            .index_of(letter)
            .map_or(0, |i| self.counts[i])
    }

    /// Total number of letters counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&n| n as usize).sum()
    }

    /// Remove one occurrence of `letter`. Returns false, leaving the counts
    /// untouched, if there is none left to remove.
    pub fn take(&mut self, alphabet: &Alphabet, letter: char) -> bool {
        match alphabet.index_of(letter) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Check whether `word` can be spelled from the letters of `input`.
///
/// The word is compared case-insensitively; `input` is expected normalized.
///
/// Lengths (in characters) must be equal. Every non-wildcard input letter
/// must be supplied by a distinct letter of the word. A wildcard position
/// places no constraint here; callers expand it before matching.
pub fn can_form_word(alphabet: &Alphabet, word: &str, input: &str) -> bool {
    if word.chars().count() != input.chars().count() {
        return false;
    }

    let mut available = match LetterMultiset::from_word(alphabet, word) {
        Some(set) => set,
        None => return false,
    };

    input
        .chars()
        .filter(|&c| c != WILDCARD)
        .all(|c| available.take(alphabet, c))
}

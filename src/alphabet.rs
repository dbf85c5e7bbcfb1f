//! The fixed letter set words are matched over, and normalization of raw
//! input into letters the matcher understands.

use std::collections::HashMap;

use crate::error::{FinderError, InputError, Result};

/// Lowercase Polish letters in dictionary order.
pub const POLISH_LETTERS: &str = "aąbcćdeęfghijklłmnńoópqrsśtuvwxyzźż";

/// Marks the single free letter position in the input.
pub const WILDCARD: char = ' ';

/// An ordered set of distinct lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from a string of letters, keeping their order.
    ///
    /// Letters must be distinct, lowercase and not whitespace.
    pub fn new(letters: &str) -> Result<Self> {
        let mut ordered = Vec::new();
        let mut positions = HashMap::new();

        for c in letters.chars() {
            if c.is_whitespace() {
                return Err(FinderError::InvalidAlphabet(format!(
                    "whitespace is reserved for the wildcard (found {:?})",
                    c
                )));
            }
            if c.is_uppercase() {
                return Err(FinderError::InvalidAlphabet(format!(
                    "letter {:?} is not lowercase",
                    c
                )));
            }
            if positions.insert(c, ordered.len()).is_some() {
                return Err(FinderError::InvalidAlphabet(format!(
                    "letter {:?} appears more than once",
                    c
                )));
            }
            ordered.push(c);
        }

        if ordered.is_empty() {
            return Err(FinderError::InvalidAlphabet("no letters given".to_string()));
        }

        Ok(Self {
            letters: ordered,
            positions,
        })
    }

    pub fn polish() -> Self {
        let letters: Vec<char> = POLISH_LETTERS.chars().collect();
        let positions = letters.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { letters, positions }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    /// Position of `c` in the alphabet, used as a slot in letter counts.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    /// Lowercase `raw` and strip everything that is neither a letter of this
    /// alphabet nor the wildcard.
    ///
    /// More than one wildcard is rejected. The error carries the input with
    /// every wildcard after the first removed, which the caller should show
    /// back to the user in place of what they typed.
    pub fn normalize(&self, raw: &str) -> std::result::Result<String, InputError> {
        let filtered: String = raw
            .to_lowercase()
            .chars()
            .filter(|&c| c == WILDCARD || self.contains(c))
            .collect();

        if filtered.chars().filter(|&c| c == WILDCARD).count() > 1 {
            let mut seen_wildcard = false;
            let corrected = filtered
                .chars()
                .filter(|&c| {
                    if c != WILDCARD {
                        return true;
                    }
                    !std::mem::replace(&mut seen_wildcard, true)
                })
                .collect();
            return Err(InputError::TooManyWildcards { corrected });
        }

        Ok(filtered)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::polish()
    }
}

//! The word database: an immutable original list loaded once, and a working
//! list that searches read from.
//!
//! The working list is published as an immutable snapshot behind an
//! [`ArcSwap`]. Readers load the current snapshot without blocking and keep
//! it alive for the whole matching pass; `reset` and `narrow` swap in a new
//! list in one step, so no reader ever sees a half-cleared or half-refilled
//! list.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{error, info, warn};

use crate::error::{FinderError, Result};

#[derive(Debug)]
pub struct WordIndex {
    original: Arc<Vec<String>>,
    working: ArcSwap<Vec<String>>,
}

impl WordIndex {
    /// Words are stored lowercased.
    pub fn new(mut words: Vec<String>) -> Self {
        for word in words.iter_mut() {
            if word.chars().any(char::is_uppercase) {
                *word = word.to_lowercase();
            }
        }
        let original = Arc::new(words);
        Self {
            working: ArcSwap::new(Arc::clone(&original)),
            original,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Split each line on runs of whitespace and collect the lowercased tokens.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        for line in lines {
            words.extend(line.as_ref().split_whitespace().map(str::to_string));
        }
        Self::new(words)
    }

    /// Read whitespace-separated words. Bytes that are not valid UTF-8 are
    /// replaced rather than failing the whole load.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut lines = Vec::new();
        for (number, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            let text = String::from_utf8_lossy(&line);
            if let Cow::Owned(_) = text {
                warn!(line = number + 1, "word source line is not valid UTF-8");
            }
            lines.push(text.into_owned());
        }
        Ok(Self::from_lines(lines))
    }

    /// Load a whitespace-separated word file.
    pub fn open(path: &Path) -> Result<Self> {
        let source = |source| FinderError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(source)?;
        let index = Self::from_reader(BufReader::new(file)).map_err(source)?;
        info!(path = %path.display(), words = index.original.len(), "loaded word list");
        Ok(index)
    }

    /// Like [`WordIndex::open`], but an unreadable source is logged and
    /// leaves the database empty instead of failing.
    pub fn open_or_empty(path: &Path) -> Self {
        Self::open(path).unwrap_or_else(|err| {
            error!(error = %err, "continuing with an empty word list");
            Self::empty()
        })
    }

    /// The full list as loaded.
    pub fn original(&self) -> &[String] {
        &self.original
    }

    /// A frozen view of the working list at this instant.
    pub fn snapshot(&self) -> Arc<Vec<String>> {
        self.working.load_full()
    }

    /// Restore the working list to the original. Readers holding an older
    /// snapshot finish against it undisturbed.
    pub fn reset(&self) {
        self.working.store(Arc::clone(&self.original));
        info!(words = self.original.len(), "working list reset");
    }

    /// Keep only the working words for which `keep` holds. Returns how many
    /// words remain.
    pub fn narrow<F>(&self, keep: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut remaining = 0;
        // The closure reruns if another writer swapped the list meanwhile.
        self.working.rcu(|current| {
            let kept: Vec<String> = current
                .iter()
                .filter(|word| keep(word))
                .cloned()
                .collect();
            remaining = kept.len();
            Arc::new(kept)
        });
        info!(remaining, "working list narrowed");
        remaining
    }

    /// Number of words in the working list.
    pub fn len(&self) -> usize {
        self.working.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for WordIndex {
    fn default() -> Self {
        Self::empty()
    }
}

//! Error types for the word finder.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("word source {path} is unavailable: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
    #[error("could not start search workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Input the user typed that cannot be searched as-is.
///
/// Recovered locally by the coordinator, never a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("cannot enter more than one space")]
    TooManyWildcards { corrected: String },
}

impl InputError {
    /// The input with the offending characters removed.
    pub fn corrected(&self) -> &str {
        match self {
            InputError::TooManyWildcards { corrected } => corrected,
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;

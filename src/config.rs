//! Startup configuration, built once and handed to the components that need it.

use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::coordinator::DeliveryPolicy;
use crate::error::Result;
use crate::status::Language;

const FALLBACK_WORKER_THREADS: usize = 4;

#[derive(Debug, Clone)]
pub struct FinderConfig {
    pub alphabet: Arc<Alphabet>,
    /// Threads in the search worker pool.
    pub worker_threads: usize,
    pub delivery: DeliveryPolicy,
    pub language: Language,
}

impl FinderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alphabet(mut self, letters: &str) -> Result<Self> {
        self.alphabet = Arc::new(Alphabet::new(letters)?);
        Ok(self)
    }

    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.max(1);
        self
    }

    pub fn with_delivery(mut self, delivery: DeliveryPolicy) -> Self {
        self.delivery = delivery;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            alphabet: Arc::new(Alphabet::polish()),
            worker_threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(FALLBACK_WORKER_THREADS),
            delivery: DeliveryPolicy::default(),
            language: Language::default(),
        }
    }
}

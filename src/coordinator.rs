//! Turns input edits into background searches and hands finished results to
//! the display.
//!
//! The coordinator lives on the thread that owns the display. Normalization
//! and the "searching" status happen right there, before any work is handed
//! off. Only the matching pass runs on the worker pool. Workers send their
//! results back over a channel, and the owning thread delivers them to the
//! sink when it calls [`SearchCoordinator::pump`],
//! [`SearchCoordinator::wait_for_results`] or
//! [`SearchCoordinator::wait_until_idle`].
//!
//! Every dispatched search gets a sequence number. Under
//! [`DeliveryPolicy::DiscardStale`] a result older than one already shown
//! (or older than the last clear) is dropped. [`DeliveryPolicy::LastWriterWins`]
//! shows whatever finishes last, even when it belongs to an older edit.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use tracing::{debug, error, warn};

use crate::config::FinderConfig;
use crate::engine::{sort_case_insensitive, MatchEngine};
use crate::error::Result;
use crate::index::WordIndex;
use crate::status::{Language, Status};

/// What the display is told to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub status: Status,
    pub message: &'static str,
    /// Replacement for the word list, or `None` to leave it as it is.
    pub words: Option<Vec<String>>,
    /// The search this update belongs to, if any.
    pub sequence: Option<u64>,
}

/// Receives display updates on the coordinating thread.
pub trait DisplaySink {
    fn show(&mut self, update: DisplayUpdate);
}

impl<F> DisplaySink for F
where
    F: FnMut(DisplayUpdate),
{
    fn show(&mut self, update: DisplayUpdate) {
        self(update)
    }
}

/// Records every update, oldest first.
impl DisplaySink for Vec<DisplayUpdate> {
    fn show(&mut self, update: DisplayUpdate) {
        self.push(update);
    }
}

/// Which finished searches reach the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryPolicy {
    /// Drop results superseded by a newer delivery or a clear.
    #[default]
    DiscardStale,
    /// Deliver every result in completion order.
    LastWriterWins,
}

/// Result of feeding one input edit to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// A search was started.
    Dispatched { sequence: u64 },
    /// The input was empty; the working list was reset and the display cleared.
    Cleared,
    /// The input was refused. The input field should be replaced by
    /// `corrected` with the caret at its end.
    Rejected { corrected: String },
}

struct Completed {
    sequence: u64,
    words: Vec<String>,
}

pub struct SearchCoordinator<S> {
    engine: Arc<MatchEngine>,
    index: Arc<WordIndex>,
    pool: rayon::ThreadPool,
    sink: S,
    sender: Sender<Completed>,
    receiver: Receiver<Completed>,
    language: Language,
    policy: DeliveryPolicy,
    last_dispatched: u64,
    watermark: u64,
    in_flight: usize,
}

impl<S: DisplaySink> SearchCoordinator<S> {
    pub fn new(config: &FinderConfig, index: Arc<WordIndex>, sink: S) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.worker_threads)
            .thread_name(|i| format!("literaki-search-{}", i))
            .panic_handler(|_| error!("search worker panicked"))
            .build()?;
        let (sender, receiver) = unbounded();

        Ok(Self {
            engine: Arc::new(MatchEngine::new(Arc::clone(&config.alphabet))),
            index,
            pool,
            sink,
            sender,
            receiver,
            language: config.language,
            policy: config.delivery,
            last_dispatched: 0,
            watermark: 0,
            in_flight: 0,
        })
    }

    /// Handle an edit of the input field. This is the only way searches start.
    pub fn on_input_changed(&mut self, raw: &str) -> InputOutcome {
        let input = match self.engine.alphabet().normalize(raw) {
            Ok(input) => input,
            Err(err) => {
                warn!(input = raw, error = %err, "input rejected");
                self.show_status(Status::InputWarning, None);
                return InputOutcome::Rejected {
                    corrected: err.corrected().to_string(),
                };
            }
        };

        if input.is_empty() {
            self.clear();
            return InputOutcome::Cleared;
        }

        self.last_dispatched += 1;
        let sequence = self.last_dispatched;
        self.show_status(Status::Searching, Some(sequence));
        self.dispatch(sequence, input);
        InputOutcome::Dispatched { sequence }
    }

    /// Reset the working list and blank the display.
    pub fn clear(&mut self) {
        self.index.reset();
        if self.policy == DeliveryPolicy::DiscardStale {
            self.watermark = self.last_dispatched;
        }
        self.sink.show(DisplayUpdate {
            status: Status::Cleared,
            message: Status::Cleared.message(self.language),
            words: Some(Vec::new()),
            sequence: None,
        });
    }

    /// Deliver every finished search without blocking. Returns how many
    /// results reached the sink.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(completed) = self.receiver.try_recv() {
            if self.deliver(completed) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Block until no search is in flight or `timeout` passes, delivering
    /// results as they arrive. Returns how many results reached the sink.
    pub fn wait_for_results(&mut self, timeout: Duration) -> usize {
        let deadline = Instant::now() + timeout;
        let mut delivered = 0;

        while self.in_flight > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.receiver.recv_timeout(remaining) {
                Ok(completed) => {
                    if self.deliver(completed) {
                        delivered += 1;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    warn!(in_flight = self.in_flight, "timed out waiting for searches");
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        delivered
    }

    /// Block until every dispatched search has come back, delivering results
    /// as they arrive. Searches have no time limit, so neither does this.
    pub fn wait_until_idle(&mut self) -> usize {
        let mut delivered = 0;
        while self.in_flight > 0 {
            match self.receiver.recv() {
                Ok(completed) => {
                    if self.deliver(completed) {
                        delivered += 1;
                    }
                }
                Err(_) => break,
            }
        }
        delivered
    }

    /// Searches dispatched but not yet received back.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn index(&self) -> &Arc<WordIndex> {
        &self.index
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn dispatch(&mut self, sequence: u64, input: String) {
        let engine = Arc::clone(&self.engine);
        let index = Arc::clone(&self.index);
        let sender = self.sender.clone();

        debug!(sequence, input = %input, "dispatching search");
        self.in_flight += 1;
        self.pool.spawn(move || {
            let snapshot = index.snapshot();
            let mut words = engine.find_words(&input, &snapshot);
            sort_case_insensitive(&mut words);
            if sender.send(Completed { sequence, words }).is_err() {
                debug!(sequence, "coordinator gone, dropping result");
            }
        });
    }

    fn deliver(&mut self, completed: Completed) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        let Completed { sequence, words } = completed;
        if self.policy == DeliveryPolicy::DiscardStale {
            if sequence <= self.watermark {
                debug!(sequence, watermark = self.watermark, "discarding stale result");
                return false;
            }
            self.watermark = sequence;
        }

        let status = Status::for_results(&words);
        debug!(sequence, found = words.len(), "delivering result");
        self.sink.show(DisplayUpdate {
            status,
            message: status.message(self.language),
            words: Some(words),
            sequence: Some(sequence),
        });
        true
    }

    fn show_status(&mut self, status: Status, sequence: Option<u64>) {
        self.sink.show(DisplayUpdate {
            status,
            message: status.message(self.language),
            words: None,
            sequence,
        });
    }
}

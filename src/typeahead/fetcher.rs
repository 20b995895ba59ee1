//! Throttled suggestion lookups
//!
//! Keystrokes are fed through a trailing-edge [`Throttle`]; when a window
//! elapses the most recent text is looked up on a spawned task. Results come
//! back over a channel tagged with the commit epoch they were requested
//! under, so the state machine can drop the ones a commit has overtaken.
//! Committing also cancels every task still in flight.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::suggestion::{FieldPath, Suggestion, SuggestionSource, load_suggestions};

use super::state::{CommitEpoch, FetchOutcome};
use super::throttle::Throttle;

/// A lookup waiting for its throttle window to elapse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub text: String,
    pub epoch: CommitEpoch,
}

pub struct SuggestionFetcher {
    source: Arc<dyn SuggestionSource>,
    target: FieldPath,
    min_length: usize,
    throttle: Throttle<PendingLookup>,
    cancel: CancellationToken,
    results_tx: UnboundedSender<FetchOutcome>,
    results_rx: UnboundedReceiver<FetchOutcome>,
}

impl SuggestionFetcher {
    pub fn new(
        source: Arc<dyn SuggestionSource>,
        target: FieldPath,
        min_length: usize,
        window: Duration,
    ) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            source,
            target,
            min_length,
            throttle: Throttle::new(window),
            cancel: CancellationToken::new(),
            results_tx,
            results_rx,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn target(&self) -> &FieldPath {
        &self.target
    }

    /// Queue a lookup for `text`; replaces whatever the open window holds
    pub fn schedule(&mut self, text: String, epoch: CommitEpoch, now: Instant) {
        self.throttle.call(PendingLookup { text, epoch }, now);
    }

    /// When the queued lookup becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }

    /// The queued lookup, if its window has elapsed by `now`
    pub fn poll_due(&mut self, now: Instant) -> Option<PendingLookup> {
        self.throttle.poll(now)
    }

    /// Run a due lookup
    ///
    /// Text shorter than the minimum length never reaches the source and
    /// resolves at once to an empty outcome, returned here. Anything else
    /// runs on a spawned task and arrives later through [`next_result`].
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// [`next_result`]: SuggestionFetcher::next_result
    pub fn start(&self, lookup: PendingLookup) -> Option<FetchOutcome> {
        let PendingLookup { text, epoch } = lookup;

        if text.chars().count() < self.min_length {
            return Some(FetchOutcome {
                epoch,
                text,
                options: Vec::new(),
            });
        }

        let source = Arc::clone(&self.source);
        let target = self.target.clone();
        let token = self.cancel.clone();
        let results_tx = self.results_tx.clone();

        tokio::spawn(async move {
            let lookup = AssertUnwindSafe(load_suggestions(source.as_ref(), &text, &target));
            let result = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    log::debug!("Lookup for '{}' cancelled", text);
                    return;
                }
                result = lookup.catch_unwind() => result,
            };

            // Panicking sources count as failed lookups
            let options = result.unwrap_or_else(|_| {
                log::error!("Suggestion source panicked looking up '{}'", text);
                Vec::new()
            });

            // Receiver gone means the control was dropped
            let _ = results_tx.send(FetchOutcome {
                epoch,
                text,
                options,
            });
        });

        None
    }

    /// Abort every queued and running lookup
    pub fn cancel_in_flight(&mut self) {
        self.throttle.cancel();
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
    }

    /// Wait for the next finished lookup
    pub async fn next_result(&mut self) -> Option<FetchOutcome> {
        self.results_rx.recv().await
    }

    /// A finished lookup, if one is waiting
    pub fn try_next_result(&mut self) -> Option<FetchOutcome> {
        self.results_rx.try_recv().ok()
    }
}

impl Drop for SuggestionFetcher {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for SuggestionFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionFetcher")
            .field("target", &self.target)
            .field("min_length", &self.min_length)
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}

/// One unthrottled lookup, as the control would run it
///
/// Used by the command line `--query` mode.
pub async fn lookup_once(
    source: &dyn SuggestionSource,
    text: &str,
    target: &FieldPath,
    min_length: usize,
) -> Vec<Suggestion> {
    if text.chars().count() < min_length {
        return Vec::new();
    }
    load_suggestions(source, text, target).await
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;

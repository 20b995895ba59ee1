//! The typeahead control
//!
//! [`Typeahead`] is the composition root: the renderer feeds it text edits,
//! keys, pointer and focus events; it drives the [`InteractionStateMachine`]
//! and the [`SuggestionFetcher`] and reports commits to a
//! [`TypeaheadListener`]. The control never owns the committed value; the
//! host hands it back through [`Typeahead::set_value`].

mod fetcher;
mod keys;
mod policy;
mod state;
mod throttle;

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crate::suggestion::{FieldPath, Suggestion, SuggestionSource};

pub use fetcher::{PendingLookup, SuggestionFetcher, lookup_once};
pub use keys::{KeyDisposition, TypeaheadKey};
pub use policy::{SelectionPolicy, allow_commit};
pub use state::{CommitEpoch, FetchOutcome, InteractionStateMachine, KeyOutcome, Menu, Mode};
pub use throttle::{THROTTLE_WINDOW, Throttle};

/// Minimum text length before the source is consulted
pub const DEFAULT_MIN_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeaheadOptions {
    pub min_length_for_suggestions: usize,
    pub enforce_list_only_selection: bool,
    pub throttle_window: Duration,
}

impl Default for TypeaheadOptions {
    fn default() -> Self {
        Self {
            min_length_for_suggestions: DEFAULT_MIN_LENGTH,
            enforce_list_only_selection: false,
            throttle_window: THROTTLE_WINDOW,
        }
    }
}

/// Callbacks as plain values, for listeners backed by a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeaheadEvent {
    Change(String),
    InputChange(String),
    Blur,
}

/// Receives what the control reports to its host
pub trait TypeaheadListener {
    /// A value was committed
    fn on_change(&mut self, value: &str);

    /// The user edited the text
    fn on_input_change(&mut self, _text: &str) {}

    /// Focus left the control
    fn on_blur(&mut self) {}
}

// Sends fail only once the host dropped its receiver; nothing is left to notify
impl TypeaheadListener for Sender<TypeaheadEvent> {
    fn on_change(&mut self, value: &str) {
        let _ = self.send(TypeaheadEvent::Change(value.to_string()));
    }

    fn on_input_change(&mut self, text: &str) {
        let _ = self.send(TypeaheadEvent::InputChange(text.to_string()));
    }

    fn on_blur(&mut self) {
        let _ = self.send(TypeaheadEvent::Blur);
    }
}

#[derive(Debug)]
pub struct Typeahead<L> {
    /// Last value handed in by the host
    value: String,
    machine: InteractionStateMachine,
    fetcher: SuggestionFetcher,
    listener: L,
}

impl<L: TypeaheadListener> Typeahead<L> {
    pub fn new(
        value: impl Into<String>,
        source: Arc<dyn SuggestionSource>,
        target_prop: FieldPath,
        listener: L,
        options: TypeaheadOptions,
    ) -> Self {
        let value = value.into();
        let policy = SelectionPolicy::from_enforce_flag(options.enforce_list_only_selection);
        Self {
            machine: InteractionStateMachine::new(value.clone(), policy),
            fetcher: SuggestionFetcher::new(
                source,
                target_prop,
                options.min_length_for_suggestions,
                options.throttle_window,
            ),
            value,
            listener,
        }
    }

    /// The host's value changed
    ///
    /// Overwrites the text only when it differs from the last value seen.
    /// Menu and loading state are left alone and no lookup is scheduled.
    pub fn set_value(&mut self, value: &str) {
        if value == self.value {
            return;
        }
        self.value = value.to_string();
        self.machine.resync(value);
    }

    /// The user edited the text at `now`
    pub fn input_changed(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        let epoch = self.machine.input_changed(text.clone());
        self.listener.on_input_change(&text);
        self.fetcher.schedule(text, epoch, now);
    }

    /// A key was pressed while the control had focus
    pub fn key_down(&mut self, key: TypeaheadKey) -> KeyDisposition {
        let KeyOutcome {
            disposition,
            change,
        } = self.machine.key_down(key);

        if disposition == KeyDisposition::Committed {
            self.fetcher.cancel_in_flight();
        }
        if let Some(value) = change {
            self.listener.on_change(&value);
        }
        disposition
    }

    /// Choose the option at `index`; returns whether it was committed
    pub fn select_option(&mut self, index: usize) -> bool {
        match self.machine.select(index) {
            Some(value) => {
                self.fetcher.cancel_in_flight();
                self.listener.on_change(&value);
                true
            }
            None => false,
        }
    }

    /// Choose the highlighted option; returns whether it was committed
    pub fn select_highlighted(&mut self) -> bool {
        match self.machine.highlighted() {
            Some(index) => self.select_option(index),
            None => false,
        }
    }

    pub fn highlight(&mut self, index: usize) {
        self.machine.highlight(index);
    }

    pub fn menu_hovered(&mut self) {
        self.machine.menu_hovered();
    }

    /// Focus left the control
    pub fn blur(&mut self) {
        let change = self.machine.blur();
        self.fetcher.cancel_in_flight();
        if let Some(value) = change {
            self.listener.on_change(&value);
        }
        self.listener.on_blur();
    }

    /// Clear the text, committing the empty string
    pub fn clear(&mut self) {
        let value = self.machine.clear();
        self.fetcher.cancel_in_flight();
        self.listener.on_change(&value);
    }

    /// Fire the throttled lookup if its window has elapsed by `now`
    ///
    /// Returns whether a lookup was started.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(lookup) = self.fetcher.poll_due(now) else {
            return false;
        };
        if !self.machine.begin_fetch(lookup.epoch) {
            return false;
        }

        log::debug!("Looking up suggestions for '{}'", lookup.text);
        if let Some(outcome) = self.fetcher.start(lookup) {
            self.machine.apply_fetch(outcome);
        }
        true
    }

    /// When [`tick`](Typeahead::tick) next has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.fetcher.next_deadline()
    }

    /// Wait for the next finished lookup
    ///
    /// The result is not applied; pass it to
    /// [`apply_fetch_result`](Typeahead::apply_fetch_result).
    pub async fn next_fetch_result(&mut self) -> Option<FetchOutcome> {
        self.fetcher.next_result().await
    }

    /// Apply a finished lookup; returns false when a commit made it stale
    pub fn apply_fetch_result(&mut self, outcome: FetchOutcome) -> bool {
        self.machine.apply_fetch(outcome)
    }

    /// Apply every finished lookup that is waiting; returns how many applied
    pub fn poll_fetch_results(&mut self) -> usize {
        let mut applied = 0;
        while let Some(outcome) = self.fetcher.try_next_result() {
            if self.machine.apply_fetch(outcome) {
                applied += 1;
            }
        }
        applied
    }
}

impl<L> Typeahead<L> {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn text(&self) -> &str {
        self.machine.text()
    }

    pub fn options(&self) -> &[Suggestion] {
        self.machine.options()
    }

    pub fn is_loading(&self) -> bool {
        self.machine.is_loading()
    }

    pub fn is_menu_open(&self) -> bool {
        self.machine.is_menu_open()
    }

    pub fn is_menu_focused(&self) -> bool {
        self.machine.is_menu_focused()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.machine.highlighted()
    }

    pub fn min_length(&self) -> usize {
        self.fetcher.min_length()
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.machine.policy()
    }

    pub fn state(&self) -> &InteractionStateMachine {
        &self.machine
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}

#[cfg(test)]
#[path = "typeahead_tests.rs"]
mod typeahead_tests;

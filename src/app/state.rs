use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::suggestion::{FieldPath, SuggestionSource};
use crate::typeahead::{SelectionPolicy, Typeahead, TypeaheadEvent, TypeaheadOptions};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Values,
}

/// Application state
///
/// Plays the host of the typeahead: committed values are collected into a
/// list, and the input is handed back an empty value after each addition.
pub struct App {
    pub typeahead: Typeahead<Sender<TypeaheadEvent>>,
    events: Receiver<TypeaheadEvent>,
    pub values: Vec<String>,
    pub selected_value: usize,
    pub focus: Focus,
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        source: Arc<dyn SuggestionSource>,
        target_prop: FieldPath,
        options: TypeaheadOptions,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            typeahead: Typeahead::new("", source, target_prop, tx, options),
            events: rx,
            values: Vec::new(),
            selected_value: 0,
            focus: Focus::Input,
            status: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Add a committed value unless it is empty or already present
    ///
    /// Returns whether the value was added.
    pub fn add_value(&mut self, value: &str) -> bool {
        if value.is_empty() || self.values.iter().any(|v| v == value) {
            return false;
        }
        self.values.push(value.to_string());
        self.typeahead.set_value("");
        true
    }

    pub fn remove_selected_value(&mut self) -> Option<String> {
        if self.selected_value >= self.values.len() {
            return None;
        }
        let removed = self.values.remove(self.selected_value);
        self.selected_value = self.selected_value.min(self.values.len().saturating_sub(1));
        Some(removed)
    }

    /// Handle everything the typeahead reported since the last call
    ///
    /// Returns whether a value was committed.
    pub fn process_typeahead_events(&mut self) -> bool {
        let mut committed = false;
        while let Ok(event) = self.events.try_recv() {
            match event {
                TypeaheadEvent::InputChange(text) => self.typeahead.set_value(&text),
                TypeaheadEvent::Change(value) => {
                    committed = true;
                    if self.add_value(&value) {
                        log::debug!("Added value '{}'", value);
                        self.set_status(format!("Added \"{}\"", value));
                    }
                }
                TypeaheadEvent::Blur => log::debug!("Typeahead lost focus"),
            }
        }
        committed
    }

    /// Note a commit the selection policy refused
    pub(crate) fn report_rejected_commit(&mut self) {
        if self.typeahead.policy() == SelectionPolicy::ListOnly && !self.typeahead.text().is_empty() {
            self.set_status(format!(
                "\"{}\" is not in the list",
                self.typeahead.text()
            ));
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

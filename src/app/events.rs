use std::time::Instant;

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Focus};
use crate::typeahead::{KeyDisposition, TypeaheadKey};

impl App {
    /// Handle one terminal event received at `now`
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event, now);
            }
            Event::FocusLost if self.focus == Focus::Input => self.blur_input(),
            _ => {}
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key, now),
            Focus::Values => self.handle_values_key(key),
        }
        self.process_typeahead_events();
    }

    /// Handle keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Ctrl+C: Exit application
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        // Ctrl+U: Clear the input, committing the empty string
        if ctrl && key.code == KeyCode::Char('u') {
            self.typeahead.clear();
            self.process_typeahead_events();
            return true;
        }

        // Tab / Shift+Tab: Move focus between the input and the value list
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            match self.focus {
                Focus::Input => self.blur_input(),
                Focus::Values => self.focus = Focus::Input,
            }
            return true;
        }

        false
    }

    fn handle_input_key(&mut self, key: KeyEvent, now: Instant) {
        let typeahead_key = match key.code {
            KeyCode::Enter => TypeaheadKey::Enter,
            KeyCode::Esc => TypeaheadKey::Escape,
            KeyCode::Down => TypeaheadKey::ArrowDown,
            KeyCode::Up => TypeaheadKey::ArrowUp,
            KeyCode::Backspace => TypeaheadKey::Backspace,
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = self.typeahead.text().to_string();
                text.push(c);
                self.typeahead.input_changed(text, now);
                return;
            }
            _ => TypeaheadKey::Other,
        };

        match self.typeahead.key_down(typeahead_key) {
            KeyDisposition::Committed => {
                if !self.process_typeahead_events() {
                    self.report_rejected_commit();
                }
            }
            KeyDisposition::Prevented => {}
            KeyDisposition::Default => self.fall_through(typeahead_key, now),
        }
    }

    /// Default action for keys the typeahead didn't intercept
    fn fall_through(&mut self, key: TypeaheadKey, now: Instant) {
        match key {
            // Enter on the menu chooses the highlighted option
            TypeaheadKey::Enter if self.typeahead.is_menu_focused() => {
                self.typeahead.select_highlighted();
            }
            // Escape on the menu leaves the input
            TypeaheadKey::Escape if self.typeahead.is_menu_focused() => self.blur_input(),
            TypeaheadKey::Backspace => {
                let mut text = self.typeahead.text().to_string();
                text.pop();
                self.typeahead.input_changed(text, now);
            }
            _ => {}
        }
    }

    fn handle_values_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_value + 1 < self.values.len() {
                    self.selected_value += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_value = self.selected_value.saturating_sub(1);
            }
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                if let Some(removed) = self.remove_selected_value() {
                    self.set_status(format!("Removed \"{}\"", removed));
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn blur_input(&mut self) {
        self.typeahead.blur();
        self.focus = Focus::Values;
        self.process_typeahead_events();
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;

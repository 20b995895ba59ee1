//! Interaction state machine
//!
//! Owns the typed text, the suggestion menu and the commit epoch. Every
//! mutation goes through one of the transition methods below; the control
//! forwards what they return to its listener and fetcher.

use crate::suggestion::Suggestion;

use super::keys::{KeyDisposition, TypeaheadKey};
use super::policy::SelectionPolicy;

/// Count of commits made by one control
///
/// Lookups capture the epoch current when they are requested and are only
/// applied while it is unchanged, so anything requested before a commit is
/// discarded once that commit happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CommitEpoch(u64);

impl CommitEpoch {
    fn next(self) -> Self {
        CommitEpoch(self.0.wrapping_add(1))
    }
}

/// Whether keyboard focus is in the text or in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Editing,
    Navigating { highlighted: usize },
}

/// Suggestion menu visibility and loading state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    #[default]
    Closed,
    /// Open with a loading affordance while lookups are outstanding
    Loading { outstanding: u32 },
    /// Open showing the loaded options, possibly none
    Ready,
}

/// Result of a lookup, tagged with the epoch it was requested under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub epoch: CommitEpoch,
    pub text: String,
    pub options: Vec<Suggestion>,
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub disposition: KeyDisposition,
    /// Value to hand to `on_change`, when the key committed an allowed value
    pub change: Option<String>,
}

impl KeyOutcome {
    fn new(disposition: KeyDisposition) -> Self {
        Self {
            disposition,
            change: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InteractionStateMachine {
    text: String,
    mode: Mode,
    menu: Menu,
    options: Vec<Suggestion>,
    epoch: CommitEpoch,
    policy: SelectionPolicy,
}

impl InteractionStateMachine {
    pub fn new(initial_text: impl Into<String>, policy: SelectionPolicy) -> Self {
        Self {
            text: initial_text.into(),
            mode: Mode::Editing,
            menu: Menu::Closed,
            options: Vec::new(),
            epoch: CommitEpoch::default(),
            policy,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[Suggestion] {
        &self.options
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn menu(&self) -> Menu {
        self.menu
    }

    pub fn epoch(&self) -> CommitEpoch {
        self.epoch
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.menu, Menu::Loading { .. })
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu != Menu::Closed
    }

    pub fn is_menu_focused(&self) -> bool {
        matches!(self.mode, Mode::Navigating { .. })
    }

    /// Highlighted option index; only meaningful while navigating
    pub fn highlighted(&self) -> Option<usize> {
        match self.mode {
            Mode::Navigating { highlighted } if highlighted < self.options.len() => Some(highlighted),
            _ => None,
        }
    }

    /// The user edited the text
    ///
    /// Returns the epoch a lookup for the new text must be requested under.
    pub fn input_changed(&mut self, text: String) -> CommitEpoch {
        self.mode = Mode::Editing;
        self.text = text;
        self.epoch
    }

    pub fn key_down(&mut self, key: TypeaheadKey) -> KeyOutcome {
        match (key, self.mode) {
            (TypeaheadKey::Enter | TypeaheadKey::Escape, Mode::Editing) => KeyOutcome {
                disposition: KeyDisposition::Committed,
                change: self.commit_text(),
            },
            (TypeaheadKey::ArrowDown, Mode::Editing) => {
                self.mode = Mode::Navigating { highlighted: 0 };
                KeyOutcome::new(KeyDisposition::Prevented)
            }
            (TypeaheadKey::ArrowDown, Mode::Navigating { highlighted }) => {
                let count = self.options.len();
                if count > 0 {
                    self.mode = Mode::Navigating {
                        highlighted: (highlighted + 1) % count,
                    };
                }
                KeyOutcome::new(KeyDisposition::Prevented)
            }
            (TypeaheadKey::ArrowUp, Mode::Navigating { highlighted }) => {
                let count = self.options.len();
                if count > 0 {
                    let previous = if highlighted == 0 || highlighted >= count {
                        count - 1
                    } else {
                        highlighted - 1
                    };
                    self.mode = Mode::Navigating {
                        highlighted: previous,
                    };
                }
                KeyOutcome::new(KeyDisposition::Prevented)
            }
            (TypeaheadKey::Backspace, _) if self.text.is_empty() => {
                KeyOutcome::new(KeyDisposition::Prevented)
            }
            _ => KeyOutcome::new(KeyDisposition::Default),
        }
    }

    /// Choose the option at `index` from the menu
    ///
    /// Only honored while navigating an open menu, with no lookup
    /// outstanding and an option at that index. Returns the committed value.
    pub fn select(&mut self, index: usize) -> Option<String> {
        if !self.is_menu_open() || !self.is_menu_focused() || self.is_loading() {
            return None;
        }
        let value = self.options.get(index)?.value.clone();
        self.end_interaction();
        self.text = value.clone();
        Some(value)
    }

    pub fn select_highlighted(&mut self) -> Option<String> {
        let index = self.highlighted()?;
        self.select(index)
    }

    /// Move the highlight, e.g. when the pointer moves over an option
    pub fn highlight(&mut self, index: usize) {
        if self.is_menu_focused() && index < self.options.len() {
            self.mode = Mode::Navigating { highlighted: index };
        }
    }

    /// The pointer entered the open menu
    pub fn menu_hovered(&mut self) {
        if self.is_menu_open() && self.mode == Mode::Editing {
            self.mode = Mode::Navigating { highlighted: 0 };
        }
    }

    /// Focus left the control; commits like Enter does while editing
    pub fn blur(&mut self) -> Option<String> {
        self.commit_text()
    }

    /// Explicit clear: always commits the empty string
    pub fn clear(&mut self) -> String {
        self.end_interaction();
        self.text.clear();
        self.options.clear();
        String::new()
    }

    /// The authoritative external value changed
    pub fn resync(&mut self, value: &str) {
        self.text = value.to_string();
    }

    /// A throttled lookup requested under `epoch` is about to start
    ///
    /// Returns false when a commit happened since, in which case nothing
    /// changes and the lookup must not run.
    pub fn begin_fetch(&mut self, epoch: CommitEpoch) -> bool {
        if epoch != self.epoch {
            log::debug!("Skipping lookup requested before the last commit");
            return false;
        }
        self.menu = match self.menu {
            Menu::Loading { outstanding } => Menu::Loading {
                outstanding: outstanding.saturating_add(1),
            },
            Menu::Closed | Menu::Ready => Menu::Loading { outstanding: 1 },
        };
        true
    }

    /// Apply a resolved lookup; stale results are dropped untouched
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.epoch != self.epoch {
            log::debug!(
                "Discarding {} stale suggestions for '{}'",
                outcome.options.len(),
                outcome.text
            );
            return false;
        }

        self.options = outcome.options;
        self.menu = match self.menu {
            Menu::Loading { outstanding } if outstanding > 1 => Menu::Loading {
                outstanding: outstanding - 1,
            },
            _ => Menu::Ready,
        };
        if let Mode::Navigating { highlighted } = self.mode
            && highlighted >= self.options.len()
        {
            self.mode = Mode::Navigating { highlighted: 0 };
        }
        true
    }

    fn commit_text(&mut self) -> Option<String> {
        self.end_interaction();
        self.policy
            .allows(&self.text, &self.options)
            .then(|| self.text.clone())
    }

    fn end_interaction(&mut self) {
        self.epoch = self.epoch.next();
        self.mode = Mode::Editing;
        self.menu = Menu::Closed;
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

//! Commit policy for typed text

use crate::suggestion::Suggestion;

/// Whether typed text may be committed as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Any text may be committed
    #[default]
    FreeText,
    /// Only text equal to a loaded suggestion's value may be committed
    ListOnly,
}

impl SelectionPolicy {
    pub fn from_enforce_flag(enforce_list_only_selection: bool) -> Self {
        if enforce_list_only_selection {
            SelectionPolicy::ListOnly
        } else {
            SelectionPolicy::FreeText
        }
    }

    pub fn allows(self, text: &str, options: &[Suggestion]) -> bool {
        allow_commit(text, options, self == SelectionPolicy::ListOnly)
    }
}

/// Decide whether committing `text` notifies the caller
///
/// A rejected commit is silent: the caller is not notified and the typed
/// text is left untouched.
pub fn allow_commit(text: &str, options: &[Suggestion], enforce_list_only_selection: bool) -> bool {
    !enforce_list_only_selection || options.iter().any(|option| option.value == text)
}

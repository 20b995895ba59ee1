//! Suggestion values and the sources that produce them

mod catalog;
mod field_path;
mod loader;
mod source;

pub use catalog::{CatalogSource, MatchMode};
pub use field_path::FieldPath;
pub use loader::{MAX_SUGGESTIONS, build_suggestions, load_suggestions};
pub use source::{SourceError, SuggestionPage, SuggestionSource};

/// A candidate value offered by the suggestion menu
///
/// The label is what the menu displays; it always mirrors the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub label: String,
}

impl Suggestion {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

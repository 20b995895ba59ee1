//! Typeahead input control core.
//!
//! The [`typeahead::Typeahead`] control reconciles free-text editing with
//! throttled asynchronous suggestion lookups, keyboard menu navigation and an
//! optional list-only selection policy. Lookups that resolve after the user
//! has committed a value are discarded, so the last commit always wins.
//!
//! The remaining modules back the `typeahead` terminal demo: a record catalog
//! served as a suggestion source, configuration, logging and rendering.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod suggestion;
pub mod typeahead;
pub mod widgets;

mod test_utils;

pub use error::TypeaheadError;
pub use suggestion::{FieldPath, SourceError, Suggestion, SuggestionPage, SuggestionSource};
pub use typeahead::{
    KeyDisposition, Typeahead, TypeaheadEvent, TypeaheadKey, TypeaheadListener, TypeaheadOptions,
};

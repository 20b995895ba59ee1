//! Turning one lookup into menu suggestions

use serde_json::Value;

use super::{FieldPath, Suggestion, SuggestionSource};

/// Records beyond this count are ignored
pub const MAX_SUGGESTIONS: usize = 100;

/// Run one lookup for `text` and build its suggestions
///
/// A failing source never surfaces to the caller: the error goes to the log
/// and the lookup resolves to an empty list.
pub async fn load_suggestions(
    source: &dyn SuggestionSource,
    text: &str,
    target: &FieldPath,
) -> Vec<Suggestion> {
    match source.fetch(text).await {
        Ok(page) => build_suggestions(&page.data, text, target),
        Err(e) => {
            log::error!("Suggestion lookup for '{}' failed: {}", text, e);
            log::warn!("could not get suggestions");
            Vec::new()
        }
    }
}

/// Map raw records through `target`, keeping at most [`MAX_SUGGESTIONS`]
///
/// Suggestions whose value equals `text` exactly are moved to the front;
/// everything else keeps the order the source returned.
pub fn build_suggestions(records: &[Value], text: &str, target: &FieldPath) -> Vec<Suggestion> {
    let (exact, rest): (Vec<Suggestion>, Vec<Suggestion>) = records
        .iter()
        .take(MAX_SUGGESTIONS)
        .map(|record| Suggestion::new(target.extract(record)))
        .partition(|suggestion| suggestion.value == text);

    exact.into_iter().chain(rest).collect()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;

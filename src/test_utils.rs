#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::sync::{Arc, Mutex};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::{Value, json};
    use tokio::sync::Semaphore;

    use crate::app::App;
    use crate::suggestion::{FieldPath, SourceError, SuggestionPage, SuggestionSource};
    use crate::typeahead::{Typeahead, TypeaheadEvent, TypeaheadOptions};

    /// Records shaped like the skills catalog: `{"name": ...}`
    pub fn named_records(names: &[&str]) -> Vec<Value> {
        names.iter().map(|name| json!({ "name": name })).collect()
    }

    pub fn name_path() -> FieldPath {
        FieldPath::parse("name").unwrap()
    }

    /// Source that returns the same records for every lookup
    pub fn static_source(records: Vec<Value>) -> Arc<dyn SuggestionSource> {
        Arc::new(move |_text: String| {
            let data = records.clone();
            async move { Ok::<_, SourceError>(SuggestionPage::new(data)) }
        })
    }

    /// Source that records the text of every lookup it receives
    pub fn counting_source(records: Vec<Value>) -> (Arc<dyn SuggestionSource>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&calls);
        let source = move |text: String| {
            seen.lock().unwrap().push(text);
            let data = records.clone();
            async move { Ok::<_, SourceError>(SuggestionPage::new(data)) }
        };
        (Arc::new(source), calls)
    }

    /// Source whose lookups only resolve once the test adds a permit
    pub fn gated_source(records: Vec<Value>) -> (Arc<dyn SuggestionSource>, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let permits = Arc::clone(&gate);
        let source = move |_text: String| {
            let data = records.clone();
            let gate = Arc::clone(&permits);
            async move {
                let _permit = gate
                    .acquire_owned()
                    .await
                    .map_err(|e| SourceError::Unavailable(e.to_string()))?;
                Ok::<_, SourceError>(SuggestionPage::new(data))
            }
        };
        (Arc::new(source), gate)
    }

    /// Source that always fails
    pub fn failing_source() -> Arc<dyn SuggestionSource> {
        Arc::new(|_text: String| async {
            Err::<SuggestionPage, _>(SourceError::Unavailable("connection refused".to_string()))
        })
    }

    /// Source whose lookups panic
    pub fn panicking_source() -> Arc<dyn SuggestionSource> {
        Arc::new(|text: String| async move {
            if !text.is_empty() {
                panic!("catalog lookup for '{}' panicked", text);
            }
            Ok::<_, SourceError>(SuggestionPage::default())
        })
    }

    /// Control wired to a channel listener
    pub fn test_typeahead(
        source: Arc<dyn SuggestionSource>,
        options: TypeaheadOptions,
    ) -> (Typeahead<Sender<TypeaheadEvent>>, Receiver<TypeaheadEvent>) {
        let (tx, rx) = mpsc::channel();
        let typeahead = Typeahead::new("", source, name_path(), tx, options);
        (typeahead, rx)
    }

    /// Every event the control has emitted so far
    pub fn drain(rx: &Receiver<TypeaheadEvent>) -> Vec<TypeaheadEvent> {
        rx.try_iter().collect()
    }

    /// Demo app over a static catalog of named records
    pub fn test_app(names: &[&str], options: TypeaheadOptions) -> App {
        App::new(static_source(named_records(names)), name_path(), options)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}

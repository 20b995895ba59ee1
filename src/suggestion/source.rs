//! Suggestion source abstraction
//!
//! A source is the remote lookup behind the control: given the current text
//! it resolves a page of raw JSON records. Any `Fn(String) -> Future` closure
//! with the right output is a source.

use std::future::Future;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// One page of raw records returned by a lookup
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SuggestionPage {
    #[serde(default)]
    pub data: Vec<Value>,
}

impl SuggestionPage {
    pub fn new(data: Vec<Value>) -> Self {
        Self { data }
    }

    /// Decode a response body shaped `{"data": [...]}`
    pub fn from_json(body: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Errors a lookup can fail with
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing service could not be reached or refused the request
    #[error("Suggestion source unavailable: {0}")]
    Unavailable(String),

    /// The response could not be decoded into a page
    #[error("Malformed suggestion response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Asynchronous lookup of raw suggestion records
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(&self, text: &str) -> BoxFuture<'static, Result<SuggestionPage, SourceError>>;
}

impl<F, Fut> SuggestionSource for F
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<SuggestionPage, SourceError>> + Send + 'static,
{
    fn fetch(&self, text: &str) -> BoxFuture<'static, Result<SuggestionPage, SourceError>> {
        (self)(text.to_string()).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_from_json() {
        let page = SuggestionPage::from_json(r#"{"data": [{"name": "Go"}], "total": 1}"#).unwrap();
        assert_eq!(page.data, vec![json!({"name": "Go"})]);
    }

    #[test]
    fn test_page_without_data_is_empty() {
        assert!(SuggestionPage::from_json("{}").unwrap().data.is_empty());
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        let err = SuggestionPage::from_json("{\"data\": 3}").unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
        assert!(err.to_string().starts_with("Malformed suggestion response"));
    }

    #[tokio::test]
    async fn test_closure_is_a_source() {
        let source = |text: String| async move {
            SuggestionPage::from_json(&format!(r#"{{"data": [{{"name": "{}"}}]}}"#, text))
        };

        let page = source.fetch("Rust").await.unwrap();
        assert_eq!(page.data, vec![json!({"name": "Rust"})]);
    }
}

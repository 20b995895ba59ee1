//! In-memory suggestion source over a catalog of JSON records
//!
//! Serves the demo the way a search endpoint would: the whole catalog is
//! held once and every lookup filters it by the target field.

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Deserialize;
use serde_json::Value;

use super::{FieldPath, SourceError, SuggestionPage, SuggestionSource};

/// How catalog records are matched against the lookup text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Case-insensitive substring match, catalog order preserved
    #[default]
    Substring,
    /// fzf-style fuzzy match, best score first
    Fuzzy,
}

#[derive(Debug, Clone)]
pub struct CatalogSource {
    records: Arc<Vec<Value>>,
    target: FieldPath,
    mode: MatchMode,
    latency: Option<Duration>,
}

impl CatalogSource {
    pub fn new(records: Vec<Value>, target: FieldPath) -> Self {
        Self {
            records: Arc::new(records),
            target,
            mode: MatchMode::default(),
            latency: None,
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Delay every lookup, simulating a remote round trip
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `text`, in the order a lookup returns them
    pub fn matching(&self, text: &str) -> Vec<Value> {
        match self.mode {
            MatchMode::Substring => {
                let needle = text.to_lowercase();
                self.records
                    .iter()
                    .filter(|record| self.target.extract(record).to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            MatchMode::Fuzzy => {
                let matcher = SkimMatcherV2::default();
                let mut scored: Vec<(i64, &Value)> = self
                    .records
                    .iter()
                    .filter_map(|record| {
                        matcher
                            .fuzzy_match(&self.target.extract(record), text)
                            .map(|score| (score, record))
                    })
                    .collect();

                // Stable sort keeps catalog order among equal scores
                scored.sort_by(|a, b| b.0.cmp(&a.0));
                scored.into_iter().map(|(_, record)| record.clone()).collect()
            }
        }
    }
}

impl SuggestionSource for CatalogSource {
    fn fetch(&self, text: &str) -> BoxFuture<'static, Result<SuggestionPage, SourceError>> {
        let catalog = self.clone();
        let text = text.to_string();
        async move {
            if let Some(latency) = catalog.latency {
                tokio::time::sleep(latency).await;
            }
            let data = catalog.matching(&text);
            log::debug!("Catalog lookup '{}' matched {} records", text, data.len());
            Ok::<_, SourceError>(SuggestionPage::new(data))
        }
        .boxed()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;

// Configuration type definitions

use serde::Deserialize;

use crate::suggestion::MatchMode;
use crate::typeahead::DEFAULT_MIN_LENGTH;

/// Field read from each record when none is configured
pub const DEFAULT_TARGET_PROP: &str = "name";

/// Suggestion lookup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_target_prop")]
    pub target_prop: String,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_target_prop() -> String {
    DEFAULT_TARGET_PROP.to_string()
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            min_length: default_min_length(),
            target_prop: default_target_prop(),
        }
    }
}

/// Commit policy configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct SelectionConfig {
    #[serde(default)]
    pub enforce_list_only: bool,
}

/// Demo catalog configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
    /// Simulated lookup latency; 0 disables it
    #[serde(default)]
    pub latency_ms: u64,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

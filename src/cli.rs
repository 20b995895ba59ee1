//! Command line arguments for the demo binary

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use serde_json::Value;

use crate::config::Config;
use crate::error::TypeaheadError;
use crate::suggestion::{CatalogSource, FieldPath, MatchMode};
use crate::typeahead::TypeaheadOptions;

#[derive(Debug, Parser)]
#[command(name = "typeahead")]
#[command(about = "Interactive typeahead over a JSON record catalog", long_about = None)]
#[command(version)]
pub struct Args {
    /// JSON catalog: an array of records or an object with a "data" array.
    /// Read from stdin when omitted.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Field path of the value to suggest, e.g. `name` or `skill.label`
    #[arg(short, long)]
    pub target_prop: Option<String>,

    /// Minimum number of characters before suggestions are looked up
    #[arg(short, long)]
    pub min_length: Option<usize>,

    /// Only commit text that matches a suggestion exactly
    #[arg(short, long)]
    pub enforce_list_only: bool,

    /// Match records fuzzily instead of by substring
    #[arg(long)]
    pub fuzzy: bool,

    /// Simulated lookup latency in milliseconds
    #[arg(long)]
    pub latency_ms: Option<u64>,

    /// Print the suggestions for TEXT and exit
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Config file to use instead of ~/.config/typeahead/config.toml
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

/// Effective settings: flags override the config file
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub target_prop: FieldPath,
    pub options: TypeaheadOptions,
    pub match_mode: MatchMode,
    pub latency: Duration,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, TypeaheadError> {
        let target_prop = args
            .target_prop
            .as_deref()
            .unwrap_or(&config.suggestions.target_prop);

        let match_mode = if args.fuzzy {
            MatchMode::Fuzzy
        } else {
            config.catalog.match_mode
        };

        Ok(Settings {
            target_prop: FieldPath::parse(target_prop)?,
            options: TypeaheadOptions {
                min_length_for_suggestions: args
                    .min_length
                    .unwrap_or(config.suggestions.min_length),
                enforce_list_only_selection: args.enforce_list_only
                    || config.selection.enforce_list_only,
                ..TypeaheadOptions::default()
            },
            match_mode,
            latency: Duration::from_millis(args.latency_ms.unwrap_or(config.catalog.latency_ms)),
        })
    }

    /// Catalog source over `records` configured by these settings
    pub fn catalog_source(&self, records: Vec<Value>) -> CatalogSource {
        CatalogSource::new(records, self.target_prop.clone())
            .with_mode(self.match_mode)
            .with_latency(self.latency)
    }
}

use thiserror::Error;

/// Custom error types for typeahead
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeaheadError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Record catalog must be a JSON array or an object with a \"data\" array")]
    InvalidCatalog,

    #[error("Invalid target path '{path}': {reason}")]
    InvalidTargetPath { path: String, reason: String },

    #[error("Invalid config file {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TypeaheadError {
    fn from(err: std::io::Error) -> Self {
        TypeaheadError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;

use crate::error::TypeaheadError;
use serde_json::Value;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read the record catalog from stdin or a file
pub struct RecordReader;

impl RecordReader {
    /// Read catalog records from a file path, or stdin when `path` is None
    ///
    /// # Returns
    /// * `Ok(Vec<Value>)` - The catalog records
    /// * `Err(TypeaheadError)` - If the input is not a valid catalog or IO fails
    pub fn read_records(path: Option<&Path>) -> Result<Vec<Value>, TypeaheadError> {
        let json_str = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        Self::parse_records(&json_str)
    }

    /// Parse a catalog: a JSON array, or an object with a `data` array
    ///
    /// The second form is the page shape a suggestion source returns.
    pub fn parse_records(json_str: &str) -> Result<Vec<Value>, TypeaheadError> {
        let value = serde_json::from_str::<Value>(json_str)
            .map_err(|e| TypeaheadError::InvalidJson(e.to_string()))?;

        match value {
            Value::Array(records) => Ok(records),
            Value::Object(mut object) => match object.remove("data") {
                Some(Value::Array(records)) => Ok(records),
                _ => Err(TypeaheadError::InvalidCatalog),
            },
            _ => Err(TypeaheadError::InvalidCatalog),
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;

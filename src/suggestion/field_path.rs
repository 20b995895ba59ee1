//! Field paths into raw suggestion records
//!
//! A path such as `skill.name`, `tags[0].label` or `meta["display.name"]`
//! selects the value a record contributes to the suggestion menu. Numeric
//! segments index into arrays, so `tags.0` and `tags[0]` are equivalent.

use std::fmt;

use serde_json::Value;

use crate::error::TypeaheadError;

/// Parsed field path applied to every raw record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted/bracketed path
    pub fn parse(path: &str) -> Result<Self, TypeaheadError> {
        if path.trim().is_empty() {
            return Err(invalid(path, "path is empty"));
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        // Set right after a closing bracket so "a[0].b" doesn't produce an empty segment
        let mut after_bracket = false;
        let mut chars = path.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '.' => {
                    if !after_bracket {
                        segments.push(std::mem::take(&mut current));
                    }
                    after_bracket = false;
                }
                '[' => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                    let mut segment = String::new();
                    match chars.peek().copied() {
                        Some(quote @ ('"' | '\'')) => {
                            chars.next();
                            loop {
                                match chars.next() {
                                    Some(c) if c == quote => break,
                                    Some(c) => segment.push(c),
                                    None => return Err(invalid(path, "unterminated quote")),
                                }
                            }
                            if chars.next() != Some(']') {
                                return Err(invalid(path, "expected ']' after quoted key"));
                            }
                        }
                        _ => loop {
                            match chars.next() {
                                Some(']') => break,
                                Some(c) => segment.push(c),
                                None => return Err(invalid(path, "unterminated bracket")),
                            }
                        },
                    }
                    segments.push(segment.trim().to_string());
                    after_bracket = true;
                }
                c => {
                    current.push(c);
                    after_bracket = false;
                }
            }
        }

        if !after_bracket {
            segments.push(current);
        }

        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Walk the path through a record
    pub fn resolve<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(record, |value, segment| match value {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    /// Text a record contributes as a suggestion value
    ///
    /// Missing fields and `null` yield an empty string; strings are taken
    /// verbatim and every other value uses its compact JSON text.
    pub fn extract(&self, record: &Value) -> String {
        match self.resolve(record) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn invalid(path: &str, reason: &str) -> TypeaheadError {
    TypeaheadError::InvalidTargetPath {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "field_path_tests.rs"]
mod field_path_tests;

//! Content-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Errors found while loading or checking site content.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ContentError {
    /// A field of an entry failed validation (bad URL, empty label)
    #[error("Invalid {field} on '{entry}': {message}")]
    InvalidField {
        /// Display key of the offending entry (title or label)
        entry: String,
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Two entries in one collection share a render key
    #[error("Duplicate key '{key}' in {collection}")]
    DuplicateKey {
        /// Collection name ("ventures" or "socials")
        collection: String,
        /// The repeated key
        key: String,
    },

    /// Content document could not be parsed
    #[error("Content parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },
}

impl ContentError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    /// Collapse validator output into a single error for `entry`.
    ///
    /// Fields are reported in name order so the result is stable.
    pub fn from_validation(entry: &str, errors: &ValidationErrors) -> Self {
        let mut fields: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let codes: Vec<String> = errs.iter().map(|e| e.code.to_string()).collect();
                (field.to_string(), codes.join(", "))
            })
            .collect();
        fields.sort();

        let (field, message) = fields
            .into_iter()
            .next()
            .unwrap_or_else(|| ("unknown".to_string(), errors.to_string()));

        Self::InvalidField { entry: entry.to_string(), field, message }
    }
}

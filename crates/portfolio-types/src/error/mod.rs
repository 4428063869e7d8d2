//! Typed error definitions for the portfolio content.
//!
//! Rendering never fails; these errors only come out of content
//! validation and JSON loading.

mod content;

pub use content::ContentError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type wrapping all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a content error
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Content(ContentError::DuplicateKey {
            collection: "ventures".to_string(),
            key: "Nexus VC".to_string(),
        });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Content"));
        assert!(json.contains("Nexus VC"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ContentError::InvalidField {
            entry: "GitHub".to_string(),
            field: "href".to_string(),
            message: "url".to_string(),
        };

        let msg = format!("{}", TypedError::from(err));
        assert!(msg.starts_with("Content error:"));
        assert!(msg.contains("GitHub"));
        assert!(msg.contains("href"));
    }
}

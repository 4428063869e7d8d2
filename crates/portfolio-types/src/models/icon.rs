//! Venture icon classification.

use serde::{Deserialize, Serialize};
use url::Url;

/// How a venture icon string is presented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum IconSource {
    /// Absolute URL, shown as an image filling the icon square
    Image(String),
    /// Anything else, shown verbatim inside a coloured badge
    Badge(String),
}

impl IconSource {
    /// Classify a raw icon value.
    ///
    /// A value is an image when it parses as an absolute URL with an
    /// authority (`scheme://host...`). Everything else, including bare
    /// letters, emoji and relative paths, becomes a badge.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Url::parse(trimmed) {
            Ok(url) if url.has_host() && trimmed.contains("://") => {
                Self::Image(trimmed.to_string())
            }
            _ => Self::Badge(raw.to_string()),
        }
    }
}

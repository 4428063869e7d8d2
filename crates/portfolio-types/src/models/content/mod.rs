//! Site content: the page's only configuration.

mod defaults;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Profile, SocialEntry, VentureEntry};
use crate::error::{ContentError, Result};

/// Heading and subtitle of a page section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionCopy {
    pub title: String,
    pub subtitle: String,
}

impl SectionCopy {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self { title: title.into(), subtitle: subtitle.into() }
    }
}

/// Everything the page renders.
///
/// `ventures` and `socials` are in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    /// Copy above the venture cards
    pub ventures_section: SectionCopy,
    pub ventures: Vec<VentureEntry>,
    /// Copy above the social buttons
    pub socials_section: SectionCopy,
    pub socials: Vec<SocialEntry>,
    /// Name in the footer copyright line
    pub copyright_holder: String,
}

impl SiteContent {
    /// Parse content from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let content = serde_json::from_str(json).map_err(|e| ContentError::from_json_error(&e))?;
        Ok(content)
    }

    /// Check every entry and the uniqueness of render keys.
    ///
    /// Titles key the venture cards and labels key the social buttons, so
    /// a repeat in either would make two rendered items indistinguishable.
    pub fn validate_content(&self) -> Result<()> {
        let mut titles = HashSet::new();
        for venture in &self.ventures {
            venture
                .validate()
                .map_err(|e| ContentError::from_validation(&venture.title, &e))?;
            if !titles.insert(venture.title.as_str()) {
                return Err(ContentError::DuplicateKey {
                    collection: "ventures".to_string(),
                    key: venture.title.clone(),
                }
                .into());
            }
        }

        let mut labels = HashSet::new();
        for social in &self.socials {
            social
                .validate()
                .map_err(|e| ContentError::from_validation(&social.label, &e))?;
            if !labels.insert(social.label.as_str()) {
                return Err(ContentError::DuplicateKey {
                    collection: "socials".to_string(),
                    key: social.label.clone(),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        defaults::site_content()
    }
}

//! Social link model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::OutboundLink;

/// Glyphs a social button can show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    LinkedIn,
    X,
    GitHub,
    Substack,
    Mail,
}

impl SocialIcon {
    /// Stable name, used as a CSS modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialIcon::LinkedIn => "linkedin",
            SocialIcon::X => "x",
            SocialIcon::GitHub => "github",
            SocialIcon::Substack => "substack",
            SocialIcon::Mail => "mail",
        }
    }
}

/// One outbound social-profile link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SocialEntry {
    /// Absolute profile URL
    #[validate(url)]
    pub href: String,
    /// Glyph shown before the label
    pub icon: SocialIcon,
    /// Display text; also the render key, so unique within a list
    #[validate(length(min = 1_u64))]
    pub label: String,
}

impl SocialEntry {
    pub fn new(href: impl Into<String>, icon: SocialIcon, label: impl Into<String>) -> Self {
        Self { href: href.into(), icon, label: label.into() }
    }

    pub fn outbound_link(&self) -> OutboundLink {
        OutboundLink::new(self.href.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SocialIcon::GitHub).unwrap(), "\"github\"");
        assert_eq!(serde_json::to_string(&SocialIcon::LinkedIn).unwrap(), "\"linkedin\"");
        let icon: SocialIcon = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(icon, SocialIcon::X);
        assert_eq!(icon.as_str(), "x");
    }

    #[test]
    fn test_invalid_href_rejected() {
        let entry = SocialEntry::new("not a url", SocialIcon::GitHub, "GitHub");
        let errors = entry.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("href"));
    }
}

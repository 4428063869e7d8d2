//! Venture entry model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{IconSource, OutboundLink};

/// One showcased project or company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct VentureEntry {
    /// Card title; also the render key, so unique within a list
    #[validate(length(min = 1_u64))]
    pub title: String,
    /// Text shown in the expanded detail panel
    pub description: String,
    /// Absolute URL behind the "Visit Website" button
    #[validate(url)]
    pub link: String,
    /// Short text glyph or absolute image URL
    pub icon: String,
}

impl VentureEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
            icon: icon.into(),
        }
    }

    pub fn icon_source(&self) -> IconSource {
        IconSource::classify(&self.icon)
    }

    pub fn outbound_link(&self) -> OutboundLink {
        OutboundLink::new(self.link.clone())
    }
}

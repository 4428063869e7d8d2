//! Outbound link contract.

use serde::{Deserialize, Serialize};

/// A link that leaves the site.
///
/// Every outbound link opens a new browsing context and carries both
/// `noopener` and `noreferrer`, so the target page never learns the
/// referring address nor gets a `window.opener` handle back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct OutboundLink {
    pub href: String,
}

impl OutboundLink {
    /// Value of the `target` attribute.
    pub const TARGET: &'static str = "_blank";
    /// Value of the `rel` attribute.
    pub const REL: &'static str = "noopener noreferrer";

    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn target(&self) -> &'static str {
        Self::TARGET
    }

    pub fn rel(&self) -> &'static str {
        Self::REL
    }
}

//! Social link button

use leptos::prelude::*;
use portfolio_types::{OutboundLink, SocialEntry, SocialIcon};

use super::glyphs::{Glyph, GlyphIcon};

/// What one social button renders, derived from its content entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialButtonView {
    pub link: OutboundLink,
    pub icon: SocialIcon,
    pub label: String,
}

impl SocialButtonView {
    /// Labels are unique across the social row.
    pub fn key(&self) -> String {
        self.label.clone()
    }

    fn class(&self) -> String {
        format!("social-button social-button--{}", self.icon.as_str())
    }
}

impl From<&SocialEntry> for SocialButtonView {
    fn from(entry: &SocialEntry) -> Self {
        Self { link: entry.outbound_link(), icon: entry.icon, label: entry.label.clone() }
    }
}

/// Outbound link with glyph and label. Hover and press feedback are CSS only.
#[component]
pub fn SocialButton(button: SocialButtonView) -> impl IntoView {
    let class = button.class();
    let SocialButtonView { link, icon, label } = button;

    view! {
        <a href=link.href.clone() target=link.target() rel=link.rel() class=class>
            <GlyphIcon glyph=Glyph::for_social(icon) class="social-button__icon" />
            <span class="social-button__label">{label}</span>
        </a>
    }
}

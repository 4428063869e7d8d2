//! Inline SVG glyphs

use leptos::prelude::*;
use portfolio_types::SocialIcon;

/// How a glyph's paths are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Fill,
    Stroke,
}

/// A 24x24 glyph described by its path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub paint: Paint,
    pub paths: &'static [&'static str],
}

pub const CHEVRON_DOWN: Glyph = Glyph { paint: Paint::Stroke, paths: &["m6 9 6 6 6-6"] };

pub const EXTERNAL_LINK: Glyph = Glyph {
    paint: Paint::Stroke,
    paths: &[
        "M15 3h6v6",
        "M10 14 21 3",
        "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
    ],
};

const LINKEDIN: Glyph = Glyph {
    paint: Paint::Stroke,
    paths: &[
        "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
        "M2 9h4v12H2z",
        "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
    ],
};

const X: Glyph = Glyph {
    paint: Paint::Fill,
    paths: &["M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"],
};

const GITHUB: Glyph = Glyph {
    paint: Paint::Stroke,
    paths: &[
        "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
        "M9 18c-4.51 2-5-2-7-2",
    ],
};

const SUBSTACK: Glyph = Glyph {
    paint: Paint::Fill,
    paths: &["M22.539 8.242H1.46V5.406h21.08v2.836zM1.46 10.812V24l9.54-5.672L20.54 24V10.812H1.46zM22.54 0H1.46v2.836h21.08V0z"],
};

const MAIL: Glyph = Glyph {
    paint: Paint::Stroke,
    paths: &[
        "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
        "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
    ],
};

impl Glyph {
    pub fn for_social(icon: SocialIcon) -> Self {
        match icon {
            SocialIcon::LinkedIn => LINKEDIN,
            SocialIcon::X => X,
            SocialIcon::GitHub => GITHUB,
            SocialIcon::Substack => SUBSTACK,
            SocialIcon::Mail => MAIL,
        }
    }
}

#[component]
pub fn GlyphIcon(glyph: Glyph, #[prop(optional, into)] class: String) -> impl IntoView {
    let (fill, stroke) = match glyph.paint {
        Paint::Fill => ("currentColor", "none"),
        Paint::Stroke => ("none", "currentColor"),
    };

    view! {
        <svg
            viewBox="0 0 24 24"
            class=format!("glyph {}", class)
            fill=fill
            stroke=stroke
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {glyph.paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

//! Reusable UI components

pub mod card_view;
pub mod glyphs;
mod icon_tile;
mod project_card;
mod reveal;
mod social_button;
mod star_field;

pub use card_view::CardView;
pub use glyphs::{Glyph, GlyphIcon};
pub use icon_tile::IconTile;
pub use project_card::ProjectCard;
pub use reveal::{Reveal, RevealEffect, RevealViewport};
pub use social_button::{SocialButton, SocialButtonView};
pub use star_field::StarField;

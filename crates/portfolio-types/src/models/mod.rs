//! Content models for the portfolio page.
//!
//! Everything here is static configuration: built once, never mutated at
//! runtime.

mod content;
mod icon;
mod link;
mod profile;
mod social;
mod venture;

// Re-export all models
pub use content::{SectionCopy, SiteContent};
pub use icon::IconSource;
pub use link::OutboundLink;
pub use profile::Profile;
pub use social::{SocialEntry, SocialIcon};
pub use venture::VentureEntry;

//! # Portfolio Types
//!
//! Content models, outbound-link contract and error definitions for the
//! portfolio site.
//!
//! - **`error`** - Typed errors raised by content validation
//! - **`models`** - Venture and social entries, profile, icon classification
//!
//! ## Architecture Role
//!
//! ```text
//!   portfolio-types (this crate)
//!           │
//!           ▼
//!   portfolio-leptos (WASM frontend)
//! ```
//!
//! Nothing here depends on a rendering host, so every rule the page relies
//! on (icon classification, link attributes, key uniqueness) is testable
//! natively.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ContentError, Result, TypedError};

// Re-export core model types
pub use models::{
    IconSource, OutboundLink, Profile, SectionCopy, SiteContent, SocialEntry, SocialIcon,
    VentureEntry,
};

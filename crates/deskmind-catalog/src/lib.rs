//! Static catalog data for the Deskmind management surfaces.
//!
//! Documents, FAQs, and dashboard figures are fixed mock records with no
//! lifecycle: nothing here is created, mutated, or deleted at runtime. The
//! only logic is linear substring/category filtering.

pub mod dashboard;
pub mod documents;
pub mod faq;

pub use dashboard::{ActivityEntry, ActivityKind, ActivityStatus, StatTile, Trend};
pub use documents::{Document, DocumentStatus, DocumentType};
pub use faq::Faq;

/// Category filter sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

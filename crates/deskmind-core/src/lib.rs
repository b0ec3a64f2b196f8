//! Shared foundation for the Deskmind helpdesk assistant.
//!
//! Holds the application configuration, the top-level error type, and the
//! language registry with all localized string tables.

pub mod config;
pub mod error;
pub mod i18n;

pub use config::DeskmindConfig;
pub use error::{DeskmindError, Result};
pub use i18n::Language;

//! Shared types for the Vailure storefront
//!
//! Common types used across the storefront crates: the product model,
//! cart and chat message types, the static catalog, and time utilities.

pub mod catalog;
pub mod models;
pub mod util;

// Re-exports
pub use catalog::{Catalog, CatalogError, ALL_CATEGORIES};
pub use models::{CartLine, ChatMessage, Product, Sender, SourceLink};
pub use serde::{Deserialize, Serialize};

//! Data models
//!
//! Shared between the store engine and the stylist client.
//! All product IDs are `i64`; all monetary amounts are integer cents.

pub mod cart;
pub mod chat;
pub mod product;

// Re-exports
pub use cart::*;
pub use chat::*;
pub use product::*;

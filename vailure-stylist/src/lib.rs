//! Vailure Stylist - chat assistant for the storefront
//!
//! The chat session state machine plus the HTTP client that proxies it to
//! a remote generative-language API. The session owns the transcript and
//! the single in-flight request slot; the client speaks the wire format.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

// Re-exports
pub use api::{StylistApi, StylistReply, StylistRequest, dedupe_sources};
pub use client::StylistClient;
pub use config::StylistConfig;
pub use error::{StylistError, StylistResult};
pub use session::{ChatSession, FALLBACK_TEXT, PendingRequest, WELCOME_TEXT};

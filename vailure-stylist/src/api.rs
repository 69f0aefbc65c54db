//! Assistant collaborator interface
//!
//! The session talks to the remote service through this seam so the state
//! machine can be exercised against a scripted implementation in tests.

use crate::error::StylistResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::SourceLink;

/// One generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StylistRequest {
    pub prompt: String,
    /// Trades grounding/citations for deeper, ungrounded reasoning
    pub thinking_mode: bool,
}

/// One generation response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StylistReply {
    pub text: String,
    /// Deduplicated citations; empty for thinking-mode generations
    #[serde(default)]
    pub sources: Vec<SourceLink>,
}

impl StylistReply {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }
}

/// Remote generation boundary
#[async_trait]
pub trait StylistApi: Send + Sync {
    async fn generate(&self, request: &StylistRequest) -> StylistResult<StylistReply>;
}

/// Deduplicate citations by uri, keeping order. The first occurrence wins
/// the title.
pub fn dedupe_sources(sources: Vec<SourceLink>) -> Vec<SourceLink> {
    let mut seen = std::collections::HashSet::new();
    sources
        .into_iter()
        .filter(|s| seen.insert(s.uri.clone()))
        .collect()
}

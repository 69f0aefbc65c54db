//! HTTP client for the generative-language API
//!
//! Speaks the `generateContent` REST shape. Thinking mode selects the deep
//! model with a thinking budget and no tools; otherwise the grounded model
//! runs with the web-search tool and its grounding chunks are mapped to
//! citations.

use crate::api::{StylistApi, StylistReply, StylistRequest, dedupe_sources};
use crate::config::StylistConfig;
use crate::error::{StylistError, StylistResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::SourceLink;
use tracing::debug;

/// Persona carried as the system instruction on every request
const SYSTEM_INSTRUCTION: &str = "You are a world-class fashion expert and personal stylist \
for the luxury brand 'Vailure'. Your style is modern, minimalist, and edgy, with a monochrome \
color palette. Answer user queries with this persona. Be helpful, insightful, and slightly \
aspirational. Refer to Vailure products when relevant. Keep responses concise and stylish.";

/// HTTP client for the remote stylist
#[derive(Debug, Clone)]
pub struct StylistClient {
    client: Client,
    config: StylistConfig,
}

impl StylistClient {
    /// Create a new client from configuration
    pub fn new(config: StylistConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Self {
        Self::new(StylistConfig::from_env())
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate_content(&self, request: &StylistRequest) -> StylistResult<StylistReply> {
        let model = if request.thinking_mode {
            &self.config.thinking_model
        } else {
            &self.config.grounded_model
        };

        let body = GenerateContentRequest::for_prompt(
            &request.prompt,
            request.thinking_mode,
            self.config.thinking_budget,
        );
        debug!(model = %model, thinking_mode = request.thinking_mode, "calling generateContent");

        let response = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(StylistError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        parsed.into_reply(request.thinking_mode)
    }
}

#[async_trait]
impl StylistApi for StylistClient {
    async fn generate(&self, request: &StylistRequest) -> StylistResult<StylistReply> {
        self.generate_content(request).await
    }
}

// ========== Wire types ==========

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl<'a> GenerateContentRequest<'a> {
    fn for_prompt(prompt: &'a str, thinking_mode: bool, thinking_budget: i32) -> Self {
        Self {
            contents: vec![Content::text(prompt)],
            system_instruction: Content::text(SYSTEM_INSTRUCTION),
            tools: (!thinking_mode).then(|| vec![Tool::google_search()]),
            generation_config: thinking_mode.then(|| GenerationConfig {
                thinking_config: ThinkingConfig {
                    thinking_budget,
                },
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

impl<'a> Content<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: serde_json::Value,
}

impl Tool {
    fn google_search() -> Self {
        Self {
            google_search: serde_json::json!({}),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: i32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebSource>,
}

#[derive(Debug, Deserialize)]
struct WebSource {
    uri: Option<String>,
    title: Option<String>,
}

impl GenerateContentResponse {
    /// Assemble the reply: concatenated candidate text plus, for grounded
    /// requests, the deduplicated web citations.
    fn into_reply(self, thinking_mode: bool) -> StylistResult<StylistReply> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| StylistError::InvalidResponse("no candidates".to_string()))?;

        let text: String = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(StylistError::InvalidResponse(
                "candidate carried no text".to_string(),
            ));
        }

        let sources = if thinking_mode {
            Vec::new()
        } else {
            let raw = candidate
                .grounding_metadata
                .map(|g| g.grounding_chunks)
                .unwrap_or_default()
                .into_iter()
                .filter_map(|chunk| chunk.web)
                .filter_map(|web| {
                    let uri = web.uri?;
                    Some(SourceLink {
                        // missing titles fall back to the uri
                        title: web.title.unwrap_or_else(|| uri.clone()),
                        uri,
                    })
                })
                .collect();
            dedupe_sources(raw)
        };

        Ok(StylistReply { text, sources })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grounded_request_carries_search_tool_but_no_thinking_config() {
        let body = GenerateContentRequest::for_prompt("hello", false, 32768);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Vailure"));
        assert_eq!(json["tools"][0]["google_search"], serde_json::json!({}));
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn thinking_request_carries_budget_but_no_tools() {
        let body = GenerateContentRequest::for_prompt("hello", true, 32768);
        let json = serde_json::to_value(&body).unwrap();

        assert!(json.get("tools").is_none());
        assert_eq!(
            json["generationConfig"]["thinkingConfig"]["thinkingBudget"],
            32768
        );
    }

    #[test]
    fn response_text_and_sources_are_assembled() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Pair them "}, {"text": "with denim."}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://a", "title": "Lookbook"}},
                    {"web": {"uri": "https://a", "title": "Duplicate"}},
                    {"web": {"uri": "https://b"}},
                    {"web": null}
                ]}
            }]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let reply = parsed.into_reply(false).unwrap();

        assert_eq!(reply.text, "Pair them with denim.");
        assert_eq!(reply.sources.len(), 2);
        assert_eq!(reply.sources[0].title, "Lookbook");
        // untitled citation falls back to its uri
        assert_eq!(reply.sources[1].title, "https://b");
    }

    #[test]
    fn thinking_mode_reply_never_carries_sources() {
        let raw = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Deep answer"}]},
                "groundingMetadata": {"groundingChunks": [
                    {"web": {"uri": "https://a", "title": "T"}}
                ]}
            }]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let reply = parsed.into_reply(true).unwrap();
        assert!(reply.sources.is_empty());
    }

    #[test]
    fn empty_responses_are_invalid() {
        let parsed: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(
            parsed.into_reply(false),
            Err(StylistError::InvalidResponse(_))
        ));

        let parsed: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert!(matches!(
            parsed.into_reply(false),
            Err(StylistError::InvalidResponse(_))
        ));
    }
}

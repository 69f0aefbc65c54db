//! Stylist client configuration

use tracing::warn;

/// Default API endpoint
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Model used for grounded (web-search-backed) generation
const DEFAULT_GROUNDED_MODEL: &str = "gemini-2.5-flash";
/// Model used for thinking-mode generation
const DEFAULT_THINKING_MODEL: &str = "gemini-2.5-pro";
/// Thinking budget (tokens) for thinking-mode requests
const DEFAULT_THINKING_BUDGET: i32 = 32768;

/// Configuration for connecting to the generative-language API
#[derive(Debug, Clone)]
pub struct StylistConfig {
    /// API key sent with every request
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Model for grounded generation (thinking mode off)
    pub grounded_model: String,

    /// Model for deep generation (thinking mode on)
    pub thinking_model: String,

    /// Thinking budget in tokens for the thinking model
    pub thinking_budget: i32,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl StylistConfig {
    /// Create a new configuration with defaults
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            grounded_model: DEFAULT_GROUNDED_MODEL.to_string(),
            thinking_model: DEFAULT_THINKING_MODEL.to_string(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
            timeout: 30,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            warn!("GEMINI_API_KEY not set; stylist API calls will fail");
            String::new()
        });

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("GEMINI_BASE_URL") {
            config.base_url = url;
        }
        if let Some(timeout) = std::env::var("STYLIST_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override both model names
    pub fn with_models(
        mut self,
        grounded: impl Into<String>,
        thinking: impl Into<String>,
    ) -> Self {
        self.grounded_model = grounded.into();
        self.thinking_model = thinking.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_builders() {
        let config = StylistConfig::new("k")
            .with_base_url("http://localhost:9001")
            .with_timeout(5);

        assert_eq!(config.api_key, "k");
        assert_eq!(config.base_url, "http://localhost:9001");
        assert_eq!(config.grounded_model, "gemini-2.5-flash");
        assert_eq!(config.thinking_model, "gemini-2.5-pro");
        assert_eq!(config.thinking_budget, 32768);
        assert_eq!(config.timeout, 5);
    }
}

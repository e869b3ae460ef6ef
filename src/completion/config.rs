use std::time::Duration;

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://open.bigmodel.cn/api/paas/v4/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "deepseek-v3_2";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Settings for the LLM-delegated poster mode.
///
/// The API key is never serialized, so a config can be dumped for diagnostics without
/// leaking it.
pub struct CompletionConfig {
    /// OpenAI-compatible chat-completions URL.
    pub api_url: String,
    /// Bearer token.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model identifier sent with every request.
    pub model: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Completion length cap.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus sampling mass.
    pub top_p: f64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 600,
            max_tokens: 4000,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

impl CompletionConfig {
    /// Default settings with `api_key` set.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The API key, if one is set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/completion/config.rs"]
mod tests;

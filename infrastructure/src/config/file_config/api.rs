//! API configuration from TOML (`[api]` section)

use serde::{Deserialize, Serialize};

/// Chat-completion endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Environment variable holding the bearer key
    pub api_key_env: String,
}

impl FileApiConfig {
    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_completions_url() {
        assert_eq!(
            FileApiConfig::default().completions_url(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }
}

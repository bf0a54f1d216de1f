//! Application-level configuration.
//!
//! Controls what the session use case sends and shows; loading it from
//! files and the environment is an infrastructure concern.

use companion_domain::{DEFAULT_SYSTEM_PROMPT, Model};

/// Session behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Model both tracks are sent to
    pub model: Model,
    /// Prompt of the baseline track (and of the custom track by default)
    pub default_prompt: String,
}

impl SessionConfig {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn with_default_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.default_prompt = prompt.into();
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            default_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.model.as_str(), Model::DEFAULT_ID);
        assert_eq!(config.default_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new(Model::new("openai/gpt-4o-mini").unwrap())
            .with_default_prompt("Be brief.");
        assert_eq!(config.model.as_str(), "openai/gpt-4o-mini");
        assert_eq!(config.default_prompt, "Be brief.");
    }
}

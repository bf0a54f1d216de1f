//! System prompts for the two tracks.

/// System prompt of the baseline track, and of the custom track when the
/// user enters nothing at startup
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an AI chat assistant. Respond to the user's queries.";

/// The prompt texts chosen at startup. Reset reseeds the tracks from these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    baseline: String,
    custom: Option<String>,
}

impl PromptPair {
    /// `custom` of `None` or `""` means "use the baseline prompt for both".
    pub fn new(baseline: impl Into<String>, custom: Option<String>) -> Self {
        Self {
            baseline: baseline.into(),
            custom: custom.filter(|c| !c.is_empty()),
        }
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Prompt of the custom track
    pub fn custom(&self) -> &str {
        self.custom.as_deref().unwrap_or(&self.baseline)
    }

    /// Whether the user supplied their own prompt
    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }
}

impl Default for PromptPair {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT, None)
    }
}

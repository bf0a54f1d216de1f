//! API credential loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Missing API key: set the {var} environment variable (or add it to .env)")]
    MissingCredential { var: String },

    #[error(transparent)]
    Domain(#[from] companion_domain::DomainError),
}

/// Load `.env` from the working directory or its parents, if one exists.
///
/// Variables already set in the process environment are not overridden.
pub fn load_dotenv() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Some(path)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            tracing::warn!("Ignoring unreadable .env file: {}", e);
            None
        }
    }
}

/// Bearer credential for the chat-completion API.
///
/// Read once at startup. `Debug` never prints the secret.
#[derive(Clone)]
pub struct ApiCredential(String);

impl ApiCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read `var` from the process environment.
    ///
    /// Call [`load_dotenv`] first so values from `.env` are visible.
    pub fn from_env(var: &str) -> Result<Self, ConfigError> {
        Self::from_lookup(var, |name| std::env::var(name).ok())
    }

    /// Resolve `var` through `lookup`. Blank values count as missing.
    pub fn from_lookup(
        var: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        match lookup(var) {
            Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(ConfigError::MissingCredential {
                var: var.to_string(),
            }),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiCredential(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_present() {
        let credential = ApiCredential::from_lookup("OPENROUTER_API_KEY", |name| {
            assert_eq!(name, "OPENROUTER_API_KEY");
            Some(" sk-or-123 \n".to_string())
        })
        .unwrap();
        assert_eq!(credential.expose(), "sk-or-123");
    }

    #[test]
    fn test_lookup_missing_or_blank() {
        let missing = ApiCredential::from_lookup("OPENROUTER_API_KEY", |_| None);
        assert!(matches!(
            missing,
            Err(ConfigError::MissingCredential { ref var }) if var == "OPENROUTER_API_KEY"
        ));

        let blank = ApiCredential::from_lookup("OPENROUTER_API_KEY", |_| Some("  ".to_string()));
        assert!(blank.is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credential = ApiCredential::new("sk-or-secret");
        assert!(!format!("{:?}", credential).contains("secret"));
    }
}

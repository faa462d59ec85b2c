use std::env;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub identity_base_url: String,
    pub secure_token_base_url: String,
}

impl IdentityConfig {
    pub const DEFAULT_IDENTITY_BASE_URL: &'static str = "https://identitytoolkit.googleapis.com/v1";
    pub const DEFAULT_SECURE_TOKEN_BASE_URL: &'static str = "https://securetoken.googleapis.com/v1";

    /// Handy for tests or custom wiring (no env reads).
    pub fn new(
        api_key: impl Into<String>,
        identity_base_url: impl Into<String>,
        secure_token_base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            identity_base_url: identity_base_url.into().trim_end_matches('/').to_string(),
            secure_token_base_url: secure_token_base_url
                .into()
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Load from `IDENTITY_API_KEY`, `IDENTITY_BASE_URL`, `SECURE_TOKEN_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("IDENTITY_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("IDENTITY_API_KEY"))?;

        let identity_base_url = env::var("IDENTITY_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_IDENTITY_BASE_URL.to_string());

        let secure_token_base_url = env::var("SECURE_TOKEN_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_SECURE_TOKEN_BASE_URL.to_string());

        Ok(Self::new(api_key, identity_base_url, secure_token_base_url))
    }

    pub fn sign_in_url(&self) -> String {
        format!(
            "{}/accounts:signInWithPassword?key={}",
            self.identity_base_url, self.api_key
        )
    }

    pub fn refresh_url(&self) -> String {
        format!("{}/token?key={}", self.secure_token_base_url, self.api_key)
    }
}

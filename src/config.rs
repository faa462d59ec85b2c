use std::env;
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Loads `.env.{RUST_ENV}` first, then falls back to `.env`.
pub fn load_env_files() {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl AdminConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:5000/api";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read `API_BASE_URL` and `API_TIMEOUT_SECS`. Blank or unset values fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("API_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_API_BASE_URL.to_string());

        let timeout_secs = match lookup("API_TIMEOUT_SECS").filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    key: "API_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => Self::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AdminConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:5000/api");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_blank_base_url_falls_back_to_default() {
        let config = AdminConfig::from_lookup(lookup_from(&[("API_BASE_URL", "   ")])).unwrap();

        assert_eq!(config.api_base_url, AdminConfig::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AdminConfig::from_lookup(lookup_from(&[(
            "API_BASE_URL",
            "https://api.example.com/api/",
        )]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com/api");
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = AdminConfig::from_lookup(lookup_from(&[("API_TIMEOUT_SECS", "soon")]))
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "API_TIMEOUT_SECS",
                value: "soon".to_string()
            }
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let res = AdminConfig::from_lookup(lookup_from(&[("API_TIMEOUT_SECS", "0")]));

        assert!(matches!(res, Err(ConfigError::Invalid { .. })));
    }
}

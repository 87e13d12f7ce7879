//! Startup configuration resolved from the environment.
//!
//! Resolution happens once in `main`, before the listener binds. A missing
//! source is a fatal startup error — requests never observe a half-configured
//! gateway.

use thiserror::Error;

/// Environment variables consulted for the vector backend host, in
/// precedence order. The last one is a base host and gets `/vector`
/// appended.
const VECTOR_INDEX_HOST: &str = "VECTOR_INDEX_HOST";
const VECTOR_HOST: &str = "VECTOR_HOST";
const VECTORGATE_HOST: &str = "VECTORGATE_HOST";

/// Static credential sent as the `Authorization` header on outbound calls.
const API_TOKEN: &str = "API_TOKEN";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("neither VECTOR_INDEX_HOST, VECTOR_HOST, nor VECTORGATE_HOST is set")]
    MissingVectorHost,
    #[error("API_TOKEN is not set")]
    MissingApiToken,
}

/// Process-wide gateway configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the vector backend, e.g. `https://vector.example.com`.
    pub vector_host: String,
    /// Credential for outbound `Authorization` headers.
    pub api_token: String,
}

impl Config {
    /// Resolve the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// First present host source wins; `VECTORGATE_HOST` is a base host and
    /// gets the `/vector` suffix.
    fn resolve(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vector_host = if let Some(host) = get(VECTOR_INDEX_HOST) {
            host
        } else if let Some(host) = get(VECTOR_HOST) {
            host
        } else if let Some(host) = get(VECTORGATE_HOST) {
            format!("{host}/vector")
        } else {
            return Err(ConfigError::MissingVectorHost);
        };

        let api_token = get(API_TOKEN).ok_or(ConfigError::MissingApiToken)?;

        Ok(Self { vector_host, api_token })
    }

    /// Full endpoint URL the fan-out posts to.
    pub fn callback_url(&self) -> String {
        format!("{}/api/vector/callback", self.vector_host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn resolve(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars = env(pairs);
        Config::resolve(|key| vars.get(key).cloned())
    }

    #[test]
    fn index_host_wins_over_all_others() {
        let config = resolve(&[
            ("VECTOR_INDEX_HOST", "https://idx.example.com"),
            ("VECTOR_HOST", "https://vec.example.com"),
            ("VECTORGATE_HOST", "https://base.example.com"),
            ("API_TOKEN", "t"),
        ])
        .unwrap();
        assert_eq!(config.vector_host, "https://idx.example.com");
    }

    #[test]
    fn vector_host_wins_over_base_host() {
        let config = resolve(&[
            ("VECTOR_HOST", "https://vec.example.com"),
            ("VECTORGATE_HOST", "https://base.example.com"),
            ("API_TOKEN", "t"),
        ])
        .unwrap();
        assert_eq!(config.vector_host, "https://vec.example.com");
    }

    #[test]
    fn base_host_gets_vector_suffix() {
        let config = resolve(&[
            ("VECTORGATE_HOST", "https://base.example.com"),
            ("API_TOKEN", "t"),
        ])
        .unwrap();
        assert_eq!(config.vector_host, "https://base.example.com/vector");
        assert_eq!(config.callback_url(), "https://base.example.com/vector/api/vector/callback");
    }

    #[test]
    fn missing_all_hosts_is_fatal() {
        let err = resolve(&[("API_TOKEN", "t")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVectorHost));
    }

    #[test]
    fn missing_token_is_fatal() {
        let err = resolve(&[("VECTOR_HOST", "https://vec.example.com")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiToken));
    }
}

//! Client configuration: provider domain and credentials.
//!
//! An [`LbsConfig`] is built once and handed to the client at construction.
//! It is never mutated afterwards.

use crate::error::{LbsError, LbsResult};
use crate::network::DEFAULT_DOMAIN;

/// Environment variable holding the app key.
pub const ENV_KEY: &str = "TENCENT_LBS_KEY";
/// Environment variable holding the app secret (the "SK" used for signing).
pub const ENV_SECRET: &str = "TENCENT_LBS_SECRET";
/// Optional environment variable overriding the domain.
pub const ENV_DOMAIN: &str = "TENCENT_LBS_DOMAIN";

/// Immutable provider configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct LbsConfig {
    domain: String,
    app_key: String,
    app_secret: String,
}

impl LbsConfig {
    /// Create a config against the default domain.
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }

    /// Override the domain (e.g. for a proxy or a local test server).
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into().trim_end_matches('/').to_string();
        self
    }

    /// Load from `TENCENT_LBS_KEY`, `TENCENT_LBS_SECRET` and optionally `TENCENT_LBS_DOMAIN`.
    pub fn from_env() -> LbsResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> LbsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| LbsError::Config(format!("{} is not set", name)))
        };

        let config = Self::new(required(ENV_KEY)?, required(ENV_SECRET)?);
        Ok(match lookup(ENV_DOMAIN).filter(|v| !v.trim().is_empty()) {
            Some(domain) => config.with_domain(domain),
            None => config,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub(crate) fn app_secret(&self) -> &str {
        &self.app_secret
    }

    pub(crate) fn validate(&self) -> LbsResult<()> {
        if self.domain.trim().is_empty() {
            return Err(LbsError::Config("domain cannot be empty".to_string()));
        }
        if self.app_key.trim().is_empty() {
            return Err(LbsError::Config("app key cannot be empty".to_string()));
        }
        if self.app_secret.trim().is_empty() {
            return Err(LbsError::Config("app secret cannot be empty".to_string()));
        }
        Ok(())
    }
}

// The secret never shows up in logs.
impl std::fmt::Debug for LbsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LbsConfig")
            .field("domain", &self.domain)
            .field("app_key", &self.app_key)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_new_uses_default_domain() {
        let config = LbsConfig::new("key", "secret");
        assert_eq!(config.domain(), DEFAULT_DOMAIN);
        assert_eq!(config.app_key(), "key");
        assert_eq!(config.app_secret(), "secret");
    }

    #[test]
    fn test_with_domain_trims_trailing_slash() {
        let config = LbsConfig::new("key", "secret").with_domain("http://127.0.0.1:8080/");
        assert_eq!(config.domain(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_lookup() {
        let config = LbsConfig::from_lookup(lookup(&[
            (ENV_KEY, "k"),
            (ENV_SECRET, "s"),
            (ENV_DOMAIN, "https://proxy.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.app_key(), "k");
        assert_eq!(config.domain(), "https://proxy.example.com");
    }

    #[test]
    fn test_from_lookup_missing_secret() {
        let err = LbsConfig::from_lookup(lookup(&[(ENV_KEY, "k")])).unwrap_err();
        assert!(matches!(err, LbsError::Config(msg) if msg.contains(ENV_SECRET)));
    }

    #[test]
    fn test_from_lookup_blank_domain_falls_back() {
        let config = LbsConfig::from_lookup(lookup(&[
            (ENV_KEY, "k"),
            (ENV_SECRET, "s"),
            (ENV_DOMAIN, "  "),
        ]))
        .unwrap();
        assert_eq!(config.domain(), DEFAULT_DOMAIN);
    }

    #[test]
    fn test_validate_rejects_blank_key() {
        assert!(LbsConfig::new(" ", "secret").validate().is_err());
        assert!(LbsConfig::new("key", "secret").validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", LbsConfig::new("key", "super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}

//! Connection settings: command-line flags first, then the environment.

use anyhow::{bail, Result};
use tebex_headless::{Client, DEFAULT_BASE_URL};

pub const ENV_WEBSTORE_ID: &str = "TEBEX_WEBSTORE_ID";
pub const ENV_PRIVATE_KEY: &str = "TEBEX_PRIVATE_KEY";
pub const ENV_BASE_URL: &str = "TEBEX_BASE_URL";

/// Resolved settings for building a [`Client`].
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub webstore_identifier: String,
    pub private_key: Option<String>,
    pub base_url: String,
}

impl Settings {
    /// Merges flag values with whatever `lookup` returns for the environment
    /// variables. Empty values count as unset.
    pub fn resolve<F>(
        webstore: Option<&str>,
        private_key: Option<&str>,
        base_url: Option<&str>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |flag: Option<&str>, key: &str| {
            flag.map(str::to_string)
                .or_else(|| lookup(key))
                .filter(|v| !v.trim().is_empty())
        };

        let Some(webstore_identifier) = pick(webstore, ENV_WEBSTORE_ID) else {
            bail!(
                "no webstore identifier: pass --webstore or set {}",
                ENV_WEBSTORE_ID
            );
        };

        Ok(Self {
            webstore_identifier,
            private_key: pick(private_key, ENV_PRIVATE_KEY),
            base_url: pick(base_url, ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    pub fn from_env(
        webstore: Option<&str>,
        private_key: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self> {
        Self::resolve(webstore, private_key, base_url, |key| std::env::var(key).ok())
    }

    pub fn client(&self) -> Result<Client> {
        Ok(Client::with_base_url(
            &self.base_url,
            &self.webstore_identifier,
            self.private_key.as_deref(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_flags_win_over_env() {
        let settings = Settings::resolve(
            Some("flag-store"),
            None,
            Some("http://localhost:8080"),
            env(&[(ENV_WEBSTORE_ID, "env-store"), (ENV_PRIVATE_KEY, "env-key")]),
        )
        .unwrap();
        assert_eq!(settings.webstore_identifier, "flag-store");
        assert_eq!(settings.private_key.as_deref(), Some("env-key"));
        assert_eq!(settings.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_defaults_base_url() {
        let settings =
            Settings::resolve(None, None, None, env(&[(ENV_WEBSTORE_ID, "env-store")])).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert!(settings.private_key.is_none());
    }

    #[test]
    fn test_missing_webstore_is_an_error() {
        assert!(Settings::resolve(None, None, None, env(&[])).is_err());
        assert!(Settings::resolve(None, None, None, env(&[(ENV_WEBSTORE_ID, "  ")])).is_err());
    }

    #[test]
    fn test_empty_private_key_is_unset() {
        let settings = Settings::resolve(
            Some("store"),
            None,
            None,
            env(&[(ENV_PRIVATE_KEY, "")]),
        )
        .unwrap();
        assert!(settings.private_key.is_none());
    }
}

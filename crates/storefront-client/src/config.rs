//! Commerce client configuration.

use crate::ConfigError;
use secrecy::SecretString;

/// Variable holding the public API key.
pub const PUBLIC_KEY_VAR: &str = "COMMERCE_PUBLIC_KEY";
/// Variable overriding the API base URL.
pub const API_URL_VAR: &str = "COMMERCE_API_URL";
/// Hosted commerce API.
pub const DEFAULT_API_URL: &str = "https://api.chec.io/v1";

/// Settings needed to talk to the commerce service.
///
/// The key is public by the service's own definition but still kept out of
/// `Debug` output.
#[derive(Clone, Debug)]
pub struct CommerceConfig {
    /// Public API key sent with every request.
    pub public_key: SecretString,
    /// Base URL without a trailing slash.
    pub api_url: String,
}

impl CommerceConfig {
    /// Create a configuration for the hosted API.
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: SecretString::from(public_key.into()),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the client at another API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read values baked in at compile time.
    ///
    /// Browser builds have no process environment, so the key has to be
    /// present when the wasm bundle is built.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            PUBLIC_KEY_VAR => option_env!("COMMERCE_PUBLIC_KEY").map(String::from),
            API_URL_VAR => option_env!("COMMERCE_API_URL").map(String::from),
            _ => None,
        })
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let public_key = read(PUBLIC_KEY_VAR).ok_or(ConfigError::MissingKey(PUBLIC_KEY_VAR))?;
        let mut config = Self::new(public_key.trim());

        if let Some(api_url) = read(API_URL_VAR) {
            let api_url = api_url.trim();
            if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl {
                    key: API_URL_VAR,
                    value: api_url.to_string(),
                });
            }
            config = config.with_api_url(api_url);
        }

        Ok(config)
    }
}

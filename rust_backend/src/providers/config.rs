//! Provider configuration file support.
//!
//! Providers are configured from a `providers.toml` file plus environment
//! variables. Credentials are never stored in the file or compiled in: the
//! file names accounts and endpoints, the secrets come from the process
//! environment at startup.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::error::ProviderError;

/// Environment variable holding the Twilio auth token.
pub const TWILIO_AUTH_TOKEN_ENV: &str = "TWILIO_AUTH_TOKEN";
/// Environment variable holding the YouTube Data API key.
pub const YOUTUBE_API_KEY_ENV: &str = "YOUTUBE_API_KEY";
/// Environment variable holding the imagery gateway bearer token.
pub const IMAGERY_TOKEN_ENV: &str = "SO2WATCH_IMAGERY_TOKEN";

/// Provider configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub providers: ProviderSettings,
    #[serde(default)]
    pub imagery: ImagerySettings,
    #[serde(default)]
    pub twilio: TwilioSettings,
    #[serde(default)]
    pub youtube: YoutubeSettings,
}

/// Provider backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(rename = "type", default = "default_provider_type")]
    pub provider_type: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            provider_type: default_provider_type(),
        }
    }
}

/// Imagery gateway connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagerySettings {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ImagerySettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Twilio account settings (auth token comes from the environment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioSettings {
    #[serde(default)]
    pub account_sid: String,
    #[serde(default)]
    pub from_number: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for TwilioSettings {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            from_number: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// YouTube Data API settings (API key comes from the environment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeSettings {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_provider_type() -> String {
    "local".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_max_results() -> usize {
    5
}

impl ProviderConfig {
    /// Load provider configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(ProviderConfig)` if successful
    /// * `Err(ProviderError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ProviderError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: ProviderConfig = toml::from_str(&content).map_err(|e| {
            ProviderError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load provider configuration from the default locations.
    ///
    /// Searches for `providers.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// Falls back to defaults (local providers) when no file is found.
    pub fn from_default_locations() -> Result<Self, ProviderError> {
        let candidates = [
            "providers.toml",
            "rust_backend/providers.toml",
            "../providers.toml",
        ];
        for candidate in candidates {
            if Path::new(candidate).exists() {
                return Self::from_file(candidate);
            }
        }
        Ok(Self::default())
    }

    /// Twilio auth token, resolved from the environment.
    pub fn twilio_auth_token(&self) -> Result<String, ProviderError> {
        std::env::var(TWILIO_AUTH_TOKEN_ENV).map_err(|_| {
            ProviderError::ConfigurationError(format!("{} is not set", TWILIO_AUTH_TOKEN_ENV))
        })
    }

    /// YouTube API key, resolved from the environment.
    pub fn youtube_api_key(&self) -> Result<String, ProviderError> {
        std::env::var(YOUTUBE_API_KEY_ENV).map_err(|_| {
            ProviderError::ConfigurationError(format!("{} is not set", YOUTUBE_API_KEY_ENV))
        })
    }

    /// Optional bearer token for the imagery gateway.
    pub fn imagery_token(&self) -> Option<String> {
        std::env::var(IMAGERY_TOKEN_ENV).ok()
    }
}

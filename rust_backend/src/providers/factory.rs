//! Provider factory for dependency injection.
//!
//! Creates the provider bundle from configuration so the pipeline never
//! names a concrete backend.

use super::config::ProviderConfig;
use super::error::{ProviderError, ProviderResult};
use super::Providers;

/// Provider backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// In-memory providers (tests, local development)
    Local,
    /// Remote services: imagery gateway, Twilio, YouTube
    Remote,
}

impl ProviderKind {
    /// Parse provider kind from string.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "remote" => Ok(Self::Remote),
            _ => Err(format!("Unknown provider type: {}", s)),
        }
    }

    /// Provider kind from the `SO2WATCH_PROVIDERS` environment variable,
    /// defaulting to Local when unset or unrecognized.
    pub fn from_env() -> Self {
        std::env::var("SO2WATCH_PROVIDERS")
            .ok()
            .and_then(|s| Self::from_str(&s).ok())
            .unwrap_or(Self::Local)
    }
}

/// Factory creating provider bundles with proper initialization.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider bundle based on kind.
    ///
    /// # Arguments
    /// * `kind` - Which backend family to instantiate
    /// * `config` - Provider configuration (endpoints, accounts, timeouts)
    ///
    /// # Returns
    /// * `Ok(Providers)` - Trait-object bundle ready for the pipeline
    /// * `Err(ProviderError)` - If the backend is unavailable or misconfigured
    pub fn create(kind: ProviderKind, config: &ProviderConfig) -> ProviderResult<Providers> {
        match kind {
            ProviderKind::Local => Self::create_local(),
            ProviderKind::Remote => Self::create_remote(config),
        }
    }

    #[cfg(feature = "local-providers")]
    pub fn create_local() -> ProviderResult<Providers> {
        Ok(super::local::LocalProviders::new().as_providers())
    }

    #[cfg(not(feature = "local-providers"))]
    pub fn create_local() -> ProviderResult<Providers> {
        Err(ProviderError::ConfigurationError(
            "local providers requested but the 'local-providers' feature is disabled".to_string(),
        ))
    }

    #[cfg(feature = "remote-providers")]
    pub fn create_remote(config: &ProviderConfig) -> ProviderResult<Providers> {
        use std::sync::Arc;

        use super::remote::{ImageryGateway, TwilioDispatcher, YoutubeContentLookup};

        Ok(Providers {
            imagery: Arc::new(ImageryGateway::from_config(config)?),
            alerts: Arc::new(TwilioDispatcher::from_config(config)?),
            content: Arc::new(YoutubeContentLookup::from_config(config)?),
        })
    }

    #[cfg(not(feature = "remote-providers"))]
    pub fn create_remote(_config: &ProviderConfig) -> ProviderResult<Providers> {
        Err(ProviderError::ConfigurationError(
            "remote providers requested but the 'remote-providers' feature is disabled".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!(ProviderKind::from_str("local"), Ok(ProviderKind::Local));
        assert_eq!(ProviderKind::from_str("REMOTE"), Ok(ProviderKind::Remote));
        assert!(ProviderKind::from_str("azure").is_err());
    }

    #[cfg(feature = "local-providers")]
    #[test]
    fn test_create_local() {
        let config = ProviderConfig::default();
        assert!(ProviderFactory::create(ProviderKind::Local, &config).is_ok());
    }
}

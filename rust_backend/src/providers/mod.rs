//! External service collaborators behind trait abstractions.
//!
//! The pipeline talks to three external services: the satellite imagery
//! query service, a notification dispatcher (SMS) and a related-content
//! search. Each is abstracted behind a focused trait so backends can be
//! swapped without touching the decision logic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (Python bindings, CLI)               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Pipeline (services::visualization)                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Provider Traits (ImageryProvider, AlertDispatcher,     │
//! │  ContentLookup)                                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼──────────────┐     ┌───────────▼─────────────┐
//! │ Remote backends  │     │ Local backends          │
//! │ (gateway/Twilio/ │     │ (in-memory)             │
//! │  YouTube REST)   │     │                         │
//! └──────────────────┘     └─────────────────────────┘
//! ```

#[cfg(not(any(feature = "local-providers", feature = "remote-providers")))]
compile_error!("Enable at least one provider backend feature.");

pub mod alerting;
pub mod config;
pub mod content;
pub mod error;
pub mod factory;
pub mod imagery;
#[cfg(feature = "local-providers")]
pub mod local;
#[cfg(feature = "remote-providers")]
pub mod remote;

use std::sync::Arc;

use once_cell::sync::OnceCell;

pub use alerting::AlertDispatcher;
pub use config::ProviderConfig;
pub use content::{ContentLookup, VideoItem};
pub use error::{ProviderError, ProviderResult};
pub use factory::{ProviderFactory, ProviderKind};
pub use imagery::{ImageryProvider, SO2_BAND};
#[cfg(feature = "local-providers")]
pub use local::LocalProviders;

/// Trait-object bundle handed to the pipeline.
#[derive(Clone)]
pub struct Providers {
    pub imagery: Arc<dyn ImageryProvider>,
    pub alerts: Arc<dyn AlertDispatcher>,
    pub content: Arc<dyn ContentLookup>,
}

static REGISTRY: OnceCell<Providers> = OnceCell::new();

/// Initialize the process-wide provider registry from configuration.
///
/// Reads `providers.toml` (or defaults) and the `SO2WATCH_PROVIDERS`
/// environment variable. Idempotent: calling again after successful
/// initialization is a no-op.
pub fn init_providers() -> ProviderResult<()> {
    if REGISTRY.get().is_some() {
        return Ok(());
    }
    let config = ProviderConfig::from_default_locations()?;
    let kind = match ProviderKind::from_str(&config.providers.provider_type) {
        Ok(kind) => kind,
        Err(_) => ProviderKind::from_env(),
    };
    let providers = ProviderFactory::create(kind, &config)?;
    let _ = REGISTRY.set(providers);
    Ok(())
}

/// Initialize the registry with an explicit bundle (tests, embedding).
pub fn init_providers_with(providers: Providers) {
    let _ = REGISTRY.set(providers);
}

/// Get the initialized provider bundle.
pub fn get_providers() -> ProviderResult<Providers> {
    REGISTRY.get().cloned().ok_or_else(|| {
        ProviderError::ConfigurationError(
            "providers are not initialized; call init_providers() first".to_string(),
        )
    })
}

//! Alert dispatcher trait: SMS-style notification delivery.

use async_trait::async_trait;

use super::error::ProviderResult;

/// Abstract interface for notification delivery (SMS or similar).
///
/// The pipeline invokes this only when an alert triggered and the caller
/// supplied a recipient. Delivery acknowledgments are not inspected beyond
/// success/failure; a failure is logged and reported as an inline notice,
/// never as a fatal error.
#[async_trait]
pub trait AlertDispatcher: Send + Sync {
    async fn send(&self, recipient: &str, message: &str) -> ProviderResult<()>;
}

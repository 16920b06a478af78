//! Integration tests for provider selection and the process-wide registry.

use so2watch_rust::models::{DateRange, GeoPoint, Region};
use so2watch_rust::providers::local::LocalProviders;
use so2watch_rust::providers::{
    self, ProviderFactory, ProviderKind,
};

#[test]
fn test_provider_kind_parsing() {
    assert!(matches!(
        ProviderKind::from_str("local"),
        Ok(ProviderKind::Local)
    ));
    assert!(matches!(
        ProviderKind::from_str("LOCAL"),
        Ok(ProviderKind::Local)
    ));
    assert!(matches!(
        ProviderKind::from_str("remote"),
        Ok(ProviderKind::Remote)
    ));
    assert!(ProviderKind::from_str("azure").is_err());
}

#[tokio::test]
async fn test_factory_creates_working_local_providers() {
    let providers = ProviderFactory::create_local().unwrap();

    let range = DateRange::parse("2020-01-01", "2020-01-15").unwrap();
    let region = Region::new(GeoPoint::new(0.0, 0.0).unwrap(), 100_000.0);

    // Fresh local providers serve an empty series without error
    let series = providers.imagery.fetch_series(&range, &region).await.unwrap();
    assert!(series.is_empty());

    providers.alerts.send("+15551234567", "test").await.unwrap();
    let videos = providers.content.search("so2", 5).await.unwrap();
    assert!(!videos.is_empty());
}

#[tokio::test]
async fn test_registry_init_is_idempotent() {
    let local = LocalProviders::new();
    providers::init_providers_with(local.as_providers());
    // A second init must not panic or replace the registry
    providers::init_providers_with(LocalProviders::new().as_providers());

    let registered = providers::get_providers().unwrap();
    registered.alerts.send("+15550000000", "ping").await.unwrap();

    // The first bundle won registration, so its dispatcher saw the message
    assert_eq!(local.alerts.sent_messages().len(), 1);
}

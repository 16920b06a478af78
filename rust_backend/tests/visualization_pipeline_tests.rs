//! Integration tests for the end-to-end visualization pipeline.
//!
//! These run the full region -> fetch -> aggregate -> threshold -> alert
//! flow against the in-memory local providers.

use chrono::{TimeZone, Utc};

use so2watch_rust::models::{
    DateRange, GeoPoint, GridGeometry, Observation, Region, VisualizationRequest,
};
use so2watch_rust::providers::local::LocalProviders;
use so2watch_rust::services::{run_visualization, PipelineParams, VisualizationError};

/// Pipeline params with a coarse analysis grid so each test run stays fast.
fn test_params() -> PipelineParams {
    PipelineParams {
        reduction_scale_meters: 10_000.0,
        ..PipelineParams::default()
    }
}

fn request(
    latitude: f64,
    longitude: f64,
    recipient: Option<&str>,
) -> VisualizationRequest {
    VisualizationRequest::new(
        GeoPoint::new(latitude, longitude).unwrap(),
        DateRange::parse("2020-01-01", "2020-01-15").unwrap(),
        recipient.map(|r| r.to_string()),
    )
}

/// Load one uniform observation covering the region around (lat, lon).
fn load_uniform_scene(providers: &LocalProviders, latitude: f64, longitude: f64, value: f64) {
    let region = Region::new(GeoPoint::new(latitude, longitude).unwrap(), 100_000.0);
    let grid = GridGeometry::covering(&region, 10_000.0);
    let ts = Utc.with_ymd_and_hms(2020, 1, 5, 12, 0, 0).unwrap();
    providers
        .imagery
        .add_observation(Observation::uniform(grid, ts, value));
}

#[tokio::test]
async fn test_quiet_scene_does_not_trigger_or_dispatch() {
    let local = LocalProviders::new();
    load_uniform_scene(&local, 0.0, 0.0, 0.0001);

    let outcome = run_visualization(
        &local.as_providers(),
        &request(0.0, 0.0, Some("+15551234567")),
        &test_params(),
    )
    .await
    .unwrap();

    assert!(!outcome.decision.triggered);
    assert_eq!(outcome.decision.observed_max, Some(0.0001));
    assert!(!outcome.alert_sent);
    assert!(outcome.videos.is_empty());
    assert!(local.alerts.sent_messages().is_empty());
}

#[tokio::test]
async fn test_hot_scene_triggers_and_dispatches_once() {
    let local = LocalProviders::new();
    load_uniform_scene(&local, 40.7, -74.0, 0.0005);

    let outcome = run_visualization(
        &local.as_providers(),
        &request(40.7, -74.0, Some("+15551234567")),
        &test_params(),
    )
    .await
    .unwrap();

    assert!(outcome.decision.triggered);
    assert!(outcome.alert_sent);
    assert!(!outcome.videos.is_empty());

    let sent = local.alerts.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "+15551234567");
    assert!(sent[0].1.contains("Location (40.70, -74.00)"));
    assert!(sent[0].1.contains("2020-01-01"));
    assert!(sent[0].1.contains("2020-01-15"));
}

#[tokio::test]
async fn test_hot_scene_across_the_antimeridian_still_triggers() {
    let local = LocalProviders::new();
    // Plume centred ~11 km away from the query point, on the far side of
    // the ±180 seam but well inside the 100 km buffer.
    load_uniform_scene(&local, 0.0, -179.95, 0.01);

    let outcome = run_visualization(
        &local.as_providers(),
        &request(0.0, 179.95, Some("+15551234567")),
        &test_params(),
    )
    .await
    .unwrap();

    assert!(!outcome.no_data);
    assert!(outcome.decision.triggered);
    assert_eq!(outcome.decision.observed_max, Some(0.01));
    assert_eq!(local.alerts.sent_messages().len(), 1);
}

#[tokio::test]
async fn test_trigger_without_recipient_skips_dispatch() {
    let local = LocalProviders::new();
    load_uniform_scene(&local, 40.7, -74.0, 0.0005);

    let outcome = run_visualization(
        &local.as_providers(),
        &request(40.7, -74.0, None),
        &test_params(),
    )
    .await
    .unwrap();

    assert!(outcome.decision.triggered);
    assert!(!outcome.alert_sent);
    assert!(outcome.alert_notice.is_none());
    assert!(local.alerts.sent_messages().is_empty());
    // Content lookup still runs on trigger
    assert!(!outcome.videos.is_empty());
}

#[tokio::test]
async fn test_inverted_date_range_never_reaches_the_provider() {
    let local = LocalProviders::new();

    let range = DateRange::parse("2020-02-01", "2020-01-01");
    assert!(range.is_err());

    // Request construction is impossible with an inverted range, so no fetch
    // can have been issued.
    assert_eq!(local.imagery.fetch_count(), 0);
}

#[tokio::test]
async fn test_maximum_exactly_at_threshold_does_not_trigger() {
    let local = LocalProviders::new();
    load_uniform_scene(&local, 0.0, 0.0, 0.0003);

    let outcome = run_visualization(
        &local.as_providers(),
        &request(0.0, 0.0, Some("+15551234567")),
        &test_params(),
    )
    .await
    .unwrap();

    assert!(!outcome.decision.triggered);
    assert_eq!(outcome.decision.observed_max, Some(0.0003));
    assert!(local.alerts.sent_messages().is_empty());
}

#[tokio::test]
async fn test_no_observations_is_no_data_not_an_alert() {
    let local = LocalProviders::new();

    let outcome = run_visualization(
        &local.as_providers(),
        &request(0.0, 0.0, Some("+15551234567")),
        &test_params(),
    )
    .await
    .unwrap();

    assert!(outcome.no_data);
    assert!(!outcome.decision.triggered);
    assert_eq!(outcome.decision.observed_max, None);
    assert!(local.alerts.sent_messages().is_empty());
}

#[tokio::test]
async fn test_imagery_outage_is_fatal() {
    let local = LocalProviders::new();
    local.imagery.fail_next_fetch();

    let result = run_visualization(
        &local.as_providers(),
        &request(0.0, 0.0, None),
        &test_params(),
    )
    .await;

    assert!(matches!(result, Err(VisualizationError::Imagery(_))));
}

#[tokio::test]
async fn test_dispatch_failure_degrades_to_notice() {
    let local = LocalProviders::new();
    load_uniform_scene(&local, 40.7, -74.0, 0.0005);
    local.alerts.set_failing(true);

    let outcome = run_visualization(
        &local.as_providers(),
        &request(40.7, -74.0, Some("+15551234567")),
        &test_params(),
    )
    .await
    .unwrap();

    // The map and decision survive the notification outage
    assert!(outcome.decision.triggered);
    assert!(!outcome.alert_sent);
    assert!(outcome.alert_notice.is_some());
    assert!(!outcome.videos.is_empty());
}

#[tokio::test]
async fn test_content_failure_degrades_to_notice() {
    let local = LocalProviders::new();
    load_uniform_scene(&local, 40.7, -74.0, 0.0005);
    local.content.set_failing(true);

    let outcome = run_visualization(
        &local.as_providers(),
        &request(40.7, -74.0, Some("+15551234567")),
        &test_params(),
    )
    .await
    .unwrap();

    assert!(outcome.decision.triggered);
    assert!(outcome.alert_sent);
    assert!(outcome.videos.is_empty());
    assert!(outcome.content_notice.is_some());
}

#[tokio::test]
async fn test_videos_are_capped_at_max() {
    let local = LocalProviders::new();
    load_uniform_scene(&local, 40.7, -74.0, 0.0005);
    for i in 0..10 {
        local.content.add_video(&format!("Extra video {}", i), &format!("extra-{}", i));
    }

    let outcome = run_visualization(
        &local.as_providers(),
        &request(40.7, -74.0, None),
        &test_params(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.videos.len(), PipelineParams::default().max_videos);
}

#[tokio::test]
async fn test_hotspot_outside_region_is_ignored() {
    let local = LocalProviders::new();
    load_uniform_scene(&local, 0.0, 0.0, 0.0001);

    // A severe plume 300 km away must not affect this query
    load_uniform_scene(&local, 0.0, 3.0, 0.01);

    let outcome = run_visualization(
        &local.as_providers(),
        &request(0.0, 0.0, Some("+15551234567")),
        &test_params(),
    )
    .await
    .unwrap();

    assert!(!outcome.decision.triggered);
    assert_eq!(outcome.decision.observed_max, Some(0.0001));
}

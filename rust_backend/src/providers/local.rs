//! In-memory local providers.
//!
//! This module provides local implementations of all provider traits
//! suitable for unit testing and local development. Observations, dispatched
//! messages and canned videos live in memory behind `Arc<RwLock<..>>`,
//! giving fast, deterministic and isolated execution. The imagery provider
//! counts queries and the dispatcher records every message, so tests can
//! assert "no network call attempted" and "sent exactly once".

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use super::alerting::AlertDispatcher;
use super::content::{ContentLookup, VideoItem};
use super::error::{ProviderError, ProviderResult};
use super::imagery::ImageryProvider;
use super::Providers;
use crate::models::{DateRange, ImageSeries, Observation, Region};

/// In-memory imagery provider serving pre-loaded synthetic observations.
#[derive(Clone, Default)]
pub struct LocalImageryProvider {
    data: Arc<RwLock<LocalImageryData>>,
}

#[derive(Default)]
struct LocalImageryData {
    observations: Vec<Observation>,
    fetch_count: usize,
    fail_next: bool,
}

impl LocalImageryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a synthetic observation.
    pub fn add_observation(&self, observation: Observation) {
        self.data.write().unwrap().observations.push(observation);
    }

    /// Number of `fetch_series` calls issued so far.
    pub fn fetch_count(&self) -> usize {
        self.data.read().unwrap().fetch_count
    }

    /// Make the next fetch fail with a connection error, for testing the
    /// fatal imagery-failure path.
    pub fn fail_next_fetch(&self) {
        self.data.write().unwrap().fail_next = true;
    }

    /// Remove all observations and reset counters.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalImageryData::default();
    }
}

#[async_trait]
impl ImageryProvider for LocalImageryProvider {
    async fn fetch_series(
        &self,
        range: &DateRange,
        region: &Region,
    ) -> ProviderResult<ImageSeries> {
        let mut data = self.data.write().unwrap();
        data.fetch_count += 1;

        if data.fail_next {
            data.fail_next = false;
            return Err(ProviderError::ConnectionError(
                "simulated imagery service outage".to_string(),
            ));
        }

        let matching: Vec<Observation> = data
            .observations
            .iter()
            .filter(|o| range.contains(o.timestamp) && region.intersects_rect(o.footprint()))
            .cloned()
            .collect();

        Ok(ImageSeries::from_observations(matching))
    }
}

/// Alert dispatcher that records messages instead of sending them.
#[derive(Clone, Default)]
pub struct LocalAlertDispatcher {
    data: Arc<RwLock<LocalDispatchData>>,
}

#[derive(Default)]
struct LocalDispatchData {
    sent: Vec<(String, String)>,
    failing: bool,
}

impl LocalAlertDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All (recipient, message) pairs dispatched so far, in order.
    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.data.read().unwrap().sent.clone()
    }

    /// Toggle failure mode for testing graceful degradation.
    pub fn set_failing(&self, failing: bool) {
        self.data.write().unwrap().failing = failing;
    }
}

#[async_trait]
impl AlertDispatcher for LocalAlertDispatcher {
    async fn send(&self, recipient: &str, message: &str) -> ProviderResult<()> {
        let mut data = self.data.write().unwrap();
        if data.failing {
            return Err(ProviderError::ConnectionError(
                "simulated notification outage".to_string(),
            ));
        }
        data.sent.push((recipient.to_string(), message.to_string()));
        Ok(())
    }
}

/// Content lookup serving a canned, ordered video list.
#[derive(Clone, Default)]
pub struct LocalContentLookup {
    data: Arc<RwLock<LocalContentData>>,
}

#[derive(Default)]
struct LocalContentData {
    videos: Vec<VideoItem>,
    failing: bool,
}

impl LocalContentLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup pre-loaded with a small set of plausible results.
    pub fn with_default_videos() -> Self {
        let lookup = Self::new();
        lookup.add_video("Sulfur dioxide and your health", "so2-health-101");
        lookup.add_video("How satellites track volcanic SO2 plumes", "s5p-tracking");
        lookup.add_video("Air quality precautions during SO2 events", "so2-precautions");
        lookup
    }

    pub fn add_video(&self, title: &str, video_id: &str) {
        let mut data = self.data.write().unwrap();
        data.videos.push(VideoItem {
            title: title.to_string(),
            video_id: video_id.to_string(),
            url: format!("https://www.youtube.com/watch?v={}", video_id),
        });
    }

    /// Toggle failure mode for testing graceful degradation.
    pub fn set_failing(&self, failing: bool) {
        self.data.write().unwrap().failing = failing;
    }
}

#[async_trait]
impl ContentLookup for LocalContentLookup {
    async fn search(&self, _query: &str, max_results: usize) -> ProviderResult<Vec<VideoItem>> {
        let data = self.data.read().unwrap();
        if data.failing {
            return Err(ProviderError::ConnectionError(
                "simulated content service outage".to_string(),
            ));
        }
        Ok(data.videos.iter().take(max_results).cloned().collect())
    }
}

/// Bundle of local providers with handles retained for test assertions.
#[derive(Clone, Default)]
pub struct LocalProviders {
    pub imagery: LocalImageryProvider,
    pub alerts: LocalAlertDispatcher,
    pub content: LocalContentLookup,
}

impl LocalProviders {
    pub fn new() -> Self {
        Self {
            imagery: LocalImageryProvider::new(),
            alerts: LocalAlertDispatcher::new(),
            content: LocalContentLookup::with_default_videos(),
        }
    }

    /// Trait-object bundle for the pipeline; the concrete handles keep
    /// pointing at the same shared state.
    pub fn as_providers(&self) -> Providers {
        Providers {
            imagery: Arc::new(self.imagery.clone()),
            alerts: Arc::new(self.alerts.clone()),
            content: Arc::new(self.content.clone()),
        }
    }
}

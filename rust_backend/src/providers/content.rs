//! Content lookup trait: related-video search.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::ProviderResult;

/// One related media item returned by a content search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    pub title: String,
    pub video_id: String,
    pub url: String,
}

/// Abstract interface for related-content search, filtered to videos.
///
/// Returns an ordered list of at most `max_results` items. Video
/// suggestions are a non-critical enhancement: lookup failure must degrade
/// gracefully to "no related content" and never abort a request.
#[async_trait]
pub trait ContentLookup: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> ProviderResult<Vec<VideoItem>>;
}

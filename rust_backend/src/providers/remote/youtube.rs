//! Related-video search through the YouTube Data API.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::map_transport_error;
use crate::providers::config::ProviderConfig;
use crate::providers::content::{ContentLookup, VideoItem};
use crate::providers::error::{ProviderError, ProviderResult};

const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Content lookup backed by YouTube search, filtered to videos.
pub struct YoutubeContentLookup {
    client: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    title: String,
}

impl YoutubeContentLookup {
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.youtube.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.youtube_api_key()?,
        })
    }
}

#[async_trait]
impl ContentLookup for YoutubeContentLookup {
    async fn search(&self, query: &str, max_results: usize) -> ProviderResult<Vec<VideoItem>> {
        let max_results = max_results.to_string();
        let response = self
            .client
            .get(YOUTUBE_SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| map_transport_error("video search", e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::AuthError(format!(
                "YouTube API rejected the key: {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(ProviderError::QueryError(format!(
                "YouTube API returned {}",
                status
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| map_transport_error("video search response", e))?;

        let videos = body
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(VideoItem {
                    url: format!("https://www.youtube.com/watch?v={}", video_id),
                    title: item.snippet.title,
                    video_id,
                })
            })
            .collect();

        Ok(videos)
    }
}

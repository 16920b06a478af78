//! HTTP client for the satellite imagery gateway.
//!
//! The gateway fronts the Earth Engine catalog (Sentinel-5P OFFL L3 SO2
//! product) and exposes a plain REST query: band, ISO start/end dates and a
//! point-plus-radius region. It returns the matching rasters as JSON grids.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::map_transport_error;
use crate::models::{DateRange, GeoRect, GridGeometry, ImageSeries, Observation, Region};
use crate::providers::config::ProviderConfig;
use crate::providers::error::{ProviderError, ProviderResult};
use crate::providers::imagery::{ImageryProvider, SO2_BAND};

/// Imagery collection queried for SO2 scenes.
const SO2_COLLECTION: &str = "COPERNICUS/S5P/OFFL/L3_SO2";

/// Remote imagery provider talking to the gateway service.
pub struct ImageryGateway {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    observations: Vec<ObservationDto>,
}

#[derive(Debug, Deserialize)]
struct ObservationDto {
    timestamp: chrono::DateTime<chrono::Utc>,
    west: f64,
    south: f64,
    east: f64,
    north: f64,
    cols: usize,
    rows: usize,
    values: Vec<Option<f64>>,
}

impl ImageryGateway {
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        if config.imagery.base_url.is_empty() {
            return Err(ProviderError::ConfigurationError(
                "imagery.base_url is not configured".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.imagery.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.imagery.base_url.trim_end_matches('/').to_string(),
            token: config.imagery_token(),
        })
    }

    fn convert(dto: ObservationDto) -> ProviderResult<Observation> {
        let expected = dto.cols * dto.rows;
        if dto.values.len() != expected {
            return Err(ProviderError::QueryError(format!(
                "observation grid mismatch: {}x{} but {} values",
                dto.cols,
                dto.rows,
                dto.values.len()
            )));
        }
        let grid = GridGeometry::new(
            GeoRect::from_wsen(dto.west, dto.south, dto.east, dto.north),
            dto.cols,
            dto.rows,
        );
        Ok(Observation {
            timestamp: dto.timestamp,
            grid,
            values: dto.values,
        })
    }
}

#[async_trait]
impl ImageryProvider for ImageryGateway {
    async fn fetch_series(
        &self,
        range: &DateRange,
        region: &Region,
    ) -> ProviderResult<ImageSeries> {
        let url = format!("{}/collections/series", self.base_url);
        let start = range.start_iso();
        let end = range.end_iso();
        let lat = region.center().latitude().to_string();
        let lon = region.center().longitude().to_string();
        let radius_m = region.radius_meters().to_string();
        let mut request = self.client.get(&url).query(&[
            ("collection", SO2_COLLECTION),
            ("band", SO2_BAND),
            ("start", start.as_str()),
            ("end", end.as_str()),
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("radius_m", radius_m.as_str()),
        ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| map_transport_error("imagery query", e))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::AuthError(format!(
                "imagery gateway rejected credentials: {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(ProviderError::QueryError(format!(
                "imagery gateway returned {}",
                status
            )));
        }

        let body: SeriesResponse = response
            .json()
            .await
            .map_err(|e| map_transport_error("imagery response", e))?;

        let observations = body
            .observations
            .into_iter()
            .map(Self::convert)
            .collect::<ProviderResult<Vec<_>>>()?;

        Ok(ImageSeries::from_observations(observations))
    }
}

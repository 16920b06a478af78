//! Imagery provider trait: the satellite imagery query service.

use async_trait::async_trait;

use super::error::ProviderResult;
use crate::models::{DateRange, ImageSeries, Region};

/// Name of the pollutant band every imagery query is restricted to.
pub const SO2_BAND: &str = "SO2_column_number_density";

/// Abstract interface to the satellite imagery service.
///
/// Implementations return every observation whose timestamp falls within the
/// range (both endpoints inclusive) and whose footprint intersects the
/// region, restricted to the [`SO2_BAND`] band. This layer does not retry
/// and does not cache: a transport failure propagates to the caller, where
/// it is fatal for the current request.
#[async_trait]
pub trait ImageryProvider: Send + Sync {
    async fn fetch_series(&self, range: &DateRange, region: &Region)
        -> ProviderResult<ImageSeries>;
}

//! Single-band raster observations and the fixed analysis grid.
//!
//! Observations carry one scalar band (SO2 column number density, mol/m²)
//! per pixel, with `None` marking pixels the instrument did not resolve.
//! Aggregation and reduction never interpolate the native pixel grid;
//! instead both sample an analysis grid built over the query region at a
//! fixed metre scale, which is what makes the reduction "best-effort":
//! region boundaries are approximated at cell-centre resolution in exchange
//! for bounded, deterministic computation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::geo::{GeoPoint, GeoRect, Region, METERS_PER_DEGREE_LAT};

/// Regular lat/lon grid with a fixed number of columns and rows over a
/// bounding rectangle. Row 0 is the southernmost row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    pub bounds: GeoRect,
    pub cols: usize,
    pub rows: usize,
}

impl GridGeometry {
    pub fn new(bounds: GeoRect, cols: usize, rows: usize) -> Self {
        Self { bounds, cols, rows }
    }

    /// Build the analysis grid covering a region's bounding rectangle with
    /// cells of roughly `scale_meters` on a side.
    pub fn covering(region: &Region, scale_meters: f64) -> Self {
        let bounds = region.bounding_rect();
        let mid_lat = (bounds.south + bounds.north) / 2.0;
        let meters_per_degree_lon = METERS_PER_DEGREE_LAT * mid_lat.to_radians().cos().max(1e-6);

        let width_m = bounds.width_degrees() * meters_per_degree_lon;
        let height_m = bounds.height_degrees() * METERS_PER_DEGREE_LAT;

        let cols = (width_m / scale_meters).ceil().max(1.0) as usize;
        let rows = (height_m / scale_meters).ceil().max(1.0) as usize;

        Self { bounds, cols, rows }
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Centre of the cell at (col, row). Panics only on an out-of-range
    /// index, which indicates a caller bug.
    pub fn cell_center(&self, col: usize, row: usize) -> GeoPoint {
        debug_assert!(col < self.cols && row < self.rows);
        let mut lon = self.bounds.west
            + (col as f64 + 0.5) * self.bounds.width_degrees() / self.cols as f64;
        // Bounds spanning the ±180 antimeridian are unwrapped; bring the
        // centre back into canonical longitude range.
        if lon > 180.0 {
            lon -= 360.0;
        } else if lon < -180.0 {
            lon += 360.0;
        }
        let lat = self.bounds.south
            + (row as f64 + 0.5) * self.bounds.height_degrees() / self.rows as f64;
        // Cell centres derived from a valid bounding rect stay in range
        GeoPoint::new(lat.clamp(-90.0, 90.0), lon)
            .expect("cell center within valid coordinate range")
    }

    /// Grid index containing `point`, or `None` if outside the bounds.
    /// Longitudes are compared modulo 360 so grids built over a region
    /// that spans the ±180 antimeridian index far-side points correctly.
    pub fn index_of(&self, point: &GeoPoint) -> Option<(usize, usize)> {
        if !self.bounds.contains(point) {
            return None;
        }
        let lon = self.bounds.wrap_lon(point.longitude());
        let fx = (lon - self.bounds.west) / self.bounds.width_degrees();
        let fy = (point.latitude() - self.bounds.south) / self.bounds.height_degrees();

        let col = ((fx * self.cols as f64) as usize).min(self.cols - 1);
        let row = ((fy * self.rows as f64) as usize).min(self.rows - 1);
        Some((col, row))
    }

    /// Iterate all cell centres with their flat index, row-major from the
    /// south-west corner.
    pub fn iter_cell_centers(&self) -> impl Iterator<Item = (usize, GeoPoint)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols).map(move |col| (row * self.cols + col, self.cell_center(col, row)))
        })
    }
}

/// One time-stamped satellite observation of the SO2 band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub grid: GridGeometry,
    /// Row-major pixel values; `None` is a no-data pixel.
    pub values: Vec<Option<f64>>,
}

impl Observation {
    /// Observation with every pixel set to the same density. Used by the
    /// local provider and tests to build synthetic scenes.
    pub fn uniform(grid: GridGeometry, timestamp: DateTime<Utc>, value: f64) -> Self {
        let values = vec![Some(value); grid.cell_count()];
        Self {
            timestamp,
            grid,
            values,
        }
    }

    /// Observation with no resolved pixels.
    pub fn empty(grid: GridGeometry, timestamp: DateTime<Utc>) -> Self {
        let values = vec![None; grid.cell_count()];
        Self {
            timestamp,
            grid,
            values,
        }
    }

    pub fn footprint(&self) -> &GeoRect {
        &self.grid.bounds
    }

    pub fn set_value(&mut self, col: usize, row: usize, value: f64) {
        let idx = row * self.grid.cols + col;
        self.values[idx] = Some(value);
    }

    /// Nearest-pixel sample at a geographic point; `None` outside the
    /// footprint or on a no-data pixel.
    pub fn sample(&self, point: &GeoPoint) -> Option<f64> {
        let (col, row) = self.grid.index_of(point)?;
        self.values[row * self.grid.cols + col]
    }
}

/// Time-ordered collection of observations matching one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSeries {
    observations: Vec<Observation>,
}

impl ImageSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series, ordering observations by timestamp ascending.
    pub fn from_observations(mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|o| o.timestamp);
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }
}

/// Per-cell median of an [`ImageSeries`] sampled on the analysis grid.
///
/// An aggregate with no resolved cells means "no data" and must never be
/// read as a zero-density scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedImage {
    pub grid: GridGeometry,
    /// Row-major median values; `None` where no observation had data.
    pub values: Vec<Option<f64>>,
}

impl AggregatedImage {
    /// Aggregate with no data in any cell.
    pub fn no_data(grid: GridGeometry) -> Self {
        let values = vec![None; grid.cell_count()];
        Self { grid, values }
    }

    /// True when not a single cell holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }

    /// Iterate resolved cells as (centre, value) pairs.
    pub fn iter_values(&self) -> impl Iterator<Item = (GeoPoint, f64)> + '_ {
        self.grid
            .iter_cell_centers()
            .filter_map(move |(idx, center)| self.values[idx].map(|v| (center, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geo::Region;
    use chrono::TimeZone;

    fn test_region() -> Region {
        Region::new(GeoPoint::new(0.0, 0.0).unwrap(), 100_000.0)
    }

    #[test]
    fn test_grid_covering_dimensions() {
        let grid = GridGeometry::covering(&test_region(), 1000.0);
        // 200 km across at 1 km cells, allowing for ceil rounding
        assert!(grid.cols >= 200 && grid.cols <= 202, "cols = {}", grid.cols);
        assert!(grid.rows >= 200 && grid.rows <= 202, "rows = {}", grid.rows);
    }

    #[test]
    fn test_cell_center_round_trip() {
        let grid = GridGeometry::covering(&test_region(), 1000.0);
        let center = grid.cell_center(10, 20);
        assert_eq!(grid.index_of(&center), Some((10, 20)));
    }

    #[test]
    fn test_grid_spanning_the_antimeridian() {
        let region = Region::new(GeoPoint::new(0.0, 179.95).unwrap(), 100_000.0);
        let grid = GridGeometry::covering(&region, 1000.0);

        // Every cell centre is a canonical coordinate and round-trips to
        // its own index, including cells past the ±180 seam.
        for (_, center) in grid.iter_cell_centers() {
            assert!(center.longitude() >= -180.0 && center.longitude() <= 180.0);
        }
        let east_edge = grid.cell_center(grid.cols - 1, grid.rows / 2);
        assert!(east_edge.longitude() < 0.0, "lon = {}", east_edge.longitude());
        assert_eq!(
            grid.index_of(&east_edge),
            Some((grid.cols - 1, grid.rows / 2))
        );
        // A point ~11 km west of the centre, across the seam, indexes too.
        let far_side = GeoPoint::new(0.0, -179.95).unwrap();
        assert!(grid.index_of(&far_side).is_some());
    }

    #[test]
    fn test_index_outside_bounds() {
        let grid = GridGeometry::covering(&test_region(), 1000.0);
        let far = GeoPoint::new(45.0, 45.0).unwrap();
        assert_eq!(grid.index_of(&far), None);
    }

    #[test]
    fn test_observation_sampling() {
        let grid = GridGeometry::new(GeoRect::from_wsen(-1.0, -1.0, 1.0, 1.0), 4, 4);
        let ts = Utc.with_ymd_and_hms(2020, 1, 5, 12, 0, 0).unwrap();
        let mut obs = Observation::empty(grid, ts);
        obs.set_value(2, 1, 0.0005);

        let hit = grid.cell_center(2, 1);
        let miss = grid.cell_center(0, 0);
        assert_eq!(obs.sample(&hit), Some(0.0005));
        assert_eq!(obs.sample(&miss), None);

        let outside = GeoPoint::new(5.0, 5.0).unwrap();
        assert_eq!(obs.sample(&outside), None);
    }

    #[test]
    fn test_series_is_time_ordered() {
        let grid = GridGeometry::new(GeoRect::from_wsen(-1.0, -1.0, 1.0, 1.0), 2, 2);
        let t1 = Utc.with_ymd_and_hms(2020, 1, 10, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap();

        let series = ImageSeries::from_observations(vec![
            Observation::uniform(grid, t1, 0.1),
            Observation::uniform(grid, t2, 0.2),
        ]);
        let stamps: Vec<_> = series.iter().map(|o| o.timestamp).collect();
        assert_eq!(stamps, vec![t2, t1]);
    }

    #[test]
    fn test_no_data_aggregate_is_empty() {
        let grid = GridGeometry::covering(&test_region(), 10_000.0);
        assert!(AggregatedImage::no_data(grid).is_empty());
    }
}

//! Temporal aggregation of an observation series onto the analysis grid.
//!
//! Every observation is sampled nearest-pixel at each analysis-cell centre,
//! then the per-cell samples are collapsed to their median. The median is
//! robust against the occasional retrieval spike in the S5P SO2 product,
//! which is why it is used instead of the mean.

use crate::models::raster::{AggregatedImage, GridGeometry, ImageSeries};

/// Collapse a time series of observations to a per-cell median image on the
/// given analysis grid.
///
/// Cells where no observation resolved a value stay `None`; an empty series
/// yields an all-`None` image. Non-finite samples are discarded before the
/// median is taken.
///
/// # Arguments
/// * `series` - Time-ordered observations returned by the imagery provider
/// * `grid` - Analysis grid covering the study region
///
/// # Returns
/// * The median image on `grid`
pub fn aggregate_series(series: &ImageSeries, grid: GridGeometry) -> AggregatedImage {
    if series.is_empty() {
        return AggregatedImage::no_data(grid);
    }

    let mut samples: Vec<Vec<f64>> = vec![Vec::new(); grid.cell_count()];
    for observation in series.iter() {
        for (idx, center) in grid.iter_cell_centers() {
            if let Some(value) = observation.sample(&center) {
                if value.is_finite() {
                    samples[idx].push(value);
                }
            }
        }
    }

    let values = samples.into_iter().map(median).collect();

    AggregatedImage { grid, values }
}

/// Median of a sample set, or `None` when empty. An even count averages the
/// two middle values.
fn median(mut samples: Vec<f64>) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by(|a, b| a.partial_cmp(b).expect("non-finite samples filtered out"));

    let mid = samples.len() / 2;
    if samples.len() % 2 == 1 {
        Some(samples[mid])
    } else {
        Some((samples[mid - 1] + samples[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::geo::GeoRect;
    use crate::models::raster::Observation;
    use chrono::{TimeZone, Utc};

    fn grid() -> GridGeometry {
        GridGeometry::new(GeoRect::from_wsen(-1.0, -1.0, 1.0, 1.0), 4, 4)
    }

    fn at_day(day: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_series_is_no_data() {
        let image = aggregate_series(&ImageSeries::empty(), grid());
        assert!(image.is_empty());
    }

    #[test]
    fn test_odd_count_takes_middle_value() {
        let g = grid();
        let series = ImageSeries::from_observations(vec![
            Observation::uniform(g, at_day(1), 0.0001),
            Observation::uniform(g, at_day(2), 0.0005),
            Observation::uniform(g, at_day(3), 0.0002),
        ]);
        let image = aggregate_series(&series, g);
        for (_, value) in image.iter_values() {
            assert!((value - 0.0002).abs() < 1e-12);
        }
    }

    #[test]
    fn test_even_count_averages_middles() {
        let g = grid();
        let series = ImageSeries::from_observations(vec![
            Observation::uniform(g, at_day(1), 0.0001),
            Observation::uniform(g, at_day(2), 0.0003),
        ]);
        let image = aggregate_series(&series, g);
        for (_, value) in image.iter_values() {
            assert!((value - 0.0002).abs() < 1e-12);
        }
    }

    #[test]
    fn test_no_data_pixels_are_skipped() {
        let g = grid();
        let mut partial = Observation::empty(g, at_day(1));
        partial.set_value(0, 0, 0.0009);

        let series = ImageSeries::from_observations(vec![
            partial,
            Observation::uniform(g, at_day(2), 0.0001),
        ]);
        let image = aggregate_series(&series, g);

        // Cell (0,0) saw two samples, every other cell only one
        let corner = image.values[0].unwrap();
        assert!((corner - 0.0005).abs() < 1e-12);
        assert_eq!(image.values[1], Some(0.0001));
    }

    #[test]
    fn test_all_empty_observations_stay_no_data() {
        let g = grid();
        let series = ImageSeries::from_observations(vec![
            Observation::empty(g, at_day(1)),
            Observation::empty(g, at_day(2)),
        ]);
        assert!(aggregate_series(&series, g).is_empty());
    }
}

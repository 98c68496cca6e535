//! The simulator pipeline: load, solve geodesics in parallel, attach coordinates.

use geodesy::{GeodesyResult, ReferencePoint};
use rayon::prelude::*;
use raster::{geotiff, print_raster, Dimension, RasterDataset};
use tracing::{debug, info, warn};

use crate::config::SimulatorConfig;
use crate::error::SimulatorResult;

/// Per-pair results split into positionally aligned sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatLonColumns {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
}

/// Run the whole pipeline on `config.raster_path`, printing the transform and
/// the before/after summaries to stdout.
pub fn run(config: &SimulatorConfig) -> SimulatorResult<RasterDataset> {
    config.validate()?;

    let mut raster = geotiff::open(&config.raster_path)?;
    println!("{}", raster.transform());
    print_raster(&raster);

    process(&mut raster, config)?;

    print_raster(&raster);
    Ok(raster)
}

/// Attach `lat`/`lon` coordinates on `(y, x)` to an already loaded raster.
///
/// The x and y axes are zipped by index, so only `min(width, height)` pairs
/// are computed. Each result sequence is laid along `x` and repeated for
/// every row, which requires `width <= height`.
pub fn process(raster: &mut RasterDataset, config: &SimulatorConfig) -> SimulatorResult<()> {
    match raster.crs() {
        Some(crs) if crs.is_geographic() => {}
        crs => warn!(crs = ?crs, "Raster CRS is not geographic, x/y may not be lon/lat"),
    }

    let pairs: Vec<(f64, f64)> = raster
        .x()
        .iter()
        .copied()
        .zip(raster.y().iter().copied())
        .collect();

    let columns = compute_latlon(&pairs, config.reference, config.workers)?;

    raster.assign_coord("lat", &[Dimension::Y, Dimension::X], columns.lat)?;
    raster.assign_coord("lon", &[Dimension::Y, Dimension::X], columns.lon)?;
    info!(pairs = pairs.len(), "Attached lat/lon coordinates");
    Ok(())
}

/// Solve every `(x, y)` pair against `reference` on a dedicated pool of
/// `workers` threads.
///
/// `x` is read as longitude and `y` as latitude. Output order matches input
/// order, and the first failing pair aborts the whole batch. The pool is torn
/// down before returning.
pub fn compute_latlon(
    pairs: &[(f64, f64)],
    reference: ReferencePoint,
    workers: usize,
) -> SimulatorResult<LatLonColumns> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("geodesic-{}", i))
        .build()?;
    debug!(workers, pairs = pairs.len(), "Dispatching geodesic batch");

    let results = pool.install(|| {
        pairs
            .par_iter()
            .map(|&(x, y)| geodesic_latlon(y, x, &reference))
            .collect::<GeodesyResult<Vec<_>>>()
    })?;

    let (lat, lon) = results.into_iter().unzip();
    Ok(LatLonColumns { lat, lon })
}

/// Latitude/longitude of a point after expressing it as a geodesic offset
/// from `reference` and walking that offset back out.
pub fn geodesic_latlon(
    latitude: f64,
    longitude: f64,
    reference: &ReferencePoint,
) -> GeodesyResult<(f64, f64)> {
    let offset = reference.offset_to(latitude, longitude)?;
    reference.apply(&offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use geodesy::GeodesyError;

    use crate::error::SimulatorError;

    const REFERENCE: ReferencePoint = ReferencePoint {
        latitude: 44.571,
        longitude: -125.149,
    };

    #[test]
    fn test_compute_preserves_order() {
        let pairs: Vec<(f64, f64)> = (0..64)
            .map(|i| (-125.2 + i as f64 * 0.001, 44.5 + i as f64 * 0.002))
            .collect();

        let columns = compute_latlon(&pairs, REFERENCE, 4).unwrap();

        assert_eq!(columns.lat.len(), pairs.len());
        assert_eq!(columns.lon.len(), pairs.len());
        for (i, &(x, y)) in pairs.iter().enumerate() {
            assert_abs_diff_eq!(columns.lat[i], y, epsilon = 1e-8);
            assert_abs_diff_eq!(columns.lon[i], x, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_reference_maps_to_itself() {
        let (lat, lon) = geodesic_latlon(44.571, -125.149, &REFERENCE).unwrap();
        assert_eq!((lat, lon), (44.571, -125.149));
    }

    #[test]
    fn test_empty_batch() {
        let columns = compute_latlon(&[], REFERENCE, 2).unwrap();
        assert_eq!(columns, LatLonColumns::default());
    }

    #[test]
    fn test_invalid_pair_aborts_batch() {
        let pairs = [(-125.0, 44.0), (-125.0, 95.0), (-125.0, 45.0)];
        let err = compute_latlon(&pairs, REFERENCE, 4).unwrap_err();
        assert!(matches!(
            err,
            SimulatorError::Geodesy(GeodesyError::InvalidLatitude(lat)) if lat == 95.0
        ));
    }
}

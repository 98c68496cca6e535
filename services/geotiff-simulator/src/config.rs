//! Simulator configuration.

use std::env;
use std::path::PathBuf;

use geodesy::ReferencePoint;

use crate::error::{SimulatorError, SimulatorResult};

/// Raster analysed when nothing else is configured.
pub const DEFAULT_RASTER_PATH: &str = "mosaic8mm.tiff";
/// Geodesic origin (degrees) when nothing else is configured.
pub const DEFAULT_REFERENCE: ReferencePoint = ReferencePoint {
    latitude: 44.571,
    longitude: -125.149,
};
pub const DEFAULT_WORKERS: usize = 4;

/// Inputs to a single simulator run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// GeoTIFF to load.
    pub raster_path: PathBuf,

    /// Origin of every distance/bearing computation.
    pub reference: ReferencePoint,

    /// Size of the geodesic worker pool.
    pub workers: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            raster_path: PathBuf::from(DEFAULT_RASTER_PATH),
            reference: DEFAULT_REFERENCE,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = env::var("RASTER_PATH") {
            config.raster_path = PathBuf::from(val);
        }

        if let Ok(val) = env::var("REFERENCE_LATITUDE") {
            if let Ok(lat) = val.parse() {
                config.reference.latitude = lat;
            }
        }

        if let Ok(val) = env::var("REFERENCE_LONGITUDE") {
            if let Ok(lon) = val.parse() {
                config.reference.longitude = lon;
            }
        }

        if let Ok(val) = env::var("SIMULATOR_WORKERS") {
            if let Ok(workers) = val.parse() {
                config.workers = workers;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> SimulatorResult<()> {
        if self.workers == 0 {
            return Err(SimulatorError::InvalidConfig(
                "workers must be > 0".to_string(),
            ));
        }

        self.reference
            .validate()
            .map_err(|e| SimulatorError::InvalidConfig(format!("reference point: {}", e)))
    }
}

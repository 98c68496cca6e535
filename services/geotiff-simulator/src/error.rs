//! Error types for the simulator pipeline.

use geodesy::GeodesyError;
use raster::RasterError;
use thiserror::Error;

/// Result type alias using SimulatorError.
pub type SimulatorResult<T> = Result<T, SimulatorError>;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error("geodesic computation failed: {0}")]
    Geodesy(#[from] GeodesyError),
}

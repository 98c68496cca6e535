//! Error types for geodesic conversions.

use thiserror::Error;

/// Result type alias using GeodesyError.
pub type GeodesyResult<T> = Result<T, GeodesyError>;

/// Invalid input handed to the geodesic solver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeodesyError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),

    #[error("non-finite {name}: {value}")]
    NonFinite { name: &'static str, value: f64 },
}

impl GeodesyError {
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFinite { name, value }
    }
}

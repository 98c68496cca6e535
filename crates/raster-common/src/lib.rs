//! Common georeferencing types shared across the geotiff-simulator workspace.

pub mod affine;
pub mod bbox;
pub mod crs;

pub use affine::{Affine, AffineError};
pub use bbox::BoundingBox;
pub use crs::CrsCode;

//! GeoTIFF simulator library.
//!
//! Loads a georeferenced raster, solves the WGS84 geodesic problem for each
//! positional (x, y) axis pair against a fixed reference point, and attaches
//! the resulting latitudes/longitudes as `lat`/`lon` coordinates on the
//! raster's `(y, x)` dimensions.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::SimulatorConfig;
pub use error::{SimulatorError, SimulatorResult};

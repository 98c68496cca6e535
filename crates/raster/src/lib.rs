//! Labeled raster datasets.
//!
//! A [`RasterDataset`] is a georeferenced grid of one or more bands with
//! `x`/`y` dimension coordinates derived from its affine transform. Extra
//! named coordinates (for example per-pixel `lat`/`lon`) can be attached on
//! the `(y, x)` dimensions after loading.
//!
//! GeoTIFF files are read with [`geotiff::open`], and [`summary`] renders the
//! diagnostic block printed before and after coordinates are attached.

pub mod dataset;
pub mod error;
pub mod geotiff;
pub mod summary;

pub use dataset::{Coordinate, Dimension, RasterDataset};
pub use error::{RasterError, RasterResult};
pub use raster_common::{Affine, BoundingBox, CrsCode};
pub use summary::{print_raster, RasterSummary};

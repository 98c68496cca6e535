//! In-memory labeled raster grid.

use std::collections::BTreeMap;
use std::fmt;

use raster_common::{Affine, BoundingBox, CrsCode};
use tracing::debug;

use crate::error::{RasterError, RasterResult};

/// Named axis of a raster dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Band,
    Y,
    X,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Band => "band",
            Dimension::Y => "y",
            Dimension::X => "x",
        };
        write!(f, "{}", name)
    }
}

/// A coordinate array laid out on one or more dimensions (row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    dims: Vec<Dimension>,
    shape: Vec<usize>,
    values: Vec<f64>,
}

impl Coordinate {
    pub fn dims(&self) -> &[Dimension] {
        &self.dims
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at `(row, col)` of a two-dimensional coordinate.
    pub fn get2(&self, row: usize, col: usize) -> Option<f64> {
        match self.shape.as_slice() {
            [rows, cols] if row < *rows && col < *cols => Some(self.values[row * cols + col]),
            _ => None,
        }
    }
}

/// A georeferenced raster with its bands and coordinates.
#[derive(Debug, Clone)]
pub struct RasterDataset {
    width: usize,
    height: usize,
    bands: Vec<Vec<f64>>,
    transform: Affine,
    crs: Option<CrsCode>,
    nodata: Option<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    coords: BTreeMap<String, Coordinate>,
}

impl RasterDataset {
    /// Build a dataset from row-major bands.
    ///
    /// The `x` and `y` dimension coordinates are the world positions of pixel
    /// centers along the first row and first column, so the transform must
    /// have no rotation or shear.
    pub fn new(
        width: usize,
        height: usize,
        bands: Vec<Vec<f64>>,
        transform: Affine,
        crs: Option<CrsCode>,
    ) -> RasterResult<Self> {
        if !transform.is_rectilinear() {
            return Err(RasterError::invalid_metadata(format!(
                "rotated transform (b = {}, d = {}) has no 1-D x/y axes",
                transform.b, transform.d
            )));
        }

        for (band, data) in bands.iter().enumerate() {
            if data.len() != width * height {
                return Err(RasterError::InvalidDimensions {
                    band,
                    width,
                    height,
                    len: data.len(),
                });
            }
        }

        let x = (0..width)
            .map(|col| transform.forward(col as f64 + 0.5, 0.5).0)
            .collect();
        let y = (0..height)
            .map(|row| transform.forward(0.5, row as f64 + 0.5).1)
            .collect();

        Ok(Self {
            width,
            height,
            bands,
            transform,
            crs,
            nodata: None,
            x,
            y,
            coords: BTreeMap::new(),
        })
    }

    /// Set the nodata sentinel excluded from statistics.
    pub fn with_nodata(mut self, nodata: Option<f64>) -> Self {
        self.nodata = nodata;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    pub fn band(&self, index: usize) -> Option<&[f64]> {
        self.bands.get(index).map(Vec::as_slice)
    }

    pub fn transform(&self) -> &Affine {
        &self.transform
    }

    pub fn crs(&self) -> Option<CrsCode> {
        self.crs
    }

    pub fn nodata(&self) -> Option<f64> {
        self.nodata
    }

    /// Pixel-center x coordinates, one per column.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Pixel-center y coordinates, one per row.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn resolution(&self) -> (f64, f64) {
        self.transform.resolution()
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_transform(&self.transform, self.width, self.height)
    }

    /// Sum of every valid sample across all bands. NaN and nodata are skipped.
    pub fn sum(&self) -> f64 {
        self.bands
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan() && Some(*v) != self.nodata)
            .sum()
    }

    /// Look up an attached (non-dimension) coordinate.
    pub fn coord(&self, name: &str) -> Option<&Coordinate> {
        self.coords.get(name)
    }

    /// Names of attached coordinates in sorted order.
    pub fn coord_names(&self) -> impl Iterator<Item = &str> {
        self.coords.keys().map(String::as_str)
    }

    /// Attach a named coordinate on `dims`.
    ///
    /// `values` either fills the full target shape, or matches the length of
    /// the trailing dimension and is repeated across the leading ones. Any
    /// other length is rejected and the dataset is left untouched.
    pub fn assign_coord(
        &mut self,
        name: impl Into<String>,
        dims: &[Dimension],
        values: Vec<f64>,
    ) -> RasterResult<()> {
        let name = name.into();
        let shape: Vec<usize> = dims.iter().map(|dim| self.dim_len(*dim)).collect();
        let size: usize = shape.iter().product();
        let trailing = shape.last().copied().unwrap_or(1);

        let values = if values.len() == size {
            values
        } else if !values.is_empty() && values.len() == trailing {
            debug!(
                name = %name,
                len = values.len(),
                repeats = size / trailing,
                "Broadcasting coordinate along leading dimensions"
            );
            values.repeat(size / trailing)
        } else {
            return Err(RasterError::CoordinateShape {
                name,
                shape,
                len: values.len(),
            });
        };

        self.coords.insert(
            name,
            Coordinate {
                dims: dims.to_vec(),
                shape,
                values,
            },
        );
        Ok(())
    }

    fn dim_len(&self, dim: Dimension) -> usize {
        match dim {
            Dimension::Band => self.bands.len(),
            Dimension::Y => self.height,
            Dimension::X => self.width,
        }
    }
}

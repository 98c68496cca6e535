//! Affine pixel-to-world transforms.

use std::fmt;

/// A 2D affine transform mapping pixel (col, row) to world (x, y):
///
/// ```text
/// x = a * col + b * row + c
/// y = d * col + e * row + f
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// The identity transform (pixel space == world space).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    /// Build a north-up transform from a GeoTIFF tiepoint and pixel scale.
    ///
    /// `tiepoint` is `[I, J, K, X, Y, Z]` (raster point I,J maps to model X,Y),
    /// `scale` is `[ScaleX, ScaleY, ScaleZ]`. GeoTIFF stores ScaleY positive
    /// for north-up images, so the row step is negated.
    pub fn from_tiepoint_and_scale(tiepoint: &[f64], scale: &[f64]) -> Result<Self, AffineError> {
        if tiepoint.len() < 6 {
            return Err(AffineError::InvalidTiepoint(tiepoint.len()));
        }
        if scale.len() < 2 {
            return Err(AffineError::InvalidScale(scale.len()));
        }

        let a = scale[0];
        let e = -scale[1];
        let c = tiepoint[3] - tiepoint[0] * a;
        let f = tiepoint[4] - tiepoint[1] * e;

        Ok(Self::new(a, 0.0, c, 0.0, e, f))
    }

    /// Build from a row-major 4x4 ModelTransformation matrix.
    pub fn from_model_transformation(matrix: &[f64]) -> Result<Self, AffineError> {
        if matrix.len() < 16 {
            return Err(AffineError::InvalidMatrix(matrix.len()));
        }
        Ok(Self::new(
            matrix[0], matrix[1], matrix[3], matrix[4], matrix[5], matrix[7],
        ))
    }

    /// Apply the forward transform: (col, row) -> (x, y).
    pub fn forward(&self, col: f64, row: f64) -> (f64, f64) {
        let x = self.a * col + self.b * row + self.c;
        let y = self.d * col + self.e * row + self.f;
        (x, y)
    }

    /// Pixel size as `(x_step, y_step)`. The y step is negative for north-up rasters.
    pub fn resolution(&self) -> (f64, f64) {
        (self.a, self.e)
    }

    /// True when there is no rotation or shear term.
    pub fn is_rectilinear(&self) -> bool {
        self.b == 0.0 && self.d == 0.0
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

// Same three-row layout rasterio prints for `dataset.transform`.
impl fmt::Display for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "| {:.2}, {:.2}, {:.2}|", self.a, self.b, self.c)?;
        writeln!(f, "| {:.2}, {:.2}, {:.2}|", self.d, self.e, self.f)?;
        write!(f, "| {:.2}, {:.2}, {:.2}|", 0.0, 0.0, 1.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AffineError {
    #[error("ModelTiepoint needs 6 values, got {0}")]
    InvalidTiepoint(usize),

    #[error("ModelPixelScale needs at least 2 values, got {0}")]
    InvalidScale(usize),

    #[error("ModelTransformation needs 16 values, got {0}")]
    InvalidMatrix(usize),
}

//! Diagnostic summary of a raster dataset.

use std::fmt;

use raster_common::{BoundingBox, CrsCode};

use crate::dataset::RasterDataset;

/// Snapshot of the descriptive statistics printed for a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSummary {
    /// `(rows, cols)`
    pub shape: (usize, usize),
    pub resolution: (f64, f64),
    pub bounds: BoundingBox,
    pub sum: f64,
    pub crs: Option<CrsCode>,
    /// Attached non-dimension coordinates.
    pub coords: Vec<String>,
}

impl RasterSummary {
    pub fn from_dataset(raster: &RasterDataset) -> Self {
        Self {
            shape: raster.shape(),
            resolution: raster.resolution(),
            bounds: raster.bounds(),
            sum: raster.sum(),
            crs: raster.crs(),
            coords: raster.coord_names().map(str::to_string).collect(),
        }
    }
}

impl fmt::Display for RasterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "shape: ({}, {})", self.shape.0, self.shape.1)?;
        writeln!(
            f,
            "resolution: ({}, {})",
            self.resolution.0, self.resolution.1
        )?;
        writeln!(f, "bounds: {}", self.bounds)?;
        writeln!(f, "sum: {}", self.sum)?;
        match self.crs {
            Some(crs) => write!(f, "CRS: {}", crs)?,
            None => write!(f, "CRS: None")?,
        }
        if !self.coords.is_empty() {
            write!(f, "\ncoords: {}", self.coords.join(", "))?;
        }
        Ok(())
    }
}

/// Print the summary block for `raster` to stdout, followed by a blank line.
pub fn print_raster(raster: &RasterDataset) {
    println!("{}\n", RasterSummary::from_dataset(raster));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dimension;
    use raster_common::Affine;

    fn dataset() -> RasterDataset {
        let transform = Affine::new(0.5, 0.0, -125.0, 0.0, -0.5, 45.0);
        RasterDataset::new(2, 2, vec![vec![1.0, 2.0, 3.0, 4.5]], transform, Some(CrsCode::WGS84))
            .unwrap()
    }

    #[test]
    fn test_summary_fields() {
        let summary = RasterSummary::from_dataset(&dataset());
        assert_eq!(summary.shape, (2, 2));
        assert_eq!(summary.resolution, (0.5, -0.5));
        assert_eq!(summary.bounds, BoundingBox::new(-125.0, 44.0, -124.0, 45.0));
        assert_eq!(summary.sum, 10.5);
        assert_eq!(summary.crs, Some(CrsCode::WGS84));
        assert!(summary.coords.is_empty());
    }

    #[test]
    fn test_summary_display() {
        let text = RasterSummary::from_dataset(&dataset()).to_string();
        assert_eq!(
            text,
            "shape: (2, 2)\n\
             resolution: (0.5, -0.5)\n\
             bounds: (-125, 44, -124, 45)\n\
             sum: 10.5\n\
             CRS: EPSG:4326"
        );
    }

    #[test]
    fn test_summary_lists_attached_coords() {
        let mut raster = dataset();
        raster
            .assign_coord("lon", &[Dimension::Y, Dimension::X], vec![0.0, 1.0])
            .unwrap();
        raster
            .assign_coord("lat", &[Dimension::Y, Dimension::X], vec![0.0, 1.0])
            .unwrap();

        let summary = RasterSummary::from_dataset(&raster);
        assert_eq!(summary.coords, vec!["lat", "lon"]);
        assert!(summary.to_string().ends_with("CRS: EPSG:4326\ncoords: lat, lon"));
    }

    #[test]
    fn test_summary_without_crs() {
        let raster = RasterDataset::new(1, 1, vec![vec![7.0]], Affine::identity(), None).unwrap();
        assert!(RasterSummary::from_dataset(&raster)
            .to_string()
            .ends_with("CRS: None"));
    }
}

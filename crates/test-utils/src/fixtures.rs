//! Common test fixtures for geotiff-simulator tests.
//!
//! This module writes small GeoTIFF files
//! with pixel scale, tiepoint, GeoKey directory and GDAL_NODATA tags so
//! readers can be exercised against real files on disk.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use tiff::encoder::colortype::ColorType;
use tiff::encoder::{DirectoryEncoder, TiffEncoder, TiffKind, TiffValue};
use tiff::tags::Tag;
use tiff::TiffResult;

/// CRS recorded in a fixture's GeoKey directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureCrs {
    Geographic(u16),
    Projected(u16),
}

/// Description of a north-up GeoTIFF to write.
#[derive(Debug, Clone, Copy)]
pub struct GeoTiffFixture {
    pub width: u32,
    pub height: u32,
    /// World position of the upper-left corner of pixel (0, 0).
    pub origin: (f64, f64),
    /// Positive pixel size along x and y.
    pub pixel_size: (f64, f64),
    pub crs: Option<FixtureCrs>,
    pub nodata: Option<f64>,
}

impl GeoTiffFixture {
    /// A WGS84 lat/lon raster.
    pub fn geographic(width: u32, height: u32, origin: (f64, f64), pixel_size: (f64, f64)) -> Self {
        Self {
            width,
            height,
            origin,
            pixel_size,
            crs: Some(FixtureCrs::Geographic(4326)),
            nodata: None,
        }
    }

    /// Small square raster just north-east of the simulator's default
    /// reference point (44.571, -125.149).
    pub fn near_reference(size: u32) -> Self {
        Self::geographic(size, size, (-125.149, 44.671), (0.001, 0.001))
    }

    pub fn with_nodata(mut self, nodata: f64) -> Self {
        self.nodata = Some(nodata);
        self
    }

    pub fn with_crs(mut self, crs: Option<FixtureCrs>) -> Self {
        self.crs = crs;
        self
    }

    /// Write `data` (row-major, samples interleaved for multi-channel color
    /// types) as a GeoTIFF at `path`.
    pub fn write<C: ColorType>(&self, path: &Path, data: &[C::Inner]) -> TiffResult<()>
    where
        [C::Inner]: TiffValue,
    {
        let file = File::create(path)?;
        let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
        let mut image = encoder.new_image::<C>(self.width, self.height)?;
        self.write_geo_tags(image.encoder())?;
        image.write_data(data)
    }

    /// Write a TIFF with the same pixels but no georeferencing tags.
    pub fn write_plain<C: ColorType>(&self, path: &Path, data: &[C::Inner]) -> TiffResult<()>
    where
        [C::Inner]: TiffValue,
    {
        let file = File::create(path)?;
        let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
        encoder.write_image::<C>(self.width, self.height, data)
    }

    fn write_geo_tags<W: Write + Seek, K: TiffKind>(
        &self,
        dir: &mut DirectoryEncoder<'_, W, K>,
    ) -> TiffResult<()> {
        let scale = [self.pixel_size.0, self.pixel_size.1, 0.0];
        let tiepoint = [0.0, 0.0, 0.0, self.origin.0, self.origin.1, 0.0];
        dir.write_tag(Tag::from_u16_exhaustive(33550), &scale[..])?;
        dir.write_tag(Tag::from_u16_exhaustive(33922), &tiepoint[..])?;

        if let Some(crs) = self.crs {
            let (model_type, key, code) = match crs {
                FixtureCrs::Geographic(code) => (2, 2048, code),
                FixtureCrs::Projected(code) => (1, 3072, code),
            };
            let directory: [u16; 12] = [1, 1, 0, 2, 1024, 0, 1, model_type, key, 0, 1, code];
            dir.write_tag(Tag::from_u16_exhaustive(34735), &directory[..])?;
        }

        if let Some(nodata) = self.nodata {
            dir.write_tag(Tag::from_u16_exhaustive(42113), nodata.to_string().as_str())?;
        }
        Ok(())
    }
}

//! GeoTIFF reading via the `tiff` crate.
//!
//! Georeferencing comes from the ModelTransformation tag, or from
//! ModelTiepoint + ModelPixelScale. The CRS is taken from the GeoKey
//! directory and nodata from the GDAL_NODATA tag.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use num_traits::ToPrimitive;
use raster_common::{Affine, CrsCode};
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::{debug, info, warn};

use crate::dataset::RasterDataset;
use crate::error::{RasterError, RasterResult};

const MODEL_PIXEL_SCALE: u16 = 33550;
const MODEL_TIEPOINT: u16 = 33922;
const MODEL_TRANSFORMATION: u16 = 34264;
const GEO_KEY_DIRECTORY: u16 = 34735;
const GDAL_NODATA: u16 = 42113;

const GEOGRAPHIC_TYPE_GEO_KEY: u16 = 2048;
const PROJECTED_CS_TYPE_GEO_KEY: u16 = 3072;

/// Open a GeoTIFF file into a [`RasterDataset`].
pub fn open<P: AsRef<Path>>(path: P) -> RasterResult<RasterDataset> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| RasterError::open_failed(format!("{}: {}", path.display(), e)))?;

    let dataset = decode(BufReader::new(file))?;
    info!(
        path = %path.display(),
        width = dataset.width(),
        height = dataset.height(),
        bands = dataset.band_count(),
        crs = ?dataset.crs(),
        "Opened raster"
    );
    Ok(dataset)
}

/// Decode a GeoTIFF held in memory.
pub fn read_from_buffer(data: &[u8]) -> RasterResult<RasterDataset> {
    decode(Cursor::new(data))
}

fn decode<R: Read + Seek>(reader: R) -> RasterResult<RasterDataset> {
    let mut decoder = Decoder::new(reader)
        .map_err(|e| RasterError::open_failed(format!("TIFF decode error: {}", e)))?;

    let (width, height) = decoder.dimensions()?;
    let (width, height) = (width as usize, height as usize);

    let transform = read_transform(&mut decoder)?;
    let crs = read_crs(&mut decoder)?;
    let nodata = read_nodata(&mut decoder)?;

    let samples = widen(decoder.read_image()?)?;
    let bands = deinterleave(samples, width * height)?;

    debug!(width, height, bands = bands.len(), ?transform, ?nodata, "Decoded GeoTIFF");

    Ok(RasterDataset::new(width, height, bands, transform, crs)?.with_nodata(nodata))
}

fn read_transform<R: Read + Seek>(decoder: &mut Decoder<R>) -> RasterResult<Affine> {
    if let Some(matrix) = decoder.find_tag(Tag::from_u16_exhaustive(MODEL_TRANSFORMATION))? {
        return Ok(Affine::from_model_transformation(&matrix.into_f64_vec()?)?);
    }

    let scale = decoder.find_tag(Tag::from_u16_exhaustive(MODEL_PIXEL_SCALE))?;
    let tiepoint = decoder.find_tag(Tag::from_u16_exhaustive(MODEL_TIEPOINT))?;

    match (scale, tiepoint) {
        (Some(scale), Some(tiepoint)) => Ok(Affine::from_tiepoint_and_scale(
            &tiepoint.into_f64_vec()?,
            &scale.into_f64_vec()?,
        )?),
        _ => Err(RasterError::invalid_metadata(
            "no ModelTransformation or ModelTiepoint/ModelPixelScale tags",
        )),
    }
}

fn read_crs<R: Read + Seek>(decoder: &mut Decoder<R>) -> RasterResult<Option<CrsCode>> {
    let Some(directory) = decoder.find_tag(Tag::from_u16_exhaustive(GEO_KEY_DIRECTORY))? else {
        warn!("GeoTIFF has no GeoKey directory, CRS unknown");
        return Ok(None);
    };
    Ok(crs_from_geokeys(&directory.into_u16_vec()?))
}

/// Pick the CRS out of a GeoKey directory.
///
/// The directory is a 4-value header followed by `[key, location, count,
/// value]` entries; only keys stored inline (`location == 0`) are read.
/// A projected CRS wins over the geographic one it is based on.
fn crs_from_geokeys(directory: &[u16]) -> Option<CrsCode> {
    let entries = directory.get(4..)?;
    let inline = |key: u16| {
        entries
            .chunks_exact(4)
            .find(|entry| entry[0] == key && entry[1] == 0)
            .and_then(|entry| CrsCode::from_geokey(entry[3]))
    };
    inline(PROJECTED_CS_TYPE_GEO_KEY).or_else(|| inline(GEOGRAPHIC_TYPE_GEO_KEY))
}

fn read_nodata<R: Read + Seek>(decoder: &mut Decoder<R>) -> RasterResult<Option<f64>> {
    let Some(value) = decoder.find_tag(Tag::from_u16_exhaustive(GDAL_NODATA))? else {
        return Ok(None);
    };
    let text = value.into_string()?;
    let text = text.trim_matches(char::from(0)).trim();
    text.parse::<f64>()
        .map(Some)
        .map_err(|_| RasterError::invalid_metadata(format!("unparseable GDAL_NODATA '{}'", text)))
}

fn widen(image: DecodingResult) -> RasterResult<Vec<f64>> {
    fn cast<T: ToPrimitive>(values: Vec<T>) -> Vec<f64> {
        values
            .into_iter()
            .map(|v| v.to_f64().unwrap_or(f64::NAN))
            .collect()
    }

    match image {
        DecodingResult::U8(buf) => Ok(cast(buf)),
        DecodingResult::U16(buf) => Ok(cast(buf)),
        DecodingResult::U32(buf) => Ok(cast(buf)),
        DecodingResult::U64(buf) => Ok(cast(buf)),
        DecodingResult::I8(buf) => Ok(cast(buf)),
        DecodingResult::I16(buf) => Ok(cast(buf)),
        DecodingResult::I32(buf) => Ok(cast(buf)),
        DecodingResult::I64(buf) => Ok(cast(buf)),
        DecodingResult::F32(buf) => Ok(cast(buf)),
        DecodingResult::F64(buf) => Ok(buf),
        #[allow(unreachable_patterns)]
        _ => Err(RasterError::UnsupportedDataType(
            "unsupported TIFF sample format".to_string(),
        )),
    }
}

/// Split chunky (pixel-interleaved) samples into one buffer per band.
fn deinterleave(samples: Vec<f64>, pixels: usize) -> RasterResult<Vec<Vec<f64>>> {
    if pixels == 0 || samples.len() % pixels != 0 {
        return Err(RasterError::read_failed(format!(
            "{} samples do not divide into {} pixels",
            samples.len(),
            pixels
        )));
    }

    let count = samples.len() / pixels;
    if count == 1 {
        return Ok(vec![samples]);
    }

    let mut bands = vec![Vec::with_capacity(pixels); count];
    for pixel in samples.chunks_exact(count) {
        for (band, value) in bands.iter_mut().zip(pixel) {
            band.push(*value);
        }
    }
    Ok(bands)
}

//! Integration tests: write GeoTIFF fixtures to disk and load them back.

use approx::assert_relative_eq;
use raster::{geotiff, Affine, CrsCode, Dimension, RasterError, RasterSummary};
use test_utils::{
    create_grid_with_fill, create_test_grid, create_test_rgb_pixels, temp_test_dir, FixtureCrs,
    GeoTiffFixture,
};
use tiff::encoder::colortype::{Gray32Float, RGB8};

#[test]
fn test_open_geographic_float_raster() {
    let dir = temp_test_dir();
    let path = dir.path().join("grid.tif");
    let fixture = GeoTiffFixture::geographic(5, 4, (-125.2, 44.7), (0.01, 0.02));
    fixture
        .write::<Gray32Float>(&path, &create_test_grid(5, 4))
        .unwrap();

    let ds = geotiff::open(&path).unwrap();

    assert_eq!(ds.shape(), (4, 5));
    assert_eq!(ds.band_count(), 1);
    assert_eq!(ds.crs(), Some(CrsCode::WGS84));
    assert_eq!(ds.nodata(), None);

    let transform = ds.transform();
    assert_relative_eq!(transform.a, 0.01);
    assert_relative_eq!(transform.e, -0.02);
    assert_relative_eq!(transform.c, -125.2);
    assert_relative_eq!(transform.f, 44.7);

    // grid[row][col] == col * 1000 + row
    let band = ds.band(0).unwrap();
    assert_eq!(band[2 * 5 + 3], 3002.0);

    assert_relative_eq!(ds.x()[0], -125.195, epsilon = 1e-9);
    assert_relative_eq!(ds.y()[3], 44.63, epsilon = 1e-9);
}

#[test]
fn test_nodata_and_projected_crs() {
    let dir = temp_test_dir();
    let path = dir.path().join("utm.tif");
    let fixture = GeoTiffFixture::geographic(3, 3, (400000.0, 4950000.0), (8.0, 8.0))
        .with_crs(Some(FixtureCrs::Projected(32610)))
        .with_nodata(-9999.0);
    let data = create_grid_with_fill(3, 3, &[(0, 0), (2, 2)], -9999.0);
    fixture.write::<Gray32Float>(&path, &data).unwrap();

    let ds = geotiff::open(&path).unwrap();

    assert_eq!(ds.crs(), Some(CrsCode(32610)));
    assert_eq!(ds.nodata(), Some(-9999.0));
    // every non-nodata cell is zero
    assert_eq!(ds.sum(), 0.0);
    assert_eq!(
        ds.bounds(),
        raster::BoundingBox::new(400000.0, 4949976.0, 400024.0, 4950000.0)
    );
}

#[test]
fn test_missing_crs_is_none() {
    let dir = temp_test_dir();
    let path = dir.path().join("nocrs.tif");
    GeoTiffFixture::near_reference(2)
        .with_crs(None)
        .write::<Gray32Float>(&path, &create_test_grid(2, 2))
        .unwrap();

    let ds = geotiff::open(&path).unwrap();
    assert_eq!(ds.crs(), None);
    assert!(RasterSummary::from_dataset(&ds).to_string().contains("CRS: None"));
}

#[test]
fn test_rgb_bands_are_deinterleaved() {
    let dir = temp_test_dir();
    let path = dir.path().join("rgb.tif");
    GeoTiffFixture::near_reference(4)
        .write::<RGB8>(&path, &create_test_rgb_pixels(4, 4))
        .unwrap();

    let ds = geotiff::open(&path).unwrap();
    assert_eq!(ds.band_count(), 3);
    // pixel (col=3, row=2)
    let idx = 2 * 4 + 3;
    assert_eq!(ds.band(0).unwrap()[idx], 3.0);
    assert_eq!(ds.band(1).unwrap()[idx], 2.0);
    assert_eq!(ds.band(2).unwrap()[idx], 200.0);
}

#[test]
fn test_read_from_buffer_matches_file() {
    let dir = temp_test_dir();
    let path = dir.path().join("buffer.tif");
    GeoTiffFixture::near_reference(3)
        .write::<Gray32Float>(&path, &create_test_grid(3, 3))
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let from_buffer = geotiff::read_from_buffer(&bytes).unwrap();
    let from_file = geotiff::open(&path).unwrap();

    assert_eq!(from_buffer.transform(), from_file.transform());
    assert_eq!(from_buffer.band(0), from_file.band(0));
    assert_eq!(from_buffer.x(), from_file.x());
}

#[test]
fn test_missing_georeferencing_is_error() {
    let dir = temp_test_dir();
    let path = dir.path().join("plain.tif");
    GeoTiffFixture::near_reference(2)
        .write_plain::<Gray32Float>(&path, &create_test_grid(2, 2))
        .unwrap();

    let err = geotiff::open(&path).unwrap_err();
    assert!(matches!(err, RasterError::InvalidMetadata(_)), "{err}");
}

#[test]
fn test_missing_file_is_open_error() {
    let dir = temp_test_dir();
    let err = geotiff::open(dir.path().join("absent.tiff")).unwrap_err();
    assert!(matches!(err, RasterError::OpenFailed(_)));
}

#[test]
fn test_not_a_tiff_is_open_error() {
    let err = geotiff::read_from_buffer(b"definitely not a tiff").unwrap_err();
    assert!(matches!(err, RasterError::OpenFailed(_)));
}

#[test]
fn test_loaded_dataset_accepts_latlon_coords() {
    let dir = temp_test_dir();
    let path = dir.path().join("coords.tif");
    GeoTiffFixture::near_reference(3)
        .write::<Gray32Float>(&path, &create_test_grid(3, 3))
        .unwrap();

    let mut ds = geotiff::open(&path).unwrap();
    ds.assign_coord("lat", &[Dimension::Y, Dimension::X], ds.y().to_vec())
        .unwrap();

    let lat = ds.coord("lat").unwrap();
    assert_eq!(lat.shape(), &[3, 3]);
    assert_eq!(lat.get2(2, 1), Some(ds.y()[1]));
    assert_eq!(*ds.transform(), Affine::new(0.001, 0.0, -125.149, 0.0, -0.001, 44.671));
}

//! Test data generators for creating synthetic raster bands.
//!
//! These generators create predictable, verifiable patterns so tests can
//! check that pixels land where they should after a GeoTIFF round trip.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
///
/// A `Vec<f32>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a grid with `fill` at the given (col, row) positions, zeros elsewhere.
///
/// Useful for nodata and NaN handling tests.
pub fn create_grid_with_fill(
    width: usize,
    height: usize,
    positions: &[(usize, usize)],
    fill: f32,
) -> Vec<f32> {
    let mut data = vec![0.0f32; width * height];
    for &(col, row) in positions {
        if col < width && row < height {
            data[row * width + col] = fill;
        }
    }
    data
}

/// Creates interleaved RGB samples (3 bytes per pixel).
///
/// Red follows the column, green the row and blue is constant, so each
/// band can be checked independently after de-interleaving.
pub fn create_test_rgb_pixels(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        for col in 0..width {
            pixels.extend_from_slice(&[col as u8, row as u8, 200]);
        }
    }
    pixels
}

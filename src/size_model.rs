//! Per-format storage size estimates.
//!
//! BMP and JPEG are stored as a resolution pyramid: the full image plus every
//! half-resolution level while both sides stay at or above
//! [`MIN_PYRAMID_DIMENSION`]. JPEG2000 carries its own resolution levels in the
//! codestream, so it is estimated in a single step with a logarithmic model.
//!
//! All estimates are approximations and truncate toward zero.

use crate::constants::{
    JPEG2000_COMPRESSION_FACTOR, JPEG2000_LOG_OFFSET, JPEG_COMPRESSION_RATIO,
    MIN_PYRAMID_DIMENSION,
};
use crate::formats::ImageFormat;

/// Estimated storage size in bytes
pub type StorageSize = u64;

/// Estimates the stored size of an image of the given format and dimensions.
///
/// Total for every width and height, including zero. Saturates at `u64::MAX`.
///
/// # Example
/// ```
/// use storage_estimator::{estimate_size, ImageFormat};
///
/// assert_eq!(estimate_size(ImageFormat::Bmp, 256, 256), 256 * 256 + 128 * 128);
/// assert_eq!(estimate_size(ImageFormat::Bmp, 100, 100), 100 * 100);
/// ```
pub fn estimate_size(format: ImageFormat, width: u32, height: u32) -> StorageSize {
    if format.is_pyramid() {
        pyramid_size(format, width, height)
    } else {
        jpeg2000_size(width, height)
    }
}

/// Sums the level cost over the resolution pyramid.
///
/// The full-resolution level is always counted, even when the image is already
/// smaller than the pyramid threshold.
pub fn pyramid_size(format: ImageFormat, width: u32, height: u32) -> StorageSize {
    let mut level_width = width;
    let mut level_height = height;
    let mut total: StorageSize = 0;

    loop {
        total = total.saturating_add(pyramid_level_size(format, level_width, level_height));
        level_width /= 2;
        level_height /= 2;

        if level_width < MIN_PYRAMID_DIMENSION || level_height < MIN_PYRAMID_DIMENSION {
            break;
        }
    }

    total
}

/// Cost of a single pyramid level
pub fn pyramid_level_size(format: ImageFormat, width: u32, height: u32) -> StorageSize {
    let pixels = pixel_count(width, height);
    match format {
        ImageFormat::Jpeg => (pixels as f64 * JPEG_COMPRESSION_RATIO) as StorageSize,
        ImageFormat::Bmp | ImageFormat::Jpeg2000 => pixels,
    }
}

/// `floor(pixels * 0.4 / ln(ln(pixels + 16)))`
///
/// The offset keeps the inner logarithm above `ln(16)`, so the denominator is
/// at least `ln(ln(16)) ≈ 1.02` and the result is finite for every input.
pub fn jpeg2000_size(width: u32, height: u32) -> StorageSize {
    let pixels = pixel_count(width, height);
    let denominator = ((pixels + JPEG2000_LOG_OFFSET) as f64).ln().ln();

    (pixels as f64 * JPEG2000_COMPRESSION_FACTOR / denominator) as StorageSize
}

fn pixel_count(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height)
}

/// Image format handling for the size model
///
/// The set of formats is closed: every format the catalog can hold has its own
/// size formula in `size_model`. Parsing is the only place an unrecognised
/// format name can appear, and it is rejected there.

use crate::error::{EstimatorError, Result};
use std::fmt;
use std::str::FromStr;

/// Image formats known to the size model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Uncompressed bitmap, stored as a resolution pyramid
    Bmp,
    /// JPEG, stored as a resolution pyramid with a flat compression ratio
    Jpeg,
    /// JPEG2000, single-resolution logarithmic model
    Jpeg2000,
}

impl ImageFormat {
    /// Canonical upper-case name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            ImageFormat::Bmp => "BMP",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Jpeg2000 => "JPEG2000",
        }
    }

    /// Whether the format is estimated with the resolution pyramid
    pub fn is_pyramid(&self) -> bool {
        matches!(self, ImageFormat::Bmp | ImageFormat::Jpeg)
    }

    /// Get all supported formats as a vector
    pub fn all_formats() -> Vec<ImageFormat> {
        vec![ImageFormat::Bmp, ImageFormat::Jpeg, ImageFormat::Jpeg2000]
    }

    /// Get accepted format names for CLI help text
    pub fn format_names() -> Vec<&'static str> {
        vec!["bmp", "j", "jpg", "jpeg", "jp2", "j2k", "jpeg2000"]
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageFormat {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bmp" => Ok(ImageFormat::Bmp),
            "j" | "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "jp2" | "j2k" | "jpeg2000" => Ok(ImageFormat::Jpeg2000),
            _ => Err(EstimatorError::InvalidFormat(s.to_string())),
        }
    }
}

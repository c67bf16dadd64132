use crate::constants::FORMAT_COLUMN_WIDTH;
use crate::formats::ImageFormat;
use crate::size_model::{estimate_size, StorageSize};
use crate::utils::format_grouped_size;
use std::fmt;

/// Catalog-wide image identity, assigned from 1 upward and never reused
pub type ImageId = u32;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    id: ImageId,
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl Image {
    pub fn new(id: ImageId, format: ImageFormat, width: u32, height: u32) -> Self {
        Self {
            id,
            format,
            width,
            height,
        }
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Estimated stored size in bytes
    pub fn size(&self) -> StorageSize {
        estimate_size(self.format, self.width, self.height)
    }
}

/// `[id]\tFORMAT    \t(W, H)px\tSIZE bytes`
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]\t{:<width$}\t({}, {})px\t{} bytes",
            self.id,
            self.format.name(),
            self.width,
            self.height,
            format_grouped_size(self.size()),
            width = FORMAT_COLUMN_WIDTH
        )
    }
}

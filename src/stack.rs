use crate::constants::STACK_LOG_OFFSET;
use crate::error::{EstimatorError, Result};
use crate::image::{Image, ImageId};
use crate::size_model::StorageSize;
use crate::utils::format_grouped_size;
use std::fmt;

/// A group of images stored together and compressed as one unit
///
/// Members keep their insertion order, which only affects the report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    images: Vec<Image>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn add_image(&mut self, image: Image) {
        self.images.push(image);
    }

    /// Takes the image with `id` out of the stack
    pub fn remove_image(&mut self, id: ImageId) -> Result<Image> {
        let position = self
            .position(id)
            .ok_or(EstimatorError::IdNotFound(id))?;
        Ok(self.images.remove(position))
    }

    pub fn find_image(&self, id: ImageId) -> Option<&Image> {
        self.images.iter().find(|image| image.id() == id)
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.position(id).is_some()
    }

    /// Sum of the member sizes before the group discount
    pub fn uncompressed_size(&self) -> StorageSize {
        self.images
            .iter()
            .fold(0, |total: StorageSize, image| total.saturating_add(image.size()))
    }

    /// `floor(sum(member sizes) / ln(member count + 3))`
    ///
    /// The divisor is at least `ln(3)`, so a stack is never larger than the
    /// sum of its members.
    pub fn size(&self) -> StorageSize {
        let divisor = ((self.images.len() + STACK_LOG_OFFSET) as f64).ln();
        (self.uncompressed_size() as f64 / divisor) as StorageSize
    }

    fn position(&self, id: ImageId) -> Option<usize> {
        self.images.iter().position(|image| image.id() == id)
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for image in &self.images {
            writeln!(f, "\t  {}", image)?;
        }
        writeln!(
            f,
            "\t\t{} images, compressed to {} bytes",
            self.images.len(),
            format_grouped_size(self.size())
        )
    }
}

//! The catalog owns every image ever added, either in the unstacked pool or in
//! exactly one stack. Images are never dropped: grouping moves them between
//! containers, and a stack that loses its last member is dissolved.

use crate::constants::{NO_IMAGES_MESSAGE, NO_STACKS_MESSAGE, STACK_HEADER, TOTAL_SIZE_LABEL};
use crate::error::{EstimatorError, Result};
use crate::formats::ImageFormat;
use crate::image::{Image, ImageId};
use crate::size_model::StorageSize;
use crate::stack::Stack;
use crate::utils::format_grouped_size;
use std::fmt;

/// Where an image currently lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageLocation {
    Unstacked,
    /// Index into [`Catalog::stacks`]
    Stack(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    id_counter: ImageId,
    unstacked: Vec<Image>,
    stacks: Vec<Stack>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an image to the unstacked pool and returns its id.
    ///
    /// Ids start at 1 and are never reused.
    pub fn add_image(&mut self, format: ImageFormat, width: u32, height: u32) -> ImageId {
        self.id_counter += 1;
        let image = Image::new(self.id_counter, format, width, height);
        crate::verbose!("Added image {}", image);
        self.unstacked.push(image);
        self.id_counter
    }

    /// Groups the given images into a new stack.
    ///
    /// Ids are taken in order. An image in the unstacked pool or in another
    /// stack is moved into the new stack; a source stack left empty is removed.
    /// Repeating an id within one request has no further effect. The new stack
    /// is appended last even if `ids` is empty.
    ///
    /// Every id is checked before anything moves, so on `IdNotFound` the
    /// catalog is unchanged.
    pub fn add_stack(&mut self, ids: &[ImageId]) -> Result<()> {
        if let Some(&missing) = ids.iter().find(|&&id| self.locate(id).is_none()) {
            return Err(EstimatorError::IdNotFound(missing));
        }

        let mut new_stack = Stack::new();
        for &id in ids {
            if new_stack.contains(id) {
                continue;
            }
            let image = self.take_image(id)?;
            new_stack.add_image(image);
        }

        crate::verbose!(
            "Built stack {} with {} images",
            self.stacks.len() + 1,
            new_stack.len()
        );
        self.stacks.push(new_stack);
        Ok(())
    }

    /// Total number of images ever added, including those inside stacks
    pub fn number_of_images(&self) -> usize {
        self.id_counter as usize
    }

    pub fn number_of_stacks(&self) -> usize {
        self.stacks.len()
    }

    pub fn unstacked_images(&self) -> &[Image] {
        &self.unstacked
    }

    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    pub fn locate(&self, id: ImageId) -> Option<ImageLocation> {
        if self.unstacked.iter().any(|image| image.id() == id) {
            return Some(ImageLocation::Unstacked);
        }
        self.stacks
            .iter()
            .position(|stack| stack.contains(id))
            .map(ImageLocation::Stack)
    }

    pub fn find_image(&self, id: ImageId) -> Option<&Image> {
        match self.locate(id)? {
            ImageLocation::Unstacked => self.unstacked.iter().find(|image| image.id() == id),
            ImageLocation::Stack(index) => self.stacks[index].find_image(id),
        }
    }

    /// Sum of every unstacked image plus every compressed stack
    pub fn total_size(&self) -> StorageSize {
        let unstacked = self
            .unstacked
            .iter()
            .fold(0, |total: StorageSize, image| total.saturating_add(image.size()));

        self.stacks
            .iter()
            .fold(unstacked, |total, stack| total.saturating_add(stack.size()))
    }

    /// Size of the same images if none of them were stacked
    pub fn uncompressed_size(&self) -> StorageSize {
        self.stacks
            .iter()
            .map(Stack::uncompressed_size)
            .chain(self.unstacked.iter().map(Image::size))
            .fold(0, StorageSize::saturating_add)
    }

    fn take_image(&mut self, id: ImageId) -> Result<Image> {
        match self.locate(id).ok_or(EstimatorError::IdNotFound(id))? {
            ImageLocation::Unstacked => {
                let position = self
                    .unstacked
                    .iter()
                    .position(|image| image.id() == id)
                    .ok_or(EstimatorError::IdNotFound(id))?;
                Ok(self.unstacked.remove(position))
            }
            ImageLocation::Stack(index) => {
                let image = self.stacks[index].remove_image(id)?;
                if self.stacks[index].is_empty() {
                    self.stacks.remove(index);
                    crate::verbose!("Dissolved stack {} after its last image moved", index + 1);
                }
                Ok(image)
            }
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unstacked.is_empty() {
            writeln!(f, "\t{}", NO_IMAGES_MESSAGE)?;
        } else {
            for image in &self.unstacked {
                writeln!(f, "\t{}", image)?;
            }
        }
        writeln!(f)?;

        if self.stacks.is_empty() {
            writeln!(f, "\t{}", NO_STACKS_MESSAGE)?;
        } else {
            for stack in &self.stacks {
                writeln!(f, "\t{}\n{}", STACK_HEADER, stack)?;
            }
        }

        write!(
            f,
            "\n\t{} {} bytes\n\n",
            TOTAL_SIZE_LABEL,
            format_grouped_size(self.total_size())
        )
    }
}

/// Line-oriented command language for building a catalog
///
/// ```text
/// BMP 1024 768        add an image: <format> <width> <height>
/// G 1, 2, 3           group existing images into a new stack
/// Q                   finish input
/// # comment           ignored, as are blank lines
/// ```

use crate::constants::{COMMENT_PREFIX, GROUP_COMMAND, QUIT_COMMAND};
use crate::error::{EstimatorError, Result};
use crate::formats::ImageFormat;
use crate::image::ImageId;
use crate::validation::{parse_dimension, parse_image_ids};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddImage {
        format: ImageFormat,
        width: u32,
        height: u32,
    },
    AddStack(Vec<ImageId>),
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        if keyword.eq_ignore_ascii_case(QUIT_COMMAND) {
            if !rest.is_empty() {
                return Err(EstimatorError::InvalidCommand(line.to_string()));
            }
            return Ok(Some(Command::Quit));
        }

        if keyword.eq_ignore_ascii_case(GROUP_COMMAND) {
            return Ok(Some(Command::AddStack(parse_image_ids(rest)?)));
        }

        let dimensions: Vec<&str> = rest.split_whitespace().collect();
        let [width, height] = dimensions.as_slice() else {
            return Err(EstimatorError::InvalidCommand(line.to_string()));
        };

        Ok(Some(Command::AddImage {
            format: keyword.parse()?,
            width: parse_dimension(width)?,
            height: parse_dimension(height)?,
        }))
    }
}

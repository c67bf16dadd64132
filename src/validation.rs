use crate::error::{EstimatorError, Result};
use crate::image::ImageId;
use std::path::Path;

/// Parse a pixel dimension from user input
///
/// Negative values are accepted and stored as their absolute value. Anything
/// that is not an integer, or does not fit in 32 bits, is rejected.
pub fn parse_dimension(input: &str) -> Result<u32> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| EstimatorError::InvalidDimensions(input.to_string()))?;

    u32::try_from(value.unsigned_abs())
        .map_err(|_| EstimatorError::InvalidDimensions(input.to_string()))
}

/// Parse a list of image ids separated by commas and/or whitespace
///
/// `"1, 2 3,4"` yields `[1, 2, 3, 4]`. An empty list is an `EmptyGroupRequest`.
/// Ids are only checked for syntax here; whether they exist is up to the catalog.
pub fn parse_image_ids(input: &str) -> Result<Vec<ImageId>> {
    let ids = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<ImageId>().map_err(|_| {
                EstimatorError::InvalidCommand(format!("image id '{}' is not a number", token))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if ids.is_empty() {
        return Err(EstimatorError::EmptyGroupRequest);
    }

    Ok(ids)
}

/// Validate that a command script exists and is a regular file
pub fn validate_script_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(EstimatorError::FileNotFound(path.to_path_buf()));
    }

    if !path.is_file() {
        return Err(EstimatorError::InvalidCommand(format!(
            "script path {} is not a file",
            path.display()
        )));
    }

    Ok(())
}

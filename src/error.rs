use crate::image::ImageId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid image format: {0}. Expected one of BMP, JPEG, JPEG2000")]
    InvalidFormat(String),

    #[error("Invalid image dimension: {0}. Must be an integer")]
    InvalidDimensions(String),

    #[error("Image id not found: {0}")]
    IdNotFound(ImageId),

    #[error("Image group request contains no image ids")]
    EmptyGroupRequest,

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;

pub mod catalog;
pub mod cli;
pub mod command;
pub mod constants;
pub mod error;
pub mod formats;
pub mod image;
pub mod logger;
pub mod session;
pub mod size_model;
pub mod stack;
pub mod utils;
pub mod validation;

pub use catalog::{Catalog, ImageLocation};
pub use command::Command;
pub use error::{EstimatorError, Result};
pub use formats::ImageFormat;
pub use image::{Image, ImageId};
pub use session::{Flow, Session, SessionOptions, SessionSummary};
pub use size_model::{estimate_size, StorageSize};
pub use stack::Stack;
pub use utils::format_grouped_size;

// Size model
pub const MIN_PYRAMID_DIMENSION: u32 = 128;
pub const JPEG_COMPRESSION_RATIO: f64 = 0.2;
pub const JPEG2000_COMPRESSION_FACTOR: f64 = 0.4;
pub const JPEG2000_LOG_OFFSET: u64 = 16;
pub const STACK_LOG_OFFSET: usize = 3;

// Report layout
pub const FORMAT_COLUMN_WIDTH: usize = 10;
pub const DIGIT_GROUP_SIZE: usize = 3;
pub const DIGIT_GROUP_SEPARATOR: char = ' ';

pub const NO_IMAGES_MESSAGE: &str = "No images outside stacks";
pub const NO_STACKS_MESSAGE: &str = "No image stacks";
pub const STACK_HEADER: &str = "Stack:";
pub const TOTAL_SIZE_LABEL: &str = "Total Size:";

// Command language
pub const QUIT_COMMAND: &str = "Q";
pub const GROUP_COMMAND: &str = "G";
pub const COMMENT_PREFIX: char = '#';
pub const INPUT_PROMPT: &str = "Add image/group: ";

// Common output message prefixes
pub const SIZE_PREFIX: &str = "📊";
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️";
pub const ERROR_PREFIX: &str = "❌";
pub const VERBOSE_PREFIX: &str = "🔍";

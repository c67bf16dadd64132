/// Utility functions for common operations
///
/// Number formatting shared by the catalog report and the CLI summary.

use crate::constants::{DIGIT_GROUP_SEPARATOR, DIGIT_GROUP_SIZE};
use crate::size_model::StorageSize;

/// Format a byte count with a space between every group of three digits
///
/// # Arguments
/// * `size` - Size in bytes
///
/// # Returns
/// * Grouped string (e.g., `1234567` becomes `"1 234 567"`)
pub fn format_grouped_size(size: StorageSize) -> String {
    let digits = size.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / DIGIT_GROUP_SIZE);

    for (index, digit) in digits.chars().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % DIGIT_GROUP_SIZE == 0 {
            output.push(DIGIT_GROUP_SEPARATOR);
        }
        output.push(digit);
    }

    output
}

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 KB")
pub fn format_file_size(bytes: StorageSize) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Calculate how much smaller a compressed size is, as a percentage
///
/// # Arguments
/// * `original_size` - Size before compression in bytes
/// * `compressed_size` - Size after compression in bytes
///
/// # Returns
/// * Saving as percentage (positive means reduction, negative means increase)
pub fn calculate_compression_ratio(original_size: StorageSize, compressed_size: StorageSize) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - compressed_size as f64) / original_size as f64) * 100.0
}

//! Utility modules for the studio app.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_image_count, format_progress};

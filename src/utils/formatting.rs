//! Text formatting utilities for the studio app.

/// Formats an image count for category cards, e.g. `"12 Images"`.
pub fn format_image_count(count: usize) -> String {
    if count == 1 {
        "1 Image".to_string()
    } else {
        format!("{count} Images")
    }
}

/// Formats loading progress for the footer, e.g. `"Loading 3/57"`.
pub fn format_progress(decoded: usize, total: usize) -> String {
    format!("Loading {decoded}/{total}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_count_pluralizes() {
        assert_eq!(format_image_count(0), "0 Images");
        assert_eq!(format_image_count(1), "1 Image");
        assert_eq!(format_image_count(12), "12 Images");
    }

    #[test]
    fn progress_string() {
        assert_eq!(format_progress(3, 57), "Loading 3/57");
    }
}

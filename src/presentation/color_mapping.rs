//! Color mapping for gallery categories.
//!
//! This module provides functions for:
//! - Assigning an accent color to each work category
//! - Getting the current theme's color palette
//!
//! Accent assignment is deterministic based on category ids, so a category
//! keeps its color across frames and sessions.

use alora::theme::{ThemeManager, ThemeColors, DEFAULT_THEME};
use egui::Color32;

/// Returns a reference to the current theme's color palette.
///
/// Falls back to the default theme's colors for unknown names.
pub fn theme_colors<'a>(
    theme_manager: &'a ThemeManager,
    current_theme_name: &str,
) -> &'a ThemeColors {
    theme_manager
        .get_theme(current_theme_name)
        .map(|t| &t.colors)
        .unwrap_or_else(|| &theme_manager.get_theme(DEFAULT_THEME).unwrap().colors)
}

/// Returns the accent color for a category card header.
///
/// Known lines of work get hand-picked accents; anything else hashes the id
/// into a small rotation so new categories still look deliberate.
pub fn category_accent(category_id: &str, colors: &ThemeColors) -> Color32 {
    match category_id {
        id if id.contains("kitchen") => colors.accent_strong,
        id if id.contains("door") => colors.accent,
        id if id.contains("hall") => colors.accent_strong,
        id if id.contains("wardrobe") => colors.accent,
        _ => {
            let rotation = [colors.accent, colors.accent_strong];
            let hash: usize = category_id.bytes().map(usize::from).sum();
            rotation[hash % rotation.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alora::theme::ThemeManager;

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let manager = ThemeManager::new();
        let fallback = theme_colors(&manager, "Nope");
        let parchment = theme_colors(&manager, DEFAULT_THEME);
        assert_eq!(fallback.accent, parchment.accent);
    }

    #[test]
    fn accent_is_stable_per_category() {
        let manager = ThemeManager::new();
        let colors = theme_colors(&manager, DEFAULT_THEME);
        let a = category_accent("stair-case", colors);
        let b = category_accent("stair-case", colors);
        assert_eq!(a, b);
    }
}

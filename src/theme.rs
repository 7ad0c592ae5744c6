//! Theme support for the Alora studio app.
//!
//! Provides named color palettes and a centralized theme manager. The default
//! "Parchment" palette matches the studio's print identity (warm cream
//! surfaces with deep maroon accents); "Dark" and "Espresso" are alternates.
//!
//! # Examples
//!
//! ```
//! use alora::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let parchment = manager.get_theme("Parchment").unwrap();
//! assert_eq!(parchment.name, "Parchment");
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering all UI surfaces.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub card: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub heading: Color32,

    // Brand accents (maroon gradient ends in the original identity)
    pub accent: Color32,
    pub accent_strong: Color32,
    pub accent_soft: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub link: Color32,

    // Overlay backdrop behind modals
    pub backdrop: Color32,

    // Outbound-link tints (phone / WhatsApp / email rows)
    pub phone: Color32,
    pub whatsapp: Color32,
    pub email: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub dark_base: bool,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

pub const DEFAULT_THEME: &str = "Parchment";

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Parchment".to_string(), parchment_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Espresso".to_string(), espresso_theme());

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme.
    pub fn current_theme(&self) -> &Theme {
        self.themes
            .get(&self.current_theme_name)
            .unwrap_or_else(|| &self.themes[DEFAULT_THEME])
    }

    /// Sets the current theme by name.
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.card;
        visuals.faint_bg_color = colors.hover;
        visuals.window_fill = colors.card;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.link;
        visuals.error_fg_color = colors.accent_strong;
        visuals.warn_fg_color = colors.accent;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// The studio's print identity: warm cream surfaces, deep maroon accents.
fn parchment_theme() -> Theme {
    Theme {
        name: "Parchment".to_string(),
        description: "Warm cream surfaces with deep maroon accents".to_string(),
        dark_base: false,
        colors: ThemeColors {
            background: hex_to_color32("#fefbf6"),
            panel_background: hex_to_color32("#fefbf6"),
            card: Color32::WHITE,

            text: hex_to_color32("#374151"),
            text_dim: hex_to_color32("#6b7280"),
            heading: hex_to_color32("#1f2937"),

            accent: hex_to_color32("#7f1d1d"),
            accent_strong: hex_to_color32("#991b1b"),
            accent_soft: hex_to_color32("#fee2e2"),

            selection: hex_to_color32("#fecaca"),
            hover: hex_to_color32("#f3f4f6"),
            border: hex_to_color32("#d1d5db"),
            link: hex_to_color32("#7f1d1d"),

            backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 128),

            phone: hex_to_color32("#7f1d1d"),
            whatsapp: hex_to_color32("#15803d"),
            email: hex_to_color32("#1d4ed8"),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Charcoal surfaces with muted maroon accents".to_string(),
        dark_base: true,
        colors: ThemeColors {
            background: hex_to_color32("#1f1d1b"),
            panel_background: hex_to_color32("#1f1d1b"),
            card: hex_to_color32("#2a2724"),

            text: hex_to_color32("#e7e5e4"),
            text_dim: hex_to_color32("#a8a29e"),
            heading: hex_to_color32("#fafaf9"),

            accent: hex_to_color32("#b91c1c"),
            accent_strong: hex_to_color32("#dc2626"),
            accent_soft: hex_to_color32("#451a1a"),

            selection: hex_to_color32("#5f2120"),
            hover: hex_to_color32("#383430"),
            border: hex_to_color32("#57534e"),
            link: hex_to_color32("#f87171"),

            backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 160),

            phone: hex_to_color32("#f87171"),
            whatsapp: hex_to_color32("#4ade80"),
            email: hex_to_color32("#93c5fd"),
        },
    }
}

fn espresso_theme() -> Theme {
    Theme {
        name: "Espresso".to_string(),
        description: "Deep coffee browns with brass highlights".to_string(),
        dark_base: true,
        colors: ThemeColors {
            background: hex_to_color32("#241a14"),
            panel_background: hex_to_color32("#241a14"),
            card: hex_to_color32("#31241c"),

            text: hex_to_color32("#ece0d1"),
            text_dim: hex_to_color32("#b3a28f"),
            heading: hex_to_color32("#f8f1e7"),

            accent: hex_to_color32("#a16207"),
            accent_strong: hex_to_color32("#ca8a04"),
            accent_soft: hex_to_color32("#423017"),

            selection: hex_to_color32("#5c4322"),
            hover: hex_to_color32("#3d2e23"),
            border: hex_to_color32("#6b5440"),
            link: hex_to_color32("#eab308"),

            backdrop: Color32::from_rgba_premultiplied(0, 0, 0, 160),

            phone: hex_to_color32("#eab308"),
            whatsapp: hex_to_color32("#4ade80"),
            email: hex_to_color32("#93c5fd"),
        },
    }
}

/// Converts a hex color string (like "#7f1d1d") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_themes_are_registered() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Espresso", "Parchment"]);
        assert_eq!(manager.current_theme().name, "Parchment");
    }

    #[test]
    fn switching_to_unknown_theme_fails() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Dark").is_ok());
        assert!(manager.set_current_theme("Neon").is_err());
        assert_eq!(manager.current_theme().name, "Dark");
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color32("#ffffff"), Color32::from_rgb(255, 255, 255));
        assert_eq!(hex_to_color32("7f1d1d"), Color32::from_rgb(127, 29, 29));
        assert_eq!(hex_to_color32("#bad"), Color32::from_rgb(0, 0, 0));
    }
}

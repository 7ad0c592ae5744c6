//! Theme application and persistence.
//!
//! The theme preference is just another persisted setting, so storage goes
//! through `SettingsCoordinator`; this coordinator owns the theme-specific
//! parts: the default, and applying the palette onto egui visuals each frame.

use eframe::egui;

use alora::theme::DEFAULT_THEME;

use crate::app::{AppState, SettingsCoordinator};

const THEME_KEY: &str = "theme_preference";

/// Coordinates theme application and persistence.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Loads the theme preference during application startup, falling back
    /// to the default palette when nothing (or garbage) is stored.
    pub fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
        SettingsCoordinator::load_setting_or(storage, THEME_KEY, DEFAULT_THEME.to_string())
    }

    /// Saves the current theme preference.
    ///
    /// Called during application shutdown.
    pub fn save_theme_to_storage(storage: &mut dyn eframe::Storage, theme_name: &str) {
        SettingsCoordinator::save_setting(storage, THEME_KEY, &theme_name);
    }

    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so theme switches take effect immediately.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme_name = state.theme.current_theme_name();
        if let Some(theme) = state.theme.theme_manager().get_theme(theme_name) {
            let mut visuals = if theme.dark_base {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            };

            state.theme.theme_manager().apply_theme(theme, &mut visuals);
            ctx.set_visuals(visuals);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn saved_theme_loads_back() {
        let mut storage = MockStorage::new();
        ThemeCoordinator::save_theme_to_storage(&mut storage, "Espresso");

        let loaded = ThemeCoordinator::load_theme_from_storage(Some(&storage));
        assert_eq!(loaded, "Espresso");
    }

    #[test]
    fn missing_preference_falls_back_to_default() {
        let storage = MockStorage::new();
        let loaded = ThemeCoordinator::load_theme_from_storage(Some(&storage));
        assert_eq!(loaded, DEFAULT_THEME);

        let loaded = ThemeCoordinator::load_theme_from_storage(None);
        assert_eq!(loaded, DEFAULT_THEME);
    }
}

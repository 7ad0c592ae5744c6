//! Theme and styling state management.

use alora::theme::{ThemeManager, DEFAULT_THEME};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Managing the theme manager instance
/// - Tracking the current theme selection
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    /// Creates a new theme state with a specific theme.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: theme_name,
        }
    }

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the current theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Sets the current theme by name. Unknown names are ignored.
    pub fn set_theme(&mut self, theme_name: &str) {
        if self.theme_manager.get_theme(theme_name).is_some() {
            self.current_theme_name = theme_name.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_is_ignored() {
        let mut state = ThemeState::new();
        state.set_theme("Dark");
        assert_eq!(state.current_theme_name(), "Dark");
        state.set_theme("Nope");
        assert_eq!(state.current_theme_name(), "Dark");
    }
}

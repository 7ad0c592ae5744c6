//! Centralized application state for the Alora site.
//!
//! This module implements the State pattern by composing focused state components
//! that each manage a specific aspect of the application's state. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use alora::ComparisonSlider;

use crate::cache::TextureCache;
use crate::state::{GalleryState, HeroState, RouteState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Current route and navigation history
    pub route: RouteState,

    /// Loaded catalog and the active category selection
    pub gallery: GalleryState,

    /// Before/after comparison slider state machine
    pub slider: ComparisonSlider,

    /// Hero typing animation and scroll-to-contact request
    pub hero: HeroState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Whether the consultation dialog is open
    pub consultation_open: bool,

    /// Persisted reduce-motion preference (true = animations on)
    pub motion_enabled: bool,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Decoded image textures plus placeholder fallbacks
    pub texture_cache: TextureCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            route: RouteState::new(),
            gallery: GalleryState::new(),
            slider: ComparisonSlider::new(),
            hero: HeroState::new(),
            theme: ThemeState::new(),
            consultation_open: false,
            motion_enabled: true,
            error_message: None,
            texture_cache: TextureCache::new(),
        }
    }

    /// Creates a new AppState with theme and motion settings loaded from storage.
    pub fn with_theme_and_motion(theme_name: String, motion_enabled: bool) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            motion_enabled,
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets portfolio-related state when a new portfolio starts loading.
    ///
    /// Clears the catalog, the category selection, cached textures, and any
    /// stale error. Navigation, theme, and the comparison slider are kept.
    pub fn reset_portfolio_state(&mut self) {
        self.gallery.clear();
        self.texture_cache.invalidate();
        self.error_message = None;
    }
}

//! Application-level coordination and workflow management.
//!
//! Handles high-level application operations like portfolio loading, event
//! application, and coordinating between different subsystems.

use std::path::PathBuf;

use eframe::egui;

use crate::app::AppState;
use crate::io::{AsyncLoader, LoadEvent};
use crate::state::Route;

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Managing portfolio loading workflows
/// - Applying background load events to state
/// - Handling navigation and modal interactions
/// - Managing error states
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Initiates asynchronous loading of a portfolio manifest.
    ///
    /// Immediately clears the previous catalog so the loading indicator shows.
    pub fn open_manifest(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        path: PathBuf,
        ctx: &egui::Context,
    ) {
        state.reset_portfolio_state();
        loader.start_manifest_load(path, ctx);
    }

    /// Loads the built-in sample portfolio.
    pub fn open_sample(state: &mut AppState, loader: &mut AsyncLoader, ctx: &egui::Context) {
        state.reset_portfolio_state();
        loader.start_sample_load(ctx);
    }

    /// Drains pending load events and applies them to application state.
    ///
    /// Called once per frame in the update loop. Decoded images become
    /// textures here, on the main thread, where a GL context is available.
    pub fn apply_load_events(
        state: &mut AppState,
        loader: &mut AsyncLoader,
        ctx: &egui::Context,
    ) {
        for event in loader.poll() {
            match event {
                LoadEvent::CatalogReady {
                    catalog,
                    source_path,
                } => {
                    state.gallery.install(catalog, source_path);
                    state.error_message = None;
                }
                LoadEvent::ImageDecoded { id, image } => {
                    state.texture_cache.insert(ctx, id, image);
                }
                LoadEvent::ImageUnavailable { id } => {
                    state.texture_cache.mark_unavailable(id);
                }
                LoadEvent::ComparisonDecoded { side, image } => {
                    state.texture_cache.insert_comparison(ctx, side, image);
                }
                LoadEvent::Failed(message) => {
                    state.error_message = Some(format!("Error loading portfolio: {message}"));
                    state.gallery.clear();
                }
                LoadEvent::Finished => {}
            }
        }
    }

    /// Handles a navigation link click.
    ///
    /// Leaving a page closes any open modal so it does not reappear when the
    /// user navigates back to Explore.
    pub fn handle_navigation(state: &mut AppState, route: Route) {
        state.route.navigate(route);
        state.gallery.clear_selection();
        state.consultation_open = false;
    }

    /// Handles a back link click. Falls back to Home when the history is
    /// empty, so back links always lead somewhere.
    pub fn handle_back(state: &mut AppState) {
        if state.route.can_go_back() {
            state.route.back();
        } else {
            state.route.navigate(Route::Home);
        }
        state.gallery.clear_selection();
        state.consultation_open = false;
    }

    /// Opens the category browser for `category_id`. Unknown ids leave the
    /// selection unchanged, so no modal opens.
    pub fn handle_category_selected(state: &mut AppState, category_id: &str) {
        state.gallery.select(category_id);
    }

    pub fn handle_category_closed(state: &mut AppState) {
        state.gallery.clear_selection();
    }

    pub fn handle_consultation_opened(state: &mut AppState) {
        state.consultation_open = true;
    }

    pub fn handle_consultation_closed(state: &mut AppState) {
        state.consultation_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alora::sample_catalog;

    #[test]
    fn navigation_clears_open_modals() {
        let mut state = AppState::new();
        state.gallery.install(sample_catalog(), None);
        state.gallery.select("modular-kitchen");
        state.consultation_open = true;

        ApplicationCoordinator::handle_navigation(&mut state, Route::Services);

        assert_eq!(state.route.current(), Route::Services);
        assert!(state.gallery.selected_category().is_none());
        assert!(!state.consultation_open);
    }

    #[test]
    fn back_with_empty_history_goes_home() {
        let mut state = AppState::new();
        state.route.navigate(Route::Contact);
        // Drain the history so back has nowhere to go.
        state.route.back();
        assert!(!state.route.can_go_back());

        ApplicationCoordinator::handle_back(&mut state);
        assert_eq!(state.route.current(), Route::Home);
    }

    #[test]
    fn unknown_category_opens_nothing() {
        let mut state = AppState::new();
        state.gallery.install(sample_catalog(), None);

        ApplicationCoordinator::handle_category_selected(&mut state, "no-such-category");
        assert!(state.gallery.selected_category().is_none());
    }
}

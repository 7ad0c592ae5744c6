//! Alora Interiors Desktop Site
//!
//! An interactive desktop rendition of the Alora Interiors marketing site
//! built with the egui framework. The application features:
//! - Four routed pages (Home, Services, Contact, Explore Work)
//! - A draggable before/after comparison slider
//! - A category gallery with a full-image browser modal
//! - Asynchronous portfolio loading with decode progress
//! - Multiple theme support with persistent preferences

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `presentation/` - Visual styling and color mapping
//! - `cache/` - Texture cache with placeholder fallbacks
//! - `io/` - Portfolio loading and image decoding
//! - `utils/` - Utility functions for formatting
//! - `ui/` - Page rendering, modals, and input handling
//! - `rendering/` - Low-level rendering for the slider and image tiles
//! - `state/` - Routing, gallery, hero, and theme state

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod cache;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator, MOTION_KEY};
use io::AsyncLoader;
use ui::page_manager::{PageInteraction, PageManager};

/// Main application entry point that initializes and launches the site.
fn main() -> eframe::Result {
    // An optional manifest path on the command line overrides the sample.
    let initial_manifest = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Alora Interiors"),
        ..Default::default()
    };

    eframe::run_native(
        "Alora Interiors",
        options,
        Box::new(move |cc| Ok(Box::new(AloraApp::new(cc, initial_manifest)))),
    )
}

/// The main Alora Interiors application.
///
/// This struct is deliberately thin, delegating most functionality:
/// - `ApplicationCoordinator` handles portfolio loading and interaction logic
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PageManager` handles page layout and rendering
struct AloraApp {
    /// Centralized application state
    state: AppState,
    /// Asynchronous portfolio loader
    loader: AsyncLoader,
    /// Optional manifest to load on first frame; None loads the sample
    pending_manifest_load: Option<PathBuf>,
    /// Whether the initial portfolio load has been kicked off
    initial_load_done: bool,
}

impl AloraApp {
    /// Creates a new instance with theme and motion settings loaded from
    /// persistent storage. Optionally accepts a manifest path to load on
    /// startup.
    fn new(cc: &eframe::CreationContext, initial_manifest: Option<PathBuf>) -> Self {
        let current_theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let motion_enabled: bool =
            SettingsCoordinator::load_setting_or(cc.storage, MOTION_KEY, true);

        Self {
            state: AppState::with_theme_and_motion(current_theme_name, motion_enabled),
            loader: AsyncLoader::new(),
            pending_manifest_load: initial_manifest,
            initial_load_done: false,
        }
    }

    /// Handles page interactions by delegating to ApplicationCoordinator.
    fn handle_page_interaction(&mut self, interaction: PageInteraction, ctx: &egui::Context) {
        match interaction {
            PageInteraction::NavigateTo(route) => {
                ApplicationCoordinator::handle_navigation(&mut self.state, route);
            }
            PageInteraction::NavigateBack => {
                ApplicationCoordinator::handle_back(&mut self.state);
            }
            PageInteraction::OpenManifestRequested(path) => {
                ApplicationCoordinator::open_manifest(&mut self.state, &mut self.loader, path, ctx);
            }
            PageInteraction::ReloadSampleRequested => {
                ApplicationCoordinator::open_sample(&mut self.state, &mut self.loader, ctx);
            }
            PageInteraction::CategorySelected(category_id) => {
                ApplicationCoordinator::handle_category_selected(&mut self.state, &category_id);
            }
            PageInteraction::CategoryClosed => {
                ApplicationCoordinator::handle_category_closed(&mut self.state);
            }
            PageInteraction::ConsultationOpened => {
                ApplicationCoordinator::handle_consultation_opened(&mut self.state);
            }
            PageInteraction::ConsultationClosed => {
                ApplicationCoordinator::handle_consultation_closed(&mut self.state);
            }
        }
    }
}

impl eframe::App for AloraApp {
    /// Called when the app is being shut down. Ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, MOTION_KEY, &self.state.motion_enabled);
    }

    /// Main update loop.
    ///
    /// 1. Apply pending load events from the background thread
    /// 2. Apply the current theme
    /// 3. Kick off the initial portfolio load on the first frame
    /// 4. Render all pages via PageManager
    /// 5. Handle page interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::apply_load_events(&mut self.state, &mut self.loader, ctx);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if !self.initial_load_done {
            self.initial_load_done = true;
            match self.pending_manifest_load.take() {
                Some(path) => ApplicationCoordinator::open_manifest(
                    &mut self.state,
                    &mut self.loader,
                    path,
                    ctx,
                ),
                None => {
                    ApplicationCoordinator::open_sample(&mut self.state, &mut self.loader, ctx)
                }
            }
        }

        if let Some(interaction) = PageManager::render_all(ctx, &mut self.state, &self.loader) {
            self.handle_page_interaction(interaction, ctx);
        }
    }
}

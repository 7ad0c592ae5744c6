//! Bottom status bar.
//!
//! Shows the studio tagline, where the current portfolio came from, catalog
//! stats, and decode progress while a portfolio loads.

use eframe::egui;
use egui::RichText;

use alora::content::STUDIO_TAGLINE;
use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::utils::{format_image_count, format_progress};

/// Renders the status bar at the bottom of the window.
pub fn render_footer(ui: &mut egui::Ui, state: &AppState, loader: &AsyncLoader) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(STUDIO_TAGLINE).italics());

        if let Some(catalog) = state.gallery.catalog() {
            ui.label(RichText::new("|").strong());

            let source = match state.gallery.source_path() {
                Some(path) => path.display().to_string(),
                None => "Sample portfolio".to_string(),
            };
            ui.label(source);

            ui.label(RichText::new("|").strong());
            ui.label(format!(
                "{} categories, {}",
                catalog.categories().len(),
                format_image_count(catalog.image_count())
            ));
        }

        if loader.is_loading() {
            ui.label(RichText::new("|").strong());
            let (decoded, total) = loader.progress();
            ui.spinner();
            ui.label(format_progress(decoded, total));
        }
    });
}

//! Top navigation bar.
//!
//! Brand mark, the four route links with active highlight, theme selector,
//! reduce-motion toggle, and the open-portfolio action.

use eframe::egui;
use egui::RichText;
use std::path::PathBuf;

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::state::Route;

/// Result of user interaction with the navbar.
pub enum NavbarInteraction {
    /// User clicked a route link
    NavigateTo(Route),
    /// User picked a manifest file to load
    OpenManifestRequested(PathBuf),
    /// User asked to reload the built-in sample portfolio
    ReloadSampleRequested,
}

/// Renders the navigation bar.
pub fn render_navbar(ui: &mut egui::Ui, state: &mut AppState) -> Option<NavbarInteraction> {
    let mut interaction = None;
    let colors = color_mapping::theme_colors(
        state.theme.theme_manager(),
        state.theme.current_theme_name(),
    )
    .clone();

    ui.horizontal(|ui| {
        ui.add_space(4.0);
        ui.label(
            RichText::new("Alora Interiors")
                .strong()
                .size(18.0)
                .color(colors.accent),
        );
        ui.separator();

        for route in Route::all() {
            let active = state.route.current() == route;
            let text = if active {
                RichText::new(route.label()).strong().color(colors.accent)
            } else {
                RichText::new(route.label())
            };
            if ui.selectable_label(active, text).clicked() && !active {
                interaction = Some(NavbarInteraction::NavigateTo(route));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(4.0);

            if ui.button("📁 Open Portfolio").clicked() {
                let mut dialog = rfd::FileDialog::new()
                    .add_filter("Portfolio Manifest", &["json"]);
                if let Ok(cwd) = std::env::current_dir() {
                    dialog = dialog.set_directory(cwd);
                }
                if let Some(path) = dialog.pick_file() {
                    interaction = Some(NavbarInteraction::OpenManifestRequested(path));
                }
            }

            if ui.button("🔄 Sample").clicked() {
                interaction = Some(NavbarInteraction::ReloadSampleRequested);
            }

            ui.checkbox(&mut state.motion_enabled, "Animations");

            // Theme selector
            let current = state.theme.current_theme_name().to_string();
            let mut chosen = current.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current)
                .show_ui(ui, |ui| {
                    for name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut chosen, name.to_string(), name);
                    }
                });
            if chosen != current {
                state.theme.set_theme(&chosen);
            }
        });
    });

    interaction
}

//! Page orchestration and layout.
//!
//! Lays out the navbar, the routed page body, the footer, and any open
//! modal, and funnels every user interaction back to the application
//! coordinator as a single enum.

use eframe::egui;

use crate::app::AppState;
use crate::io::AsyncLoader;
use crate::presentation::color_mapping;
use crate::state::Route;
use crate::ui::{
    category_modal, consultation_modal, contact_page, explore_page, footer, home_page, navbar,
    services_page,
};

/// Result of page interactions that need to be handled by the application
/// coordinator.
pub enum PageInteraction {
    /// User clicked a navigation link
    NavigateTo(Route),
    /// User clicked a back link
    NavigateBack,
    /// User picked a portfolio manifest to load
    OpenManifestRequested(std::path::PathBuf),
    /// User asked to reload the built-in sample portfolio
    ReloadSampleRequested,
    /// User opened a category from the Explore page
    CategorySelected(String),
    /// User dismissed the category browser
    CategoryClosed,
    /// User opened the consultation dialog
    ConsultationOpened,
    /// User dismissed the consultation dialog
    ConsultationClosed,
}

/// Manages the layout and rendering of all pages and modals.
pub struct PageManager;

impl PageManager {
    /// Renders the whole window. This is the main entry point for the UI,
    /// called from the eframe::App::update() implementation.
    pub fn render_all(
        ctx: &egui::Context,
        state: &mut AppState,
        loader: &AsyncLoader,
    ) -> Option<PageInteraction> {
        let mut interaction: Option<PageInteraction> = None;

        let colors = color_mapping::theme_colors(
            state.theme.theme_manager(),
            state.theme.current_theme_name(),
        )
        .clone();

        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            if let Some(nav) = navbar::render_navbar(ui, state) {
                interaction = Some(match nav {
                    navbar::NavbarInteraction::NavigateTo(route) => {
                        PageInteraction::NavigateTo(route)
                    }
                    navbar::NavbarInteraction::OpenManifestRequested(path) => {
                        PageInteraction::OpenManifestRequested(path)
                    }
                    navbar::NavbarInteraction::ReloadSampleRequested => {
                        PageInteraction::ReloadSampleRequested
                    }
                });
            }
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            footer::render_footer(ui, state, loader);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors.background))
            .show(ctx, |ui| {
                if let Some(message) = state.error_message.clone() {
                    render_error_banner(ui, state, &message);
                }

                egui::ScrollArea::vertical()
                    .id_salt(state.route.current().label())
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        let page_interaction = match state.route.current() {
                            Route::Home => home_page::render_home_page(ui, ctx, state),
                            Route::Services => {
                                services_page::render_services_page(ui, ctx, state)
                            }
                            Route::Contact => contact_page::render_contact_page(ui, ctx, state),
                            Route::ExploreWork => {
                                explore_page::render_explore_page(ui, ctx, state)
                            }
                        };
                        if page_interaction.is_some() {
                            interaction = page_interaction;
                        }
                    });
            });

        // Modals render on top of everything. Category browser and
        // consultation dialog are mutually exclusive in practice but both
        // paths are checked each frame.
        if state.gallery.selected_category().is_some() {
            if let Some(modal_interaction) = category_modal::render_category_modal(ctx, state) {
                interaction = Some(modal_interaction);
            }
        }
        if state.consultation_open {
            if let Some(modal_interaction) =
                consultation_modal::render_consultation_modal(ctx, state)
            {
                interaction = Some(modal_interaction);
            }
        }

        interaction
    }
}

fn render_error_banner(ui: &mut egui::Ui, state: &mut AppState, message: &str) {
    let error_bg = egui::Color32::from_rgb(120, 40, 40);
    egui::Frame::default()
        .fill(error_bg)
        .inner_margin(8.0)
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("⚠ {message}")).color(egui::Color32::WHITE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Dismiss").clicked() {
                        state.error_message = None;
                    }
                });
            });
        });
    ui.add_space(6.0);
}

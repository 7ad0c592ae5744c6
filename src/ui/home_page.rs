//! Home page: hero, services teaser, before/after comparison, stats, and
//! the contact band.

use eframe::egui;
use egui::RichText;

use alora::content::{
    HERO_HEADLINE, PROPRIETOR, SERVICES, STUDIO_STATS, STUDIO_TAGLINE,
};
use crate::app::AppState;
use crate::cache::ComparisonSide;
use crate::presentation::color_mapping;
use crate::rendering::slider_renderer;
use crate::state::Route;
use crate::ui::input::slider_input_handler;
use crate::ui::motion;
use crate::ui::page_manager::PageInteraction;

const COMPARISON_MAX_WIDTH: f32 = 720.0;
const COMPARISON_ASPECT: f32 = 16.0 / 9.0;

/// Renders the Home page. Returns any interaction for the coordinator.
pub fn render_home_page(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
) -> Option<PageInteraction> {
    let mut interaction = None;
    let colors = color_mapping::theme_colors(
        state.theme.theme_manager(),
        state.theme.current_theme_name(),
    )
    .clone();

    // ===== Hero =====
    let now = ctx.input(|i| i.time);
    state.hero.mark_visible(now);

    let typed = if state.motion_enabled {
        state.hero.typed_headline(now)
    } else {
        HERO_HEADLINE
    };
    if state.motion_enabled && state.hero.is_typing(now) {
        ctx.request_repaint();
    }

    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        // Blinking caret while the headline is still typing out.
        let typing = state.motion_enabled && state.hero.is_typing(now);
        let caret = if typing && now.fract() < 0.5 { "|" } else { " " };
        ui.label(
            RichText::new(format!("{typed}{caret}"))
                .size(40.0)
                .strong()
                .color(colors.heading),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(STUDIO_TAGLINE)
                .size(22.0)
                .color(colors.text_dim),
        );
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 190.0);
            let cta = egui::Button::new(
                RichText::new("Explore Our Work").size(16.0).color(egui::Color32::WHITE),
            )
            .fill(colors.accent)
            .corner_radius(20.0)
            .min_size(egui::vec2(220.0, 44.0));
            if ui.add(cta).clicked() {
                interaction = Some(PageInteraction::NavigateTo(Route::ExploreWork));
            }

            let contact = egui::Button::new(RichText::new("Contact Us ↓").size(16.0))
                .corner_radius(20.0)
                .min_size(egui::vec2(150.0, 44.0));
            if ui.add(contact).clicked() {
                state.hero.request_scroll_to_contact();
            }
        });

        ui.add_space(12.0);
        ui.label(RichText::new("⬇ scroll").color(colors.text_dim).small());
    });
    ui.add_space(48.0);
    ui.separator();

    // ===== Services teaser =====
    let factor = motion::entrance_factor(ctx, egui::Id::new("home-services"), state.motion_enabled);
    ui.add_space(24.0 + motion::rise_offset(factor));
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("What We Do")
                .size(28.0)
                .strong()
                .color(motion::faded(colors.heading, factor)),
        );
    });
    ui.add_space(16.0);

    ui.columns(3, |columns| {
        for (column, service) in columns.iter_mut().zip(SERVICES.iter().take(3)) {
            egui::Frame::group(column.style())
                .fill(motion::faded(colors.card, factor))
                .corner_radius(8.0)
                .show(column, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(service.icon).size(32.0));
                        ui.label(RichText::new(service.title).strong());
                        ui.label(
                            RichText::new(service.description)
                                .small()
                                .color(colors.text_dim),
                        );
                    });
                });
        }
    });

    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        if ui.link("Learn More →").clicked() {
            interaction = Some(PageInteraction::NavigateTo(Route::Services));
        }
    });
    ui.add_space(24.0);
    ui.separator();

    // ===== Before / after comparison =====
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("See the Transformation")
                .size(28.0)
                .strong()
                .color(colors.heading),
        );
        ui.label(
            RichText::new("Drag the handle to compare before and after.")
                .color(colors.text_dim),
        );
    });
    ui.add_space(12.0);

    render_comparison_widget(ui, ctx, state, &colors);

    ui.add_space(24.0);
    ui.separator();

    // ===== Stats =====
    ui.add_space(16.0);
    ui.columns(STUDIO_STATS.len(), |columns| {
        for (column, stat) in columns.iter_mut().zip(STUDIO_STATS.iter()) {
            column.vertical_centered(|ui| {
                ui.label(
                    RichText::new(stat.value)
                        .size(24.0)
                        .strong()
                        .color(colors.accent),
                );
                ui.label(RichText::new(stat.label).small().color(colors.text_dim));
            });
        }
    });
    ui.add_space(16.0);
    ui.separator();

    // ===== Contact band =====
    ui.add_space(24.0);
    let band = ui
        .vertical_centered(|ui| {
            ui.label(
                RichText::new("Ready to Start Your Project?")
                    .size(26.0)
                    .strong()
                    .color(colors.heading),
            );
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Contact {} today for a free consultation and let's bring your dream space to life.",
                    PROPRIETOR.name
                ))
                .color(colors.text_dim),
            );
            ui.add_space(14.0);

            let consult = egui::Button::new(
                RichText::new("Get Free Consultation")
                    .size(15.0)
                    .color(egui::Color32::WHITE),
            )
            .fill(colors.accent_strong)
            .corner_radius(20.0)
            .min_size(egui::vec2(220.0, 40.0));
            if ui.add(consult).clicked() {
                interaction = Some(PageInteraction::ConsultationOpened);
            }
        })
        .response
        .rect;
    ui.add_space(32.0);

    // Honor a pending "jump to contact" request once the band has a rect.
    if state.hero.take_scroll_to_contact() {
        ui.scroll_to_rect(band, Some(egui::Align::Center));
    }

    interaction
}

/// Allocates the comparison container, runs input handling against the
/// slider state machine, and paints the result.
fn render_comparison_widget(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    colors: &alora::ThemeColors,
) {
    let width = ui.available_width().min(COMPARISON_MAX_WIDTH);
    let size = egui::vec2(width, width / COMPARISON_ASPECT);

    ui.vertical_centered(|ui| {
        let (rect, response) =
            ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        slider_input_handler::handle_slider_input(ctx, rect, &response, &mut state.slider);

        let before = state.texture_cache.comparison(ctx, ComparisonSide::Before);
        let after = state.texture_cache.comparison(ctx, ComparisonSide::After);
        slider_renderer::render_comparison(
            ui,
            rect,
            &before,
            &after,
            state.slider.position(),
            state.slider.is_dragging(),
            colors,
        );
        slider_renderer::render_corner_labels(ui, rect, colors);

        if response.hovered() || state.slider.is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::ResizeColumn);
        }
    });
}

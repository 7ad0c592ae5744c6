//! Explore Work page: the category card grid, the proprietor section, and a
//! closing consultation band.

use eframe::egui;
use egui::RichText;

use alora::catalog::Category;
use alora::content::{EXPLORE_INTRO, PROPRIETOR, PROPRIETOR_BIO, STUDIO_STATS};
use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::rendering::thumbnails;
use crate::state::Route;
use crate::ui::motion;
use crate::ui::page_manager::PageInteraction;
use crate::utils::format_image_count;

const CARD_COLUMNS: usize = 3;
const PREVIEW_TILES: usize = 4;
const PREVIEW_TILE_HEIGHT: f32 = 72.0;

pub fn render_explore_page(
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

    ui.add_space(16.0);
    if ui.link("← Back to Home").clicked() {
        interaction = Some(PageInteraction::NavigateBack);
    }

    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Explore Our Work")
                .size(32.0)
                .strong()
                .color(colors.heading),
        );
        ui.add_space(6.0);
        ui.label(RichText::new(EXPLORE_INTRO).color(colors.text_dim));
    });
    ui.add_space(24.0);

    // Category cards. Gallery contents are cloned per row so the texture
    // cache can be borrowed mutably while drawing previews.
    let categories: Vec<Category> = state
        .gallery
        .catalog()
        .map(|catalog| catalog.categories().to_vec())
        .unwrap_or_default();

    if !state.gallery.is_loaded() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
            ui.label(RichText::new("Loading portfolio...").color(colors.text_dim));
            ui.add_space(40.0);
        });
    } else if categories.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("This portfolio has no categories.").color(colors.text_dim));
            ui.add_space(40.0);
        });
    } else {
        let factor =
            motion::entrance_factor(ctx, egui::Id::new("explore-cards"), state.motion_enabled);
        ui.add_space(motion::rise_offset(factor));

        for row in categories.chunks(CARD_COLUMNS) {
            ui.columns(CARD_COLUMNS, |columns| {
                for (column, category) in columns.iter_mut().zip(row.iter()) {
                    if let Some(action) =
                        render_category_card(column, ctx, state, category, &colors, factor)
                    {
                        interaction = Some(action);
                    }
                }
            });
            ui.add_space(12.0);
        }
    }

    ui.add_space(16.0);
    ui.separator();

    // Proprietor section.
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(640.0);
        ui.label(
            RichText::new("Meet the Proprietor")
                .size(26.0)
                .strong()
                .color(colors.heading),
        );
        ui.add_space(10.0);
        ui.label(RichText::new(PROPRIETOR.name).size(19.0).strong());
        ui.label(RichText::new(PROPRIETOR.role).color(colors.accent));
        ui.add_space(8.0);
        ui.label(RichText::new(PROPRIETOR_BIO).color(colors.text_dim));
    });

    ui.add_space(20.0);
    ui.columns(STUDIO_STATS.len(), |columns| {
        for (column, stat) in columns.iter_mut().zip(STUDIO_STATS.iter()) {
            column.vertical_centered(|ui| {
                ui.label(
                    RichText::new(stat.value)
                        .size(22.0)
                        .strong()
                        .color(colors.accent),
                );
                ui.label(RichText::new(stat.label).small().color(colors.text_dim));
            });
        }
    });

    ui.add_space(20.0);
    ui.separator();
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("Like what you see?")
                .size(20.0)
                .strong()
                .color(colors.heading),
        );
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.add_space(ui.available_width() / 2.0 - 230.0);
            let consult = egui::Button::new(
                RichText::new("Get Free Consultation")
                    .size(15.0)
                    .color(egui::Color32::WHITE),
            )
            .fill(colors.accent)
            .corner_radius(20.0)
            .min_size(egui::vec2(220.0, 40.0));
            if ui.add(consult).clicked() {
                interaction = Some(PageInteraction::ConsultationOpened);
            }
            if ui
                .add(
                    egui::Button::new(RichText::new("Contact Us").size(15.0))
                        .corner_radius(20.0)
                        .min_size(egui::vec2(140.0, 40.0)),
                )
                .clicked()
            {
                interaction = Some(PageInteraction::NavigateTo(Route::Contact));
            }
        });
    });
    ui.add_space(32.0);

    interaction
}

/// One category card: accent header strip, a small preview grid, the image
/// count, and a "View All" action.
fn render_category_card(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    category: &Category,
    colors: &alora::ThemeColors,
    factor: f32,
) -> Option<PageInteraction> {
    let mut interaction = None;
    let accent = color_mapping::category_accent(&category.meta.id, colors);

    egui::Frame::group(ui.style())
        .fill(motion::faded(colors.card, factor))
        .corner_radius(8.0)
        .inner_margin(0.0)
        .show(ui, |ui| {
            // Header strip tinted per category.
            let header_height = 54.0;
            let (header_rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), header_height),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(header_rect, 8.0, accent);
            ui.painter().text(
                header_rect.left_center() + egui::vec2(12.0, 0.0),
                egui::Align2::LEFT_CENTER,
                format!("{} {}", category.meta.icon, category.meta.title),
                egui::FontId::proportional(16.0),
                egui::Color32::WHITE,
            );

            egui::Frame::NONE.inner_margin(10.0).show(ui, |ui| {
                ui.label(
                    RichText::new(&category.meta.description)
                        .small()
                        .color(colors.text_dim),
                );
                ui.add_space(8.0);

                // Small preview of the first few images.
                let preview = category.images.iter().take(PREVIEW_TILES).collect::<Vec<_>>();
                thumbnails::tile_grid(
                    ui,
                    preview.len(),
                    2,
                    PREVIEW_TILE_HEIGHT,
                    6.0,
                    |ui, i, rect| {
                        let texture = state.texture_cache.resolve(ctx, preview[i].id);
                        thumbnails::render_image_tile(ui, rect, &texture, colors);
                    },
                );

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format_image_count(category.images.len()))
                            .small()
                            .color(colors.text_dim),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.link(RichText::new("View All →").color(colors.link)).clicked() {
                            interaction = Some(PageInteraction::CategorySelected(
                                category.meta.id.clone(),
                            ));
                        }
                    });
                });
            });
        });

    interaction
}

//! Full-category image browser.
//!
//! Opens when a category is selected on the Explore page. Shows every image
//! in the category as a titled tile grid inside a scrollable window.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::rendering::thumbnails;
use crate::ui::page_manager::PageInteraction;
use crate::utils::format_image_count;

const GRID_COLUMNS: usize = 3;
const TILE_HEIGHT: f32 = 140.0;

pub fn render_category_modal(
    ctx: &egui::Context,
    state: &mut AppState,
) -> Option<PageInteraction> {
    let Some(category) = state.gallery.selected_category().cloned() else {
        return None;
    };

    let mut interaction = None;
    let colors = color_mapping::theme_colors(
        state.theme.theme_manager(),
        state.theme.current_theme_name(),
    )
    .clone();

    let screen = ctx.content_rect();
    let backdrop = egui::Area::new(egui::Id::new("category_backdrop"))
        .fixed_pos(screen.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter().rect_filled(screen, 0.0, colors.backdrop);
            response
        });
    if backdrop.inner.clicked() {
        interaction = Some(PageInteraction::CategoryClosed);
    }

    let title = format!("{} {}", category.meta.icon, category.meta.title);
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            let max_width = (screen.width() * 0.8).min(860.0);
            let max_height = screen.height() * 0.7;
            ui.set_width(max_width);

            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format_image_count(category.images.len()))
                        .color(colors.text_dim),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖ Close").clicked() {
                        interaction = Some(PageInteraction::CategoryClosed);
                    }
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("category_modal_scroll")
                .max_height(max_height)
                .show(ui, |ui| {
                    thumbnails::tile_grid(
                        ui,
                        category.images.len(),
                        GRID_COLUMNS,
                        TILE_HEIGHT,
                        10.0,
                        |ui, i, rect| {
                            let image = &category.images[i];

                            // Reserve a strip at the bottom for the title.
                            let label_height = 20.0;
                            let image_rect = egui::Rect::from_min_max(
                                rect.min,
                                egui::pos2(rect.max.x, rect.max.y - label_height),
                            );
                            let texture = state.texture_cache.resolve(ctx, image.id);
                            thumbnails::render_image_tile(ui, image_rect, &texture, &colors);

                            if state.texture_cache.is_unavailable(image.id) {
                                ui.painter().text(
                                    image_rect.center(),
                                    egui::Align2::CENTER_CENTER,
                                    "image unavailable",
                                    egui::FontId::proportional(11.0),
                                    colors.text_dim,
                                );
                            }

                            ui.painter().text(
                                egui::pos2(rect.center().x, rect.max.y - label_height / 2.0),
                                egui::Align2::CENTER_CENTER,
                                &image.title,
                                egui::FontId::proportional(12.0),
                                colors.text_dim,
                            );
                        },
                    );
                });
        });

    interaction
}

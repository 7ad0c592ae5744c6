//! Image tile rendering for gallery grids.

use alora::theme::ThemeColors;
use eframe::egui;

/// Draws one image tile: the texture letterboxed into `rect` behind a thin
/// border. Placeholder textures go through the same path as real ones.
pub fn render_image_tile(
    ui: &egui::Ui,
    rect: egui::Rect,
    texture: &egui::TextureHandle,
    colors: &ThemeColors,
) {
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, colors.hover);

    // Letterbox: preserve the texture's aspect ratio inside the tile.
    let tex_size = texture.size_vec2();
    let scale = (rect.width() / tex_size.x).min(rect.height() / tex_size.y);
    let draw_size = tex_size * scale;
    let draw_rect = egui::Rect::from_center_size(rect.center(), draw_size);

    painter.image(
        texture.id(),
        draw_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(1.0, colors.border),
        egui::StrokeKind::Inside,
    );
}

/// Allocates a grid of fixed-height tiles, `columns` per row, and invokes
/// `draw` with each tile's index and rect.
pub fn tile_grid(
    ui: &mut egui::Ui,
    count: usize,
    columns: usize,
    tile_height: f32,
    spacing: f32,
    mut draw: impl FnMut(&mut egui::Ui, usize, egui::Rect),
) {
    if count == 0 || columns == 0 {
        return;
    }

    let tile_width =
        (ui.available_width() - spacing * (columns as f32 - 1.0)) / columns as f32;

    let mut index = 0;
    while index < count {
        let row_end = (index + columns).min(count);
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing;
            for i in index..row_end {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(tile_width, tile_height),
                    egui::Sense::hover(),
                );
                draw(ui, i, rect);
            }
        });
        ui.add_space(spacing);
        index = row_end;
    }
}

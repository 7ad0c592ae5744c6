//! Before/after comparison rendering.
//!
//! Draws the two stacked images, the divider line, and the drag handle for
//! the comparison widget. The divider position comes straight from the
//! `ComparisonSlider` state machine as a percentage of the container width.

use alora::theme::{with_alpha, ThemeColors};
use eframe::egui;

const HANDLE_RADIUS: f32 = 22.0;
const GRIP_BAR_HEIGHT: f32 = 22.0;

/// Full-texture UV rectangle.
fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

/// Renders the comparison widget into `rect`.
///
/// The "before" image fills the container; the "after" image is clipped to
/// the left of the divider, exactly mirroring a clip-path reveal. Textures
/// may be placeholders while assets decode.
pub fn render_comparison(
    ui: &egui::Ui,
    rect: egui::Rect,
    before: &egui::TextureHandle,
    after: &egui::TextureHandle,
    position_pct: f32,
    is_dragging: bool,
    colors: &ThemeColors,
) {
    let painter = ui.painter();
    let divider_x = rect.left() + rect.width() * position_pct / 100.0;

    // Before image across the whole container.
    painter.image(before.id(), rect, full_uv(), egui::Color32::WHITE);

    // After image, clipped to the left of the divider. The image itself is
    // not squeezed; only its visible region changes.
    let reveal = egui::Rect::from_min_max(rect.min, egui::pos2(divider_x, rect.bottom()));
    painter
        .with_clip_rect(reveal)
        .image(after.id(), rect, full_uv(), egui::Color32::WHITE);

    painter.rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(1.0, colors.border),
        egui::StrokeKind::Inside,
    );

    // Divider line.
    painter.line_segment(
        [
            egui::pos2(divider_x, rect.top()),
            egui::pos2(divider_x, rect.bottom()),
        ],
        egui::Stroke::new(2.0, egui::Color32::WHITE),
    );

    // Drag handle: white disc with a maroon ring and two grip bars.
    let center = egui::pos2(divider_x, rect.center().y);
    if is_dragging {
        painter.circle_filled(center, HANDLE_RADIUS + 6.0, with_alpha(colors.accent, 60));
    }
    painter.circle_filled(center, HANDLE_RADIUS, egui::Color32::WHITE);
    painter.circle_stroke(center, HANDLE_RADIUS, egui::Stroke::new(4.0, colors.accent));

    for offset in [-3.0, 3.0] {
        let top = egui::pos2(center.x + offset, center.y - GRIP_BAR_HEIGHT / 2.0);
        let bottom = egui::pos2(center.x + offset, center.y + GRIP_BAR_HEIGHT / 2.0);
        painter.line_segment([top, bottom], egui::Stroke::new(2.0, colors.accent));
    }
}

/// Renders the "Before" / "After" corner labels over the widget.
pub fn render_corner_labels(ui: &egui::Ui, rect: egui::Rect, colors: &ThemeColors) {
    let painter = ui.painter();
    for (text, pos, align) in [
        ("Before", rect.left_top() + egui::vec2(10.0, 10.0), egui::Align2::LEFT_TOP),
        ("After", rect.right_top() + egui::vec2(-10.0, 10.0), egui::Align2::RIGHT_TOP),
    ] {
        let galley_rect = painter.text(
            pos,
            align,
            text,
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
        painter.rect_filled(
            galley_rect.expand(4.0),
            3.0,
            with_alpha(egui::Color32::BLACK, 90),
        );
        // Repaint the text over its backdrop.
        painter.text(
            pos,
            align,
            text,
            egui::FontId::proportional(13.0),
            egui::Color32::WHITE,
        );
    }
}

//! Decorative entrance animation helpers.
//!
//! Sections fade and slide in the first time they are drawn. All helpers
//! respect the persisted reduce-motion preference: with motion off they snap
//! straight to the settled state.

use eframe::egui;

const FADE_SECONDS: f32 = 0.8;

/// Returns an animation factor in [0, 1] for a section identified by `id`,
/// ramping from 0 the first frame it is drawn. With motion disabled the
/// factor is always 1.
pub fn entrance_factor(ctx: &egui::Context, id: egui::Id, motion_enabled: bool) -> f32 {
    if !motion_enabled {
        return 1.0;
    }

    let anim_id = id.with("entrance");
    let seen = ctx.data_mut(|d| {
        let seen = d.get_temp::<bool>(id).unwrap_or(false);
        d.insert_temp(id, true);
        seen
    });
    if !seen {
        // Prime the animated value at zero so the first real frame ramps.
        ctx.animate_value_with_time(anim_id, 0.0, 0.0);
    }

    let factor = ctx.animate_value_with_time(anim_id, 1.0, FADE_SECONDS);
    if factor < 1.0 {
        ctx.request_repaint();
    }
    factor
}

/// Vertical slide offset for an entrance factor (sections rise ~20pt).
pub fn rise_offset(factor: f32) -> f32 {
    (1.0 - factor) * 20.0
}

/// Applies an entrance fade to a color.
pub fn faded(color: egui::Color32, factor: f32) -> egui::Color32 {
    color.gamma_multiply(factor)
}

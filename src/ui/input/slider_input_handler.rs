//! Pointer input handling for the before/after comparison widget.
//!
//! Implements drag-capture semantics: a press inside the container starts the
//! gesture, but while it is active move and release samples are taken from
//! the process-wide pointer stream, not the widget's hover area, so the
//! handle keeps following a pointer that leaves the container. Touch input
//! flows through the same path (egui folds the primary touch point into the
//! pointer stream).

use alora::ComparisonSlider;
use eframe::egui;

/// Result of comparison-widget input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderInputResult {
    /// No interaction occurred
    None,
    /// The divider position changed this frame
    PositionChanged,
    /// A gesture started or ended without moving the divider
    GestureChanged,
}

/// Handles all comparison-widget input for one frame.
///
/// # Arguments
/// * `ctx` - The egui context for global pointer access
/// * `container_rect` - The widget's container rectangle
/// * `response` - The container's interaction response (drag sense)
/// * `slider` - The slider state machine (mutable)
pub fn handle_slider_input(
    ctx: &egui::Context,
    container_rect: egui::Rect,
    response: &egui::Response,
    slider: &mut ComparisonSlider,
) -> SliderInputResult {
    let mut result = SliderInputResult::None;

    // Press inside the container starts the gesture.
    if response.drag_started() && !slider.is_dragging() {
        slider.begin_drag();
        result = SliderInputResult::GestureChanged;
    }

    if slider.is_dragging() {
        // Global capture: sample the pointer wherever it is, every frame.
        let pointer = ctx.input(|i| i.pointer.latest_pos());
        if let Some(pos) = pointer {
            let previous = slider.position();
            slider.update_drag(pos.x, container_rect.left(), container_rect.width());
            if slider.position() != previous {
                result = SliderInputResult::PositionChanged;
            }
        }

        // Release anywhere ends the gesture, even outside the container.
        if ctx.input(|i| i.pointer.any_released()) {
            slider.end_drag();
            if result == SliderInputResult::None {
                result = SliderInputResult::GestureChanged;
            }
        }

        // Keep frames coming while the gesture is active so a held-still
        // pointer still ends cleanly on release.
        ctx.request_repaint();
    }

    result
}

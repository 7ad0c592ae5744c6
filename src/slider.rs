//! Before/after comparison slider state machine.
//!
//! Tracks a drag gesture over a bounded container and exposes the divider
//! position as a percentage of the container width. The rendering layer uses
//! the percentage as a clip boundary between the two stacked images.
//!
//! The widget has exactly two states, `Idle` and `Dragging`. Move samples are
//! only applied while dragging; samples that fall outside the container are
//! discarded and the divider holds its last valid position.

/// Divider position and gesture state for a before/after comparison widget.
///
/// Positions are percentages of the container width in `[0, 100]`. The
/// divider starts centered. All operations are infallible; invalid input
/// degrades to a no-op.
#[derive(Debug, Clone)]
pub struct ComparisonSlider {
    /// Divider position as a percentage of container width, always in [0, 100].
    position: f32,
    /// True while a pointer/touch gesture is in progress.
    dragging: bool,
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonSlider {
    /// Creates a slider with the divider centered and no active gesture.
    pub fn new() -> Self {
        Self {
            position: 50.0,
            dragging: false,
        }
    }

    /// Returns the divider position as a percentage in [0, 100].
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Returns the divider position as a fraction in [0, 1].
    pub fn fraction(&self) -> f32 {
        self.position / 100.0
    }

    /// Returns true while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts a drag gesture. Idempotent while already dragging.
    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Ends the drag gesture. Idempotent.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Applies a pointer move sample in absolute screen coordinates.
    ///
    /// No-op unless a drag is in progress (guards against stray move events
    /// after release) and the container has measurable width. Samples whose
    /// computed percentage falls outside [0, 100] are discarded rather than
    /// clamped, so the handle never jumps to an edge from an overshooting
    /// pointer.
    pub fn update_drag(&mut self, pointer_x: f32, container_left: f32, container_width: f32) {
        if !self.dragging {
            return;
        }
        if container_width <= 0.0 {
            return;
        }

        let percentage = (pointer_x - container_left) / container_width * 100.0;
        if (0.0..=100.0).contains(&percentage) {
            self.position = percentage;
        }
    }

    /// Resets the slider to its initial state (divider centered, no gesture).
    pub fn reset(&mut self) {
        self.position = 50.0;
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_centered_and_idle() {
        let slider = ComparisonSlider::new();
        assert_eq!(slider.position(), 50.0);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn update_while_idle_is_ignored() {
        let mut slider = ComparisonSlider::new();
        slider.update_drag(100.0, 0.0, 200.0);
        assert_eq!(slider.position(), 50.0);
    }

    #[test]
    fn drag_moves_divider() {
        let mut slider = ComparisonSlider::new();
        slider.begin_drag();
        slider.update_drag(100.0, 0.0, 200.0);
        assert_eq!(slider.position(), 50.0);
        slider.update_drag(150.0, 0.0, 200.0);
        assert_eq!(slider.position(), 75.0);
        slider.end_drag();
        assert!(!slider.is_dragging());
    }

    #[test]
    fn discards_out_of_range_sample() {
        // The divider holds its last valid position instead of clamping to an
        // edge when the pointer overshoots the container.
        let mut slider = ComparisonSlider::new();
        slider.begin_drag();
        slider.update_drag(120.0, 0.0, 200.0);
        assert_eq!(slider.position(), 60.0);
        slider.update_drag(250.0, 0.0, 200.0); // 125%
        assert_eq!(slider.position(), 60.0);
        slider.update_drag(-10.0, 0.0, 200.0); // -5%
        assert_eq!(slider.position(), 60.0);
    }

    #[test]
    fn edge_positions_are_reachable() {
        let mut slider = ComparisonSlider::new();
        slider.begin_drag();
        slider.update_drag(0.0, 0.0, 200.0);
        assert_eq!(slider.position(), 0.0);
        slider.update_drag(200.0, 0.0, 200.0);
        assert_eq!(slider.position(), 100.0);
    }

    #[test]
    fn zero_width_container_is_ignored() {
        let mut slider = ComparisonSlider::new();
        slider.begin_drag();
        slider.update_drag(100.0, 0.0, 0.0);
        assert_eq!(slider.position(), 50.0);
        slider.update_drag(100.0, 0.0, -5.0);
        assert_eq!(slider.position(), 50.0);
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut slider = ComparisonSlider::new();
        slider.begin_drag();
        slider.update_drag(80.0, 0.0, 200.0);
        slider.end_drag();
        slider.update_drag(20.0, 0.0, 200.0);
        slider.update_drag(180.0, 0.0, 200.0);
        assert_eq!(slider.position(), 40.0);

        // A new gesture resumes from the held position.
        slider.begin_drag();
        slider.update_drag(20.0, 0.0, 200.0);
        assert_eq!(slider.position(), 10.0);
    }

    #[test]
    fn begin_drag_is_idempotent() {
        let mut slider = ComparisonSlider::new();
        slider.begin_drag();
        slider.update_drag(60.0, 0.0, 200.0);
        slider.begin_drag();
        assert!(slider.is_dragging());
        assert_eq!(slider.position(), 30.0);
    }

    #[test]
    fn position_stays_in_bounds_for_arbitrary_sequences() {
        // Deterministic sweep over a mix of in- and out-of-bounds samples,
        // interleaved with begin/end transitions.
        let mut slider = ComparisonSlider::new();
        for step in 0..500 {
            match step % 7 {
                0 => slider.begin_drag(),
                6 => slider.end_drag(),
                _ => {
                    let x = (step as f32 * 37.0) % 400.0 - 100.0;
                    slider.update_drag(x, 0.0, 200.0);
                }
            }
            assert!((0.0..=100.0).contains(&slider.position()));
        }
    }

    #[test]
    fn offset_container_uses_relative_coordinates() {
        let mut slider = ComparisonSlider::new();
        slider.begin_drag();
        slider.update_drag(350.0, 300.0, 200.0);
        assert_eq!(slider.position(), 25.0);
    }
}

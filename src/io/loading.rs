//! Asynchronous portfolio loading state management.

/// Holds the state of an async portfolio loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// This struct is wrapped in an `Arc<Mutex<>>` to allow safe sharing between
/// the main thread and the background decode thread.
pub struct LoadingState {
    /// True while a portfolio is being loaded and decoded
    pub in_progress: bool,
    /// Images decoded so far in the current operation
    pub decoded: usize,
    /// Total images the current operation will attempt
    pub total: usize,
}

impl LoadingState {
    /// Creates a new loading state that is not in progress.
    pub fn new() -> Self {
        Self {
            in_progress: false,
            decoded: 0,
            total: 0,
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

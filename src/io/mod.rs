//! I/O modules for portfolio loading and image decoding.

pub mod loading;
pub mod async_loader;

// Re-export commonly used types
pub use loading::LoadingState;
pub use async_loader::{AsyncLoader, LoadEvent};

//! Presentation-side caches.

mod texture_cache;

pub use texture_cache::{ComparisonSide, TextureCache};

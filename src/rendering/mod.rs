//! Low-level rendering for the comparison widget and gallery tiles.

pub mod slider_renderer;
pub mod thumbnails;

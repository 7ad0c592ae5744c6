//! Visual styling concerns kept apart from page logic.

pub mod color_mapping;

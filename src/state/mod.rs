//! State management modules for the Alora studio app.
//!
//! This module contains state-only logic (no UI concerns):
//! - Route state (current page, navigation history)
//! - Gallery state (catalog, open-category selection)
//! - Hero state (typing animation, scroll requests)
//! - Theme state (theme manager, current theme)

mod route;
mod gallery_state;
mod hero;
mod theme_state;

pub use route::{Route, RouteState};
pub use gallery_state::GalleryState;
pub use hero::HeroState;
pub use theme_state::ThemeState;

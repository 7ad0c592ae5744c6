//! UI rendering subsystem
//!
//! This module contains all page and widget rendering for the Alora site:
//! - Navbar (brand, route links, theme selector, portfolio actions)
//! - Home page (hero, services teaser, comparison slider, contact band)
//! - Services page (service cards, material tables, terms)
//! - Contact page (proprietor card with contact links)
//! - Explore page (category card grid and proprietor section)
//! - Category modal (full image browser for one category)
//! - Consultation modal (contact channels dialog)
//! - Footer (status bar)
//! - Motion helpers (entrance animations)
//! - Page manager (layout orchestration)
//! - Input handling (comparison slider drag capture)

pub mod navbar;
pub mod home_page;
pub mod services_page;
pub mod contact_page;
pub mod explore_page;
pub mod category_modal;
pub mod consultation_modal;
pub mod footer;
pub mod motion;
pub mod page_manager;
pub mod input;

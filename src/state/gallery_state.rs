//! Gallery state held by the GUI.
//!
//! Wraps the core `Gallery` (catalog + selection) together with where the
//! catalog came from, so the footer can distinguish a loaded manifest from
//! the built-in sample portfolio.

use alora::{Catalog, Category, Gallery};
use std::path::PathBuf;

/// Gallery data and selection state for the Explore Work page.
#[derive(Debug, Default)]
pub struct GalleryState {
    /// The gallery, once a portfolio has been installed.
    gallery: Option<Gallery>,
    /// Manifest path the catalog was loaded from (None for the sample).
    source_path: Option<PathBuf>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a freshly built catalog, dropping any previous selection.
    pub fn install(&mut self, catalog: Catalog, source_path: Option<PathBuf>) {
        self.gallery = Some(Gallery::new(catalog));
        self.source_path = source_path;
    }

    /// Drops the catalog entirely (used while a new portfolio loads).
    pub fn clear(&mut self) {
        self.gallery = None;
        self.source_path = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.gallery.is_some()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.gallery.as_ref().map(Gallery::catalog)
    }

    pub fn source_path(&self) -> Option<&PathBuf> {
        self.source_path.as_ref()
    }

    /// Opens a category's detail overlay. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) {
        if let Some(gallery) = &mut self.gallery {
            gallery.select(id);
        }
    }

    /// Closes the detail overlay.
    pub fn clear_selection(&mut self) {
        if let Some(gallery) = &mut self.gallery {
            gallery.clear();
        }
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.gallery.as_ref().and_then(Gallery::selected_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alora::sample_catalog;

    #[test]
    fn install_resets_selection() {
        let mut state = GalleryState::new();
        assert!(!state.is_loaded());

        state.install(sample_catalog(), None);
        state.select("doors");
        assert!(state.selected_category().is_some());

        state.install(sample_catalog(), None);
        assert!(state.selected_category().is_none());
    }

    #[test]
    fn selection_without_catalog_is_ignored() {
        let mut state = GalleryState::new();
        state.select("doors");
        assert!(state.selected_category().is_none());
        state.clear_selection();
    }
}

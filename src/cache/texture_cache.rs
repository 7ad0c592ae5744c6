//! GPU texture cache for gallery images.
//!
//! Maps image ids to uploaded textures. Assets that failed to load resolve to
//! a lazily built placeholder texture, so every image slot always has
//! something to draw. This is strictly presentation-side state; the catalog
//! never learns whether an asset resolved.

use alora::ImageId;
use eframe::egui;
use std::collections::{HashMap, HashSet};

const PLACEHOLDER_SIZE: usize = 64;

/// Which side of the before/after comparison a texture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonSide {
    Before,
    After,
}

/// Cache of uploaded textures keyed by image id.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<ImageId, egui::TextureHandle>,
    /// Ids whose assets could not be read or decoded.
    unavailable: HashSet<ImageId>,
    placeholder: Option<egui::TextureHandle>,
    /// Decoded before/after comparison textures, when their assets exist.
    comparison: [Option<egui::TextureHandle>; 2],
    /// Generated stand-ins so the comparison widget always has two images.
    comparison_fallback: [Option<egui::TextureHandle>; 2],
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads a decoded image and remembers it under its id.
    pub fn insert(&mut self, ctx: &egui::Context, id: ImageId, image: egui::ColorImage) {
        let handle = ctx.load_texture(
            format!("work-image-{id}"),
            image,
            egui::TextureOptions::LINEAR,
        );
        self.unavailable.remove(&id);
        self.textures.insert(id, handle);
    }

    /// Records that an asset failed to resolve; it will render as the
    /// placeholder from now on.
    pub fn mark_unavailable(&mut self, id: ImageId) {
        self.unavailable.insert(id);
    }

    pub fn is_unavailable(&self, id: ImageId) -> bool {
        self.unavailable.contains(&id)
    }

    /// Returns the texture for an image, or the placeholder when the asset
    /// is unavailable or still decoding.
    pub fn resolve(&mut self, ctx: &egui::Context, id: ImageId) -> egui::TextureHandle {
        if let Some(handle) = self.textures.get(&id) {
            return handle.clone();
        }
        self.placeholder(ctx)
    }

    /// Stores a decoded comparison image for one side.
    pub fn insert_comparison(
        &mut self,
        ctx: &egui::Context,
        side: ComparisonSide,
        image: egui::ColorImage,
    ) {
        let name = match side {
            ComparisonSide::Before => "comparison-before",
            ComparisonSide::After => "comparison-after",
        };
        let handle = ctx.load_texture(name, image, egui::TextureOptions::LINEAR);
        self.comparison[side as usize] = Some(handle);
    }

    /// Returns the comparison texture for a side, generating a tinted
    /// stand-in when the asset never decoded.
    pub fn comparison(&mut self, ctx: &egui::Context, side: ComparisonSide) -> egui::TextureHandle {
        if let Some(handle) = &self.comparison[side as usize] {
            return handle.clone();
        }
        if let Some(handle) = &self.comparison_fallback[side as usize] {
            return handle.clone();
        }

        let (name, image) = match side {
            ComparisonSide::Before => ("comparison-before-fallback", checker([176, 170, 160], [150, 143, 132])),
            ComparisonSide::After => ("comparison-after-fallback", checker([210, 180, 140], [173, 134, 96])),
        };
        let handle = ctx.load_texture(name, image, egui::TextureOptions::LINEAR);
        self.comparison_fallback[side as usize] = Some(handle.clone());
        handle
    }

    /// Drops all cached textures. Called when a new portfolio is installed.
    pub fn invalidate(&mut self) {
        self.textures.clear();
        self.unavailable.clear();
        self.comparison = [None, None];
    }

    fn placeholder(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        if let Some(handle) = &self.placeholder {
            return handle.clone();
        }
        let handle = ctx.load_texture(
            "work-image-placeholder",
            placeholder_image(),
            egui::TextureOptions::LINEAR,
        );
        self.placeholder = Some(handle.clone());
        handle
    }
}

/// Builds the shared placeholder: a warm two-tone check so empty slots read
/// as intentional rather than broken.
fn placeholder_image() -> egui::ColorImage {
    checker([233, 226, 216], [214, 204, 190])
}

fn checker(light: [u8; 3], dark: [u8; 3]) -> egui::ColorImage {
    let light = [light[0], light[1], light[2], 255];
    let dark = [dark[0], dark[1], dark[2], 255];

    let mut rgba = Vec::with_capacity(PLACEHOLDER_SIZE * PLACEHOLDER_SIZE * 4);
    for y in 0..PLACEHOLDER_SIZE {
        for x in 0..PLACEHOLDER_SIZE {
            let cell = (x / 8 + y / 8) % 2;
            rgba.extend_from_slice(if cell == 0 { &light } else { &dark });
        }
    }
    egui::ColorImage::from_rgba_unmultiplied([PLACEHOLDER_SIZE, PLACEHOLDER_SIZE], &rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_tracking() {
        let mut cache = TextureCache::new();
        assert!(!cache.is_unavailable(3));
        cache.mark_unavailable(3);
        assert!(cache.is_unavailable(3));
        cache.invalidate();
        assert!(!cache.is_unavailable(3));
        assert!(cache.textures.is_empty());
    }

    #[test]
    fn placeholder_pixels_cover_the_tile() {
        let image = placeholder_image();
        assert_eq!(image.width(), PLACEHOLDER_SIZE);
        assert_eq!(image.height(), PLACEHOLDER_SIZE);
    }
}

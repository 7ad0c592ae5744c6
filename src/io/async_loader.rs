//! Asynchronous portfolio loading and image decoding.
//!
//! This module loads a portfolio manifest and decodes its image assets on a
//! background thread, keeping the GUI responsive. The catalog itself arrives
//! first so the Explore page can render immediately; decoded images stream in
//! one event at a time and are turned into textures on the main thread.
//!
//! A missing or undecodable asset is reported, not fatal; the renderer
//! substitutes a placeholder texture and gallery state is unaffected.

use alora::{load_manifest, manifest, sample_manifest, Catalog, ImageId};
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::cache::ComparisonSide;
use crate::io::LoadingState;

/// Largest texture edge we upload; bigger decodes are downscaled.
const MAX_TEXTURE_DIM: u32 = 1024;

/// Events streamed from the background loading thread.
pub enum LoadEvent {
    /// The manifest parsed and the catalog was built. Arrives first.
    CatalogReady {
        catalog: Catalog,
        /// Manifest path (None when the built-in sample was loaded).
        source_path: Option<PathBuf>,
    },
    /// One asset finished decoding.
    ImageDecoded { id: ImageId, image: egui::ColorImage },
    /// One asset could not be read or decoded; render a placeholder.
    ImageUnavailable { id: ImageId },
    /// A before/after comparison asset finished decoding. Sides whose asset
    /// is missing simply never produce this event.
    ComparisonDecoded {
        side: ComparisonSide,
        image: egui::ColorImage,
    },
    /// The whole operation failed before a catalog was produced.
    Failed(String),
    /// All assets have been attempted.
    Finished,
}

/// Manages asynchronous loading of portfolio manifests and their assets.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading events
    receiver: Option<Receiver<LoadEvent>>,
}

impl AsyncLoader {
    /// Creates a new async loader with no active loading operation.
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            receiver: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Returns (decoded, total) progress for the current operation.
    pub fn progress(&self) -> (usize, usize) {
        let state = self.loading_state.lock().unwrap();
        (state.decoded, state.total)
    }

    /// Starts loading a manifest file asynchronously.
    ///
    /// Call `poll()` once per frame to drain events.
    pub fn start_manifest_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let sender = self.begin(ctx);
        let ctx_handle = ctx.clone();
        let loading_state = Arc::clone(&self.loading_state);

        thread::spawn(move || {
            match load_manifest(&path) {
                Ok(parsed) => {
                    let base = manifest::base_dir(&path);
                    let catalog = parsed.build(&base);
                    run_decode_pass(catalog, &base, Some(path), &sender, &loading_state, &ctx_handle);
                }
                Err(e) => {
                    let _ = sender.send(LoadEvent::Failed(e.to_string()));
                    finish(&loading_state, &ctx_handle);
                }
            }
        });
    }

    /// Loads the built-in sample portfolio, decoding whatever assets exist
    /// under `assets/` and falling back to placeholders for the rest.
    pub fn start_sample_load(&mut self, ctx: &egui::Context) {
        let sender = self.begin(ctx);
        let ctx_handle = ctx.clone();
        let loading_state = Arc::clone(&self.loading_state);

        thread::spawn(move || {
            let base = Path::new("assets");
            let catalog = alora::build_catalog(sample_manifest().catalog_input(base));
            run_decode_pass(catalog, base, None, &sender, &loading_state, &ctx_handle);
        });
    }

    /// Drains all events produced since the last call.
    ///
    /// Should be called once per frame in the update loop.
    pub fn poll(&mut self) -> Vec<LoadEvent> {
        let mut events = Vec::new();
        let mut done = false;

        if let Some(receiver) = &self.receiver {
            while let Ok(event) = receiver.try_recv() {
                if matches!(event, LoadEvent::Finished | LoadEvent::Failed(_)) {
                    done = true;
                }
                events.push(event);
            }
        }

        if done {
            self.receiver = None;
        }
        events
    }

    fn begin(&mut self, _ctx: &egui::Context) -> Sender<LoadEvent> {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        let mut state = self.loading_state.lock().unwrap();
        state.in_progress = true;
        state.decoded = 0;
        state.total = 0;

        sender
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Sends the catalog, then decodes every asset in id order, finishing with
/// the two comparison images at well-known names under the portfolio root.
fn run_decode_pass(
    catalog: Catalog,
    base_dir: &Path,
    source_path: Option<PathBuf>,
    sender: &Sender<LoadEvent>,
    loading_state: &Arc<Mutex<LoadingState>>,
    ctx: &egui::Context,
) {
    let todo: Vec<(ImageId, PathBuf)> = catalog
        .images()
        .map(|image| (image.id, image.asset.path().clone()))
        .collect();

    {
        let mut state = loading_state.lock().unwrap();
        state.total = todo.len();
    }

    let _ = sender.send(LoadEvent::CatalogReady {
        catalog,
        source_path,
    });
    ctx.request_repaint();

    for (id, path) in todo {
        let event = match decode_image(&path) {
            Some(image) => LoadEvent::ImageDecoded { id, image },
            None => LoadEvent::ImageUnavailable { id },
        };
        let _ = sender.send(event);

        {
            let mut state = loading_state.lock().unwrap();
            state.decoded += 1;
        }
        ctx.request_repaint();
    }

    for (side, name) in [
        (ComparisonSide::Before, "before.png"),
        (ComparisonSide::After, "after.png"),
    ] {
        if let Some(image) = decode_image(&base_dir.join(name)) {
            let _ = sender.send(LoadEvent::ComparisonDecoded { side, image });
        }
    }

    let _ = sender.send(LoadEvent::Finished);
    finish(loading_state, ctx);
}

fn finish(loading_state: &Arc<Mutex<LoadingState>>, ctx: &egui::Context) {
    {
        let mut state = loading_state.lock().unwrap();
        state.in_progress = false;
    }
    ctx.request_repaint();
}

/// Decodes an asset file into an egui image, downscaling oversized decodes.
/// Returns None for missing files and decode failures alike.
fn decode_image(path: &Path) -> Option<egui::ColorImage> {
    let decoded = image::open(path).ok()?;
    let decoded = if decoded.width() > MAX_TEXTURE_DIM || decoded.height() > MAX_TEXTURE_DIM {
        decoded.thumbnail(MAX_TEXTURE_DIM, MAX_TEXTURE_DIM)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, &rgba))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_loader_is_idle() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
        assert_eq!(loader.progress(), (0, 0));
    }

    #[test]
    fn poll_without_operation_is_empty() {
        let mut loader = AsyncLoader::new();
        assert!(loader.poll().is_empty());
    }

    #[test]
    fn missing_asset_decodes_to_none() {
        assert!(decode_image(Path::new("assets/no/such/file.png")).is_none());
    }
}

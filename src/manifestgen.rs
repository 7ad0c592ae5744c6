//! Portfolio manifest generator.
//!
//! Scans a directory of category subdirectories full of images and writes a
//! manifest JSON file that the GUI can load. Each subdirectory becomes one
//! category; its name is turned into an id, title, and title prefix.
//!
//! Usage: alora-manifestgen <assets-dir> [output-manifest.json]

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use alora::{save_manifest, ManifestCategory, PortfolioManifest};
use alora::catalog::CategoryMeta;
use alora::content::STUDIO_NAME;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let Some(assets_dir) = args.next().map(PathBuf::from) else {
        bail!("usage: alora-manifestgen <assets-dir> [output-manifest.json]");
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| assets_dir.join("manifest.json"));

    let manifest = scan_assets(&assets_dir)?;
    let total: usize = manifest.categories.iter().map(|c| c.assets.len()).sum();

    save_manifest(&manifest, &output)?;
    println!(
        "Wrote {} ({} categories, {} images)",
        output.display(),
        manifest.categories.len(),
        total
    );
    Ok(())
}

/// Builds a manifest from the subdirectories of `assets_dir`. Directories
/// are visited in sorted order so regeneration is deterministic.
fn scan_assets(assets_dir: &Path) -> Result<PortfolioManifest> {
    let entries = fs::read_dir(assets_dir)
        .with_context(|| format!("failed to read assets dir {}", assets_dir.display()))?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();

    let mut categories = Vec::new();
    for dir in dirs {
        let Some(dir_name) = dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let mut assets: Vec<String> = fs::read_dir(&dir)
            .with_context(|| format!("failed to read category dir {}", dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_image(path))
            .filter_map(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| format!("{dir_name}/{n}"))
            })
            .collect();
        assets.sort();

        if assets.is_empty() {
            continue;
        }

        let title = title_from_dir_name(dir_name);
        categories.push(ManifestCategory {
            meta: CategoryMeta {
                id: dir_name.to_owned(),
                title: title.clone(),
                icon: "🏠".to_owned(),
                description: format!("{title} designs from our portfolio."),
                title_prefix: format!("{title} Design"),
            },
            assets,
        });
    }

    if categories.is_empty() {
        bail!(
            "no category directories with images found under {}",
            assets_dir.display()
        );
    }

    Ok(PortfolioManifest {
        studio: STUDIO_NAME.to_owned(),
        categories,
    })
}

/// Case-insensitive image extension check.
fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// "modular-kitchen" becomes "Modular Kitchen".
fn title_from_dir_name(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alora::load_manifest;

    #[test]
    fn titles_from_dir_names() {
        assert_eq!(title_from_dir_name("modular-kitchen"), "Modular Kitchen");
        assert_eq!(title_from_dir_name("tv_unit"), "Tv Unit");
        assert_eq!(title_from_dir_name("bedroom"), "Bedroom");
    }

    #[test]
    fn image_extension_filter_is_case_insensitive() {
        assert!(is_image(Path::new("a/photo.PNG")));
        assert!(is_image(Path::new("a/photo.jpeg")));
        assert!(!is_image(Path::new("a/notes.txt")));
        assert!(!is_image(Path::new("a/noext")));
    }

    #[test]
    fn scans_directory_tree_into_manifest() {
        let root = env::temp_dir().join("alora_manifestgen_scan_test");
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("modular-kitchen")).unwrap();
        fs::create_dir_all(root.join("bedroom")).unwrap();
        fs::create_dir_all(root.join("empty-dir")).unwrap();
        fs::write(root.join("modular-kitchen/b.png"), b"x").unwrap();
        fs::write(root.join("modular-kitchen/a.jpg"), b"x").unwrap();
        fs::write(root.join("bedroom/photo.webp"), b"x").unwrap();
        fs::write(root.join("bedroom/readme.txt"), b"x").unwrap();

        let manifest = scan_assets(&root).unwrap();

        // Sorted directory order, empty directories skipped.
        let ids: Vec<&str> = manifest
            .categories
            .iter()
            .map(|c| c.meta.id.as_str())
            .collect();
        assert_eq!(ids, ["bedroom", "modular-kitchen"]);
        assert_eq!(manifest.categories[0].assets, ["bedroom/photo.webp"]);
        assert_eq!(
            manifest.categories[1].assets,
            ["modular-kitchen/a.jpg", "modular-kitchen/b.png"]
        );
        assert_eq!(manifest.categories[1].meta.title, "Modular Kitchen");

        // The written manifest loads back.
        let out = root.join("manifest.json");
        save_manifest(&manifest, &out).unwrap();
        let loaded = load_manifest(&out).unwrap();
        assert_eq!(loaded.categories.len(), 2);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn missing_assets_dir_is_an_error() {
        let root = env::temp_dir().join("alora_manifestgen_missing_test");
        let _ = fs::remove_dir_all(&root);
        assert!(scan_assets(&root).is_err());
    }
}

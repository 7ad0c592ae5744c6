//! Portfolio manifest format.
//!
//! A manifest is a JSON file describing the studio's work categories and the
//! asset files backing each one. Asset paths are stored relative to the
//! manifest file and resolved against its parent directory on load.
//!
//! ```json
//! {
//!   "studio": "Alora Interiors",
//!   "categories": [
//!     {
//!       "id": "modular-kitchen",
//!       "title": "Modular Kitchen",
//!       "icon": "🍳",
//!       "description": "Modern and functional kitchen designs",
//!       "title_prefix": "Kitchen Design",
//!       "assets": ["modularkitchen/01.png", "modularkitchen/02.png"]
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::catalog::{build_catalog, AssetRef, Catalog, CategoryMeta};

/// One category entry in the manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestCategory {
    #[serde(flatten)]
    pub meta: CategoryMeta,
    /// Relative asset paths, in display order.
    pub assets: Vec<String>,
}

/// Top-level manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioManifest {
    /// Display name of the studio the portfolio belongs to.
    pub studio: String,
    pub categories: Vec<ManifestCategory>,
}

impl PortfolioManifest {
    /// Converts the manifest into catalog construction input, resolving
    /// asset paths against `base_dir`.
    pub fn catalog_input(&self, base_dir: &Path) -> Vec<(CategoryMeta, Vec<AssetRef>)> {
        self.categories
            .iter()
            .map(|category| {
                let assets = category
                    .assets
                    .iter()
                    .map(|rel| AssetRef(base_dir.join(rel)))
                    .collect();
                (category.meta.clone(), assets)
            })
            .collect()
    }

    /// Builds the gallery catalog described by this manifest.
    pub fn build(&self, base_dir: &Path) -> Catalog {
        build_catalog(self.catalog_input(base_dir))
    }
}

/// Reads and parses a manifest file.
pub fn load_manifest(path: &Path) -> Result<PortfolioManifest> {
    let file = File::open(path)
        .with_context(|| format!("failed to open manifest {}", path.display()))?;
    let manifest: PortfolioManifest = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse manifest {}", path.display()))?;
    Ok(manifest)
}

/// Writes a manifest as pretty-printed JSON.
pub fn save_manifest(manifest: &PortfolioManifest, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create manifest {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), manifest)
        .with_context(|| format!("failed to write manifest {}", path.display()))?;
    Ok(())
}

/// Returns the directory asset paths resolve against for a manifest at `path`.
pub fn base_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn sample() -> PortfolioManifest {
        PortfolioManifest {
            studio: "Test Studio".to_owned(),
            categories: vec![ManifestCategory {
                meta: CategoryMeta {
                    id: "doors".to_owned(),
                    title: "Designer Doors".to_owned(),
                    icon: "🚪".to_owned(),
                    description: "Elegant door designs".to_owned(),
                    title_prefix: "Door Design".to_owned(),
                },
                assets: vec!["doors/a.png".to_owned(), "doors/b.png".to_owned()],
            }],
        }
    }

    #[test]
    fn round_trips_through_disk() -> Result<()> {
        let path = env::temp_dir().join("alora_manifest_roundtrip.json");
        let _ = fs::remove_file(&path);

        save_manifest(&sample(), &path)?;
        let loaded = load_manifest(&path)?;

        assert_eq!(loaded.studio, "Test Studio");
        assert_eq!(loaded.categories.len(), 1);
        assert_eq!(loaded.categories[0].meta.id, "doors");
        assert_eq!(loaded.categories[0].assets.len(), 2);

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn resolves_assets_against_base_dir() {
        let catalog = sample().build(Path::new("/portfolio"));
        let image = &catalog.categories()[0].images[0];
        assert_eq!(image.asset.path(), Path::new("/portfolio/doors/a.png"));
        assert_eq!(image.title, "Door Design 1");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_manifest(Path::new("/no/such/manifest.json"));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_is_an_error() -> Result<()> {
        let path = env::temp_dir().join("alora_manifest_malformed.json");
        fs::write(&path, "{ not json")?;
        assert!(load_manifest(&path).is_err());
        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn base_dir_of_bare_filename_is_empty() {
        assert_eq!(base_dir(Path::new("manifest.json")), PathBuf::new());
        assert_eq!(
            base_dir(Path::new("/a/b/manifest.json")),
            PathBuf::from("/a/b")
        );
    }
}

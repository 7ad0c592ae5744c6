//! Built-in sample portfolio.
//!
//! Stands in for a real `manifest.json` when none is supplied, the same way
//! a viewer ships a demo document. Construction is fully deterministic so the
//! rebuild-reproduces-identical-ids property can be asserted against it.

use crate::catalog::{build_catalog, Catalog, CategoryMeta};
use crate::manifest::{ManifestCategory, PortfolioManifest};
use std::path::Path;

/// Category definitions matching the studio's lines of work:
/// (id, title, icon, description, title prefix, asset directory, asset count).
const SAMPLE_CATEGORIES: &[(&str, &str, &str, &str, &str, &str, usize)] = &[
    ("modular-kitchen", "Modular Kitchen", "🍳", "Modern and functional kitchen designs", "Kitchen Design", "modularkitchen", 6),
    ("doors", "Designer Doors", "🚪", "Elegant door designs for your home", "Door Design", "doors", 4),
    ("halls", "Living Halls", "🛋️", "Comfortable living spaces", "Hall Design", "livinghalls", 5),
    ("false-ceiling", "False Ceiling", "⚡", "Creative ceiling designs with lighting", "Ceiling Design", "falseceiling", 4),
    ("tv-units", "TV Units", "📺", "Stylish entertainment centers", "TV Unit", "tvunits", 5),
    ("wardrobes", "Wardrobes", "👗", "Custom storage solutions", "Wardrobe", "wardrobes", 6),
    ("pooja-unit", "Pooja Unit", "🕉️", "Custom pooja unit designs for your prayer room", "Pooja Unit", "poojaunit", 3),
    ("shoe-box", "Shoe Box", "👟", "Creative and compact shoe storage solutions", "Shoe Box", "shoebox", 3),
    ("stair-case", "Stair Case", "🪜", "Elegant and modern stair case designs", "Stair Case", "staircase", 4),
    ("bar-room", "Bar Room", "🍸", "Stylish and sophisticated bar room interiors", "Bar Room", "barroom", 3),
    ("wash-area", "Wash Area", "🚰", "Functional and stylish sink area solutions", "Sink Area", "washarea", 3),
];

/// Builds the sample manifest in memory (no files are read).
pub fn sample_manifest() -> PortfolioManifest {
    let categories = SAMPLE_CATEGORIES
        .iter()
        .map(|&(id, title, icon, description, title_prefix, dir, count)| ManifestCategory {
            meta: CategoryMeta {
                id: id.to_owned(),
                title: title.to_owned(),
                icon: icon.to_owned(),
                description: description.to_owned(),
                title_prefix: title_prefix.to_owned(),
            },
            assets: (1..=count).map(|n| format!("{dir}/{n:02}.png")).collect(),
        })
        .collect();

    PortfolioManifest {
        studio: crate::content::STUDIO_NAME.to_owned(),
        categories,
    }
}

/// Builds the sample catalog rooted at `assets/` in the working directory.
///
/// The asset files need not exist; missing ones render as placeholders.
pub fn sample_catalog() -> Catalog {
    build_catalog(sample_manifest().catalog_input(Path::new("assets")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_all_work_categories() {
        let catalog = sample_catalog();
        assert_eq!(catalog.categories().len(), 11);
        assert!(catalog.contains("modular-kitchen"));
        assert!(catalog.contains("wash-area"));
    }

    #[test]
    fn sample_ids_are_dense_and_reproducible() {
        let a = sample_catalog();
        let b = sample_catalog();

        let n = a.image_count();
        let ids: HashSet<u32> = a.images().map(|i| i.id).collect();
        let expected: HashSet<u32> = (1..=n as u32).collect();
        assert_eq!(ids, expected);

        let titles_a: Vec<String> = a.images().map(|i| i.title.clone()).collect();
        let titles_b: Vec<String> = b.images().map(|i| i.title.clone()).collect();
        assert_eq!(titles_a, titles_b);
    }

    #[test]
    fn assets_resolve_under_assets_dir() {
        let catalog = sample_catalog();
        let first = catalog.images().next().unwrap();
        assert!(first.asset.path().starts_with("assets"));
    }
}

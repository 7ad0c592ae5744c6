//! Gallery catalog construction and category selection.
//!
//! A catalog is an ordered set of work categories, each backed by an ordered
//! list of images. Image ids are unique across the whole catalog: a single
//! counter threads through construction in category order, then asset order,
//! so rebuilding from identical input reproduces identical ids and titles.
//!
//! Selection is a two-valued affair: either no category is open, or exactly
//! one is. Selecting an unknown id is a silent no-op; the catalog is static
//! and caller-controlled, so robustness wins over strictness.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stable identifier for a work category (e.g. `"modular-kitchen"`).
pub type CategoryId = String;

/// Unique image identifier, assigned at catalog construction time.
pub type ImageId = u32;

/// Opaque reference to a static image asset. The catalog never opens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef(pub PathBuf);

impl AssetRef {
    pub fn path(&self) -> &PathBuf {
        &self.0
    }
}

impl From<PathBuf> for AssetRef {
    fn from(value: PathBuf) -> Self {
        AssetRef(value)
    }
}

impl From<String> for AssetRef {
    fn from(value: String) -> Self {
        AssetRef(PathBuf::from(value))
    }
}

impl From<&str> for AssetRef {
    fn from(value: &str) -> Self {
        AssetRef(PathBuf::from(value))
    }
}

/// Category metadata supplied by the asset provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMeta {
    pub id: CategoryId,
    pub title: String,
    /// Icon glyph shown on the category card.
    pub icon: String,
    pub description: String,
    /// Prefix for derived image titles, e.g. `"Kitchen Design"`.
    pub title_prefix: String,
}

/// A single image in the catalog, with its derived title.
#[derive(Debug, Clone)]
pub struct WorkImage {
    pub id: ImageId,
    pub title: String,
    pub asset: AssetRef,
}

/// A work category with its ordered images.
#[derive(Debug, Clone)]
pub struct Category {
    pub meta: CategoryMeta,
    pub images: Vec<WorkImage>,
}

impl Category {
    pub fn id(&self) -> &str {
        &self.meta.id
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

/// The full, immutable-after-construction set of categories.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.meta.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.category(id).is_some()
    }

    /// Total image count across all categories.
    pub fn image_count(&self) -> usize {
        self.categories.iter().map(Category::image_count).sum()
    }

    /// Iterates all images in id order (category order, then asset order).
    pub fn images(&self) -> impl Iterator<Item = &WorkImage> {
        self.categories.iter().flat_map(|c| c.images.iter())
    }
}

/// Builds a catalog from ordered `(metadata, asset list)` pairs.
///
/// Ids are assigned from an explicit accumulator starting at 1, incremented
/// once per image across all categories in iteration order. The ordering is
/// load-bearing: the set of assigned ids for N total images is exactly
/// `{1..=N}` and rebuilding from the same input yields the same assignment.
pub fn build_catalog(pairs: Vec<(CategoryMeta, Vec<AssetRef>)>) -> Catalog {
    let mut next_id: ImageId = 1;
    let categories = pairs
        .into_iter()
        .map(|(meta, assets)| {
            let images = assets
                .into_iter()
                .map(|asset| {
                    let id = next_id;
                    next_id += 1;
                    WorkImage {
                        id,
                        title: format!("{} {}", meta.title_prefix, id),
                        asset,
                    }
                })
                .collect();
            Category { meta, images }
        })
        .collect();

    Catalog { categories }
}

/// A catalog plus the single "currently open category" selection.
#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Catalog,
    selected: Option<CategoryId>,
}

impl Gallery {
    /// Wraps a built catalog with no open category.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Opens the category with the given id. Silent no-op when no category
    /// matches, so a present selection always references a real category.
    pub fn select(&mut self, id: &str) {
        if self.catalog.contains(id) {
            self.selected = Some(id.to_owned());
        }
    }

    /// Closes any open category. Idempotent.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolves the selection against the catalog.
    pub fn selected_category(&self) -> Option<&Category> {
        self.selected.as_deref().and_then(|id| self.catalog.category(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn meta(id: &str, title: &str, prefix: &str) -> CategoryMeta {
        CategoryMeta {
            id: id.to_owned(),
            title: title.to_owned(),
            icon: "🛋".to_owned(),
            description: format!("{title} work"),
            title_prefix: prefix.to_owned(),
        }
    }

    fn assets(names: &[&str]) -> Vec<AssetRef> {
        names.iter().copied().map(AssetRef::from).collect()
    }

    fn two_category_input() -> Vec<(CategoryMeta, Vec<AssetRef>)> {
        vec![
            (meta("kitchen", "Kitchen", "CategoryOne"), assets(&["k1.png", "k2.png"])),
            (
                meta("doors", "Doors", "CategoryTwo"),
                assets(&["d1.png", "d2.png", "d3.png"]),
            ),
        ]
    }

    #[test]
    fn ids_run_across_categories() {
        let catalog = build_catalog(two_category_input());

        let first: Vec<ImageId> = catalog.categories()[0].images.iter().map(|i| i.id).collect();
        let second: Vec<ImageId> = catalog.categories()[1].images.iter().map(|i| i.id).collect();
        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![3, 4, 5]);
    }

    #[test]
    fn titles_use_prefix_and_global_id() {
        let catalog = build_catalog(two_category_input());

        let titles: Vec<&str> = catalog.images().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "CategoryOne 1",
                "CategoryOne 2",
                "CategoryTwo 3",
                "CategoryTwo 4",
                "CategoryTwo 5",
            ]
        );
    }

    #[test]
    fn ids_are_exactly_one_through_n() {
        let catalog = build_catalog(two_category_input());
        let n = catalog.image_count();
        let ids: HashSet<ImageId> = catalog.images().map(|i| i.id).collect();
        assert_eq!(ids.len(), n);
        let expected: HashSet<ImageId> = (1..=n as ImageId).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let a = build_catalog(two_category_input());
        let b = build_catalog(two_category_input());

        let ids_a: Vec<ImageId> = a.images().map(|i| i.id).collect();
        let ids_b: Vec<ImageId> = b.images().map(|i| i.id).collect();
        assert_eq!(ids_a, ids_b);

        let titles_a: Vec<&str> = a.images().map(|i| i.title.as_str()).collect();
        let titles_b: Vec<&str> = b.images().map(|i| i.title.as_str()).collect();
        assert_eq!(titles_a, titles_b);
    }

    #[test]
    fn empty_categories_take_no_ids() {
        let catalog = build_catalog(vec![
            (meta("a", "A", "A"), assets(&[])),
            (meta("b", "B", "B"), assets(&["x.png"])),
        ]);
        assert_eq!(catalog.categories()[1].images[0].id, 1);
    }

    #[test]
    fn select_valid_then_clear() {
        let mut gallery = Gallery::new(build_catalog(two_category_input()));
        assert_eq!(gallery.selected_id(), None);

        gallery.select("doors");
        assert_eq!(gallery.selected_id(), Some("doors"));
        assert_eq!(gallery.selected_category().unwrap().meta.title, "Doors");

        gallery.clear();
        assert_eq!(gallery.selected_id(), None);
        gallery.clear();
        assert_eq!(gallery.selected_id(), None);
    }

    #[test]
    fn select_unknown_id_is_a_no_op() {
        let mut gallery = Gallery::new(build_catalog(two_category_input()));
        gallery.select("kitchen");
        gallery.select("not-a-category");
        assert_eq!(gallery.selected_id(), Some("kitchen"));
    }

    #[test]
    fn selection_always_resolves() {
        let mut gallery = Gallery::new(build_catalog(two_category_input()));
        for id in ["kitchen", "missing", "doors", "", "kitchen"] {
            gallery.select(id);
            if let Some(selected) = gallery.selected_id() {
                assert!(gallery.catalog().contains(selected));
            }
        }
    }
}

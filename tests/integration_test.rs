use alora::{
    build_catalog, load_manifest, sample_manifest, save_manifest, AssetRef, ComparisonSlider,
    Gallery, PortfolioManifest,
};
use alora::catalog::CategoryMeta;
use alora::manifest::base_dir;
use anyhow::Result;
use std::env;
use std::fs;
use std::path::Path;

fn meta(id: &str, title: &str, prefix: &str) -> CategoryMeta {
    CategoryMeta {
        id: id.to_owned(),
        title: title.to_owned(),
        icon: "🏠".to_owned(),
        description: format!("{title} work."),
        title_prefix: prefix.to_owned(),
    }
}

fn assets(dir: &str, count: usize) -> Vec<AssetRef> {
    (0..count)
        .map(|i| AssetRef::from(format!("{dir}/{i}.png")))
        .collect()
}

#[test]
fn test_write_load_and_build_catalog() -> Result<()> {
    let test_file = env::temp_dir().join("alora_integration_manifest.json");
    let _ = fs::remove_file(&test_file);

    // Write a manifest
    let manifest = PortfolioManifest {
        studio: "Alora Interiors".to_owned(),
        categories: vec![
            alora::ManifestCategory {
                meta: meta("modular-kitchen", "Modular Kitchen", "Kitchen Design"),
                assets: vec![
                    "modular-kitchen/a.png".to_owned(),
                    "modular-kitchen/b.png".to_owned(),
                ],
            },
            alora::ManifestCategory {
                meta: meta("bedroom", "Bedroom", "Bedroom Design"),
                assets: vec![
                    "bedroom/a.png".to_owned(),
                    "bedroom/b.png".to_owned(),
                    "bedroom/c.png".to_owned(),
                ],
            },
        ],
    };
    save_manifest(&manifest, &test_file)?;

    // Load it back and build the catalog
    let loaded = load_manifest(&test_file)?;
    assert_eq!(loaded.studio, "Alora Interiors");
    assert_eq!(loaded.categories.len(), 2);

    let catalog = loaded.build(&base_dir(&test_file));
    assert_eq!(catalog.categories().len(), 2);
    assert_eq!(catalog.image_count(), 5);

    // Ids are dense and global across categories, in manifest order.
    let kitchen = catalog.category("modular-kitchen").unwrap();
    let bedroom = catalog.category("bedroom").unwrap();
    let kitchen_ids: Vec<u32> = kitchen.images.iter().map(|i| i.id).collect();
    let bedroom_ids: Vec<u32> = bedroom.images.iter().map(|i| i.id).collect();
    assert_eq!(kitchen_ids, [1, 2]);
    assert_eq!(bedroom_ids, [3, 4, 5]);

    // Titles derive from the prefix and the global id.
    assert_eq!(kitchen.images[0].title, "Kitchen Design 1");
    assert_eq!(bedroom.images[2].title, "Bedroom Design 5");

    // Asset paths resolve relative to the manifest location.
    let expected = base_dir(&test_file).join("modular-kitchen/a.png");
    assert_eq!(kitchen.images[0].asset.0, expected);

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_rebuild_is_deterministic() {
    let input = || {
        vec![
            (meta("one", "One", "One"), assets("one", 3)),
            (meta("two", "Two", "Two"), assets("two", 2)),
        ]
    };
    let first = build_catalog(input());
    let second = build_catalog(input());

    let ids = |catalog: &alora::Catalog| -> Vec<u32> {
        catalog.images().map(|image| image.id).collect()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(ids(&first), [1, 2, 3, 4, 5]);
}

#[test]
fn test_gallery_selection_over_built_catalog() {
    let catalog = build_catalog(vec![
        (meta("kitchen", "Kitchen", "Kitchen"), assets("kitchen", 2)),
        (meta("bedroom", "Bedroom", "Bedroom"), assets("bedroom", 1)),
    ]);
    let mut gallery = Gallery::new(catalog);

    assert!(gallery.selected_category().is_none());

    gallery.select("bedroom");
    assert_eq!(gallery.selected_id(), Some("bedroom"));
    assert_eq!(gallery.selected_category().unwrap().images.len(), 1);

    // Unknown id leaves the selection untouched
    gallery.select("garage");
    assert_eq!(gallery.selected_id(), Some("bedroom"));

    gallery.clear();
    assert!(gallery.selected_category().is_none());
}

#[test]
fn test_sample_manifest_round_trip() -> Result<()> {
    let test_file = env::temp_dir().join("alora_integration_sample.json");
    let _ = fs::remove_file(&test_file);

    let manifest = sample_manifest();
    save_manifest(&manifest, &test_file)?;
    let loaded = load_manifest(&test_file)?;

    assert_eq!(loaded.categories.len(), manifest.categories.len());

    // Rebuilding from the reloaded manifest yields the same dense ids.
    let original = manifest.build(Path::new("assets"));
    let reloaded = loaded.build(Path::new("assets"));
    assert_eq!(original.image_count(), reloaded.image_count());
    let last = original.image_count() as u32;
    let last_image = original.images().last().unwrap();
    assert_eq!(last_image.id, last);

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_slider_drag_sequence() {
    let mut slider = ComparisonSlider::new();
    assert_eq!(slider.position(), 50.0);

    // Samples before the gesture begins are ignored.
    slider.update_drag(900.0, 0.0, 1000.0);
    assert_eq!(slider.position(), 50.0);

    slider.begin_drag();
    slider.update_drag(250.0, 0.0, 1000.0);
    assert_eq!(slider.position(), 25.0);

    // Off-container samples leave the last position in place.
    slider.update_drag(-40.0, 0.0, 1000.0);
    assert_eq!(slider.position(), 25.0);
    slider.update_drag(1200.0, 0.0, 1000.0);
    assert_eq!(slider.position(), 25.0);

    slider.update_drag(1000.0, 0.0, 1000.0);
    assert_eq!(slider.position(), 100.0);

    slider.end_drag();
    assert!(!slider.is_dragging());

    // Post-release samples are ignored too.
    slider.update_drag(100.0, 0.0, 1000.0);
    assert_eq!(slider.position(), 100.0);
}

#[test]
fn test_malformed_manifest_is_an_error() {
    let test_file = env::temp_dir().join("alora_integration_malformed.json");
    fs::write(&test_file, "{ not json").unwrap();
    assert!(load_manifest(&test_file).is_err());
    let _ = fs::remove_file(&test_file);
}

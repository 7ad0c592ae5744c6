pub mod slider;
pub mod catalog;
pub mod manifest;
pub mod content;
pub mod sample;
pub mod theme;

// Export the comparison slider
pub use slider::ComparisonSlider;

// Export gallery catalog types
pub use catalog::{
    build_catalog, AssetRef, Catalog, Category, CategoryId, CategoryMeta, Gallery, ImageId,
    WorkImage,
};

// Export manifest support
pub use manifest::{load_manifest, save_manifest, ManifestCategory, PortfolioManifest};

// Export the built-in sample portfolio
pub use sample::{sample_catalog, sample_manifest};

// Export static content
pub use content::{ContactInfo, MaterialSection, MaterialSpec, ServiceCategory, Stat, TermsSection};

// Export theme support
pub use theme::{adjust_brightness, hex_to_color32, with_alpha, Theme, ThemeColors, ThemeManager};

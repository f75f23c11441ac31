//! Site configuration module.
//!
//! Handles loading, validating, and layering `site.toml`. The file lives in
//! the site root and is optional: stock defaults reproduce the standard page
//! layout, and a user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_path = "assets/data/content.json"  # Relative to the site root
//!
//! [page]
//! title = "Glowing"
//! lang = "en"
//! stylesheets = ["./assets/css/style.css"]
//! scripts = ["https://unpkg.com/ionicons@5.5.2/dist/ionicons/ionicons.esm.js"]
//! nav_links = ["Home", "Collection", "Shop", "Offer", "Blog"]
//!
//! [containers]              # Element ids the section renderers write into
//! hero = "hero-scroll"
//! collections = "collection-list"
//! products = "shop-products"
//! under_25 = "shop-under-25"
//! features = "feature-list"
//! blogs = "blog-list"
//! footer = "footer-top"
//!
//! [headings]
//! products = "Our Bestsellers"
//! under_25 = "Under $25"
//! features = "Why Shop with Us"
//! blogs = "More to Discover"
//!
//! [reveal]
//! threshold = 0.5           # Fraction of the viewport a section top must cross
//! viewport_height = 800.0   # Viewport used when pre-rendering
//!
//! [rating]
//! max = 5                   # Star counts are clamped to 0..=max
//!
//! [alert]
//! message = "Website content failed to load. Please check content.json file."
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path of the content document, relative to the site root.
    pub content_path: String,
    /// Page shell settings (title, stylesheets, nav labels).
    pub page: PageConfig,
    /// Container element ids for each section renderer.
    pub containers: ContainerIds,
    /// Section headings written by the page shell.
    pub headings: HeadingsConfig,
    /// Scroll-reveal settings.
    pub reveal: RevealConfig,
    /// Product rating policy.
    pub rating: RatingConfig,
    /// User-visible failure message.
    pub alert: AlertConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_path: "assets/data/content.json".to_string(),
            page: PageConfig::default(),
            containers: ContainerIds::default(),
            headings: HeadingsConfig::default(),
            reveal: RevealConfig::default(),
            rating: RatingConfig::default(),
            alert: AlertConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_path must not be empty".into(),
            ));
        }
        if Path::new(&self.content_path).is_absolute() {
            return Err(ConfigError::Validation(
                "content_path must be relative to the site root".into(),
            ));
        }

        let ids = self.containers.all();
        if let Some((name, _)) = ids.iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "containers.{name} must not be empty"
            )));
        }
        let mut seen = HashSet::new();
        for (name, id) in &ids {
            if !seen.insert(*id) {
                return Err(ConfigError::Validation(format!(
                    "containers.{name} reuses id \"{id}\""
                )));
            }
        }

        if !(self.reveal.threshold > 0.0 && self.reveal.threshold <= 1.0) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be in (0, 1]".into(),
            ));
        }
        if !(self.reveal.viewport_height > 0.0) {
            return Err(ConfigError::Validation(
                "reveal.viewport_height must be positive".into(),
            ));
        }
        if self.alert.message.trim().is_empty() {
            return Err(ConfigError::Validation(
                "alert.message must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Page shell settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Document title and logo text.
    pub title: String,
    /// `lang` attribute of the `<html>` element.
    pub lang: String,
    /// Stylesheet hrefs linked from `<head>`, in order.
    pub stylesheets: Vec<String>,
    /// Module scripts loaded at the end of `<body>` (the icon set, by default).
    pub scripts: Vec<String>,
    /// Navbar link labels. Each links to `#<label lowercased>`.
    pub nav_links: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Glowing".to_string(),
            lang: "en".to_string(),
            stylesheets: vec!["./assets/css/style.css".to_string()],
            scripts: vec![
                "https://unpkg.com/ionicons@5.5.2/dist/ionicons/ionicons.esm.js".to_string(),
            ],
            nav_links: ["Home", "Collection", "Shop", "Offer", "Blog"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Element ids the section renderers write into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerIds {
    pub hero: String,
    pub collections: String,
    pub products: String,
    pub under_25: String,
    pub features: String,
    pub blogs: String,
    pub footer: String,
}

impl Default for ContainerIds {
    fn default() -> Self {
        Self {
            hero: "hero-scroll".to_string(),
            collections: "collection-list".to_string(),
            products: "shop-products".to_string(),
            under_25: "shop-under-25".to_string(),
            features: "feature-list".to_string(),
            blogs: "blog-list".to_string(),
            footer: "footer-top".to_string(),
        }
    }
}

impl ContainerIds {
    /// `(key, id)` pairs in dispatch order.
    pub fn all(&self) -> [(&'static str, &str); 7] {
        [
            ("hero", self.hero.as_str()),
            ("collections", self.collections.as_str()),
            ("products", self.products.as_str()),
            ("under_25", self.under_25.as_str()),
            ("features", self.features.as_str()),
            ("blogs", self.blogs.as_str()),
            ("footer", self.footer.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadingsConfig {
    pub products: String,
    pub under_25: String,
    pub features: String,
    pub blogs: String,
}

impl Default for HeadingsConfig {
    fn default() -> Self {
        Self {
            products: "Our Bestsellers".to_string(),
            under_25: "Under $25".to_string(),
            features: "Why Shop with Us".to_string(),
            blogs: "More to Discover".to_string(),
        }
    }
}

/// Scroll-reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// A section is revealed once its top is above `viewport_height * threshold`.
    pub threshold: f64,
    /// Viewport height assumed by the in-memory document.
    pub viewport_height: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            viewport_height: 800.0,
        }
    }
}

/// Product rating policy: star counts are floored and clamped to `0..=max`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatingConfig {
    pub max: u32,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self { max: 5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertConfig {
    pub message: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            message: "Website content failed to load. Please check content.json file."
                .to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(site_root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = site_root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the site root, layered over stock defaults.
pub fn load_config(site_root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(site_root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Storefront Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Location of the content document, relative to the site root.
content_path = "assets/data/content.json"

# ---------------------------------------------------------------------------
# Page shell
# ---------------------------------------------------------------------------
[page]
# Document <title> and logo text.
title = "Glowing"
lang = "en"
# Stylesheets linked from <head>, in order.
stylesheets = ["./assets/css/style.css"]
# Module scripts loaded at the end of <body>. The default provides the
# <ion-icon> elements used by the cards.
scripts = ["https://unpkg.com/ionicons@5.5.2/dist/ionicons/ionicons.esm.js"]
# Navbar labels. Each label links to #<label in lowercase>.
nav_links = ["Home", "Collection", "Shop", "Offer", "Blog"]

# ---------------------------------------------------------------------------
# Section containers (element ids the renderers replace)
# ---------------------------------------------------------------------------
[containers]
hero = "hero-scroll"
collections = "collection-list"
products = "shop-products"
under_25 = "shop-under-25"
features = "feature-list"
blogs = "blog-list"
footer = "footer-top"

# ---------------------------------------------------------------------------
# Section headings
# ---------------------------------------------------------------------------
[headings]
products = "Our Bestsellers"
under_25 = "Under $25"
features = "Why Shop with Us"
blogs = "More to Discover"

# ---------------------------------------------------------------------------
# Scroll reveal
# ---------------------------------------------------------------------------
[reveal]
# A section becomes active once its top edge is above
# viewport_height * threshold. Must be in (0, 1].
threshold = 0.5
# Viewport height assumed when pre-rendering the page.
viewport_height = 800.0

# ---------------------------------------------------------------------------
# Product ratings
# ---------------------------------------------------------------------------
[rating]
# Star counts are rounded down and clamped to 0..=max.
max = 5

# ---------------------------------------------------------------------------
# Failure alert
# ---------------------------------------------------------------------------
[alert]
message = "Website content failed to load. Please check content.json file."
"##
}

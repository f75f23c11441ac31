//! Static page generation.
//!
//! Runs a [`Page`] session against the site directory, the way a browser
//! would run the page against a file server, and writes the result out as a
//! pre-rendered page.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html          # Shell with every section already rendered
//! └── assets/             # Copied from the site (content document excluded)
//!     ├── css/style.css
//!     └── images/...
//! ```
//!
//! ## HTML Generation
//!
//! The shell comes from [`shell::render`]; section markup comes from the
//! renderers in [`crate::render`]. Both use maud, so every interpolated
//! value is escaped.

use crate::config::SiteConfig;
use crate::loader::{FileSource, LoadError};
use crate::page::Page;
use crate::render::SectionReport;
use crate::shell;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("{alert} ({source})")]
    Load {
        alert: String,
        #[source]
        source: LoadError,
    },
}

/// What a generate run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    pub index: PathBuf,
    pub sections: Vec<SectionReport>,
    pub assets_copied: usize,
}

/// Directory under the site root that is copied verbatim.
const ASSETS_DIR: &str = "assets";

pub fn generate(
    site_root: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<GenerateSummary, GenerateError> {
    let mut page = Page::start(shell::skeleton(config), config);
    let source = FileSource::new(site_root);

    let sections = match page.load(&source) {
        Ok(sections) => sections,
        Err(source) => {
            let alert = page
                .host()
                .alerts()
                .last()
                .cloned()
                .unwrap_or_else(|| config.alert.message.clone());
            return Err(GenerateError::Load { alert, source });
        }
    };

    fs::create_dir_all(output_dir)?;
    let html = shell::render(page.host(), config);
    let index = output_dir.join("index.html");
    fs::write(&index, html.into_string())?;
    info!(path = %index.display(), "wrote page");

    let root = source.root();
    let skip = root.join(config.content_path.trim_start_matches("./"));
    let assets_copied = copy_assets(&root.join(ASSETS_DIR), &output_dir.join(ASSETS_DIR), &skip)?;

    Ok(GenerateSummary {
        index,
        sections,
        assets_copied,
    })
}

/// Copy the assets tree, leaving out `skip` (the content document, which is
/// already baked into the page). Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path, skip: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        debug!(path = %src.display(), "no assets directory");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if path != skip {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn generate_writes_prerendered_index() {
        let site = setup_fixture_site();
        let out = TempDir::new().unwrap();
        let summary = generate(site.path(), out.path(), &SiteConfig::default()).unwrap();

        let html = fs::read_to_string(&summary.index).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("hero-title"));
        assert!(html.contains("shop-card"));
        assert!(html.contains("newsletter-form"));
        assert_eq!(summary.sections.len(), 7);
    }

    #[test]
    fn generate_reveals_hero_section() {
        let site = setup_fixture_site();
        let out = TempDir::new().unwrap();
        let summary = generate(site.path(), out.path(), &SiteConfig::default()).unwrap();
        let html = fs::read_to_string(&summary.index).unwrap();
        assert!(html.contains(r#"id="home" class="section hero active""#));
    }

    #[test]
    fn generate_copies_assets_except_content() {
        let site = setup_fixture_site();
        let out = TempDir::new().unwrap();
        let summary = generate(site.path(), out.path(), &SiteConfig::default()).unwrap();

        assert!(out.path().join("assets/css/style.css").exists());
        assert!(!out.path().join("assets/data/content.json").exists());
        assert_eq!(summary.assets_copied, 1);
    }

    #[test]
    fn generate_fails_without_content() {
        let site = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let result = generate(site.path(), out.path(), &SiteConfig::default());

        match result {
            Err(GenerateError::Load { alert, source }) => {
                assert_eq!(alert, SiteConfig::default().alert.message);
                assert!(matches!(source, LoadError::ContentUnavailable { status: 404 }));
            }
            other => panic!("expected load error, got {other:?}"),
        }
        assert!(!out.path().join("index.html").exists());
    }

    #[test]
    fn generate_fails_on_malformed_content() {
        let site = setup_fixture_site();
        fs::write(site.path().join("assets/data/content.json"), "not json").unwrap();
        let out = TempDir::new().unwrap();
        let result = generate(site.path(), out.path(), &SiteConfig::default());
        assert!(matches!(
            result,
            Err(GenerateError::Load {
                source: LoadError::MalformedContent(_),
                ..
            })
        ));
    }

    #[test]
    fn generate_honours_content_path() {
        let site = setup_fixture_site();
        fs::rename(
            site.path().join("assets/data/content.json"),
            site.path().join("page.json"),
        )
        .unwrap();
        let mut config = SiteConfig::default();
        config.content_path = "./page.json".to_string();

        let out = TempDir::new().unwrap();
        let summary = generate(site.path(), out.path(), &config).unwrap();
        assert!(summary.sections.iter().all(|s| s.fragments.is_some()));
    }
}

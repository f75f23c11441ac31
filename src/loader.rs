//! Content loading.
//!
//! A load is one request for the content document followed by one render
//! pass. It has two stages:
//!
//! ```text
//! fetch_content   source ──► Response ──► ContentDocument   (may fail)
//! dispatch        ContentDocument ──► containers            (only on Ok)
//! ```
//!
//! [`load`] runs both and is the single place failures are caught: the user
//! gets one alert with a fixed message, and the underlying error is logged.
//! Nothing is retried, and no section is rendered unless the document parsed.

use crate::dom::Host;
use crate::render::{self, RenderContext, RenderError, SectionReport};
use crate::types::ContentDocument;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Content file not found")]
    ContentUnavailable { status: u16 },
    #[error("Malformed content: {0}")]
    MalformedContent(#[from] serde_json::Error),
    #[error("Network error: {0}")]
    Network(#[from] io::Error),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// A fetched resource: status code and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the success range (200-299).
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the content document is fetched from.
///
/// An `Err` is a transport failure (the request itself did not complete);
/// a missing resource is an `Ok` response with a non-success status.
pub trait ContentSource {
    fn fetch(&self, path: &str) -> io::Result<Response>;
}

/// Serves paths relative to a site root, the way a static file server would.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FileSource {
    fn fetch(&self, path: &str) -> io::Result<Response> {
        let path = path.trim_start_matches("./");
        match fs::read(self.root.join(path)) {
            Ok(body) => Ok(Response::new(200, body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Response::new(404, Vec::new())),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Ok(Response::new(403, Vec::new()))
            }
            Err(e) => Err(e),
        }
    }
}

/// Stage one: fetch and parse the content document.
///
/// A non-success status fails before the body is looked at.
pub fn fetch_content(
    source: &dyn ContentSource,
    path: &str,
) -> Result<ContentDocument, LoadError> {
    debug!(path, "fetching content");
    let response = source.fetch(path)?;
    if !response.ok() {
        return Err(LoadError::ContentUnavailable {
            status: response.status,
        });
    }
    let document = serde_json::from_slice(&response.body)?;
    Ok(document)
}

/// Fetch the content document and render every section into `host`.
///
/// Any failure raises exactly one `alert_message` on the host, is logged,
/// and is returned so the caller can report it.
pub fn load(
    source: &dyn ContentSource,
    path: &str,
    ctx: &RenderContext,
    host: &mut dyn Host,
    alert_message: &str,
) -> Result<Vec<SectionReport>, LoadError> {
    let result = fetch_content(source, path)
        .and_then(|document| render::dispatch(&document, ctx, host).map_err(LoadError::from));

    match result {
        Ok(reports) => {
            let rendered = reports.iter().filter(|r| r.fragments.is_some()).count();
            info!(path, rendered, skipped = reports.len() - rendered, "content loaded");
            Ok(reports)
        }
        Err(e) => {
            host.alert(alert_message);
            match &e {
                LoadError::ContentUnavailable { status } => {
                    error!(path, status, error = %e, "content load failed")
                }
                _ => error!(path, error = %e, "content load failed"),
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContainerIds;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    const PATH: &str = "assets/data/content.json";
    const ALERT: &str = "Website content failed to load. Please check content.json file.";

    fn run(source: &dyn ContentSource) -> (RecordingHost, Result<Vec<SectionReport>, LoadError>) {
        let mut host = RecordingHost::new(&ContainerIds::default());
        let result = load(source, PATH, &RenderContext::default(), &mut host, ALERT);
        (host, result)
    }

    #[test]
    fn response_ok_range() {
        assert!(Response::new(200, "").ok());
        assert!(Response::new(204, "").ok());
        assert!(!Response::new(304, "").ok());
        assert!(!Response::new(404, "").ok());
        assert!(!Response::new(500, "").ok());
    }

    #[test]
    fn non_ok_status_alerts_once_and_renders_nothing() {
        let source = StaticSource::new(Response::new(404, "not json either"));
        let (host, result) = run(&source);

        assert!(matches!(result, Err(LoadError::ContentUnavailable { status: 404 })));
        assert_eq!(host.alerts, [ALERT]);
        assert_eq!(host.total_writes(), 0);
        assert_eq!(source.requests(), 1);
    }

    #[test]
    fn content_unavailable_message() {
        let err = LoadError::ContentUnavailable { status: 404 };
        assert_eq!(err.to_string(), "Content file not found");
    }

    #[test]
    fn invalid_json_alerts_once_and_renders_nothing() {
        let source = StaticSource::new(Response::new(200, "{ hero: [ oops"));
        let (host, result) = run(&source);

        assert!(matches!(result, Err(LoadError::MalformedContent(_))));
        assert_eq!(host.alerts.len(), 1);
        assert_eq!(host.total_writes(), 0);
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let source = StaticSource::new(Response::new(200, r#"{"products": {"not": "a list"}}"#));
        let (host, result) = run(&source);
        assert!(matches!(result, Err(LoadError::MalformedContent(_))));
        assert_eq!(host.total_writes(), 0);
    }

    #[test]
    fn non_object_entries_render_as_undefined_cards() {
        let source = StaticSource::new(Response::new(200, r#"{"hero": [42]}"#));
        let (host, result) = run(&source);

        let reports = result.unwrap();
        assert_eq!(reports[0].fragments, Some(1));
        assert!(host.alerts.is_empty());
        assert!(host.html("hero-scroll").contains(r#"<h1 class="h1 hero-title">undefined</h1>"#));
    }

    #[test]
    fn transport_failure_alerts_once() {
        let (host, result) = run(&FailingSource);
        assert!(matches!(result, Err(LoadError::Network(_))));
        assert_eq!(host.alerts.len(), 1);
        assert_eq!(host.total_writes(), 0);
    }

    #[test]
    fn valid_document_renders_each_section_once_and_products_twice() {
        let source = StaticSource::new(Response::new(200, sample_document_json()));
        let (host, result) = run(&source);

        let reports = result.unwrap();
        assert_eq!(reports.len(), 7);
        assert!(host.alerts.is_empty());

        let ids = ContainerIds::default();
        for (_, id) in ids.all() {
            assert_eq!(host.writes(id), 1, "container {id}");
        }
        let product_calls = reports
            .iter()
            .filter(|r| r.section == "products" || r.section == "under_25")
            .count();
        assert_eq!(product_calls, 2);
        assert!(host.html(&ids.under_25).contains("Bargain 1"));
    }

    #[test]
    fn missing_container_alerts() {
        let source = StaticSource::new(Response::new(200, sample_document_json()));
        let mut ids = ContainerIds::default();
        ids.footer = "elsewhere".to_string();
        let mut host = RecordingHost::new(&ids);
        let result = load(&source, PATH, &RenderContext::default(), &mut host, ALERT);

        assert!(matches!(result, Err(LoadError::Render(_))));
        assert_eq!(host.alerts.len(), 1);
        // Everything ahead of the footer was already written
        assert_eq!(host.total_writes(), 6);
    }

    #[test]
    fn file_source_serves_relative_paths() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("assets/data")).unwrap();
        fs::write(tmp.path().join(PATH), "{}").unwrap();

        let source = FileSource::new(tmp.path());
        assert_eq!(source.root(), tmp.path());
        let response = source.fetch("./assets/data/content.json").unwrap();
        assert!(response.ok());
        assert_eq!(response.body, b"{}");
    }

    #[test]
    fn file_source_missing_file_is_404() {
        let tmp = TempDir::new().unwrap();
        let response = FileSource::new(tmp.path()).fetch(PATH).unwrap();
        assert_eq!(response.status, 404);
        assert!(!response.ok());
    }

    #[test]
    fn fetch_content_from_fixture_site() {
        let site = setup_fixture_site();
        let document = fetch_content(&FileSource::new(site.path()), PATH).unwrap();
        assert!(!document.hero.unwrap().is_empty());
        assert!(document.footer.is_some());
    }
}

//! Shared test utilities for the storefront test suite.
//!
//! Provides entity builders, a sample content document (typed and as JSON),
//! hosts that record what the renderers did, and canned content sources.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut host = RecordingHost::new(&ContainerIds::default());
//! let source = StaticSource::new(Response::new(200, sample_document_json()));
//! load(&source, "content.json", &RenderContext::default(), &mut host, "failed").unwrap();
//! assert_eq!(host.writes("shop-products"), 1);
//! ```

use std::cell::Cell;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use tempfile::TempDir;

use crate::config::ContainerIds;
use crate::dom::{ClassList, Document, Element, ElementId, Host, Selector, TextSink};
use crate::loader::{ContentSource, Response};
use crate::types::{
    Blog, Collection, Company, ContentDocument, Feature, Field, Footer, HeroItem, Product,
};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixture_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Entities
// =========================================================================

pub fn sample_hero(title: &str) -> HeroItem {
    HeroItem {
        image: Field::from(format!("hero-{title}.jpg")),
        title: Field::from(title),
        text: Field::from("Natural care for every day"),
        price: Field::from("Starting at $15.00"),
        button_text: Field::from("Shop Now"),
    }
}

pub fn sample_collection(title: &str) -> Collection {
    Collection {
        title: Field::from(title),
        text: Field::from("Fresh arrivals"),
        button_text: Field::from("Shop Now"),
        image: Field::from(format!("collection-{title}.jpg")),
    }
}

/// A product priced at 29 with 12 reviews, no badge and no old price.
pub fn sample_product(title: &str, rating: i64) -> Product {
    Product {
        image: Field::from(format!("product-{title}.jpg")),
        title: Field::from(title),
        price: Field::from(29),
        rating: Field::from(rating),
        reviews: Field::from(12),
        ..Default::default()
    }
}

pub fn sample_feature(title: &str) -> Feature {
    Feature {
        image: Field::from(format!("feature-{title}.png")),
        alt: Field::from(format!("{title} icon")),
        title: Field::from(title),
        text: Field::from("Made with care"),
    }
}

pub fn sample_blog(title: &str) -> Blog {
    Blog {
        image: Field::from(format!("blog-{title}.jpg")),
        alt: Field::from(title),
        title: Field::from(title),
        link_text: Field::from("Read More"),
    }
}

/// Footer with two useful links and three information links.
pub fn sample_footer() -> Footer {
    Footer {
        company: Company {
            title: Field::from("Glowing Co."),
            location: Field::from("12 Market Street"),
            phone: Field::from("+1 555 0100"),
            email: Field::from("hello@glowing.test"),
        },
        useful_links: ["New Products", "Best Sellers"]
            .into_iter()
            .map(Field::from)
            .collect(),
        information_links: ["About Us", "Contact", "Privacy"]
            .into_iter()
            .map(Field::from)
            .collect(),
    }
}

// =========================================================================
// Content documents
// =========================================================================

/// A document with every section present and non-empty.
///
/// Products are titled "Bestseller N", under-25 products "Bargain N".
pub fn sample_document() -> ContentDocument {
    ContentDocument {
        hero: Some(vec![sample_hero("Reveal your glow"), sample_hero("Summer set")]),
        collections: Some(vec![sample_collection("Skincare"), sample_collection("Hair")]),
        products: Some((1..=3).map(|i| sample_product(&format!("Bestseller {i}"), 5)).collect()),
        under25_products: Some((1..=2).map(|i| sample_product(&format!("Bargain {i}"), 4)).collect()),
        features: Some(vec![sample_feature("Organic"), sample_feature("Vegan")]),
        blogs: Some(vec![sample_blog("Morning routine")]),
        footer: Some(sample_footer()),
    }
}

/// The same shape as [`sample_document`], as a `content.json` body.
pub fn sample_document_json() -> String {
    serde_json::json!({
        "hero": [
            {"image": "hero-1.jpg", "title": "Reveal your glow", "text": "Natural care",
             "price": "Starting at $15.00", "buttonText": "Shop Now"}
        ],
        "collections": [
            {"title": "Skincare", "text": "Fresh arrivals", "buttonText": "Shop Now", "image": "c-1.jpg"}
        ],
        "products": [
            {"image": "p-1.jpg", "title": "Bestseller 1", "badge": "-20%", "oldPrice": 39,
             "price": 29, "rating": 5, "reviews": 41},
            {"image": "p-2.jpg", "title": "Bestseller 2", "price": 19, "rating": 4, "reviews": 8}
        ],
        "under25Products": [
            {"image": "p-3.jpg", "title": "Bargain 1", "price": 12, "rating": 4, "reviews": 3}
        ],
        "features": [
            {"image": "f-1.png", "alt": "Leaf", "title": "Organic", "text": "Made with care"}
        ],
        "blogs": [
            {"image": "b-1.jpg", "alt": "Jar", "title": "Morning routine", "linkText": "Read More"}
        ],
        "footer": {
            "company": {"title": "Glowing Co.", "location": "12 Market Street",
                        "phone": "+1 555 0100", "email": "hello@glowing.test"},
            "usefulLinks": ["New Products", "Best Sellers"],
            "informationLinks": ["About Us", "Contact", "Privacy"]
        }
    })
    .to_string()
}

// =========================================================================
// Hosts
// =========================================================================

/// A document holding one empty element per configured container.
pub fn standard_document(ids: &ContainerIds) -> Document {
    let mut doc = Document::new(800.0);
    for (_, id) in ids.all() {
        doc.push(Element::new(id));
    }
    doc
}

/// A container that counts how often it was replaced.
#[derive(Debug, Default)]
struct CountingSink {
    html: String,
    writes: usize,
}

impl TextSink for CountingSink {
    fn replace(&mut self, markup: &str) {
        self.html = markup.to_string();
        self.writes += 1;
    }

    fn contents(&self) -> &str {
        &self.html
    }
}

/// Host that exposes only containers and records writes and alerts.
#[derive(Debug, Default)]
pub struct RecordingHost {
    containers: BTreeMap<String, CountingSink>,
    pub alerts: Vec<String>,
}

impl RecordingHost {
    pub fn new(ids: &ContainerIds) -> Self {
        Self {
            containers: ids
                .all()
                .into_iter()
                .map(|(_, id)| (id.to_string(), CountingSink::default()))
                .collect(),
            alerts: Vec::new(),
        }
    }

    /// Number of times container `id` was replaced.
    pub fn writes(&self, id: &str) -> usize {
        self.containers.get(id).map_or(0, |c| c.writes)
    }

    pub fn total_writes(&self) -> usize {
        self.containers.values().map(|c| c.writes).sum()
    }

    pub fn html(&self, id: &str) -> &str {
        self.containers.get(id).map_or("", |c| c.html.as_str())
    }
}

impl Host for RecordingHost {
    fn container(&mut self, id: &str) -> Option<&mut dyn TextSink> {
        self.containers
            .get_mut(id)
            .map(|c| c as &mut dyn TextSink)
    }

    fn query_all(&self, _selector: Selector) -> Vec<ElementId> {
        Vec::new()
    }

    fn classes(&self, _id: &ElementId) -> Option<&ClassList> {
        None
    }

    fn class_list(&mut self, _id: &ElementId) -> Option<&mut ClassList> {
        None
    }

    fn top(&self, _id: &ElementId) -> Option<f64> {
        None
    }

    fn viewport_height(&self) -> f64 {
        800.0
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

// =========================================================================
// Content sources
// =========================================================================

/// Serves the same response for every path and counts requests.
pub struct StaticSource {
    response: Response,
    requests: Cell<usize>,
}

impl StaticSource {
    pub fn new(response: Response) -> Self {
        Self {
            response,
            requests: Cell::new(0),
        }
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl ContentSource for StaticSource {
    fn fetch(&self, _path: &str) -> io::Result<Response> {
        self.requests.set(self.requests.get() + 1);
        Ok(self.response.clone())
    }
}

/// A source whose requests never complete.
pub struct FailingSource;

impl ContentSource for FailingSource {
    fn fetch(&self, _path: &str) -> io::Result<Response> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
    }
}

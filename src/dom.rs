//! The host capability interface and an in-memory document that implements it.
//!
//! Renderers and controllers never reach for a global document. They receive
//! a [`Host`] and ask it for containers by id and for elements by
//! [`Selector`]. [`Document`] is the host the CLI and the tests use.

use std::collections::BTreeSet;
use std::fmt;

/// Identifier of an element in a host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Behaviour flags carried by interactive elements as `data-*` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    NavToggler,
    Navbar,
    NavLink,
    Overlay,
    Section,
}

impl Selector {
    /// The `data-*` attribute name that marks an element with this flag.
    pub fn attribute(self) -> &'static str {
        match self {
            Selector::NavToggler => "data-nav-toggler",
            Selector::Navbar => "data-navbar",
            Selector::NavLink => "data-nav-link",
            Selector::Overlay => "data-overlay",
            Selector::Section => "data-section",
        }
    }
}

/// A set of CSS classes on an element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }

    /// Flip `class`; returns whether it is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.0.remove(class) {
            false
        } else {
            self.0.insert(class.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Writable markup slot of a container element.
pub trait TextSink {
    /// Replace the entire contents.
    fn replace(&mut self, markup: &str);
    fn contents(&self) -> &str;
}

/// Capabilities the page logic needs from its environment.
pub trait Host {
    /// Look up a container by element id.
    fn container(&mut self, id: &str) -> Option<&mut dyn TextSink>;
    /// All elements carrying `selector`, in document order.
    fn query_all(&self, selector: Selector) -> Vec<ElementId>;
    fn classes(&self, id: &ElementId) -> Option<&ClassList>;
    fn class_list(&mut self, id: &ElementId) -> Option<&mut ClassList>;
    /// Top edge of the element relative to the viewport, if laid out.
    fn top(&self, id: &ElementId) -> Option<f64>;
    fn viewport_height(&self) -> f64;
    /// Show a blocking, user-visible message.
    fn alert(&mut self, message: &str);
}

/// An element of the in-memory document.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: ElementId,
    pub flags: Vec<Selector>,
    pub classes: ClassList,
    pub html: String,
    pub top: Option<f64>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(id),
            flags: Vec::new(),
            classes: ClassList::default(),
            html: String::new(),
            top: None,
        }
    }

    pub fn flag(mut self, selector: Selector) -> Self {
        self.flags.push(selector);
        self
    }

    pub fn at(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn is(&self, selector: Selector) -> bool {
        self.flags.contains(&selector)
    }
}

impl TextSink for Element {
    fn replace(&mut self, markup: &str) {
        self.html = markup.to_string();
    }

    fn contents(&self) -> &str {
        &self.html
    }
}

/// In-memory host document.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    viewport_height: f64,
    alerts: Vec<String>,
}

impl Document {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            elements: Vec::new(),
            viewport_height,
            alerts: Vec::new(),
        }
    }

    /// Append an element. Ids are expected to be unique; lookups return the first match.
    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.as_str() == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id.as_str() == id)
    }

    /// Inner markup of an element, empty if it does not exist.
    pub fn html(&self, id: &str) -> &str {
        self.element(id).map(|e| e.html.as_str()).unwrap_or("")
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.classes.contains(class))
    }

    /// Move an element, as a scroll or layout change would.
    pub fn set_top(&mut self, id: &str, top: Option<f64>) {
        if let Some(element) = self.element_mut(id) {
            element.top = top;
        }
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Host for Document {
    fn container(&mut self, id: &str) -> Option<&mut dyn TextSink> {
        self.element_mut(id).map(|e| e as &mut dyn TextSink)
    }

    fn query_all(&self, selector: Selector) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.is(selector))
            .map(|e| e.id.clone())
            .collect()
    }

    fn classes(&self, id: &ElementId) -> Option<&ClassList> {
        self.element(id.as_str()).map(|e| &e.classes)
    }

    fn class_list(&mut self, id: &ElementId) -> Option<&mut ClassList> {
        self.element_mut(id.as_str()).map(|e| &mut e.classes)
    }

    fn top(&self, id: &ElementId) -> Option<f64> {
        self.element(id.as_str()).and_then(|e| e.top)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new(600.0);
        doc.push(Element::new("menu").flag(Selector::Navbar))
            .push(Element::new("open").flag(Selector::NavToggler))
            .push(Element::new("close").flag(Selector::NavToggler))
            .push(Element::new("hero").flag(Selector::Section).at(0.0))
            .push(Element::new("list"));
        doc
    }

    #[test]
    fn class_list_toggle_flips() {
        let mut classes = ClassList::default();
        assert!(classes.toggle("active"));
        assert!(classes.contains("active"));
        assert!(!classes.toggle("active"));
        assert!(!classes.contains("active"));
    }

    #[test]
    fn class_list_add_is_idempotent() {
        let mut classes = ClassList::default();
        classes.add("active");
        classes.add("active");
        assert_eq!(classes.iter().count(), 1);
        classes.remove("active");
        classes.remove("active");
        assert_eq!(classes.iter().count(), 0);
    }

    #[test]
    fn query_all_returns_document_order() {
        let doc = sample();
        let togglers = doc.query_all(Selector::NavToggler);
        assert_eq!(togglers, vec![ElementId::from("open"), ElementId::from("close")]);
        assert!(doc.query_all(Selector::Overlay).is_empty());
    }

    #[test]
    fn container_replaces_contents() {
        let mut doc = sample();
        doc.container("list").unwrap().replace("<li>a</li>");
        doc.container("list").unwrap().replace("<li>b</li>");
        assert_eq!(doc.html("list"), "<li>b</li>");
        assert!(doc.container("missing").is_none());
    }

    #[test]
    fn top_is_none_until_laid_out() {
        let mut doc = sample();
        assert_eq!(doc.top(&ElementId::from("hero")), Some(0.0));
        assert_eq!(doc.top(&ElementId::from("list")), None);
        doc.set_top("list", Some(120.0));
        assert_eq!(doc.top(&ElementId::from("list")), Some(120.0));
    }

    #[test]
    fn alerts_are_recorded() {
        let mut doc = sample();
        doc.alert("boom");
        assert_eq!(doc.alerts(), ["boom"]);
    }

    #[test]
    fn selector_attributes() {
        assert_eq!(Selector::NavToggler.attribute(), "data-nav-toggler");
        assert_eq!(Selector::Section.attribute(), "data-section");
    }
}

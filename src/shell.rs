//! The page shell: the static host markup the section renderers fill in.
//!
//! [`skeleton`] builds the in-memory [`Document`] with every interactive
//! element and container the page logic expects. [`render`] writes that
//! document back out as a complete HTML page, carrying over each element's
//! current classes and container contents.

use crate::config::SiteConfig;
use crate::dom::{Document, Element, Selector};
use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const NAV_OPEN: &str = "nav-open";
pub const NAV_CLOSE: &str = "nav-close";
pub const NAVBAR: &str = "navbar";
pub const OVERLAY: &str = "overlay";
pub const HERO_SECTION: &str = "home";
pub const COLLECTION_SECTION: &str = "collection";
pub const SHOP_SECTION: &str = "shop";
pub const OFFER_SECTION: &str = "offer";
pub const FEATURE_SECTION: &str = "features";
pub const BLOG_SECTION: &str = "blog";

const SCRIPT: &str = include_str!("../static/site.js");

/// One content section of the page.
struct SectionLayout<'a> {
    id: &'static str,
    class: &'static str,
    heading: Option<&'a str>,
    list_class: &'static str,
    container: &'a str,
    above_fold: bool,
}

fn sections(config: &SiteConfig) -> [SectionLayout<'_>; 6] {
    let ids = &config.containers;
    let headings = &config.headings;
    [
        SectionLayout {
            id: HERO_SECTION,
            class: "hero",
            heading: None,
            list_class: "has-scrollbar",
            container: &ids.hero,
            above_fold: true,
        },
        SectionLayout {
            id: COLLECTION_SECTION,
            class: "collection",
            heading: None,
            list_class: "collection-list",
            container: &ids.collections,
            above_fold: false,
        },
        SectionLayout {
            id: SHOP_SECTION,
            class: "shop",
            heading: Some(headings.products.as_str()),
            list_class: "has-scrollbar",
            container: &ids.products,
            above_fold: false,
        },
        SectionLayout {
            id: OFFER_SECTION,
            class: "shop",
            heading: Some(headings.under_25.as_str()),
            list_class: "has-scrollbar",
            container: &ids.under_25,
            above_fold: false,
        },
        SectionLayout {
            id: FEATURE_SECTION,
            class: "feature",
            heading: Some(headings.features.as_str()),
            list_class: "flex-list",
            container: &ids.features,
            above_fold: false,
        },
        SectionLayout {
            id: BLOG_SECTION,
            class: "blog",
            heading: Some(headings.blogs.as_str()),
            list_class: "flex-list",
            container: &ids.blogs,
            above_fold: false,
        },
    ]
}

fn nav_link_id(index: usize) -> String {
    format!("nav-link-{}", index + 1)
}

/// `#home` for "Home", `#new-in` for "New In".
fn anchor(label: &str) -> String {
    format!("#{}", label.trim().to_lowercase().replace(' ', "-"))
}

/// Build the host document for a config.
///
/// The hero section sits at the top of the viewport; other sections have no
/// measured position until a host lays them out.
pub fn skeleton(config: &SiteConfig) -> Document {
    let mut doc = Document::new(config.reveal.viewport_height);
    doc.push(Element::new(NAV_OPEN).flag(Selector::NavToggler))
        .push(Element::new(NAVBAR).flag(Selector::Navbar))
        .push(Element::new(NAV_CLOSE).flag(Selector::NavToggler));
    for index in 0..config.page.nav_links.len() {
        doc.push(Element::new(nav_link_id(index)).flag(Selector::NavLink));
    }
    doc.push(Element::new(OVERLAY).flag(Selector::Overlay));

    for section in sections(config) {
        let mut element = Element::new(section.id).flag(Selector::Section);
        if section.above_fold {
            element = element.at(0.0);
        }
        doc.push(element).push(Element::new(section.container));
    }
    doc.push(Element::new(config.containers.footer.as_str()));
    doc
}

/// `base` followed by any classes the element currently carries.
fn class_attr(doc: &Document, id: &str, base: &str) -> String {
    let mut classes: Vec<&str> = base.split_whitespace().collect();
    if let Some(element) = doc.element(id) {
        for class in element.classes.iter() {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
    }
    classes.join(" ")
}

/// Container contents, which are already-escaped markup.
fn contents(doc: &Document, id: &str) -> PreEscaped<String> {
    PreEscaped(doc.html(id).to_string())
}

/// Serialise a document built by [`skeleton`] as a full HTML page.
pub fn render(doc: &Document, config: &SiteConfig) -> Markup {
    let page = &config.page;
    html! {
        (DOCTYPE)
        html lang=(page.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.title) }
                @for href in &page.stylesheets {
                    link rel="stylesheet" href=(href);
                }
            }
            body id="top" data-reveal-threshold=(config.reveal.threshold.to_string()) {
                header.header {
                    div.container {
                        button id=(NAV_OPEN) class=(class_attr(doc, NAV_OPEN, "nav-open-btn"))
                            aria-label="open menu" data-nav-toggler {
                            ion-icon name="menu-outline" aria-hidden="true" {}
                        }
                        a.logo href="#" { (page.title) }
                        nav id=(NAVBAR) class=(class_attr(doc, NAVBAR, "navbar")) data-navbar {
                            button id=(NAV_CLOSE) class=(class_attr(doc, NAV_CLOSE, "nav-close-btn"))
                                aria-label="close menu" data-nav-toggler {
                                ion-icon name="close-outline" aria-hidden="true" {}
                            }
                            ul.navbar-list {
                                @for (index, label) in page.nav_links.iter().enumerate() {
                                    @let id = nav_link_id(index);
                                    li {
                                        a id=(id) class=(class_attr(doc, &id, "navbar-link"))
                                            href=(anchor(label)) data-nav-link { (label) }
                                    }
                                }
                            }
                        }
                        div id=(OVERLAY) class=(class_attr(doc, OVERLAY, "overlay")) data-overlay {}
                    }
                }
                main {
                    article {
                        @for layout in sections(config) {
                            section id=(layout.id)
                                class=(class_attr(doc, layout.id, &format!("section {}", layout.class)))
                                data-section {
                                div.container {
                                    @if let Some(heading) = layout.heading {
                                        h2.h2.section-title { (heading) }
                                    }
                                    ul id=(layout.container) class=(layout.list_class) {
                                        (contents(doc, layout.container))
                                    }
                                }
                            }
                        }
                    }
                }
                footer.footer {
                    div.container {
                        div.footer-top.section id=(config.containers.footer) {
                            (contents(doc, &config.containers.footer))
                        }
                    }
                }
                script { (PreEscaped(SCRIPT)) }
                @for src in &page.scripts {
                    script type="module" src=(src) {}
                }
            }
        }
    }
}

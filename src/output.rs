//! CLI output formatting for `check` and `build`.
//!
//! # Information-First Display
//!
//! Output is a content inventory, not a file listing. Each section leads with
//! its name and item count; entities are listed by positional index and title
//! with paths shown only as secondary context.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Content
//!     assets/data/content.json
//! Hero (2 items)
//!     001 Reveal your glow
//!     002 Summer set
//! Products (1 item)
//!     001 Facial cream $29.00 (4 stars)
//! Blogs: absent
//! Footer
//!     Glowing Co.
//!     2 useful links, 3 information links
//! ```
//!
//! ## Build
//!
//! ```text
//! hero → #hero-scroll (2 fragments)
//! blogs → #blog-list skipped
//! Wrote dist/index.html, copied 3 assets
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::fragments::RatingPolicy;
use crate::generate::GenerateSummary;
use crate::types::{ContentDocument, Field, Footer};

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Section header plus one indented line per entity.
///
/// ```text
/// Hero (2 items)
///     001 Reveal your glow
/// Blogs: absent
/// ```
fn section_lines<T>(name: &str, items: Option<&[T]>, line: impl Fn(&T) -> String) -> Vec<String> {
    match items {
        None => vec![format!("{name}: absent")],
        Some([]) => vec![format!("{name}: empty")],
        Some(items) => {
            let mut lines = vec![format!("{name} ({})", plural(items.len(), "item", "items"))];
            for (i, item) in items.iter().enumerate() {
                lines.push(format!("    {} {}", format_index(i + 1), line(item)));
            }
            lines
        }
    }
}

fn footer_lines(footer: Option<&Footer>) -> Vec<String> {
    let Some(footer) = footer else {
        return vec!["Footer: absent".to_string()];
    };
    vec![
        "Footer".to_string(),
        format!("    {}", footer.company.title),
        format!(
            "    {}, {}",
            plural(footer.useful_links.len(), "useful link", "useful links"),
            plural(
                footer.information_links.len(),
                "information link",
                "information links"
            )
        ),
    ]
}

// ============================================================================
// check
// ============================================================================

/// Format the inventory of a parsed content document.
pub fn format_check_output(
    doc: &ContentDocument,
    content_path: &str,
    rating: &RatingPolicy,
) -> Vec<String> {
    let title = |t: &Field| t.to_string();
    let product = |p: &crate::types::Product| {
        format!(
            "{} ${}.00 ({})",
            p.title,
            p.price,
            plural(rating.stars(&p.rating), "star", "stars")
        )
    };

    let mut lines = vec!["Content".to_string(), format!("    {content_path}")];
    lines.extend(section_lines("Hero", doc.hero.as_deref(), |h| title(&h.title)));
    lines.extend(section_lines(
        "Collections",
        doc.collections.as_deref(),
        |c| title(&c.title),
    ));
    lines.extend(section_lines("Products", doc.products.as_deref(), product));
    lines.extend(section_lines(
        "Under $25",
        doc.under25_products.as_deref(),
        product,
    ));
    lines.extend(section_lines("Features", doc.features.as_deref(), |f| {
        title(&f.title)
    }));
    lines.extend(section_lines("Blogs", doc.blogs.as_deref(), |b| title(&b.title)));
    lines.extend(footer_lines(doc.footer.as_ref()));
    lines
}

pub fn print_check_output(doc: &ContentDocument, content_path: &str, rating: &RatingPolicy) {
    for line in format_check_output(doc, content_path, rating) {
        println!("{}", line);
    }
}

// ============================================================================
// build
// ============================================================================

/// Format the per-section results of a build and the files it wrote.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for report in &summary.sections {
        match report.fragments {
            Some(n) => lines.push(format!(
                "{} \u{2192} #{} ({})",
                report.section,
                report.container,
                plural(n, "fragment", "fragments")
            )),
            None => lines.push(format!(
                "{} \u{2192} #{} skipped",
                report.section, report.container
            )),
        }
    }
    lines.push(format!(
        "Wrote {}, copied {}",
        summary.index.display(),
        plural(summary.assets_copied, "asset", "assets")
    ));
    lines
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Section renderers.
//!
//! Each renderer maps one part of the [`ContentDocument`] to markup and
//! replaces the whole contents of its container. Absent or empty input leaves
//! the container untouched: existing placeholder markup survives rather than
//! being cleared.
//!
//! Renderers take everything they need through a [`RenderContext`] built once
//! from the site config, and write through the [`Host`] capability.

use crate::config::{ContainerIds, SiteConfig};
use crate::dom::Host;
use crate::fragments::{Fragment, RatingPolicy};
use crate::types::{Blog, Collection, ContentDocument, Feature, Footer, HeroItem, Product};
use maud::{Markup, html};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Container #{0} not found in page")]
    MissingContainer(String),
}

/// Everything a renderer needs besides its input.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub containers: ContainerIds,
    pub rating: RatingPolicy,
}

impl RenderContext {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            containers: config.containers.clone(),
            rating: RatingPolicy {
                max: config.rating.max,
            },
        }
    }
}

/// Optional predicate for [`render_products`]; items it rejects are skipped.
pub type ProductFilter<'a> = &'a dyn Fn(&Product) -> bool;

/// Outcome of one renderer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub section: &'static str,
    pub container: String,
    /// Fragments written, or `None` if the input was absent or empty.
    pub fragments: Option<usize>,
}

/// Replace a container's contents with `markup`.
fn write(host: &mut dyn Host, container: &str, markup: Markup) -> Result<(), RenderError> {
    let sink = host
        .container(container)
        .ok_or_else(|| RenderError::MissingContainer(container.to_string()))?;
    sink.replace(&markup.into_string());
    Ok(())
}

/// Render a list of entities into `container`, one fragment per item.
fn render_list<'a, T, I>(
    items: I,
    container: &str,
    ctx: &RenderContext,
    host: &mut dyn Host,
) -> Result<usize, RenderError>
where
    T: Fragment + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let fragments: Vec<Markup> = items.into_iter().map(|item| item.fragment(ctx)).collect();
    let count = fragments.len();
    let markup = html! {
        @for fragment in fragments {
            (fragment)
        }
    };
    write(host, container, markup)?;
    debug!(container, fragments = count, "rendered section");
    Ok(count)
}

fn present<T>(items: Option<&[T]>) -> Option<&[T]> {
    items.filter(|items| !items.is_empty())
}

pub fn render_hero(
    items: Option<&[HeroItem]>,
    ctx: &RenderContext,
    host: &mut dyn Host,
) -> Result<Option<usize>, RenderError> {
    let Some(items) = present(items) else {
        return Ok(None);
    };
    render_list(items, &ctx.containers.hero, ctx, host).map(Some)
}

pub fn render_collections(
    items: Option<&[Collection]>,
    ctx: &RenderContext,
    host: &mut dyn Host,
) -> Result<Option<usize>, RenderError> {
    let Some(items) = present(items) else {
        return Ok(None);
    };
    render_list(items, &ctx.containers.collections, ctx, host).map(Some)
}

/// Render product cards into `container`.
///
/// Shared by every product section. When `filter` is given, rejected items are
/// skipped; if it rejects everything the container is still replaced, with
/// empty markup.
pub fn render_products(
    items: Option<&[Product]>,
    container: &str,
    filter: Option<ProductFilter<'_>>,
    ctx: &RenderContext,
    host: &mut dyn Host,
) -> Result<Option<usize>, RenderError> {
    let Some(items) = present(items) else {
        return Ok(None);
    };
    let kept = items.iter().filter(|p| filter.is_none_or(|keep| keep(*p)));
    render_list(kept, container, ctx, host).map(Some)
}

pub fn render_features(
    items: Option<&[Feature]>,
    ctx: &RenderContext,
    host: &mut dyn Host,
) -> Result<Option<usize>, RenderError> {
    let Some(items) = present(items) else {
        return Ok(None);
    };
    render_list(items, &ctx.containers.features, ctx, host).map(Some)
}

pub fn render_blogs(
    items: Option<&[Blog]>,
    ctx: &RenderContext,
    host: &mut dyn Host,
) -> Result<Option<usize>, RenderError> {
    let Some(items) = present(items) else {
        return Ok(None);
    };
    render_list(items, &ctx.containers.blogs, ctx, host).map(Some)
}

/// Render the footer top. Guarded on absence only; reports one fragment.
pub fn render_footer(
    footer: Option<&Footer>,
    ctx: &RenderContext,
    host: &mut dyn Host,
) -> Result<Option<usize>, RenderError> {
    let Some(footer) = footer else {
        return Ok(None);
    };
    write(host, &ctx.containers.footer, footer.fragment(ctx))?;
    debug!(container = %ctx.containers.footer, "rendered footer");
    Ok(Some(1))
}

/// Run every section renderer against a parsed document, in page order.
///
/// Stops at the first missing container; sections already written stay written.
pub fn dispatch(
    doc: &ContentDocument,
    ctx: &RenderContext,
    host: &mut dyn Host,
) -> Result<Vec<SectionReport>, RenderError> {
    let ids = &ctx.containers;
    let report = |section, container: &str, fragments| SectionReport {
        section,
        container: container.to_string(),
        fragments,
    };

    Ok(vec![
        report("hero", &ids.hero, render_hero(doc.hero.as_deref(), ctx, host)?),
        report(
            "collections",
            &ids.collections,
            render_collections(doc.collections.as_deref(), ctx, host)?,
        ),
        report(
            "products",
            &ids.products,
            render_products(doc.products.as_deref(), &ids.products, None, ctx, host)?,
        ),
        report(
            "under_25",
            &ids.under_25,
            render_products(
                doc.under25_products.as_deref(),
                &ids.under_25,
                None,
                ctx,
                host,
            )?,
        ),
        report(
            "features",
            &ids.features,
            render_features(doc.features.as_deref(), ctx, host)?,
        ),
        report("blogs", &ids.blogs, render_blogs(doc.blogs.as_deref(), ctx, host)?),
        report(
            "footer",
            &ids.footer,
            render_footer(doc.footer.as_ref(), ctx, host)?,
        ),
    ])
}

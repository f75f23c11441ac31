//! Per-entity markup fragments.
//!
//! Each content entity knows how to turn itself into a [`Markup`] fragment
//! through the [`Fragment`] trait. Section renderers concatenate these; they
//! never assemble markup strings by hand. All interpolated values go through
//! maud's escaping.

use crate::render::RenderContext;
use crate::types::{Blog, Collection, Feature, Field, Footer, HeroItem, Product};
use maud::{Markup, html};

/// A content entity that renders to a markup fragment.
pub trait Fragment {
    fn fragment(&self, ctx: &RenderContext) -> Markup;
}

/// How a product's rating turns into a number of star icons.
///
/// The value is rounded down and clamped to `0..=max`. Anything that is not
/// a number renders no stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingPolicy {
    pub max: u32,
}

impl RatingPolicy {
    pub fn stars(&self, rating: &Field) -> usize {
        match rating.as_f64() {
            Some(value) if value.is_finite() && value > 0.0 => {
                value.floor().min(f64::from(self.max)) as usize
            }
            _ => 0,
        }
    }
}

impl Default for RatingPolicy {
    fn default() -> Self {
        Self { max: 5 }
    }
}

/// `url('…')` value for an inline `background-image`.
fn background(image: &Field) -> String {
    format!("background-image: url('{image}')")
}

impl Fragment for HeroItem {
    fn fragment(&self, _ctx: &RenderContext) -> Markup {
        html! {
            li.scrollbar-item {
                div.hero-card.has-bg-image style=(background(&self.image)) {
                    div.card-content {
                        h1.h1.hero-title { (self.title) }
                        p.hero-text { (self.text) }
                        p.price { (self.price) }
                        a.btn.btn-primary href="#" { (self.button_text) }
                    }
                }
            }
        }
    }
}

impl Fragment for Collection {
    fn fragment(&self, _ctx: &RenderContext) -> Markup {
        html! {
            li {
                div class="collection-card has-before hover:shine" {
                    h2.h2.card-title { (self.title) }
                    p.card-text { (self.text) }
                    a.btn-link href="#" {
                        span.span { (self.button_text) }
                        ion-icon name="arrow-forward" aria-hidden="true" {}
                    }
                    div.has-bg-image style=(background(&self.image)) {}
                }
            }
        }
    }
}

impl Fragment for Product {
    fn fragment(&self, ctx: &RenderContext) -> Markup {
        let stars = ctx.rating.stars(&self.rating);
        html! {
            li.scrollbar-item {
                div.shop-card {
                    div.card-banner.img-holder style="--width: 540; --height: 720" {
                        img src=(self.image) width="540" height="720" loading="lazy"
                            alt=(self.title) class="img-cover";
                        @if self.badge.is_truthy() {
                            span.badge { (self.badge) }
                        }
                        div.card-actions {
                            button.action-btn aria-label="add to cart" {
                                ion-icon name="bag-handle-outline" {}
                            }
                            button.action-btn aria-label="add to wishlist" {
                                ion-icon name="star-outline" {}
                            }
                            button.action-btn aria-label="compare" {
                                ion-icon name="repeat-outline" {}
                            }
                        }
                    }
                    div.card-content {
                        div.price {
                            @if self.old_price.is_truthy() {
                                del.del { "$" (self.old_price) ".00" }
                            }
                            span.span { "$" (self.price) ".00" }
                        }
                        h3 {
                            a.card-title href="#" { (self.title) }
                        }
                        div.card-rating {
                            div.rating-wrapper {
                                @for _ in 0..stars {
                                    ion-icon name="star" {}
                                }
                            }
                            p.rating-text { (self.reviews) " reviews" }
                        }
                    }
                }
            }
        }
    }
}

impl Fragment for Feature {
    fn fragment(&self, _ctx: &RenderContext) -> Markup {
        html! {
            li.flex-item {
                div.feature-card {
                    img src=(self.image) width="204" height="236" loading="lazy"
                        alt=(self.alt) class="card-icon";
                    h3.h3.card-title { (self.title) }
                    p.card-text { (self.text) }
                }
            }
        }
    }
}

impl Fragment for Blog {
    fn fragment(&self, _ctx: &RenderContext) -> Markup {
        html! {
            li.flex-item {
                div.blog-card {
                    figure class="card-banner img-holder has-before hover:shine"
                        style="--width: 700; --height: 450" {
                        img src=(self.image) width="700" height="450" loading="lazy"
                            alt=(self.alt) class="img-cover";
                    }
                    h3.h3 {
                        a.card-title href="#" { (self.title) }
                    }
                    a.btn-link href="#" {
                        span.span { (self.link_text) }
                        ion-icon name="arrow-forward-outline" {}
                    }
                }
            }
        }
    }
}

fn footer_links(title: &str, links: &[Field]) -> Markup {
    html! {
        ul.footer-list {
            li { p.footer-list-title { (title) } }
            @for link in links {
                li { a.footer-link href="#" { (link) } }
            }
        }
    }
}

impl Fragment for Footer {
    fn fragment(&self, _ctx: &RenderContext) -> Markup {
        let company = &self.company;
        html! {
            ul.footer-list {
                li { p.footer-list-title { (company.title) } }
                li { p.footer-list-text { (company.location) } }
                li { p.footer-list-text.bold { (company.phone) } }
                li { p.footer-list-text { (company.email) } }
            }
            (footer_links("Useful links", &self.useful_links))
            (footer_links("Information", &self.information_links))
            div.footer-list {
                p.newsletter-title { "Good emails." }
                p.newsletter-text {
                    "Enter your email below to be the first to know about new collections and product launches."
                }
                form.newsletter-form {
                    input.email-field type="email" placeholder="Enter your email address" required;
                    button.btn.btn-primary type="submit" { "Subscribe" }
                }
            }
        }
    }
}

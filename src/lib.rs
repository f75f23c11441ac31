//! # Storefront
//!
//! Renders a single-page storefront from one JSON content document. The page
//! shell (header, navigation, section containers, footer) is fixed; every
//! section's contents come from `content.json`.
//!
//! # Architecture: Load, Then Render
//!
//! ```text
//! 1. Start    shell skeleton  →  listeners bound, above-the-fold reveal
//! 2. Fetch    content source  →  ContentDocument      (may fail, one alert)
//! 3. Render   ContentDocument →  section containers   (only after a clean parse)
//! ```
//!
//! The page logic never touches a global document. It talks to a [`dom::Host`],
//! which hands out containers by id and elements by behaviour flag. The CLI
//! runs the page against an in-memory [`dom::Document`] and serialises the
//! result as a static page; tests substitute recording hosts.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The content document and its entities, deserialised with serde |
//! | [`fragments`] | Per-entity markup fragments built with Maud |
//! | [`render`] | Section renderers and the dispatcher that runs them in page order |
//! | [`loader`] | Content sources and the two-stage fetch-then-render load |
//! | [`dom`] | The `Host` capability trait and the in-memory `Document` |
//! | [`events`] | Listener registry: bind a callback to many targets at once |
//! | [`controls`] | Nav toggle and scroll-reveal controllers |
//! | [`page`] | A page session tying host, listeners and render context together |
//! | [`shell`] | The static page skeleton and its HTML serialisation |
//! | [`generate`] | Writes the pre-rendered page and copies site assets |
//! | [`config`] | `site.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Maud For Every Fragment
//!
//! All markup is produced with [Maud](https://maud.lambda.xyz/). Content
//! values are interpolated through Maud's escaping, so a title containing
//! `<script>` renders as text. Absent fields render as `undefined`, matching
//! what the browser script would show for the same document.
//!
//! ## Fetch Once, Render Once
//!
//! A load is a single request. A non-success status, a body that does not
//! parse, or a transport failure all end the load before any section is
//! touched, with exactly one alert. A missing container is reported the
//! same way.
//!
//! ## Absent Sections Leave Placeholders
//!
//! A section that is missing or empty in the document is skipped, so
//! whatever markup the shell already had in that container survives.

pub mod config;
pub mod controls;
pub mod dom;
pub mod events;
pub mod fragments;
pub mod generate;
pub mod loader;
pub mod output;
pub mod page;
pub mod render;
pub mod shell;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

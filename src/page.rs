//! A page session: one host, its listeners, and the render context.
//!
//! [`Page::start`] does what the page does when its script first runs: wire
//! the nav controller and scroll reveal, then reveal whatever is already
//! above the fold. [`Page::load`] then fetches and renders the content.

use crate::config::SiteConfig;
use crate::controls::{NavController, ScrollReveal};
use crate::dom::{ElementId, Host};
use crate::events::{EventKind, Listeners, Target};
use crate::loader::{self, ContentSource, LoadError};
use crate::render::{RenderContext, SectionReport};

pub struct Page<H: Host + 'static> {
    host: H,
    listeners: Listeners<H>,
    ctx: RenderContext,
    nav: NavController,
    content_path: String,
    alert_message: String,
}

impl<H: Host + 'static> Page<H> {
    pub fn start(mut host: H, config: &SiteConfig) -> Self {
        let mut listeners = Listeners::new();

        let nav = NavController::discover(&host);
        nav.bind(&host, &mut listeners);

        let reveal = ScrollReveal::discover(&host, config.reveal.threshold);
        reveal.bind(&mut listeners);
        reveal.reveal(&mut host);

        Self {
            host,
            listeners,
            ctx: RenderContext::from_config(config),
            nav,
            content_path: config.content_path.clone(),
            alert_message: config.alert.message.clone(),
        }
    }

    /// Fetch the content document once and render it into the host.
    pub fn load(&mut self, source: &dyn ContentSource) -> Result<Vec<SectionReport>, LoadError> {
        loader::load(
            source,
            &self.content_path,
            &self.ctx,
            &mut self.host,
            &self.alert_message,
        )
    }

    /// Deliver a click to an element. Returns the number of listeners run.
    pub fn click(&mut self, id: &ElementId) -> usize {
        self.listeners.dispatch(
            &Target::Element(id.clone()),
            EventKind::Click,
            &mut self.host,
        )
    }

    /// Deliver a window scroll event.
    pub fn scroll(&mut self) -> usize {
        self.listeners
            .dispatch(&Target::Window, EventKind::Scroll, &mut self.host)
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open(&self.host)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

//! Page behaviours: the navigation toggle and scroll reveal.
//!
//! Neither controller keeps state of its own. Open/closed and revealed are
//! read from and written to the `active` class on the host's elements.

use crate::dom::{ElementId, Host, Selector};
use crate::events::{EventKind, Listeners, Target, bind};
use tracing::debug;

/// Class marking an open nav panel or a revealed section.
pub const ACTIVE: &str = "active";

/// Opens and closes the navbar panel together with its overlay.
#[derive(Debug, Clone, Default)]
pub struct NavController {
    navbar: Option<ElementId>,
    overlay: Option<ElementId>,
}

impl NavController {
    /// Find the navbar and overlay in the host. The first match of each is used.
    pub fn discover(host: &dyn Host) -> Self {
        Self {
            navbar: host.query_all(Selector::Navbar).into_iter().next(),
            overlay: host.query_all(Selector::Overlay).into_iter().next(),
        }
    }

    fn panels(&self) -> impl Iterator<Item = &ElementId> {
        self.navbar.iter().chain(self.overlay.iter())
    }

    /// Flip the active state of both panels.
    pub fn toggle(&self, host: &mut dyn Host) {
        for id in self.panels() {
            if let Some(classes) = host.class_list(id) {
                classes.toggle(ACTIVE);
            }
        }
    }

    /// Force both panels closed.
    pub fn close(&self, host: &mut dyn Host) {
        for id in self.panels() {
            if let Some(classes) = host.class_list(id) {
                classes.remove(ACTIVE);
            }
        }
    }

    /// Whether the navbar panel is currently open.
    pub fn is_open(&self, host: &dyn Host) -> bool {
        self.navbar
            .as_ref()
            .and_then(|id| host.classes(id))
            .is_some_and(|classes| classes.contains(ACTIVE))
    }

    /// Wire togglers to [`toggle`](Self::toggle), and nav links and the
    /// overlay to [`close`](Self::close).
    pub fn bind<H: Host + 'static>(&self, host: &H, listeners: &mut Listeners<H>) {
        let nav = self.clone();
        bind(
            listeners,
            host.query_all(Selector::NavToggler),
            EventKind::Click,
            move |h: &mut H| nav.toggle(h),
        );

        let nav = self.clone();
        bind(
            listeners,
            host.query_all(Selector::NavLink),
            EventKind::Click,
            move |h: &mut H| nav.close(h),
        );

        let nav = self.clone();
        bind(
            listeners,
            self.overlay.clone(),
            EventKind::Click,
            move |h: &mut H| nav.close(h),
        );
    }
}

/// One-way reveal of sections as they scroll into view.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    sections: Vec<ElementId>,
    threshold: f64,
}

impl ScrollReveal {
    pub fn new(sections: Vec<ElementId>, threshold: f64) -> Self {
        Self {
            sections,
            threshold,
        }
    }

    /// Track every section-flagged element in the host.
    pub fn discover(host: &dyn Host, threshold: f64) -> Self {
        Self::new(host.query_all(Selector::Section), threshold)
    }

    /// Activate every section whose top edge is above the threshold line.
    ///
    /// Never removes `active`. Returns the number of sections newly revealed.
    pub fn reveal(&self, host: &mut dyn Host) -> usize {
        let line = host.viewport_height() * self.threshold;
        let mut revealed = 0;
        for id in &self.sections {
            let crossed = host.top(id).is_some_and(|top| top < line);
            if !crossed {
                continue;
            }
            if let Some(classes) = host.class_list(id) {
                if !classes.contains(ACTIVE) {
                    classes.add(ACTIVE);
                    revealed += 1;
                    debug!(section = %id, "revealed");
                }
            }
        }
        revealed
    }

    /// Re-run [`reveal`](Self::reveal) on every window scroll.
    pub fn bind<H: Host + 'static>(&self, listeners: &mut Listeners<H>) {
        let reveal = self.clone();
        bind(listeners, Target::Window, EventKind::Scroll, move |h: &mut H| {
            reveal.reveal(h);
        });
    }
}

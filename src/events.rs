//! Event binding and dispatch.
//!
//! Listeners live in a [`Listeners`] registry kept apart from the host, so a
//! callback can take `&mut H` while the registry is being walked. Dispatch is
//! synchronous: every matching listener runs to completion, in registration
//! order, before `dispatch` returns.

use crate::dom::ElementId;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Scroll,
}

/// Something a listener can be attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Element(ElementId),
    Window,
}

/// One target or a collection of them.
#[derive(Debug, Clone, Default)]
pub struct Targets(Vec<Target>);

impl From<Target> for Targets {
    fn from(target: Target) -> Self {
        Self(vec![target])
    }
}

impl From<ElementId> for Targets {
    fn from(id: ElementId) -> Self {
        Self(vec![Target::Element(id)])
    }
}

impl From<Vec<ElementId>> for Targets {
    fn from(ids: Vec<ElementId>) -> Self {
        Self(ids.into_iter().map(Target::Element).collect())
    }
}

impl From<&[ElementId]> for Targets {
    fn from(ids: &[ElementId]) -> Self {
        Self(ids.iter().cloned().map(Target::Element).collect())
    }
}

impl From<Option<ElementId>> for Targets {
    fn from(id: Option<ElementId>) -> Self {
        Self(id.into_iter().map(Target::Element).collect())
    }
}

struct Listener<H> {
    target: Target,
    event: EventKind,
    callback: Rc<dyn Fn(&mut H)>,
}

/// Registry of event listeners for a host of type `H`.
pub struct Listeners<H> {
    entries: Vec<Listener<H>>,
}

impl<H> Default for Listeners<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> Listeners<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every listener for `(target, event)` against `host`.
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self, target: &Target, event: EventKind, host: &mut H) -> usize {
        let mut invoked = 0;
        for listener in &self.entries {
            if listener.event == event && &listener.target == target {
                (listener.callback)(host);
                invoked += 1;
            }
        }
        invoked
    }
}

/// Attach `callback` to every target in `targets`.
///
/// A single element and a collection are handled alike; the same callback is
/// shared by all of them.
pub fn bind<H, F>(listeners: &mut Listeners<H>, targets: impl Into<Targets>, event: EventKind, callback: F)
where
    F: Fn(&mut H) + 'static,
{
    let callback: Rc<dyn Fn(&mut H)> = Rc::new(callback);
    for target in targets.into().0 {
        listeners.entries.push(Listener {
            target,
            event,
            callback: Rc::clone(&callback),
        });
    }
}

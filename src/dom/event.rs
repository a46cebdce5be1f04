//! Event listeners and click propagation
//!
//! Listeners are plain registration records. The handler behind a
//! `HandlerId` is looked up by whoever dispatches the event, so the document
//! never stores closures.

use serde::Serialize;

use super::document::{Document, ElementId};

/// Kind of event a listener subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Click,
    Resize,
    KeyDown,
}

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ListenerTarget {
    /// A specific element (sees clicks on itself and its descendants)
    Element(ElementId),
    /// The document (sees every click that was not stopped on the way up)
    Document,
    /// The window (resize notifications)
    Window,
}

/// Identifies the owner of a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HandlerId(pub usize);

/// A single registered subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Listener {
    pub target: ListenerTarget,
    pub kind: EventKind,
    pub handler: HandlerId,
}

/// Keys the document forwards to key-down listeners
///
/// Focus movement and activation are handled by the document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Key {
    Escape,
}

/// A click travelling from its target up to the document
#[derive(Debug, Clone)]
pub struct ClickEvent {
    target: ElementId,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new(target: ElementId) -> Self {
        Self {
            target,
            propagation_stopped: false,
        }
    }

    /// The element the click landed on
    #[inline]
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// Stop the event from reaching ancestors and the document
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    #[inline]
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Bubbling path for a click: the target first, then each ancestor up to body
pub fn propagation_path(doc: &Document, target: ElementId) -> Vec<ElementId> {
    doc.ancestors(target).collect()
}

//! Host document - a small retained element tree
//!
//! This module stands in for the page that hosts the side panel. It provides
//! just enough of a DOM for the disclosure controller to be wired against:
//!
//! - `Document`: element arena rooted at `body`, id lookup, classes, attributes
//! - `event`: listener registry and click propagation paths
//! - `Rect`: layout boxes in logical pixels, used for hit-testing
//!
//! ## Integration
//!
//! - The controller registers listeners via `Document::add_event_listener`
//! - `update::disclosure` walks propagation paths and invokes handlers
//! - `model::layout` assigns layout boxes, `view` paints them

mod document;
pub mod event;

pub use document::{Document, Element, ElementId, ElementKind};
pub use event::{ClickEvent, EventKind, HandlerId, Key, Listener, ListenerTarget};

use serde::Serialize;

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Right edge (exclusive)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Scale every component, e.g. logical → physical pixels
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(29.9, 29.9));
        assert!(!rect.contains(30.0, 15.0));
        assert!(!rect.contains(15.0, 30.0));
        assert!(!rect.contains(9.9, 15.0));
    }

    #[test]
    fn test_rect_scaled() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0).scaled(2.0);
        assert_eq!(rect, Rect::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(rect.right(), 8.0);
        assert_eq!(rect.bottom(), 12.0);
    }
}

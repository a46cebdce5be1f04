//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::disclosure::DisclosureOptions;
use crate::dom::ElementId;

/// Pointer messages, in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Pointer moved (hover tracking)
    Moved { x: f64, y: f64 },
    /// Primary button pressed
    Pressed { x: f64, y: f64 },
    /// Primary button released; completes a click
    Released { x: f64, y: f64 },
    /// Pointer left the window
    Left,
}

/// Viewport messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportMsg {
    /// New inner size in logical pixels
    Resized { width: f64, height: f64 },
    /// Display scale changed (logical size unchanged)
    ScaleFactorChanged(f64),
}

/// Keyboard messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardMsg {
    /// Escape key
    Escape,
    /// Enter/Space on the focused element
    Activate,
    /// Tab
    FocusNext,
    /// Shift+Tab
    FocusPrevious,
}

/// Disclosure controller messages
#[derive(Debug, Clone)]
pub enum DisclosureMsg {
    /// Bind a controller using the given options
    Initialize(DisclosureOptions),
    /// Dispatch a click on an element, as if the user clicked it
    Click(ElementId),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Pointer(PointerMsg),
    Viewport(ViewportMsg),
    Keyboard(KeyboardMsg),
    Disclosure(DisclosureMsg),
}

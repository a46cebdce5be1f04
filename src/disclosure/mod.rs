//! Responsive side panel disclosure
//!
//! Manages the open/closed state of a side panel in response to:
//! - activation of a toggle control
//! - clicks outside the panel while open on narrow viewports
//! - resizes to a width above the breakpoint
//! - Escape (keyboard dismissal)
//!
//! ## Architecture
//!
//! - `state`: pure `transition(state, event, breakpoint) -> state`
//! - `options`: ids, breakpoint, open class
//! - `controller`: binds to a `Document`, registers listeners, mirrors state

mod controller;
mod options;
mod state;

pub use controller::{DisclosureController, BOUND_MARKER, FALLBACK_TOGGLE_LABEL, MENU_GLYPH};
pub use options::{
    DisclosureOptions, DEFAULT_BREAKPOINT_PX, DEFAULT_OPEN_CLASS, DEFAULT_PANEL_ID,
    DEFAULT_TOGGLE_ID,
};
pub use state::{is_narrow, transition, DisclosureEvent, PanelState};

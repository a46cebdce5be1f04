//! Pure open/closed state machine for the side panel
//!
//! The controller feeds every platform event through [`transition`]; nothing
//! in here touches the document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visibility of the panel. There is no transitioning state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, PanelState::Open)
    }

    /// The opposite state
    pub fn flipped(&self) -> Self {
        match self {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        }
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelState::Open => write!(f, "open"),
            PanelState::Closed => write!(f, "closed"),
        }
    }
}

/// Inputs the state machine understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisclosureEvent {
    /// The toggle control was clicked or activated from the keyboard
    ToggleActivated,
    /// A click reached the document
    PointerDown {
        viewport_width: f64,
        inside_panel: bool,
        on_toggle: bool,
    },
    /// The viewport changed size
    Resized { viewport_width: f64 },
    /// Keyboard dismissal (Escape)
    DismissRequested,
}

/// Narrow layout includes the breakpoint itself
#[inline]
pub fn is_narrow(viewport_width: f64, breakpoint_px: f64) -> bool {
    viewport_width <= breakpoint_px
}

/// Compute the next panel state
///
/// Only `ToggleActivated` can open the panel.
pub fn transition(state: PanelState, event: DisclosureEvent, breakpoint_px: f64) -> PanelState {
    match event {
        DisclosureEvent::ToggleActivated => state.flipped(),

        DisclosureEvent::PointerDown {
            viewport_width,
            inside_panel,
            on_toggle,
        } => {
            if state.is_open()
                && is_narrow(viewport_width, breakpoint_px)
                && !inside_panel
                && !on_toggle
            {
                PanelState::Closed
            } else {
                state
            }
        }

        DisclosureEvent::Resized { viewport_width } => {
            if is_narrow(viewport_width, breakpoint_px) {
                state
            } else {
                PanelState::Closed
            }
        }

        DisclosureEvent::DismissRequested => PanelState::Closed,
    }
}

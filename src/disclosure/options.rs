//! Controller configuration

use serde::{Deserialize, Serialize};

use super::state::is_narrow;

pub const DEFAULT_PANEL_ID: &str = "sidebar";
pub const DEFAULT_TOGGLE_ID: &str = "sidebar-toggle";
pub const DEFAULT_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_OPEN_CLASS: &str = "active";

/// Options for binding a disclosure controller to a host document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureOptions {
    /// Id of the panel element
    #[serde(default = "default_panel_id")]
    pub panel_id: String,

    /// Id of the toggle control (synthesized with this id when missing)
    #[serde(default = "default_toggle_id")]
    pub toggle_id: String,

    /// Widths at or below this many logical pixels use the narrow layout
    #[serde(default = "default_breakpoint_px")]
    pub breakpoint_px: f64,

    /// Class applied to the panel while open
    #[serde(default = "default_open_class")]
    pub open_class: String,

    /// Close the panel on Escape
    #[serde(default = "default_close_on_escape")]
    pub close_on_escape: bool,
}

fn default_panel_id() -> String {
    DEFAULT_PANEL_ID.to_string()
}

fn default_toggle_id() -> String {
    DEFAULT_TOGGLE_ID.to_string()
}

fn default_breakpoint_px() -> f64 {
    DEFAULT_BREAKPOINT_PX
}

fn default_open_class() -> String {
    DEFAULT_OPEN_CLASS.to_string()
}

fn default_close_on_escape() -> bool {
    true
}

impl Default for DisclosureOptions {
    fn default() -> Self {
        Self {
            panel_id: default_panel_id(),
            toggle_id: default_toggle_id(),
            breakpoint_px: default_breakpoint_px(),
            open_class: default_open_class(),
            close_on_escape: default_close_on_escape(),
        }
    }
}

impl DisclosureOptions {
    /// Replace unusable values with defaults, logging each replacement
    pub fn sanitized(mut self) -> Self {
        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            tracing::warn!(
                "Invalid breakpoint {}px, falling back to {}px",
                self.breakpoint_px,
                DEFAULT_BREAKPOINT_PX
            );
            self.breakpoint_px = DEFAULT_BREAKPOINT_PX;
        }
        if self.panel_id.trim().is_empty() {
            tracing::warn!("Empty panel id, falling back to '{}'", DEFAULT_PANEL_ID);
            self.panel_id = default_panel_id();
        }
        if self.toggle_id.trim().is_empty() {
            tracing::warn!("Empty toggle id, falling back to '{}'", DEFAULT_TOGGLE_ID);
            self.toggle_id = default_toggle_id();
        }
        if self.open_class.trim().is_empty() {
            tracing::warn!("Empty open class, falling back to '{}'", DEFAULT_OPEN_CLASS);
            self.open_class = default_open_class();
        }
        self
    }

    #[inline]
    pub fn is_narrow(&self, viewport_width: f64) -> bool {
        is_narrow(viewport_width, self.breakpoint_px)
    }
}

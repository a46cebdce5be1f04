//! Viewport update handlers

use crate::commands::Cmd;
use crate::messages::ViewportMsg;
use crate::model::AppModel;

use super::disclosure::dispatch_resize;

/// Update function for viewport messages
pub fn update_viewport(model: &mut AppModel, msg: ViewportMsg) -> Option<Cmd> {
    match msg {
        ViewportMsg::Resized { width, height } => {
            // Minimized windows report a zero size
            if !(width > 0.0 && height > 0.0) {
                tracing::trace!(width, height, "Ignoring degenerate resize");
                return None;
            }

            model.viewport.width = width;
            model.viewport.height = height;

            if dispatch_resize(model) {
                tracing::debug!(width, "Panel closed by resize");
            }
            model.relayout();
            Some(Cmd::Redraw)
        }

        ViewportMsg::ScaleFactorChanged(scale_factor) => {
            if !(scale_factor.is_finite() && scale_factor > 0.0) {
                return None;
            }
            model.viewport.scale_factor = scale_factor;
            Some(Cmd::Redraw)
        }
    }
}

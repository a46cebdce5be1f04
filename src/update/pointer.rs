//! Pointer update handlers
//!
//! A press records its target and moves focus; the release completes a click
//! on the nearest element containing both the press and release targets.

use crate::commands::Cmd;
use crate::dom::{Document, ElementId};
use crate::messages::PointerMsg;
use crate::model::AppModel;

use super::disclosure::dispatch_click;

/// Update function for pointer messages
pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Moved { x, y } => {
            let hit = model.document.element_from_point(x as f32, y as f32);
            let hovered = hit.and_then(|el| focusable_ancestor(&model.document, el));
            Cmd::redraw_if(model.ui.set_hovered(hovered))
        }

        PointerMsg::Pressed { x, y } => {
            let hit = model.document.element_from_point(x as f32, y as f32);
            model.ui.pressed = hit;

            // Pointer focus never shows the ring
            match hit.and_then(|el| focusable_ancestor(&model.document, el)) {
                Some(el) => model.ui.set_focus(el, false),
                None => model.ui.clear_focus(),
            }
            Some(Cmd::Redraw)
        }

        PointerMsg::Released { x, y } => {
            let pressed = model.ui.pressed.take();
            let released = model.document.element_from_point(x as f32, y as f32);

            let target = match (pressed, released) {
                (Some(a), Some(b)) => common_ancestor(&model.document, a, b),
                _ => None,
            };

            if let Some(target) = target {
                dispatch_click(model, target);
            }
            Some(Cmd::Redraw)
        }

        PointerMsg::Left => {
            let changed = model.ui.set_hovered(None);
            model.ui.pressed = None;
            Cmd::redraw_if(changed)
        }
    }
}

/// Nearest focusable element at or above `el`
fn focusable_ancestor(doc: &Document, el: ElementId) -> Option<ElementId> {
    doc.ancestors(el).find(|&a| doc.element(a).kind.is_focusable())
}

/// Nearest element containing both `a` and `b` (inclusive)
fn common_ancestor(doc: &Document, a: ElementId, b: ElementId) -> Option<ElementId> {
    doc.ancestors(a).find(|&ancestor| doc.contains(ancestor, b))
}

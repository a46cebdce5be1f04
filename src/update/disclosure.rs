//! Disclosure update handlers and DOM-style event dispatch
//!
//! Clicks bubble from the target up to body, invoking element listeners on
//! the way, then reach document listeners unless a handler stopped them.

use crate::commands::Cmd;
use crate::disclosure::DisclosureController;
use crate::dom::event::propagation_path;
use crate::dom::{ClickEvent, ElementId, EventKind, HandlerId, Key, ListenerTarget};
use crate::messages::DisclosureMsg;
use crate::model::AppModel;

/// Update function for disclosure messages
pub fn update_disclosure(model: &mut AppModel, msg: DisclosureMsg) -> Option<Cmd> {
    match msg {
        DisclosureMsg::Initialize(options) => Cmd::redraw_if(model.initialize_disclosure(options)),
        DisclosureMsg::Click(target) => Cmd::redraw_if(dispatch_click(model, target)),
    }
}

fn find(controllers: &mut [DisclosureController], handler: HandlerId) -> Option<&mut DisclosureController> {
    controllers.iter_mut().find(|c| c.handler() == handler)
}

/// Dispatch a click on `target`; returns whether any panel changed state
pub fn dispatch_click(model: &mut AppModel, target: ElementId) -> bool {
    if !model.document.is_attached(target) {
        tracing::debug!(?target, "Ignoring click on detached element");
        return false;
    }

    let viewport_width = model.viewport.width;
    let AppModel {
        document,
        controllers,
        ..
    } = model;

    let mut event = ClickEvent::new(target);
    let mut changed = false;

    for node in propagation_path(document, target) {
        for handler in document.handlers_for(ListenerTarget::Element(node), EventKind::Click) {
            if let Some(controller) = find(controllers, handler) {
                changed |= controller.handle_toggle_click(document, &mut event);
            }
        }
        // Listeners on the current node all run before propagation stops
        if event.is_propagation_stopped() {
            break;
        }
    }

    if !event.is_propagation_stopped() {
        for handler in document.handlers_for(ListenerTarget::Document, EventKind::Click) {
            if let Some(controller) = find(controllers, handler) {
                changed |= controller.handle_document_click(document, target, viewport_width);
            }
        }
    }

    if changed {
        model.relayout();
    }
    changed
}

/// Notify resize listeners of the current viewport width
///
/// The caller relayouts afterwards since the viewport changed anyway.
pub fn dispatch_resize(model: &mut AppModel) -> bool {
    let viewport_width = model.viewport.width;
    let AppModel {
        document,
        controllers,
        ..
    } = model;

    let mut changed = false;
    for handler in document.handlers_for(ListenerTarget::Window, EventKind::Resize) {
        if let Some(controller) = find(controllers, handler) {
            changed |= controller.handle_resize(document, viewport_width);
        }
    }
    changed
}

/// Dispatch a key to document key-down listeners
///
/// Returns the toggles of controllers whose panel changed state, so the
/// caller can move focus back to them.
pub fn dispatch_key_down(model: &mut AppModel, key: Key) -> Vec<ElementId> {
    let AppModel {
        document,
        controllers,
        ..
    } = model;

    let mut toggles = Vec::new();
    for handler in document.handlers_for(ListenerTarget::Document, EventKind::KeyDown) {
        if let Some(controller) = find(controllers, handler) {
            if controller.handle_key_down(document, key) {
                toggles.push(controller.toggle());
            }
        }
    }

    if !toggles.is_empty() {
        model.relayout();
    }
    toggles
}

//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod disclosure;
mod keyboard;
mod pointer;
mod viewport;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::PanelSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, trace, Level};

pub use disclosure::{dispatch_click, dispatch_key_down, dispatch_resize, update_disclosure};
pub use keyboard::update_keyboard;
pub use pointer::update_pointer;
pub use viewport::update_viewport;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Viewport(m) => viewport::update_viewport(model, m),
        Msg::Keyboard(m) => keyboard::update_keyboard(model, m),
        Msg::Disclosure(m) => disclosure::update_disclosure(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after panel state and logs diffs for debugging.
/// Pointer movement is logged at trace level only.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::PointerMsg;

    let is_noisy = matches!(&msg, Msg::Pointer(PointerMsg::Moved { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if is_noisy {
        trace!(target: "message", msg = %msg_name, "processing");
    } else {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before = PanelSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = PanelSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "panel", %diff, "state changed");
    }

    assert_invariants(model, &msg_name);

    result
}

/// Every controller's state must be mirrored on the document
#[cfg(debug_assertions)]
fn assert_invariants(model: &AppModel, context: &str) {
    for controller in &model.controllers {
        let open = controller.is_open();
        let doc = &model.document;
        debug_assert_eq!(
            doc.has_class(controller.panel(), &controller.options().open_class),
            open,
            "open class out of sync after {}",
            context
        );
        debug_assert_eq!(
            doc.attribute(controller.toggle(), "aria-expanded"),
            Some(if open { "true" } else { "false" }),
            "aria-expanded out of sync after {}",
            context
        );
    }
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Pointer::Pressed { x: 10.0, y: 20.0 }`
/// - `Keyboard::Escape`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Viewport(m) => format!("Viewport::{:?}", m),
        Msg::Keyboard(m) => format!("Keyboard::{:?}", m),
        Msg::Disclosure(m) => format!("Disclosure::{:?}", m),
    }
}

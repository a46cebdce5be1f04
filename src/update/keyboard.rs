//! Keyboard update handlers
//!
//! Tab cycles focus through rendered links and buttons. Enter and Space
//! activate the focused element as a click. Escape goes to the document
//! key-down listeners and returns focus to the toggle of a panel it closed.

use crate::commands::Cmd;
use crate::dom::Key;
use crate::messages::KeyboardMsg;
use crate::model::AppModel;

use super::disclosure::{dispatch_click, dispatch_key_down};

/// Update function for keyboard messages
pub fn update_keyboard(model: &mut AppModel, msg: KeyboardMsg) -> Option<Cmd> {
    match msg {
        KeyboardMsg::Escape => {
            let toggles = dispatch_key_down(model, Key::Escape);
            match toggles.first() {
                Some(&toggle) => {
                    model.ui.set_focus(toggle, true);
                    Some(Cmd::Redraw)
                }
                None => None,
            }
        }

        KeyboardMsg::Activate => {
            let focus = model.ui.focus?;
            // Focus survives activation, and keyboard activation keeps the ring
            model.ui.focus_visible = true;
            dispatch_click(model, focus);
            Some(Cmd::Redraw)
        }

        KeyboardMsg::FocusNext => move_focus(model, 1),
        KeyboardMsg::FocusPrevious => move_focus(model, -1),
    }
}

fn move_focus(model: &mut AppModel, step: isize) -> Option<Cmd> {
    let order = model.document.focusable_elements();

    if order.is_empty() {
        model.ui.clear_focus();
        return Some(Cmd::Redraw);
    }

    let len = order.len() as isize;
    let current = model
        .ui
        .focus
        .and_then(|focus| order.iter().position(|&el| el == focus));

    let next = match current {
        Some(index) => (index as isize + step).rem_euclid(len),
        None if step >= 0 => 0,
        None => len - 1,
    };

    model.ui.set_focus(order[next as usize], true);
    Some(Cmd::Redraw)
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use sidepanel::config::AppConfig;
use sidepanel::dom::ElementId;
use sidepanel::messages::{DisclosureMsg, KeyboardMsg, Msg, PointerMsg, ViewportMsg};
use sidepanel::update::update;
use sidepanel::{AppModel, Cmd};

pub const NARROW: u32 = 500;
pub const WIDE: u32 = 1024;

/// Config for a window of the given width
pub fn test_config(width: u32) -> AppConfig {
    let mut config = AppConfig::default();
    config.window.width = width;
    config.window.height = 600;
    config
}

/// Demo page with a bound controller
pub fn test_model(width: u32) -> AppModel {
    AppModel::new(test_config(width))
}

/// Demo page whose markup has no toggle
pub fn model_without_toggle(width: u32) -> AppModel {
    let mut config = test_config(width);
    config.page.provide_toggle = false;
    AppModel::new(config)
}

pub fn panel(model: &AppModel) -> ElementId {
    model.controllers[0].panel()
}

pub fn toggle(model: &AppModel) -> ElementId {
    model.controllers[0].toggle()
}

pub fn is_open(model: &AppModel) -> bool {
    model.controllers[0].is_open()
}

/// First nav link inside the panel
pub fn nav_link(model: &AppModel) -> ElementId {
    model.document.element(panel(model)).children[0]
}

/// A content block, outside both panel and toggle
pub fn content_block(model: &AppModel) -> ElementId {
    model
        .document
        .get_element_by_id("section-1")
        .expect("demo page has content blocks")
}

pub fn click(model: &mut AppModel, target: ElementId) -> Option<Cmd> {
    update(model, Msg::Disclosure(DisclosureMsg::Click(target)))
}

/// Press and release the primary button at a point
pub fn click_at(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(model, Msg::Pointer(PointerMsg::Pressed { x, y }));
    update(model, Msg::Pointer(PointerMsg::Released { x, y }))
}

/// Click the center of an element's layout box
pub fn click_center(model: &mut AppModel, el: ElementId) -> Option<Cmd> {
    let rect = model
        .document
        .layout(el)
        .expect("element should be laid out");
    click_at(
        model,
        (rect.x + rect.width / 2.0) as f64,
        (rect.y + rect.height / 2.0) as f64,
    )
}

pub fn resize(model: &mut AppModel, width: u32) -> Option<Cmd> {
    let height = model.viewport.height;
    update(
        model,
        Msg::Viewport(ViewportMsg::Resized {
            width: width as f64,
            height,
        }),
    )
}

pub fn key(model: &mut AppModel, msg: KeyboardMsg) -> Option<Cmd> {
    update(model, Msg::Keyboard(msg))
}

/// The open class and `aria-expanded` both agree with the controller
pub fn assert_mirrored(model: &AppModel) {
    let open = is_open(model);
    let controller = &model.controllers[0];
    assert_eq!(
        model
            .document
            .has_class(controller.panel(), &controller.options().open_class),
        open,
        "open class should mirror state"
    );
    assert_eq!(
        model.document.attribute(controller.toggle(), "aria-expanded"),
        Some(if open { "true" } else { "false" }),
        "aria-expanded should mirror state"
    );
}

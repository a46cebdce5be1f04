//! Hit-testing for cursor feedback
//!
//! Click routing goes through the document (`element_from_point` plus event
//! propagation in the update layer). This module only classifies what is
//! under the pointer so the runtime can pick a cursor icon.

use winit::window::CursorIcon;

use sidepanel::dom::{ElementId, ElementKind};
use sidepanel::model::AppModel;

/// A point in logical window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Logical targets under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// A panel's toggle control
    Toggle(ElementId),
    /// A link inside the panel
    NavLink(ElementId),
    /// Panel background
    Panel,
    /// Anything else that is rendered
    Page,
    /// Outside every layout box
    None,
}

impl HitTarget {
    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            HitTarget::Toggle(_) | HitTarget::NavLink(_) => CursorIcon::Pointer,
            HitTarget::Panel | HitTarget::Page | HitTarget::None => CursorIcon::Default,
        }
    }
}

/// Classify the topmost element at `pos`
pub fn hit_test(model: &AppModel, pos: Point) -> HitTarget {
    let doc = &model.document;
    let Some(el) = doc.element_from_point(pos.x as f32, pos.y as f32) else {
        return HitTarget::None;
    };

    for controller in &model.controllers {
        if doc.contains(controller.toggle(), el) {
            return HitTarget::Toggle(controller.toggle());
        }
        if doc.contains(controller.panel(), el) {
            let link = doc
                .ancestors(el)
                .take_while(|&a| a != controller.panel())
                .find(|&a| doc.element(a).kind == ElementKind::Link);
            return link.map_or(HitTarget::Panel, HitTarget::NavLink);
        }
    }

    HitTarget::Page
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidepanel::config::AppConfig;

    fn wide_model() -> AppModel {
        let mut config = AppConfig::default();
        config.window.width = 1024;
        config.window.height = 768;
        AppModel::new(config)
    }

    #[test]
    fn test_hit_toggle() {
        let model = wide_model();
        let toggle = model.controllers[0].toggle();
        let rect = model.document.layout(toggle).unwrap();

        let hit = hit_test(&model, Point::new(rect.x as f64 + 5.0, rect.y as f64 + 5.0));
        assert_eq!(hit, HitTarget::Toggle(toggle));
        assert_eq!(hit.cursor_icon(), CursorIcon::Pointer);
    }

    #[test]
    fn test_hit_nav_link_in_docked_panel() {
        let model = wide_model();
        let panel = model.controllers[0].panel();
        let link = model.document.element(panel).children[0];
        let rect = model.document.layout(link).unwrap();

        let hit = hit_test(&model, Point::new(rect.x as f64 + 1.0, rect.y as f64 + 1.0));
        assert_eq!(hit, HitTarget::NavLink(link));
    }

    #[test]
    fn test_hit_content() {
        let model = wide_model();
        let hit = hit_test(&model, Point::new(600.0, 700.0));
        assert_eq!(hit, HitTarget::Page);
        assert_eq!(hit.cursor_icon(), CursorIcon::Default);
    }
}

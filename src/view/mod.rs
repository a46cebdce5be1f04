//! Software rendering of the host page
//!
//! Paints the host document into a softbuffer surface. Every frame is a full
//! repaint in tree order, so later siblings cover earlier ones exactly as
//! `Document::element_from_point` assumes.

pub mod button;
pub mod frame;
pub mod hit_test;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use sidepanel::dom::{ElementId, ElementKind, Rect};
use sidepanel::model::{AppModel, PanelMode};

use button::{render_toggle, ButtonState};
use frame::Frame;

/// Width of the link label placeholder relative to the link
const LABEL_WIDTH_RATIO: f32 = 0.55;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;

        Ok(Self {
            surface,
            width,
            height,
        })
    }

    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        let scale = model.viewport.scale_factor;
        let width = ((model.viewport.width * scale).round() as u32).max(1);
        let height = ((model.viewport.height * scale).round() as u32).max(1);

        if self.width != width || self.height != height {
            self.width = width;
            self.height = height;
            self.surface
                .resize(non_zero(width), non_zero(height))
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
            paint_document(&mut frame, model);
        }

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;

        Ok(())
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Paint every rendered element in tree order
pub fn paint_document(frame: &mut Frame, model: &AppModel) {
    let theme = &model.theme;
    let doc = &model.document;
    let scale = model.viewport.scale_factor as f32;

    frame.clear(theme.background.to_argb_u32());

    for el in doc.tree_order() {
        if !doc.is_rendered(el) {
            continue;
        }
        let Some(layout) = doc.layout(el) else {
            continue;
        };
        let rect = layout.scaled(scale);

        match doc.element(el).kind {
            ElementKind::Body | ElementKind::Main => {}
            ElementKind::Div => frame.fill_rect(rect, theme.content_block.to_argb_u32()),
            ElementKind::Nav => paint_panel(frame, model, rect),
            ElementKind::Link => paint_link(frame, model, el, rect, scale),
            ElementKind::Button => {
                let expanded = doc.attribute(el, "aria-expanded") == Some("true");
                render_toggle(
                    frame,
                    theme,
                    rect,
                    button_state(model, el),
                    expanded,
                    model.ui.shows_focus_ring(el),
                    scale,
                );
            }
        }
    }
}

fn paint_panel(frame: &mut Frame, model: &AppModel, rect: Rect) {
    let theme = &model.theme;
    if model.panel_mode == PanelMode::Overlay {
        frame.dim(theme.scrim.to_argb_u32());
    }
    frame.fill_rect(rect, theme.panel_background.to_argb_u32());
    let border = Rect::new(rect.right() - 1.0, rect.y, 1.0, rect.height);
    frame.fill_rect(border, theme.panel_border.to_argb_u32());
}

fn paint_link(frame: &mut Frame, model: &AppModel, el: ElementId, rect: Rect, scale: f32) {
    let theme = &model.theme;
    let color = if model.ui.hovered == Some(el) {
        theme.nav_item_hover
    } else {
        theme.nav_item
    };
    frame.fill_rect(rect, color.to_argb_u32());

    // Label placeholder
    let inset = 8.0 * scale;
    let label = Rect::new(
        rect.x + inset,
        rect.y + rect.height * 0.4,
        (rect.width - inset * 2.0).max(0.0) * LABEL_WIDTH_RATIO,
        (rect.height * 0.2).max(1.0),
    );
    frame.fill_rect(label, theme.panel_border.to_argb_u32());

    if model.ui.shows_focus_ring(el) {
        frame.stroke_rect(rect, 2.0 * scale, theme.focus_ring.to_argb_u32());
    }
}

fn button_state(model: &AppModel, el: ElementId) -> ButtonState {
    if model.ui.pressed.is_some_and(|p| model.document.contains(el, p)) {
        ButtonState::Pressed
    } else if model.ui.hovered == Some(el) {
        ButtonState::Hovered
    } else {
        ButtonState::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidepanel::config::AppConfig;
    use sidepanel::messages::DisclosureMsg;
    use sidepanel::update::update;
    use sidepanel::Msg;

    fn narrow_model() -> AppModel {
        let mut config = AppConfig::default();
        config.window.width = 500;
        config.window.height = 400;
        AppModel::new(config)
    }

    fn paint(model: &AppModel) -> Vec<u32> {
        let (w, h) = (model.viewport.width as usize, model.viewport.height as usize);
        let mut buffer = vec![0u32; w * h];
        let mut frame = Frame::new(&mut buffer, w, h);
        paint_document(&mut frame, model);
        buffer
    }

    #[test]
    fn test_closed_narrow_panel_is_not_painted() {
        let model = narrow_model();
        let buffer = paint(&model);
        let panel_bg = model.theme.panel_background.to_argb_u32();
        // Left edge, below the toggle row
        assert_ne!(buffer[300 * 500 + 2], panel_bg);
    }

    #[test]
    fn test_open_overlay_is_painted() {
        let mut model = narrow_model();
        let toggle = model.controllers[0].toggle();
        update(&mut model, Msg::Disclosure(DisclosureMsg::Click(toggle)));

        let buffer = paint(&model);
        assert_eq!(buffer[300 * 500 + 2], model.theme.panel_background.to_argb_u32());
    }
}

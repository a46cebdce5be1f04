//! Page layout
//!
//! Pure geometry for the host page, in logical pixels. The panel is docked on
//! wide viewports regardless of its open class; on narrow viewports it is an
//! overlay that only gets a layout box while open.

use crate::disclosure::is_narrow;
use crate::dom::{Document, ElementId, Rect};

use super::Viewport;

// ============================================================================
// Layout Constants
// ============================================================================

pub const DOCKED_PANEL_WIDTH: f32 = 240.0;
pub const OVERLAY_PANEL_MAX_WIDTH: f32 = 280.0;
/// Overlay never covers more than this share of the viewport width
pub const OVERLAY_PANEL_FRACTION: f32 = 0.85;

pub const TOGGLE_SIZE: f32 = 40.0;
pub const TOGGLE_MARGIN: f32 = 8.0;

pub const PANEL_PADDING: f32 = 12.0;
pub const NAV_ITEM_HEIGHT: f32 = 32.0;
pub const NAV_ITEM_GAP: f32 = 4.0;

pub const CONTENT_PADDING: f32 = 24.0;
pub const BLOCK_HEIGHT: f32 = 96.0;
pub const BLOCK_GAP: f32 = 16.0;

/// How the panel is presented for a given width and state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// Wide viewport: part of the page layout, always visible
    Docked,
    /// Narrow viewport, open: drawn over the content
    Overlay,
    /// Narrow viewport, closed: not rendered
    Hidden,
}

impl PanelMode {
    pub fn resolve(viewport_width: f64, breakpoint_px: f64, open: bool) -> Self {
        if !is_narrow(viewport_width, breakpoint_px) {
            PanelMode::Docked
        } else if open {
            PanelMode::Overlay
        } else {
            PanelMode::Hidden
        }
    }
}

pub fn panel_rect(mode: PanelMode, viewport: &Viewport) -> Option<Rect> {
    let (width, height) = viewport.logical_size();
    match mode {
        PanelMode::Docked => Some(Rect::new(0.0, 0.0, DOCKED_PANEL_WIDTH.min(width), height)),
        PanelMode::Overlay => {
            let panel_width = OVERLAY_PANEL_MAX_WIDTH.min(width * OVERLAY_PANEL_FRACTION);
            Some(Rect::new(0.0, 0.0, panel_width, height))
        }
        PanelMode::Hidden => None,
    }
}

/// Content sits beside a docked panel and under an overlay one
pub fn content_rect(mode: PanelMode, viewport: &Viewport) -> Rect {
    let (width, height) = viewport.logical_size();
    match mode {
        PanelMode::Docked => {
            let x = DOCKED_PANEL_WIDTH.min(width);
            Rect::new(x, 0.0, width - x, height)
        }
        PanelMode::Overlay | PanelMode::Hidden => Rect::new(0.0, 0.0, width, height),
    }
}

/// Square toggle anchored to the top-right corner
pub fn toggle_rect(viewport: &Viewport) -> Rect {
    let (width, _) = viewport.logical_size();
    let x = (width - TOGGLE_SIZE - TOGGLE_MARGIN).max(0.0);
    Rect::new(x, TOGGLE_MARGIN, TOGGLE_SIZE, TOGGLE_SIZE)
}

/// The elements layout cares about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRegions {
    pub panel: Option<ElementId>,
    pub content: Option<ElementId>,
    pub toggle: Option<ElementId>,
}

/// Assign layout boxes to the body, panel, content, and toggle subtrees
pub fn apply_layout(
    doc: &mut Document,
    regions: PageRegions,
    viewport: &Viewport,
    breakpoint_px: f64,
    panel_open: bool,
) -> PanelMode {
    let (width, height) = viewport.logical_size();
    doc.set_layout(doc.body(), Some(Rect::new(0.0, 0.0, width, height)));

    let mode = PanelMode::resolve(viewport.width, breakpoint_px, panel_open);

    if let Some(content) = regions.content {
        let rect = content_rect(mode, viewport);
        doc.set_layout(content, Some(rect));
        stack_children(
            doc,
            content,
            rect,
            CONTENT_PADDING,
            TOGGLE_SIZE + TOGGLE_MARGIN * 2.0,
            BLOCK_HEIGHT,
            BLOCK_GAP,
        );
    }

    if let Some(panel) = regions.panel {
        let rect = panel_rect(mode, viewport);
        doc.set_layout(panel, rect);
        if let Some(rect) = rect {
            stack_children(
                doc,
                panel,
                rect,
                PANEL_PADDING,
                PANEL_PADDING,
                NAV_ITEM_HEIGHT,
                NAV_ITEM_GAP,
            );
        }
    }

    if let Some(toggle) = regions.toggle {
        doc.set_layout(toggle, Some(toggle_rect(viewport)));
    }

    mode
}

/// Stack children vertically inside `rect`
fn stack_children(
    doc: &mut Document,
    parent: ElementId,
    rect: Rect,
    padding_x: f32,
    padding_top: f32,
    item_height: f32,
    gap: f32,
) {
    let children = doc.element(parent).children.clone();
    let item_width = (rect.width - padding_x * 2.0).max(0.0);
    for (i, child) in children.into_iter().enumerate() {
        let y = rect.y + padding_top + i as f32 * (item_height + gap);
        doc.set_layout(
            child,
            Some(Rect::new(rect.x + padding_x, y, item_width, item_height)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_mode_resolve() {
        assert_eq!(PanelMode::resolve(1024.0, 768.0, false), PanelMode::Docked);
        assert_eq!(PanelMode::resolve(1024.0, 768.0, true), PanelMode::Docked);
        assert_eq!(PanelMode::resolve(768.0, 768.0, true), PanelMode::Overlay);
        assert_eq!(PanelMode::resolve(500.0, 768.0, false), PanelMode::Hidden);
    }

    #[test]
    fn test_overlay_width_is_capped() {
        let small = Viewport::new(300.0, 600.0);
        let rect = panel_rect(PanelMode::Overlay, &small).unwrap();
        assert_eq!(rect.width, 300.0 * OVERLAY_PANEL_FRACTION);

        let medium = Viewport::new(700.0, 600.0);
        let rect = panel_rect(PanelMode::Overlay, &medium).unwrap();
        assert_eq!(rect.width, OVERLAY_PANEL_MAX_WIDTH);
    }

    #[test]
    fn test_docked_content_is_beside_panel() {
        let viewport = Viewport::new(1024.0, 768.0);
        let panel = panel_rect(PanelMode::Docked, &viewport).unwrap();
        let content = content_rect(PanelMode::Docked, &viewport);
        assert_eq!(panel.right(), content.x);
        assert_eq!(content.right(), 1024.0);
    }

    #[test]
    fn test_toggle_rect_top_right() {
        let viewport = Viewport::new(500.0, 400.0);
        let rect = toggle_rect(&viewport);
        assert_eq!(rect.right(), 500.0 - TOGGLE_MARGIN);
        assert_eq!(rect.y, TOGGLE_MARGIN);
        assert_eq!(rect.width, TOGGLE_SIZE);
    }
}

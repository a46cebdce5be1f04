//! Toggle button rendering
//!
//! Pure-function API: callers determine visual state from the model and
//! pass it in. The glyph is drawn as three bars rather than text.

use sidepanel::dom::Rect;
use sidepanel::theme::Theme;

use super::frame::Frame;

/// Visual state of a button, determined by the caller from UI interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Default idle state
    #[default]
    Normal,
    /// Pointer is hovering over the button
    Hovered,
    /// Primary button is pressed on the button
    Pressed,
}

/// Bar thickness relative to the button height
const BAR_THICKNESS_RATIO: f32 = 0.075;
/// Bar width relative to the button width
const BAR_WIDTH_RATIO: f32 = 0.5;

/// Render the panel toggle
///
/// `rect` is in physical pixels. `expanded` mirrors `aria-expanded` and
/// switches the glyph color.
pub fn render_toggle(
    frame: &mut Frame,
    theme: &Theme,
    rect: Rect,
    state: ButtonState,
    expanded: bool,
    focused: bool,
    scale: f32,
) {
    let btn = &theme.toggle;

    let bg = match state {
        ButtonState::Normal => btn.background,
        ButtonState::Hovered => btn.background_hover,
        ButtonState::Pressed => btn.background_pressed,
    };
    frame.draw_bordered_rect(rect, bg.to_argb_u32(), btn.border.to_argb_u32());

    let glyph = if expanded { btn.glyph_expanded } else { btn.glyph };
    for bar in hamburger_bars(rect) {
        frame.fill_rect(bar, glyph.to_argb_u32());
    }

    if focused {
        let ring = Rect::new(
            rect.x + scale,
            rect.y + scale,
            rect.width - 2.0 * scale,
            rect.height - 2.0 * scale,
        );
        frame.stroke_rect(ring, 2.0 * scale, btn.focus_ring.to_argb_u32());
    }
}

/// Three horizontal bars centered in `rect`
pub fn hamburger_bars(rect: Rect) -> [Rect; 3] {
    let thickness = (rect.height * BAR_THICKNESS_RATIO).max(1.0).round();
    let width = (rect.width * BAR_WIDTH_RATIO).round();
    let x = rect.x + ((rect.width - width) / 2.0).round();
    let spacing = (thickness * 2.5).round();
    let mid = rect.y + ((rect.height - thickness) / 2.0).round();

    [
        Rect::new(x, mid - spacing, width, thickness),
        Rect::new(x, mid, width, thickness),
        Rect::new(x, mid + spacing, width, thickness),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_fit_inside_button() {
        let rect = Rect::new(100.0, 8.0, 40.0, 40.0);
        for bar in hamburger_bars(rect) {
            assert!(bar.x >= rect.x && bar.right() <= rect.right());
            assert!(bar.y >= rect.y && bar.bottom() <= rect.bottom());
        }
    }

    #[test]
    fn test_bars_are_evenly_spaced() {
        let [top, mid, bottom] = hamburger_bars(Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(mid.y - top.y, bottom.y - mid.y);
    }
}

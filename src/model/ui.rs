//! UI state - focus, hover, and pressed element tracking

use crate::dom::ElementId;

/// Interaction state that lives outside the document
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Element with keyboard focus
    pub focus: Option<ElementId>,
    /// Whether focus was reached from the keyboard (draws the focus ring)
    pub focus_visible: bool,
    /// Element under the pointer
    pub hovered: Option<ElementId>,
    /// Element the primary button went down on
    pub pressed: Option<ElementId>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move focus to an element
    pub fn set_focus(&mut self, el: ElementId, visible: bool) {
        self.focus = Some(el);
        self.focus_visible = visible;
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
        self.focus_visible = false;
    }

    #[inline]
    pub fn is_focused(&self, el: ElementId) -> bool {
        self.focus == Some(el)
    }

    /// Focus ring should be drawn on this element
    #[inline]
    pub fn shows_focus_ring(&self, el: ElementId) -> bool {
        self.focus_visible && self.is_focused(el)
    }

    /// Set hover target; returns whether it changed
    pub fn set_hovered(&mut self, el: Option<ElementId>) -> bool {
        let changed = self.hovered != el;
        self.hovered = el;
        changed
    }
}

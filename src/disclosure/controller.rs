//! Disclosure controller bound to one panel and one toggle
//!
//! The controller owns the panel's open/closed flag. Handlers translate
//! document events into [`DisclosureEvent`]s, run them through
//! [`transition`], and mirror the result onto the document:
//!
//! - the open class on the panel
//! - `aria-expanded` on the toggle

use serde::Serialize;

use crate::dom::{
    ClickEvent, Document, ElementId, ElementKind, EventKind, HandlerId, Key, ListenerTarget,
};

use super::options::DisclosureOptions;
use super::state::{transition, DisclosureEvent, PanelState};

/// Attribute marking a panel as already controlled
pub const BOUND_MARKER: &str = "data-disclosure-bound";

/// Glyph shown on a synthesized toggle
pub const MENU_GLYPH: &str = "☰";

/// Accessible name of a synthesized toggle
pub const FALLBACK_TOGGLE_LABEL: &str = "Toggle navigation";

#[derive(Debug, Clone, Serialize)]
pub struct DisclosureController {
    handler: HandlerId,
    panel: ElementId,
    toggle: ElementId,
    /// False when the toggle was synthesized because the page had none
    toggle_provided: bool,
    options: DisclosureOptions,
    state: PanelState,
}

impl DisclosureController {
    /// Look up the panel and toggle by id and bind to them
    ///
    /// Returns `None` (after logging) when the panel does not exist, is
    /// already controlled, or its toggle already drives another panel. A
    /// missing toggle is synthesized.
    pub fn initialize(
        doc: &mut Document,
        options: DisclosureOptions,
        handler: HandlerId,
    ) -> Option<Self> {
        let options = options.sanitized();

        let Some(panel) = doc.get_element_by_id(&options.panel_id) else {
            tracing::error!(
                panel_id = %options.panel_id,
                "Panel element not found; side panel toggle is disabled"
            );
            return None;
        };
        let duplicates = doc.count_by_id(&options.panel_id);
        if duplicates > 1 {
            tracing::warn!(
                panel_id = %options.panel_id,
                duplicates,
                "Several elements share the panel id; binding the first"
            );
        }

        let toggle = doc.get_element_by_id(&options.toggle_id);
        Self::bind(doc, panel, toggle, options, handler)
    }

    /// Bind to explicit element handles
    pub fn bind(
        doc: &mut Document,
        panel: ElementId,
        toggle: Option<ElementId>,
        options: DisclosureOptions,
        handler: HandlerId,
    ) -> Option<Self> {
        if !doc.is_attached(panel) {
            tracing::error!(?panel, "Panel element is not attached; side panel toggle is disabled");
            return None;
        }

        if let Some(owner) = doc.attribute(panel, BOUND_MARKER) {
            tracing::debug!(
                ?panel,
                owner,
                "Panel already has a disclosure controller, ignoring initialization"
            );
            return None;
        }

        let toggle = toggle.filter(|&t| doc.is_attached(t));
        if let Some(toggle) = toggle {
            let owners = doc.handlers_for(ListenerTarget::Element(toggle), EventKind::Click);
            if !owners.is_empty() {
                tracing::error!(
                    toggle_id = %options.toggle_id,
                    panel_id = %options.panel_id,
                    "Toggle already controls another panel; side panel toggle is disabled"
                );
                return None;
            }
        }

        let (toggle, toggle_provided) = match toggle {
            Some(toggle) => (toggle, true),
            None => (synthesize_toggle(doc, &options), false),
        };

        doc.set_attribute(panel, BOUND_MARKER, &handler.0.to_string());
        if let Some(panel_id) = doc.element(panel).id.clone() {
            doc.set_attribute(toggle, "aria-controls", &panel_id);
        }

        doc.add_event_listener(ListenerTarget::Element(toggle), EventKind::Click, handler);
        doc.add_event_listener(ListenerTarget::Document, EventKind::Click, handler);
        doc.add_event_listener(ListenerTarget::Window, EventKind::Resize, handler);
        if options.close_on_escape {
            doc.add_event_listener(ListenerTarget::Document, EventKind::KeyDown, handler);
        }

        let controller = Self {
            handler,
            panel,
            toggle,
            toggle_provided,
            options,
            state: PanelState::Closed,
        };
        controller.sync(doc);

        tracing::info!(
            panel_id = %controller.options.panel_id,
            toggle_provided,
            breakpoint_px = controller.options.breakpoint_px,
            "Disclosure controller initialized"
        );

        Some(controller)
    }

    // ------------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------------

    /// Click listener on the toggle. Stops propagation so the document-level
    /// listener never sees the same activation.
    pub fn handle_toggle_click(&mut self, doc: &mut Document, event: &mut ClickEvent) -> bool {
        event.stop_propagation();
        self.apply(doc, DisclosureEvent::ToggleActivated)
    }

    /// Click listener on the document (outside dismissal)
    pub fn handle_document_click(
        &mut self,
        doc: &mut Document,
        target: ElementId,
        viewport_width: f64,
    ) -> bool {
        let event = DisclosureEvent::PointerDown {
            viewport_width,
            inside_panel: doc.contains(self.panel, target),
            on_toggle: doc.contains(self.toggle, target),
        };
        self.apply(doc, event)
    }

    /// Resize listener on the window
    pub fn handle_resize(&mut self, doc: &mut Document, viewport_width: f64) -> bool {
        self.apply(doc, DisclosureEvent::Resized { viewport_width })
    }

    /// Key-down listener on the document
    pub fn handle_key_down(&mut self, doc: &mut Document, key: Key) -> bool {
        match key {
            Key::Escape if self.options.close_on_escape => {
                self.apply(doc, DisclosureEvent::DismissRequested)
            }
            _ => false,
        }
    }

    /// Run an event through the state machine; returns whether the state changed
    fn apply(&mut self, doc: &mut Document, event: DisclosureEvent) -> bool {
        let next = transition(self.state, event, self.options.breakpoint_px);
        if next == self.state {
            return false;
        }

        tracing::debug!(
            panel_id = %self.options.panel_id,
            ?event,
            "Panel {} → {}",
            self.state,
            next
        );
        self.state = next;
        self.sync(doc);
        true
    }

    /// Mirror the state onto the document
    fn sync(&self, doc: &mut Document) {
        let open = self.state.is_open();
        doc.toggle_class(self.panel, &self.options.open_class, Some(open));
        doc.set_attribute(self.toggle, "aria-expanded", if open { "true" } else { "false" });
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[inline]
    pub fn handler(&self) -> HandlerId {
        self.handler
    }

    #[inline]
    pub fn panel(&self) -> ElementId {
        self.panel
    }

    #[inline]
    pub fn toggle(&self) -> ElementId {
        self.toggle
    }

    #[inline]
    pub fn toggle_provided(&self) -> bool {
        self.toggle_provided
    }

    #[inline]
    pub fn options(&self) -> &DisclosureOptions {
        &self.options
    }

    #[inline]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }
}

/// Create the fallback toggle as the last child of body
fn synthesize_toggle(doc: &mut Document, options: &DisclosureOptions) -> ElementId {
    tracing::warn!(
        toggle_id = %options.toggle_id,
        "Toggle control not found in page; creating a default one"
    );

    let toggle = doc.create_element(ElementKind::Button);
    doc.set_element_id(toggle, &options.toggle_id);
    doc.set_text(toggle, MENU_GLYPH);
    doc.set_attribute(toggle, "type", "button");
    doc.set_attribute(toggle, "aria-label", FALLBACK_TOGGLE_LABEL);
    doc.append_child(doc.body(), toggle);
    toggle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(with_toggle: bool) -> (Document, ElementId, ElementId) {
        let mut doc = Document::new();
        let panel = doc.create_element(ElementKind::Nav);
        doc.set_element_id(panel, "sidebar");
        let link = doc.create_element(ElementKind::Link);
        doc.append_child(doc.body(), panel);
        doc.append_child(panel, link);
        if with_toggle {
            let toggle = doc.create_element(ElementKind::Button);
            doc.set_element_id(toggle, "sidebar-toggle");
            doc.append_child(doc.body(), toggle);
        }
        (doc, panel, link)
    }

    #[test]
    fn test_initialize_binds_existing_toggle() {
        let (mut doc, panel, _) = page(true);
        let controller =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(0))
                .unwrap();

        assert!(controller.toggle_provided());
        assert_eq!(controller.panel(), panel);
        assert_eq!(doc.get_element_by_id("sidebar-toggle"), Some(controller.toggle()));
        assert_eq!(doc.attribute(controller.toggle(), "aria-expanded"), Some("false"));
        assert_eq!(doc.attribute(controller.toggle(), "aria-controls"), Some("sidebar"));
        assert_eq!(doc.attribute(panel, BOUND_MARKER), Some("0"));
        assert_eq!(doc.listeners().len(), 4);
    }

    #[test]
    fn test_initialize_synthesizes_missing_toggle() {
        let (mut doc, _, _) = page(false);
        let controller =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(3))
                .unwrap();

        assert!(!controller.toggle_provided());
        let toggle = controller.toggle();
        let element = doc.element(toggle);
        assert_eq!(element.kind, ElementKind::Button);
        assert_eq!(element.parent, Some(doc.body()));
        assert_eq!(element.text.as_deref(), Some(MENU_GLYPH));
        assert_eq!(element.attribute("aria-label"), Some(FALLBACK_TOGGLE_LABEL));
        assert_eq!(doc.element(doc.body()).children.last(), Some(&toggle));
        assert_eq!(doc.count_by_id("sidebar-toggle"), 1);
    }

    #[test]
    fn test_initialize_without_panel_is_inert() {
        let mut doc = Document::new();
        let before = doc.len();
        let controller =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(0));

        assert!(controller.is_none());
        assert_eq!(doc.len(), before);
        assert!(doc.listeners().is_empty());
    }

    #[test]
    fn test_second_initialize_is_rejected() {
        let (mut doc, _, _) = page(true);
        let first =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(0));
        let listeners = doc.listeners().len();
        let second =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(1));

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(doc.listeners().len(), listeners);
    }

    #[test]
    fn test_duplicate_panel_id_binds_first() {
        let (mut doc, panel, _) = page(true);
        let copy = doc.create_element(ElementKind::Nav);
        doc.set_element_id(copy, "sidebar");
        doc.append_child(doc.body(), copy);
        assert_eq!(doc.count_by_id("sidebar"), 2);

        let controller =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(0))
                .unwrap();

        assert_eq!(controller.panel(), panel);
        assert_eq!(doc.attribute(copy, BOUND_MARKER), None);
    }

    #[test]
    fn test_toggle_of_another_panel_is_rejected() {
        let (mut doc, _, _) = page(true);
        let filters = doc.create_element(ElementKind::Nav);
        doc.set_element_id(filters, "filters");
        doc.append_child(doc.body(), filters);

        let first =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(0));
        let listeners = doc.listeners().len();
        let options = DisclosureOptions {
            panel_id: "filters".to_string(),
            ..Default::default()
        };
        let second = DisclosureController::initialize(&mut doc, options, HandlerId(1));

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(doc.listeners().len(), listeners);
        assert_eq!(doc.attribute(filters, BOUND_MARKER), None);
    }

    #[test]
    fn test_escape_listener_is_optional() {
        let (mut doc, _, _) = page(true);
        let options = DisclosureOptions {
            close_on_escape: false,
            ..Default::default()
        };
        let mut controller = DisclosureController::initialize(&mut doc, options, HandlerId(0)).unwrap();

        assert!(doc
            .handlers_for(ListenerTarget::Document, EventKind::KeyDown)
            .is_empty());

        let mut click = ClickEvent::new(controller.toggle());
        controller.handle_toggle_click(&mut doc, &mut click);
        assert!(!controller.handle_key_down(&mut doc, Key::Escape));
        assert!(controller.is_open());
    }

    #[test]
    fn test_toggle_click_stops_propagation_and_syncs() {
        let (mut doc, panel, _) = page(true);
        let mut controller =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(0))
                .unwrap();

        let mut click = ClickEvent::new(controller.toggle());
        assert!(controller.handle_toggle_click(&mut doc, &mut click));
        assert!(click.is_propagation_stopped());
        assert!(doc.has_class(panel, "active"));
        assert_eq!(doc.attribute(controller.toggle(), "aria-expanded"), Some("true"));
    }

    #[test]
    fn test_document_click_inside_panel_keeps_open() {
        let (mut doc, panel, link) = page(true);
        let mut controller =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(0))
                .unwrap();
        let mut click = ClickEvent::new(controller.toggle());
        controller.handle_toggle_click(&mut doc, &mut click);

        assert!(!controller.handle_document_click(&mut doc, link, 500.0));
        assert!(!controller.handle_document_click(&mut doc, panel, 500.0));
        assert!(controller.is_open());

        let body = doc.body();
        assert!(controller.handle_document_click(&mut doc, body, 500.0));
        assert!(!controller.is_open());
        assert!(!doc.has_class(panel, "active"));
    }

    #[test]
    fn test_initialize_clears_stale_open_class() {
        let (mut doc, panel, _) = page(true);
        doc.add_class(panel, "active");
        let controller =
            DisclosureController::initialize(&mut doc, DisclosureOptions::default(), HandlerId(0))
                .unwrap();
        assert_eq!(controller.state(), PanelState::Closed);
        assert!(!doc.has_class(panel, "active"));
    }
}

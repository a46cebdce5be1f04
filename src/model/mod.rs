//! Application model - the complete state of the demo page
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod layout;
pub mod page;
pub mod ui;

pub use layout::{PageRegions, PanelMode};
pub use page::build_host_page;
pub use ui::UiState;

use crate::config::AppConfig;
use crate::disclosure::{DisclosureController, DisclosureOptions};
use crate::dom::{Document, HandlerId};
use crate::theme::Theme;

/// Window viewport in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Physical pixels per logical pixel
    pub scale_factor: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scale_factor: 1.0,
        }
    }

    /// Logical size as layout floats
    #[inline]
    pub fn logical_size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Host page the controllers are bound to
    pub document: Document,
    /// Current viewport
    pub viewport: Viewport,
    /// Bound disclosure controllers, in initialization order
    pub controllers: Vec<DisclosureController>,
    /// Focus/hover state
    pub ui: UiState,
    /// Colors for rendering
    pub theme: Theme,
    /// Configuration the model was built from
    pub config: AppConfig,
    /// Last computed panel presentation
    pub panel_mode: PanelMode,
    next_handler: usize,
}

impl AppModel {
    /// Build the demo page from config and bind the controller to it
    pub fn new(config: AppConfig) -> Self {
        let document = build_host_page(&config.page, &config.disclosure);
        let viewport = Viewport::new(config.window.width as f64, config.window.height as f64);
        let options = config.disclosure.clone();

        let mut model = Self::with_document(document, viewport, config);
        model.initialize_disclosure(options);
        model
    }

    /// Wrap an existing document without binding any controller
    pub fn with_document(document: Document, viewport: Viewport, config: AppConfig) -> Self {
        let mut model = Self {
            document,
            viewport,
            controllers: Vec::new(),
            ui: UiState::new(),
            theme: Theme::by_name_or_default(&config.theme),
            config,
            panel_mode: PanelMode::Hidden,
            next_handler: 0,
        };
        model.relayout();
        model
    }

    /// Bind a controller; returns whether one was bound
    ///
    /// Failure is already logged by the controller and leaves the model untouched.
    pub fn initialize_disclosure(&mut self, options: DisclosureOptions) -> bool {
        let handler = HandlerId(self.next_handler);
        self.next_handler += 1;

        match DisclosureController::initialize(&mut self.document, options, handler) {
            Some(controller) => {
                self.controllers.push(controller);
                self.relayout();
                true
            }
            None => false,
        }
    }

    /// The controller driving the page layout (the first one bound)
    pub fn primary_controller(&self) -> Option<&DisclosureController> {
        self.controllers.first()
    }

    /// Options of the primary controller, or the configured ones when none is bound
    pub fn disclosure_options(&self) -> &DisclosureOptions {
        self.primary_controller()
            .map(|c| c.options())
            .unwrap_or(&self.config.disclosure)
    }

    pub fn is_narrow(&self) -> bool {
        self.disclosure_options().is_narrow(self.viewport.width)
    }

    /// Elements the layout positions
    pub fn page_regions(&self) -> PageRegions {
        let options = self.disclosure_options();
        let (panel, toggle) = match self.primary_controller() {
            Some(c) => (Some(c.panel()), Some(c.toggle())),
            None => (
                self.document.get_element_by_id(&options.panel_id),
                self.document.get_element_by_id(&options.toggle_id),
            ),
        };
        PageRegions {
            panel,
            content: self.document.get_element_by_id(page::CONTENT_ID),
            toggle,
        }
    }

    /// Recompute layout boxes after a state or viewport change
    pub fn relayout(&mut self) {
        let regions = self.page_regions();
        let options = self.disclosure_options();
        let breakpoint_px = options.breakpoint_px;
        let panel_open = match self.primary_controller() {
            Some(c) => c.is_open(),
            None => regions
                .panel
                .is_some_and(|p| self.document.has_class(p, &options.open_class)),
        };

        self.panel_mode = layout::apply_layout(
            &mut self.document,
            regions,
            &self.viewport,
            breakpoint_px,
            panel_open,
        );

        // Drop interaction state pointing at elements that are no longer rendered
        if let Some(focus) = self.ui.focus {
            if !self.document.is_rendered(focus) {
                self.ui.clear_focus();
            }
        }
        if let Some(hovered) = self.ui.hovered {
            if !self.document.is_rendered(hovered) {
                self.ui.hovered = None;
            }
        }
    }
}

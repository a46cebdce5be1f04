//! Demo host page markup
//!
//! Builds `body > [main#content > div.block*, nav#<panel_id> > a.nav-link*,
//! button#<toggle_id>?]`. The panel follows the content so an overlay paints
//! over it. The toggle is omitted when the page config says so,
//! which leaves the controller to synthesize one.

use crate::config::PageConfig;
use crate::disclosure::{DisclosureOptions, MENU_GLYPH};
use crate::dom::{Document, ElementKind};

pub const CONTENT_ID: &str = "content";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const CONTENT_BLOCK_CLASS: &str = "block";

pub fn build_host_page(page: &PageConfig, options: &DisclosureOptions) -> Document {
    let mut doc = Document::new();
    let body = doc.body();

    let main = doc.create_element(ElementKind::Main);
    doc.set_element_id(main, CONTENT_ID);
    doc.append_child(body, main);

    for i in 0..page.content_blocks {
        let block = doc.create_element(ElementKind::Div);
        doc.add_class(block, CONTENT_BLOCK_CLASS);
        doc.set_element_id(block, &format!("section-{}", i + 1));
        doc.append_child(main, block);
    }

    let nav = doc.create_element(ElementKind::Nav);
    doc.set_element_id(nav, &options.panel_id);
    doc.set_attribute(nav, "aria-label", "Main navigation");
    doc.append_child(body, nav);

    for i in 0..page.nav_items {
        let link = doc.create_element(ElementKind::Link);
        doc.add_class(link, NAV_LINK_CLASS);
        doc.set_text(link, &format!("Section {}", i + 1));
        doc.set_attribute(link, "href", &format!("#section-{}", i + 1));
        doc.append_child(nav, link);
    }

    if page.provide_toggle {
        let toggle = doc.create_element(ElementKind::Button);
        doc.set_element_id(toggle, &options.toggle_id);
        doc.set_text(toggle, MENU_GLYPH);
        doc.set_attribute(toggle, "type", "button");
        doc.set_attribute(toggle, "aria-label", "Navigation");
        doc.append_child(body, toggle);
    }

    doc
}

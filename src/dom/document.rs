//! Element arena and tree operations

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::event::{EventKind, HandlerId, Listener, ListenerTarget};
use super::Rect;

/// Index of an element in its document's arena
///
/// Ids are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(pub usize);

/// The handful of element types a host page is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Body,
    Nav,
    Main,
    Div,
    Link,
    Button,
}

impl ElementKind {
    pub fn tag_name(&self) -> &'static str {
        match self {
            ElementKind::Body => "body",
            ElementKind::Nav => "nav",
            ElementKind::Main => "main",
            ElementKind::Div => "div",
            ElementKind::Link => "a",
            ElementKind::Button => "button",
        }
    }

    /// Whether elements of this kind take keyboard focus
    pub fn is_focusable(&self) -> bool {
        matches!(self, ElementKind::Link | ElementKind::Button)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Element {
    pub kind: ElementKind,
    /// The `id` attribute, kept apart from the others for lookup
    pub id: Option<String>,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub text: Option<String>,
    /// Layout box; `None` means the element is not rendered
    pub layout: Option<Rect>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            id: None,
            parent: None,
            children: Vec::new(),
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            text: None,
            layout: None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A host document rooted at `body`
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    body: ElementId,
    listeners: Vec<Listener>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only `body`
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new(ElementKind::Body)],
            body: ElementId(0),
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Number of elements ever created, attached or not
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// Create a detached element
    pub fn create_element(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(kind));
        id
    }

    /// Append `child` as the last child of `parent`, moving it if already attached
    ///
    /// Appending an element into its own subtree is ignored.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if child == self.body || self.contains(child, parent) {
            tracing::warn!(?parent, ?child, "Refusing to create a cycle in the element tree");
            return;
        }

        if let Some(old_parent) = self.element(child).parent {
            self.element_mut(old_parent).children.retain(|&c| c != child);
        }
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
    }

    /// Whether the element is reachable from `body`
    pub fn is_attached(&self, id: ElementId) -> bool {
        id.0 < self.elements.len() && self.ancestors(id).any(|a| a == self.body)
    }

    /// Inclusive ancestor chain, starting at `id`
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(Some(id), move |&current| self.element(current).parent)
    }

    /// Inclusive containment: an element contains itself
    pub fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    /// Attached elements in tree (pre-)order
    pub fn tree_order(&self) -> Vec<ElementId> {
        let mut order = Vec::with_capacity(self.elements.len());
        let mut stack = vec![self.body];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.element(id).children.iter().rev().copied());
        }
        order
    }

    /// First attached element with the given id, in tree order
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.tree_order()
            .into_iter()
            .find(|&el| self.element(el).id.as_deref() == Some(id))
    }

    /// Count of attached elements carrying the given id
    pub fn count_by_id(&self, id: &str) -> usize {
        self.tree_order()
            .into_iter()
            .filter(|&el| self.element(el).id.as_deref() == Some(id))
            .count()
    }

    pub fn set_element_id(&mut self, el: ElementId, id: &str) {
        self.element_mut(el).id = Some(id.to_string());
    }

    pub fn set_text(&mut self, el: ElementId, text: &str) {
        self.element_mut(el).text = Some(text.to_string());
    }

    // ------------------------------------------------------------------------
    // Classes and attributes
    // ------------------------------------------------------------------------

    pub fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.element(el).has_class(class)
    }

    pub fn add_class(&mut self, el: ElementId, class: &str) {
        self.element_mut(el).classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, el: ElementId, class: &str) {
        self.element_mut(el).classes.remove(class);
    }

    /// Toggle a class, or force it on/off. Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, el: ElementId, class: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or_else(|| !self.has_class(el, class));
        if present {
            self.add_class(el, class);
        } else {
            self.remove_class(el, class);
        }
        present
    }

    pub fn attribute(&self, el: ElementId, name: &str) -> Option<&str> {
        self.element(el).attribute(name)
    }

    pub fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        self.element_mut(el)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    // ------------------------------------------------------------------------
    // Layout and hit-testing
    // ------------------------------------------------------------------------

    pub fn layout(&self, el: ElementId) -> Option<Rect> {
        self.element(el).layout
    }

    pub fn set_layout(&mut self, el: ElementId, rect: Option<Rect>) {
        self.element_mut(el).layout = rect;
    }

    /// An element is rendered when it and every ancestor have a layout box
    pub fn is_rendered(&self, el: ElementId) -> bool {
        self.is_attached(el) && self.ancestors(el).all(|a| self.element(a).layout.is_some())
    }

    /// Topmost rendered element under the point (logical pixels)
    ///
    /// Later siblings paint over earlier ones and children over their parent.
    pub fn element_from_point(&self, x: f32, y: f32) -> Option<ElementId> {
        self.hit(self.body, x, y)
    }

    fn hit(&self, el: ElementId, x: f32, y: f32) -> Option<ElementId> {
        let element = self.element(el);
        let rect = element.layout?;
        element
            .children
            .iter()
            .rev()
            .find_map(|&child| self.hit(child, x, y))
            .or_else(|| rect.contains(x, y).then_some(el))
    }

    /// Rendered focusable elements in tree order (the Tab sequence)
    pub fn focusable_elements(&self) -> Vec<ElementId> {
        self.tree_order()
            .into_iter()
            .filter(|&el| self.element(el).kind.is_focusable() && self.is_rendered(el))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------------

    pub fn add_event_listener(&mut self, target: ListenerTarget, kind: EventKind, handler: HandlerId) {
        self.listeners.push(Listener {
            target,
            kind,
            handler,
        });
    }

    /// Handlers subscribed to `kind` on `target`, in registration order
    pub fn handlers_for(&self, target: ListenerTarget, kind: EventKind) -> Vec<HandlerId> {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.kind == kind)
            .map(|l| l.handler)
            .collect()
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }
}

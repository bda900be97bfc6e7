//! Node handles and tree operations.

use std::fmt;
use std::rc::Rc;

use super::document::Document;
use super::event::{Event, EventKind, Listener};

slotmap::new_key_type! {
    /// Key of a node inside its document. Keys of released nodes are never
    /// handed out again.
    pub struct NodeId;
}

pub(super) enum NodeKind {
    Element(ElementData),
    Text(String),
    Markup(String),
}

pub(super) struct ElementData {
    pub(super) tag: String,
    pub(super) svg: bool,
    pub(super) attributes: Vec<(String, String)>,
    pub(super) style: Vec<(String, String)>,
    pub(super) listeners: Vec<(EventKind, Listener)>,
}

pub(super) struct NodeData {
    pub(super) kind: NodeKind,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl NodeData {
    pub(super) fn element(tag: &str, svg: bool) -> Self {
        Self::leaf(NodeKind::Element(ElementData {
            tag: tag.to_string(),
            svg,
            attributes: Vec::new(),
            style: Vec::new(),
            listeners: Vec::new(),
        }))
    }

    pub(super) fn leaf(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Handle to one node of a [`Document`].
///
/// Equality is identity: two handles are equal when they point at the same
/// node of the same document.
#[derive(Clone)]
pub struct Node {
    doc: Document,
    id: NodeId,
}

impl Node {
    pub(super) fn new(doc: Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Element tag name, or `None` for text and markup nodes.
    pub fn tag(&self) -> Option<String> {
        self.with_element(|element| element.tag.clone())
    }

    pub fn is_element(&self) -> bool {
        self.tag().is_some()
    }

    pub fn is_svg(&self) -> bool {
        self.with_element(|element| element.svg).unwrap_or(false)
    }

    // -- attributes ---------------------------------------------------------

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.with_element(|element| {
            element
                .attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        })
        .flatten()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Sets an attribute, keeping its original position if it already exists.
    pub fn set_attribute(&self, name: &str, value: &str) {
        self.with_element_mut(|element| {
            match element.attributes.iter_mut().find(|(key, _)| key == name) {
                Some((_, existing)) => *existing = value.to_string(),
                None => element
                    .attributes
                    .push((name.to_string(), value.to_string())),
            }
        });
    }

    pub fn remove_attribute(&self, name: &str) {
        self.with_element_mut(|element| element.attributes.retain(|(key, _)| key != name));
    }

    /// Attribute names and values in insertion order.
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.with_element(|element| element.attributes.clone())
            .unwrap_or_default()
    }

    // -- classes ------------------------------------------------------------

    pub fn class_name(&self) -> String {
        self.attribute("class").unwrap_or_default()
    }

    pub fn set_class_name(&self, class_name: &str) {
        self.set_attribute("class", class_name);
    }

    pub fn classes(&self) -> Vec<String> {
        self.class_name()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name().split_whitespace().any(|c| c == class)
    }

    /// Appends `class` to the class list unless it is already present.
    /// Whitespace-separated input adds each class in turn.
    pub fn add_class(&self, class: &str) {
        for class in class.split_whitespace() {
            if self.has_class(class) {
                continue;
            }
            let current = self.class_name();
            if current.trim().is_empty() {
                self.set_class_name(class);
            } else {
                self.set_class_name(&format!("{} {}", current.trim_end(), class));
            }
        }
    }

    // -- inline style -------------------------------------------------------

    pub fn set_style(&self, property: &str, value: &str) {
        self.with_element_mut(|element| {
            match element.style.iter_mut().find(|(key, _)| key == property) {
                Some((_, existing)) => *existing = value.to_string(),
                None => element
                    .style
                    .push((property.to_string(), value.to_string())),
            }
        });
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.with_element(|element| {
            element
                .style
                .iter()
                .find(|(key, _)| key == property)
                .map(|(_, value)| value.clone())
        })
        .flatten()
    }

    // -- content ------------------------------------------------------------

    /// Replaces all children with a single text node.
    pub fn set_text(&self, text: &str) {
        self.clear_children();
        let node = self.doc.create_text(text);
        self.append_child(&node);
    }

    /// Replaces all children with a raw markup node.
    pub fn set_inner_html(&self, markup: &str) {
        self.clear_children();
        let node = self.doc.create_markup(markup);
        self.append_child(&node);
    }

    /// Concatenated text of this node and its descendants. Raw markup is
    /// included verbatim.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        let leaf = self
            .with_kind(|kind| match kind {
                NodeKind::Text(text) | NodeKind::Markup(text) => Some(text.clone()),
                NodeKind::Element(_) => None,
            })
            .flatten();
        match leaf {
            Some(text) => out.push_str(&text),
            None => {
                for child in self.children() {
                    child.collect_text(out);
                }
            }
        }
    }

    fn clear_children(&self) {
        for child in self.children() {
            child.remove();
        }
    }

    // -- tree ---------------------------------------------------------------

    /// Appends `child`, detaching it from any previous parent first.
    ///
    /// Appending a node to itself or to one of its descendants is ignored.
    pub fn append_child(&self, child: &Node) {
        if !self.doc.ptr_eq(&child.doc) {
            log::warn!("append_child: node belongs to another document");
            return;
        }
        if child.contains(self) {
            log::warn!("append_child: refusing to create a cycle");
            return;
        }
        child.remove();
        let mut inner = self.doc.borrow_mut();
        if !inner.nodes.contains_key(self.id) || !inner.nodes.contains_key(child.id) {
            log::warn!("append_child: node has been released");
            return;
        }
        inner.nodes[child.id].parent = Some(self.id);
        inner.nodes[self.id].children.push(child.id);
    }

    /// Detaches this node from its parent. No-op when already detached.
    pub fn remove(&self) {
        let mut inner = self.doc.borrow_mut();
        let Some(parent) = inner.nodes.get_mut(self.id).and_then(|node| node.parent.take()) else {
            return;
        };
        if let Some(parent) = inner.nodes.get_mut(parent) {
            parent.children.retain(|id| *id != self.id);
        }
    }

    pub fn parent(&self) -> Option<Node> {
        let parent = self.doc.borrow().nodes.get(self.id).and_then(|node| node.parent);
        parent.map(|id| Node::new(self.doc.clone(), id))
    }

    pub fn children(&self) -> Vec<Node> {
        let ids = self
            .doc
            .borrow()
            .nodes
            .get(self.id)
            .map(|node| node.children.clone())
            .unwrap_or_default();
        ids.into_iter()
            .map(|id| Node::new(self.doc.clone(), id))
            .collect()
    }

    /// Child elements only, skipping text and markup.
    pub fn element_children(&self) -> Vec<Node> {
        self.children()
            .into_iter()
            .filter(Node::is_element)
            .collect()
    }

    /// Whether `other` is this node or one of its descendants.
    pub fn contains(&self, other: &Node) -> bool {
        if !self.doc.ptr_eq(&other.doc) {
            return false;
        }
        let inner = self.doc.borrow();
        let mut current = Some(other.id);
        while let Some(id) = current {
            if id == self.id {
                return true;
            }
            current = inner.nodes.get(id).and_then(|node| node.parent);
        }
        false
    }

    /// Whether the node is attached beneath the document body.
    pub fn is_connected(&self) -> bool {
        self.doc.body().contains(self)
    }

    /// First descendant (depth-first, excluding this node) carrying `class`.
    pub fn query_class(&self, class: &str) -> Option<Node> {
        for child in self.children() {
            if child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = child.query_class(class) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant carrying `class`, in document order.
    pub fn query_class_all(&self, class: &str) -> Vec<Node> {
        let mut found = Vec::new();
        self.walk_descendants(&mut |node| {
            if node.has_class(class) {
                found.push(node.clone());
            }
        });
        found
    }

    /// Every descendant element with tag `tag`, in document order.
    pub fn query_tag_all(&self, tag: &str) -> Vec<Node> {
        let mut found = Vec::new();
        self.walk_descendants(&mut |node| {
            if node.tag().as_deref() == Some(tag) {
                found.push(node.clone());
            }
        });
        found
    }

    fn walk_descendants(&self, visit: &mut dyn FnMut(&Node)) {
        for child in self.children() {
            visit(&child);
            child.walk_descendants(visit);
        }
    }

    // -- events -------------------------------------------------------------

    pub fn add_event_listener(&self, kind: EventKind, handler: impl Fn(&mut Event) + 'static) {
        let listener: Listener = Rc::new(handler);
        self.with_element_mut(|element| element.listeners.push((kind, listener)));
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.with_element(|element| {
            element
                .listeners
                .iter()
                .filter(|(k, _)| *k == kind)
                .count()
        })
        .unwrap_or(0)
    }

    /// Dispatches a pointer event with this node as the target.
    ///
    /// The propagation path is fixed before any listener runs, so listeners
    /// that detach nodes do not change who else hears the event. Clicks on a
    /// disabled `<button>` are dropped without reaching any listener.
    pub fn dispatch(&self, kind: EventKind) {
        if kind == EventKind::Click && self.is_disabled_control() {
            log::trace!("click on disabled control {:?} ignored", self.id);
            return;
        }

        let mut path = vec![self.clone()];
        if kind.bubbles() {
            let mut current = self.parent();
            while let Some(node) = current {
                current = node.parent();
                path.push(node);
            }
        }

        let mut event = Event::new(kind, self.clone());
        for node in path {
            let listeners: Vec<Listener> = node
                .with_element(|element| {
                    element
                        .listeners
                        .iter()
                        .filter(|(k, _)| *k == kind)
                        .map(|(_, listener)| listener.clone())
                        .collect()
                })
                .unwrap_or_default();
            event.current_target = node;
            for listener in listeners {
                listener(&mut event);
            }
            if event.propagation_stopped {
                break;
            }
        }
    }

    /// Shorthand for `dispatch(EventKind::Click)`.
    pub fn click(&self) {
        self.dispatch(EventKind::Click);
    }

    fn is_disabled_control(&self) -> bool {
        self.tag().as_deref() == Some("button") && self.has_attribute("disabled")
    }

    // -- internals ----------------------------------------------------------

    pub(super) fn with_element<R>(&self, f: impl FnOnce(&ElementData) -> R) -> Option<R> {
        let inner = self.doc.borrow();
        match inner.nodes.get(self.id).map(|node| &node.kind) {
            Some(NodeKind::Element(element)) => Some(f(element)),
            _ => None,
        }
    }

    fn with_element_mut<R>(&self, f: impl FnOnce(&mut ElementData) -> R) -> Option<R> {
        let mut inner = self.doc.borrow_mut();
        match inner.nodes.get_mut(self.id).map(|node| &mut node.kind) {
            Some(NodeKind::Element(element)) => Some(f(element)),
            _ => {
                log::trace!("element operation on non-element node {:?}", self.id);
                None
            }
        }
    }

    /// `None` once the node has been released.
    pub(super) fn with_kind<R>(&self, f: impl FnOnce(&NodeKind) -> R) -> Option<R> {
        let inner = self.doc.borrow();
        inner.nodes.get(self.id).map(|node| f(&node.kind))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.doc.ptr_eq(&other.doc)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag() {
            Some(tag) => write!(f, "Node({:?}, <{}> {:?})", self.id, tag, self.class_name()),
            None => write!(f, "Node({:?}, #leaf)", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_append_reparents_child() {
        let doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_element("span");

        a.append_child(&child);
        b.append_child(&child);

        assert!(a.children().is_empty());
        assert_eq!(b.children(), vec![child.clone()]);
        assert_eq!(child.parent(), Some(b));
    }

    #[test]
    fn test_append_ignores_cycles() {
        let doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        outer.append_child(&inner);
        inner.append_child(&outer);
        assert!(outer.parent().is_none());
        outer.append_child(&outer);
        assert_eq!(outer.children().len(), 1);
    }

    #[test]
    fn test_remove_is_noop_when_detached() {
        let doc = Document::new();
        let node = doc.create_element("div");
        node.remove();
        doc.body().append_child(&node);
        assert!(node.is_connected());
        node.remove();
        node.remove();
        assert!(!node.is_connected());
    }

    #[test]
    fn test_add_class_skips_duplicates() {
        let doc = Document::new();
        let node = doc.create_element("div");
        node.add_class("cosmic-content");
        node.add_class("cosmic-content extra");
        assert_eq!(node.class_name(), "cosmic-content extra");
    }

    #[test]
    fn test_set_attribute_keeps_position() {
        let doc = Document::new();
        let node = doc.create_svg_element("path");
        node.set_attribute("fill", "red");
        node.set_attribute("stroke", "blue");
        node.set_attribute("fill", "green");
        assert_eq!(
            node.attributes(),
            vec![
                ("fill".to_string(), "green".to_string()),
                ("stroke".to_string(), "blue".to_string())
            ]
        );
    }

    #[test]
    fn test_click_bubbles_until_stopped() {
        let doc = Document::new();
        let outer = doc.create_element("div");
        let middle = doc.create_element("div");
        let button = doc.create_element("button");
        outer.append_child(&middle);
        middle.append_child(&button);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        outer.add_event_listener(EventKind::Click, move |_| s.borrow_mut().push("outer"));
        let s = seen.clone();
        middle.add_event_listener(EventKind::Click, move |event| {
            s.borrow_mut().push("middle");
            event.stop_propagation();
        });
        let s = seen.clone();
        button.add_event_listener(EventKind::Click, move |_| s.borrow_mut().push("button"));

        button.click();
        assert_eq!(*seen.borrow(), vec!["button", "middle"]);

        outer.click();
        assert_eq!(*seen.borrow(), vec!["button", "middle", "outer"]);
    }

    #[test]
    fn test_hover_events_do_not_bubble() {
        let doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("div");
        outer.append_child(&inner);

        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        outer.add_event_listener(EventKind::MouseEnter, move |_| *h.borrow_mut() += 1);

        inner.dispatch(EventKind::MouseEnter);
        assert_eq!(*hits.borrow(), 0);
        outer.dispatch(EventKind::MouseEnter);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn test_disabled_button_swallows_clicks() {
        let doc = Document::new();
        let wrapper = doc.create_element("div");
        let button = doc.create_element("button");
        button.set_attribute("disabled", "");
        wrapper.append_child(&button);

        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        wrapper.add_event_listener(EventKind::Click, move |_| *h.borrow_mut() += 1);

        button.click();
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_listener_may_detach_its_own_node() {
        let doc = Document::new();
        let node = doc.create_element("div");
        doc.body().append_child(&node);
        let target = node.clone();
        node.add_event_listener(EventKind::Click, move |_| target.remove());
        node.click();
        assert!(!node.is_connected());
    }

    #[test]
    fn test_set_text_replaces_children() {
        let doc = Document::new();
        let node = doc.create_element("h2");
        node.append_child(&doc.create_element("span"));
        node.set_text("Title");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.text_content(), "Title");
    }

    #[test]
    fn test_query_class_is_depth_first() {
        let doc = Document::new();
        let root = doc.create_element("div");
        let first = doc.create_element("div");
        let nested = doc.create_element("div");
        let second = doc.create_element("div");
        nested.add_class("target");
        second.add_class("target");
        first.append_child(&nested);
        root.append_child(&first);
        root.append_child(&second);

        assert_eq!(root.query_class("target"), Some(nested.clone()));
        assert_eq!(root.query_class_all("target"), vec![nested, second]);
        assert!(root.query_class("missing").is_none());
    }

    #[test]
    fn test_inner_html_and_element_children() {
        let doc = Document::new();
        let body = doc.create_element("div");
        body.append_child(&doc.create_element("header"));
        body.set_inner_html("<p>one</p><p>two</p>");
        assert_eq!(body.children().len(), 1);
        assert!(body.element_children().is_empty());
        assert_eq!(body.inner_html(), "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_remove_attribute_and_classes() {
        let doc = Document::new();
        let button = doc.create_element("button");
        button.set_class_name("cosmic-btn  danger");
        button.set_attribute("disabled", "");
        button.remove_attribute("disabled");
        assert!(!button.has_attribute("disabled"));
        assert_eq!(button.classes(), vec!["cosmic-btn", "danger"]);
    }
}

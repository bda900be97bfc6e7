//! Cosmic components: buttons, cards, modals, info popups and tags.
//!
//! Each component is a set of free functions around a `build` factory that
//! consumes a config record, assembles a subtree in the given [`Document`]
//! and returns its root. Only modals carry a lifecycle of their own.

pub mod button;
pub mod card;
pub mod info;
pub mod modal;
pub mod tag;
pub mod theme;

pub use button::ButtonConfig;
pub use card::CardConfig;
pub use info::InfoConfig;
pub use modal::{Modal, ModalConfig, ModalState};
pub use tag::TagConfig;
pub use theme::{ButtonVariant, Paint, TitleColor};

use std::fmt;
use std::rc::Rc;

use crate::dom::{Document, Node};

/// Caller-supplied handler invoked by a component.
pub type Callback = Rc<dyn Fn()>;

/// Text shown when coerced content turns out empty.
pub const EMPTY_CONTENT: &str = "No content provided";

/// Body of a component: raw markup or a node the caller already built.
#[derive(Debug, Clone)]
pub enum Content {
    /// Markup inserted verbatim.
    Markup(String),
    /// A pre-built node, moved under the component. A node from another
    /// document is copied in as markup instead.
    Node(Node),
}

impl Content {
    /// Uses the textual form of any displayable value as markup.
    pub fn coerce(value: impl fmt::Display) -> Self {
        let text = value.to_string();
        if text.is_empty() {
            Self::Markup(EMPTY_CONTENT.to_string())
        } else {
            Self::Markup(text)
        }
    }

    /// Appends the content to `parent`, after any existing children.
    pub fn mount(self, doc: &Document, parent: &Node) {
        match self {
            Self::Markup(markup) => parent.append_child(&doc.create_markup(&markup)),
            Self::Node(node) if node.document().ptr_eq(doc) => parent.append_child(&node),
            Self::Node(node) => {
                log::debug!("copying content {:?} from another document as markup", node);
                parent.append_child(&doc.create_markup(&node.outer_html()));
            }
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Markup(String::new())
    }
}

impl From<&str> for Content {
    fn from(markup: &str) -> Self {
        Self::Markup(markup.to_string())
    }
}

impl From<String> for Content {
    fn from(markup: String) -> Self {
        Self::Markup(markup)
    }
}

impl From<Node> for Content {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&Node> for Content {
    fn from(node: &Node) -> Self {
        Self::Node(node.clone())
    }
}

/// Creates `<tag class="...">`.
pub(crate) fn element(doc: &Document, tag: &str, class_name: &str) -> Node {
    let node = doc.create_element(tag);
    node.set_class_name(class_name);
    node
}

/// Creates `<tag class="base extra">`, adding `extra` only when given.
pub(crate) fn element_with_extra(
    doc: &Document,
    tag: &str,
    base: &str,
    extra: Option<&str>,
) -> Node {
    let node = element(doc, tag, base);
    if let Some(extra) = extra.filter(|c| !c.trim().is_empty()) {
        node.add_class(extra);
    }
    node
}

/// The bordered header shared by modals, info popups and tags.
pub(crate) fn bordered_header(doc: &Document, title: &str, title_class: &str) -> Node {
    let header = element(doc, "div", "cosmic-header-bordered");
    let heading = element(doc, "h2", title_class);
    heading.set_text(title);
    header.append_child(&heading);
    header
}

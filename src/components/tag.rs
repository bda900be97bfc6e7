//! Tag component: the modal shell without overlay, footer or lifecycle.

use super::{bordered_header, element, element_with_extra, Content};
use crate::dom::{Document, Node};
use crate::render::{build_shape_shell, GradientKind, ShellGeometry};

/// Options for a cosmic tag.
#[derive(Debug, Clone)]
pub struct TagConfig {
    pub title: Option<String>,
    pub content: Content,
    pub class_name: Option<String>,
    /// Mirrored orientation (default true)
    pub flipped: bool,
}

impl TagConfig {
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            title: None,
            content: Content::default(),
            class_name: None,
            flipped: true,
        }
    }
}

/// Builds `div.cosmic-tag-wrapper` and returns it detached.
///
/// The content is appended after the header, so a title and a pre-built
/// content node both survive.
pub fn build(doc: &Document, config: TagConfig) -> Node {
    let paint = doc.paint();
    let wrapper = element(doc, "div", "cosmic-tag-wrapper");
    if config.flipped {
        wrapper.add_class("flipped");
    }

    let gradient_id = doc.unique_id("tagGradient");
    let shell = build_shape_shell(
        doc,
        &gradient_id,
        &paint.accent_border,
        GradientKind::Tag,
        ShellGeometry::Modal,
    );

    let content = element_with_extra(doc, "div", "cosmic-content", config.class_name.as_deref());
    if let Some(title) = config.title.as_deref() {
        content.append_child(&bordered_header(doc, title, "cosmic-title-enhanced"));
    }
    config.content.mount(doc, &content);

    shell.attach_to(&wrapper);
    wrapper.append_child(&content);
    wrapper
}

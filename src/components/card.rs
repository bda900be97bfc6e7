//! Card component.

use super::theme::wire_hover;
use super::{element, element_with_extra, Content};
use crate::dom::{Document, Node};
use crate::render::{build_shape_shell, GradientKind, ShellGeometry};

/// Options for a cosmic card.
#[derive(Debug, Clone, Default)]
pub struct CardConfig {
    /// Optional heading; no heading element is rendered without it
    pub title: Option<String>,
    pub content: Content,
    /// Extra class appended to the card body
    pub class_name: Option<String>,
}

impl CardConfig {
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
}

/// Builds `div.cosmic-card-wrapper` with the card shell and a `div.cosmic-card`
/// holding the optional title and the content block.
///
/// Cards have no overlay and no dismissal of their own; the caller inserts
/// and removes the returned wrapper.
pub fn build(doc: &Document, config: CardConfig) -> Node {
    let paint = doc.paint();
    let wrapper = element(doc, "div", "cosmic-card-wrapper");

    let gradient_id = doc.unique_id("cardGradient");
    let shell = build_shape_shell(
        doc,
        &gradient_id,
        &paint.border_default,
        GradientKind::Card,
        ShellGeometry::Modal,
    );

    let card = element_with_extra(doc, "div", "cosmic-card", config.class_name.as_deref());

    if let Some(title) = config.title.as_deref() {
        let heading = element(doc, "h3", "cosmic-card-title");
        heading.set_text(title);
        card.append_child(&heading);
    }

    let content = element(doc, "div", "cosmic-card-content");
    config.content.mount(doc, &content);
    card.append_child(&content);

    wire_hover(&wrapper, &shell, &paint);

    shell.attach_to(&wrapper);
    wrapper.append_child(&card);
    wrapper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::EventKind;

    #[test]
    fn test_structure_with_title() {
        let doc = Document::new();
        let wrapper = build(
            &doc,
            CardConfig::new("<p>Hull integrity 98%</p>")
                .title("Status")
                .class_name("demo-card"),
        );

        let children = wrapper.children();
        assert_eq!(children.len(), 3);
        assert!(children[0].has_class("cosmic-bg"));
        assert!(children[1].has_class("cosmic-border"));
        assert_eq!(children[2].class_name(), "cosmic-card demo-card");

        let title = wrapper.query_class("cosmic-card-title").expect("title");
        assert_eq!(title.tag().as_deref(), Some("h3"));
        assert_eq!(title.text_content(), "Status");

        let content = wrapper.query_class("cosmic-card-content").expect("content");
        assert_eq!(content.inner_html(), "<p>Hull integrity 98%</p>");
    }

    #[test]
    fn test_title_is_optional() {
        let doc = Document::new();
        let wrapper = build(&doc, CardConfig::new("body"));
        assert!(wrapper.query_class("cosmic-card-title").is_none());
        let card = wrapper.query_class("cosmic-card").expect("card");
        assert_eq!(card.children().len(), 1);
    }

    #[test]
    fn test_node_content_is_moved_in() {
        let doc = Document::new();
        let list = doc.create_element("ul");
        let wrapper = build(&doc, CardConfig::new(&list));
        let content = wrapper.query_class("cosmic-card-content").expect("content");
        assert_eq!(list.parent(), Some(content));
    }

    #[test]
    fn test_hover_swaps_paint() {
        let doc = Document::new();
        let wrapper = build(&doc, CardConfig::new("x"));
        let border = wrapper
            .query_class("cosmic-border")
            .and_then(|svg| svg.query_tag_all("path").into_iter().next())
            .expect("border path");
        let background = wrapper
            .query_class("cosmic-bg")
            .and_then(|svg| svg.query_tag_all("path").into_iter().next())
            .expect("background path");

        for _ in 0..2 {
            wrapper.dispatch(EventKind::MouseEnter);
            assert_eq!(border.attribute("stroke").as_deref(), Some("#00d4ff"));
            assert_eq!(background.attribute("fill").as_deref(), Some("#2a2a4e"));
            wrapper.dispatch(EventKind::MouseLeave);
            assert_eq!(border.attribute("stroke").as_deref(), Some("#333333"));
            assert_eq!(background.attribute("fill").as_deref(), Some("#1a1a2e"));
        }
    }

    #[test]
    fn test_has_no_overlay() {
        let doc = Document::new();
        let wrapper = build(&doc, CardConfig::new("x"));
        assert!(!wrapper.has_class("cosmic-modal-overlay"));
        assert!(wrapper.query_class("cosmic-modal-overlay").is_none());
        assert!(wrapper.query_class("cosmic-info-overlay").is_none());
    }
}

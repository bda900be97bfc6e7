//! Serialization of subtrees to HTML markup and JSON snapshots.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde_json::{json, Map, Value};

use super::node::{Node, NodeKind};
use super::SVG_NAMESPACE;

impl Node {
    /// Serializes this node and its descendants as HTML.
    ///
    /// The outermost `<svg>` of an SVG subtree gets an `xmlns` attribute so
    /// the markup can be pasted into a page as-is.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_html(self, false, &mut out);
        out
    }

    /// Serializes the children of this node as HTML.
    pub fn inner_html(&self) -> String {
        let in_svg = self.is_svg();
        let mut out = String::new();
        for child in self.children() {
            write_html(&child, in_svg, &mut out);
        }
        out
    }

    /// Structured snapshot of the subtree, convenient for assertions and
    /// debugging output.
    pub fn to_json(&self) -> Value {
        enum Shape {
            Element {
                tag: String,
                attributes: Vec<(String, String)>,
                style: Vec<(String, String)>,
            },
            Text(String),
            Markup(String),
        }

        let Some(shape) = self.with_kind(|kind| match kind {
            NodeKind::Element(element) => Shape::Element {
                tag: element.tag.clone(),
                attributes: element.attributes.clone(),
                style: element.style.clone(),
            },
            NodeKind::Text(text) => Shape::Text(text.clone()),
            NodeKind::Markup(markup) => Shape::Markup(markup.clone()),
        }) else {
            return Value::Null;
        };

        match shape {
            Shape::Text(text) => json!({ "text": text }),
            Shape::Markup(markup) => json!({ "markup": markup }),
            Shape::Element {
                tag,
                attributes,
                style,
            } => {
                let attributes: Map<String, Value> = attributes
                    .into_iter()
                    .map(|(k, v)| (k, Value::String(v)))
                    .collect();
                let mut value = json!({
                    "tag": tag,
                    "attributes": attributes,
                    "children": self.children().iter().map(Node::to_json).collect::<Vec<_>>(),
                });
                if !style.is_empty() {
                    value["style"] = Value::String(style_attribute(&style));
                }
                value
            }
        }
    }
}

fn write_html(node: &Node, parent_is_svg: bool, out: &mut String) {
    enum Shape {
        Element {
            tag: String,
            svg: bool,
            attributes: Vec<(String, String)>,
            style: Vec<(String, String)>,
        },
        Text(String),
        Markup(String),
    }

    let Some(shape) = node.with_kind(|kind| match kind {
        NodeKind::Element(element) => Shape::Element {
            tag: element.tag.clone(),
            svg: element.svg,
            attributes: element.attributes.clone(),
            style: element.style.clone(),
        },
        NodeKind::Text(text) => Shape::Text(text.clone()),
        NodeKind::Markup(markup) => Shape::Markup(markup.clone()),
    }) else {
        return;
    };

    match shape {
        Shape::Text(text) => out.push_str(&encode_text(&text)),
        Shape::Markup(markup) => out.push_str(&markup),
        Shape::Element {
            tag,
            svg,
            attributes,
            style,
        } => {
            out.push('<');
            out.push_str(&tag);
            if svg && !parent_is_svg && tag == "svg" {
                out.push_str(&format!(" xmlns=\"{}\"", SVG_NAMESPACE));
            }
            for (name, value) in &attributes {
                out.push_str(&format!(
                    " {}=\"{}\"",
                    name,
                    encode_double_quoted_attribute(value)
                ));
            }
            if !style.is_empty() {
                out.push_str(&format!(
                    " style=\"{}\"",
                    encode_double_quoted_attribute(&style_attribute(&style))
                ));
            }
            out.push('>');
            for child in node.children() {
                write_html(&child, svg, out);
            }
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
    }
}

fn style_attribute(style: &[(String, String)]) -> String {
    style
        .iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use crate::dom::Document;

    #[test]
    fn test_outer_html_escapes_text_and_keeps_markup() {
        let doc = Document::new();
        let div = doc.create_element("div");
        div.set_attribute("class", "cosmic-card");
        div.set_attribute("title", "a \"quoted\" & <b");
        let h3 = doc.create_element("h3");
        h3.set_text("Fish & <Chips>");
        div.append_child(&h3);
        let body = doc.create_markup("<p>raw</p>");
        div.append_child(&body);

        assert_eq!(
            div.outer_html(),
            "<div class=\"cosmic-card\" title=\"a &quot;quoted&quot; &amp; &lt;b\">\
             <h3>Fish &amp; &lt;Chips&gt;</h3><p>raw</p></div>"
        );
    }

    #[test]
    fn test_outer_svg_gets_namespace_once() {
        let doc = Document::new();
        let svg = doc.create_svg_element("svg");
        let path = doc.create_svg_element("path");
        svg.append_child(&path);
        let html = svg.outer_html();
        assert_eq!(html.matches("xmlns=").count(), 1);
        assert!(html.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\">"));
    }

    #[test]
    fn test_style_is_serialized_after_attributes() {
        let doc = Document::new();
        let div = doc.create_element("div");
        div.set_attribute("class", "cosmic-modal-overlay");
        div.set_style("animation", "modalFadeIn 0.2s ease-out reverse");
        assert_eq!(
            div.outer_html(),
            "<div class=\"cosmic-modal-overlay\" style=\"animation: modalFadeIn 0.2s ease-out reverse\"></div>"
        );
    }

    #[test]
    fn test_to_json_snapshot() {
        let doc = Document::new();
        let div = doc.create_element("div");
        div.set_attribute("class", "cosmic-tag-wrapper");
        div.append_child(&doc.create_text("hi"));
        let value = div.to_json();
        assert_eq!(value["tag"], "div");
        assert_eq!(value["attributes"]["class"], "cosmic-tag-wrapper");
        assert_eq!(value["children"][0]["text"], "hi");
    }
}

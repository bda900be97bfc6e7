//! Info popup: a lighter overlay without footer, close control or Escape
//! handling. Clicking the overlay outside the wrapper removes it at once and
//! releases its nodes from the document.

use std::fmt;
use std::rc::Rc;

use super::theme::TitleColor;
use super::{bordered_header, element, element_with_extra, Callback, Content};
use crate::dom::{Document, EventKind, Node};
use crate::render::{build_shape_shell, GradientKind, ShellGeometry};

/// Options for an info popup.
#[derive(Clone, Default)]
pub struct InfoConfig {
    pub title: Option<String>,
    /// Colour class added to the title heading
    pub title_color: Option<TitleColor>,
    pub content: Content,
    pub class_name: Option<String>,
    /// Called before the overlay is removed
    pub on_close: Option<Callback>,
}

impl InfoConfig {
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

    pub fn title_color(mut self, color: TitleColor) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn on_close(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }
}

impl fmt::Debug for InfoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoConfig")
            .field("title", &self.title)
            .field("title_color", &self.title_color)
            .field("content", &self.content)
            .field("class_name", &self.class_name)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Builds `div.cosmic-info-overlay` around an info wrapper.
///
/// The overlay is returned detached; the caller appends it where it should
/// appear.
pub fn build(doc: &Document, config: InfoConfig) -> Node {
    let paint = doc.paint();
    let overlay = element(doc, "div", "cosmic-info-overlay");
    let wrapper = element(doc, "div", "cosmic-info-wrapper");

    let gradient_id = doc.unique_id("infoGradient");
    let shell = build_shape_shell(
        doc,
        &gradient_id,
        &paint.accent_border,
        GradientKind::Info,
        ShellGeometry::Modal,
    );

    let content = element_with_extra(doc, "div", "cosmic-content", config.class_name.as_deref());

    if let Some(title) = config.title.as_deref() {
        let title_class = match config.title_color {
            Some(color) => format!("cosmic-info-title cosmic-title-enhanced {}", color.class_name()),
            None => "cosmic-info-title cosmic-title-enhanced".to_string(),
        };
        content.append_child(&bordered_header(doc, title, &title_class));
    }

    let body = element(doc, "div", "cosmic-modal-body");
    config.content.mount(doc, &body);
    content.append_child(&body);

    wrapper.add_event_listener(EventKind::Click, |event| event.stop_propagation());

    let on_close = config.on_close;
    let target = overlay.clone();
    overlay.add_event_listener(EventKind::Click, move |_| {
        if let Some(on_close) = &on_close {
            on_close();
        }
        target.document().release_subtree(&target);
    });

    shell.attach_to(&wrapper);
    wrapper.append_child(&content);
    overlay.append_child(&wrapper);
    overlay
}

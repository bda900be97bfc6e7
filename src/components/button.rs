//! Button component.

use std::fmt;
use std::rc::Rc;

use super::theme::{wire_hover, ButtonVariant};
use super::{element, Callback};
use crate::dom::{Document, EventKind, Node};
use crate::render::{build_shape_shell, GradientKind, ShellGeometry};

/// Options for a cosmic button.
#[derive(Clone, Default)]
pub struct ButtonConfig {
    /// Label of the native control
    pub text: String,
    /// Style variant (default, primary, secondary, danger)
    pub variant: ButtonVariant,
    /// Click handler
    pub on_click: Option<Callback>,
    /// Renders the control disabled
    pub disabled: bool,
    /// Extra class appended to the control
    pub class_name: Option<String>,
    /// When used in a modal footer, clicking leaves the modal open
    pub keep_parent_open_on_click: bool,
}

impl ButtonConfig {
    /// Creates a default-variant button labelled `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn primary(text: impl Into<String>) -> Self {
        Self::new(text).variant(ButtonVariant::Primary)
    }

    pub fn secondary(text: impl Into<String>) -> Self {
        Self::new(text).variant(ButtonVariant::Secondary)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(text).variant(ButtonVariant::Danger)
    }

    /// Sets the variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the click handler.
    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Sets the click handler from an existing callback.
    pub fn on_click_callback(mut self, handler: Callback) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Sets whether the control is disabled.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Adds an extra class to the control.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Keeps an enclosing modal open after this button is clicked.
    pub fn keep_parent_open(mut self) -> Self {
        self.keep_parent_open_on_click = true;
        self
    }
}

impl fmt::Debug for ButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("text", &self.text)
            .field("variant", &self.variant)
            .field("on_click", &self.on_click.is_some())
            .field("disabled", &self.disabled)
            .field("class_name", &self.class_name)
            .field("keep_parent_open_on_click", &self.keep_parent_open_on_click)
            .finish()
    }
}

/// Builds `div.cosmic-btn-wrapper` holding the button shell and a native
/// `<button>`.
///
/// Returns the wrapper. The `<button>` is its last child and is the node
/// clicks should be dispatched on.
pub fn build(doc: &Document, config: ButtonConfig) -> Node {
    let paint = doc.paint();
    let wrapper = element(doc, "div", "cosmic-btn-wrapper");

    let gradient_id = doc.unique_id("buttonGradient");
    let shell = build_shape_shell(
        doc,
        &gradient_id,
        &paint.border_default,
        GradientKind::Button,
        ShellGeometry::Button,
    );

    let button = element(
        doc,
        "button",
        &format!("cosmic-btn {}", config.variant.class_name()),
    );
    if let Some(extra) = config.class_name.as_deref() {
        button.add_class(extra);
    }
    button.set_text(&config.text);
    if config.disabled {
        button.set_attribute("disabled", "");
    }

    if let Some(on_click) = config.on_click {
        button.add_event_listener(EventKind::Click, move |_| on_click());
    }

    wire_hover(&wrapper, &shell, &paint);

    shell.attach_to(&wrapper);
    wrapper.append_child(&button);
    wrapper
}

/// The native `<button>` inside a wrapper returned by [`build`].
pub fn control(wrapper: &Node) -> Option<Node> {
    wrapper.query_class("cosmic-btn")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn border_and_fill(wrapper: &Node) -> (Option<String>, Option<String>) {
        let border = wrapper
            .query_class("cosmic-btn-border")
            .and_then(|svg| svg.query_tag_all("path").into_iter().next());
        let background = wrapper
            .query_class("cosmic-btn-bg")
            .and_then(|svg| svg.query_tag_all("path").into_iter().next());
        (
            border.and_then(|p| p.attribute("stroke")),
            background.and_then(|p| p.attribute("fill")),
        )
    }

    #[test]
    fn test_structure() {
        let doc = Document::new();
        let wrapper = build(&doc, ButtonConfig::primary("Launch").class_name("wide"));

        let children = wrapper.children();
        assert_eq!(children.len(), 3);
        assert!(children[0].has_class("cosmic-btn-bg"));
        assert!(children[1].has_class("cosmic-btn-border"));
        assert_eq!(children[2].tag().as_deref(), Some("button"));
        assert_eq!(children[2].class_name(), "cosmic-btn primary wide");
        assert_eq!(children[2].text_content(), "Launch");
        assert!(!children[2].has_attribute("disabled"));
        assert!(wrapper.query_class("cosmic-modal-overlay").is_none());
    }

    #[test]
    fn test_unset_variant_is_default() {
        let doc = Document::new();
        let wrapper = build(&doc, ButtonConfig::new("OK"));
        let control = control(&wrapper).expect("button control");
        assert_eq!(control.class_name(), "cosmic-btn default");
    }

    #[test]
    fn test_click_invokes_handler() {
        let doc = Document::new();
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let wrapper = build(&doc, ButtonConfig::new("Go").on_click(move || c.set(c.get() + 1)));

        let control = control(&wrapper).expect("button control");
        control.click();
        control.click();
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_no_handler_means_no_binding() {
        let doc = Document::new();
        let wrapper = build(&doc, ButtonConfig::new("Idle"));
        let control = control(&wrapper).expect("button control");
        assert_eq!(control.listener_count(EventKind::Click), 0);
        control.click();
    }

    #[test]
    fn test_disabled_button_ignores_clicks() {
        let doc = Document::new();
        let clicks = Rc::new(Cell::new(0));
        let c = clicks.clone();
        let wrapper = build(
            &doc,
            ButtonConfig::danger("Nope")
                .disabled(true)
                .on_click(move || c.set(c.get() + 1)),
        );
        let control = control(&wrapper).expect("button control");
        assert!(control.has_attribute("disabled"));
        control.click();
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn test_hover_cycles_are_idempotent() {
        let doc = Document::new();
        let wrapper = build(&doc, ButtonConfig::new("Hover"));

        let (stroke, fill) = border_and_fill(&wrapper);
        assert_eq!(stroke.as_deref(), Some("#333333"));
        assert!(fill.unwrap_or_default().starts_with("url(#buttonGradient-"));

        for _ in 0..3 {
            wrapper.dispatch(EventKind::MouseEnter);
            assert_eq!(
                border_and_fill(&wrapper),
                (Some("#00d4ff".to_string()), Some("#2a2a4e".to_string()))
            );
            wrapper.dispatch(EventKind::MouseLeave);
            assert_eq!(
                border_and_fill(&wrapper),
                (Some("#333333".to_string()), Some("#1a1a2e".to_string()))
            );
        }
    }

    #[test]
    fn test_gradient_ids_are_scoped_per_instance() {
        let doc = Document::new();
        let a = build(&doc, ButtonConfig::new("A"));
        let b = build(&doc, ButtonConfig::new("B"));
        let id = |w: &Node| {
            w.query_tag_all("linearGradient")
                .first()
                .and_then(|g| g.attribute("id"))
        };
        assert_ne!(id(&a), id(&b));
    }
}

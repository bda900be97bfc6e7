//! Modal dialog component and its show/close lifecycle.
//!
//! A modal moves through four states:
//!
//! - `Constructed`: [`build`] assembled overlay, shell, header, body and
//!   footer, and subscribed to Escape.
//! - `Shown`: [`show`] appended the overlay to the document body.
//! - `Closing`: a dismissal started the fade-out and released the Escape
//!   subscription.
//! - `Removed`: the close delay elapsed and the overlay was detached and
//!   released from the document, listeners included.
//!
//! Dismissal paths are an overlay click outside the wrapper, the close
//! control, Escape while attached, and any footer button not marked to keep
//! the modal open. Clicks inside the wrapper never reach the overlay.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::button::{self, ButtonConfig};
use super::{bordered_header, element, element_with_extra, Callback, Content};
use crate::dom::{Document, EventKind, KeySubscription, Node};
use crate::render::{build_shape_shell, close_icon, GradientKind, ShellGeometry};

/// Options for a cosmic modal.
#[derive(Clone)]
pub struct ModalConfig {
    pub title: String,
    pub content: Content,
    /// Renders the header close control (default true)
    pub show_close_button: bool,
    /// Footer buttons; an empty list omits the footer
    pub buttons: Vec<ButtonConfig>,
    /// Called when the modal is dismissed by overlay click, close control or
    /// Escape
    pub on_close: Option<Callback>,
    /// Extra class appended to the content container
    pub class_name: Option<String>,
}

impl ModalConfig {
    pub fn new(title: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    /// Appends a footer button.
    pub fn button(mut self, button: ButtonConfig) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn buttons(mut self, buttons: Vec<ButtonConfig>) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn on_close(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub fn on_close_callback(mut self, handler: Option<Callback>) -> Self {
        self.on_close = handler;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: Content::default(),
            show_close_button: true,
            buttons: Vec::new(),
            on_close: None,
            class_name: None,
        }
    }
}

impl fmt::Debug for ModalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalConfig")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("show_close_button", &self.show_close_button)
            .field("buttons", &self.buttons)
            .field("on_close", &self.on_close.is_some())
            .field("class_name", &self.class_name)
            .finish()
    }
}

/// Lifecycle position of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Constructed,
    Shown,
    Closing,
    Removed,
}

struct ModalInner {
    overlay: Node,
    state: Cell<ModalState>,
    escape: RefCell<Option<KeySubscription>>,
    on_close: Option<Callback>,
    close_delay: Duration,
}

/// Handle to a built modal. Clones share the same lifecycle.
#[derive(Clone)]
pub struct Modal {
    inner: Rc<ModalInner>,
}

impl Modal {
    /// Root of the modal: the `div.cosmic-modal-overlay`.
    pub fn overlay(&self) -> &Node {
        &self.inner.overlay
    }

    /// The `div.cosmic-modal-wrapper` inside the overlay.
    pub fn wrapper(&self) -> Option<Node> {
        self.inner.overlay.query_class("cosmic-modal-wrapper")
    }

    pub fn document(&self) -> &Document {
        self.inner.overlay.document()
    }

    pub fn state(&self) -> ModalState {
        self.inner.state.get()
    }

    /// Whether the Escape listener is still registered.
    pub fn listens_for_escape(&self) -> bool {
        self.inner
            .escape
            .borrow()
            .as_ref()
            .map(KeySubscription::is_active)
            .unwrap_or(false)
    }

    /// Starts closing and then notifies `on_close`. Ignored once closing.
    fn dismiss(&self) {
        if matches!(self.state(), ModalState::Closing | ModalState::Removed) {
            return;
        }
        close(self);
        if let Some(on_close) = &self.inner.on_close {
            on_close();
        }
    }
}

impl fmt::Debug for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modal")
            .field("overlay", &self.inner.overlay)
            .field("state", &self.state())
            .field("listens_for_escape", &self.listens_for_escape())
            .finish()
    }
}

/// Builds the overlay, wrapper, shell and content of a modal.
///
/// The returned modal is not yet attached; pass it to [`show`].
pub fn build(doc: &Document, config: ModalConfig) -> Modal {
    let paint = doc.paint();
    let overlay = element(doc, "div", "cosmic-modal-overlay");

    let modal = Modal {
        inner: Rc::new(ModalInner {
            overlay: overlay.clone(),
            state: Cell::new(ModalState::Constructed),
            escape: RefCell::new(None),
            on_close: config.on_close.clone(),
            close_delay: paint.close_delay,
        }),
    };

    let wrapper = element(doc, "div", "cosmic-modal-wrapper");
    let gradient_id = doc.unique_id("modalGradient");
    let shell = build_shape_shell(
        doc,
        &gradient_id,
        &paint.accent_border,
        GradientKind::Modal,
        ShellGeometry::Modal,
    );

    let content = element_with_extra(doc, "div", "cosmic-content", config.class_name.as_deref());

    if config.show_close_button {
        let close_control = element(doc, "button", "cosmic-modal-close");
        close_control.set_attribute("aria-label", "Close");
        close_control.append_child(&close_icon(doc));
        let target = modal.clone();
        close_control.add_event_listener(EventKind::Click, move |_| target.dismiss());
        content.append_child(&close_control);
    }

    content.append_child(&bordered_header(doc, &config.title, "cosmic-title-enhanced"));

    let body = element(doc, "div", "cosmic-modal-body");
    config.content.mount(doc, &body);
    content.append_child(&body);

    if config.buttons.is_empty() {
        log::warn!(
            "No buttons provided for modal '{}'; the footer is omitted and the layout may break",
            config.title
        );
    } else {
        let footer = element(doc, "div", "cosmic-modal-footer");
        for button_config in config.buttons {
            footer.append_child(&button::build(doc, footer_button(&modal, button_config)));
        }
        content.append_child(&footer);
    }

    wrapper.add_event_listener(EventKind::Click, |event| event.stop_propagation());

    let target = modal.clone();
    overlay.add_event_listener(EventKind::Click, move |_| target.dismiss());

    let target = modal.clone();
    let subscription = doc.add_key_listener(move |event| {
        if event.key == "Escape" && target.overlay().is_connected() {
            target.dismiss();
        }
    });
    *modal.inner.escape.borrow_mut() = Some(subscription);

    shell.attach_to(&wrapper);
    wrapper.append_child(&content);
    overlay.append_child(&wrapper);

    log::debug!("built modal '{}' ({:?})", config.title, overlay.id());
    modal
}

/// Wraps a footer button's handler so that the modal closes afterwards,
/// unless the button asks to keep it open.
fn footer_button(modal: &Modal, config: ButtonConfig) -> ButtonConfig {
    let original = config.on_click.clone();
    let keep_open = config.keep_parent_open_on_click;
    let target = modal.clone();
    config.on_click(move || {
        if let Some(handler) = &original {
            handler();
        }
        if !keep_open {
            close(&target);
        }
    })
}

/// Appends the modal's overlay to the document body.
///
/// There is no state guard: showing an attached modal again just moves it to
/// the end of the body.
pub fn show(modal: &Modal) {
    modal.document().body().append_child(modal.overlay());
    modal.inner.state.set(ModalState::Shown);
    log::debug!("showing modal {:?}", modal.overlay().id());
}

/// Plays the fade-out, then detaches and releases the overlay once the close
/// delay elapses. Nodes passed in as content are released with it.
///
/// Releases the Escape subscription immediately. Does not call `on_close`.
/// Calling it on a modal that is already closing or removed does nothing.
pub fn close(modal: &Modal) {
    if matches!(modal.state(), ModalState::Closing | ModalState::Removed) {
        log::trace!("modal {:?} already closing", modal.overlay().id());
        return;
    }
    modal.inner.state.set(ModalState::Closing);

    let overlay = modal.overlay().clone();
    overlay.set_style("animation", &close_animation(modal.inner.close_delay));

    if let Some(subscription) = modal.inner.escape.borrow_mut().take() {
        subscription.release();
    }

    let target = modal.clone();
    modal
        .document()
        .set_timeout(modal.inner.close_delay, move || {
            let freed = overlay.document().release_subtree(&overlay);
            target.inner.state.set(ModalState::Removed);
            log::debug!("removed modal {:?}, {} nodes freed", overlay.id(), freed);
        });
}

fn close_animation(delay: Duration) -> String {
    format!("modalFadeIn {}s ease-out reverse", delay.as_secs_f64())
}

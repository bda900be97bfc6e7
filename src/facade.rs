//! One-call entry points over the component factories, plus the common
//! confirmation, notification and error dialogs.

use std::rc::Rc;

use crate::components::{
    button, card, info, modal, tag, ButtonConfig, Callback, CardConfig, InfoConfig, Modal,
    ModalConfig, TagConfig,
};
use crate::dom::{Document, Node};

pub fn create_button(doc: &Document, config: ButtonConfig) -> Node {
    button::build(doc, config)
}

pub fn create_card(doc: &Document, config: CardConfig) -> Node {
    card::build(doc, config)
}

/// Builds a modal without showing it.
pub fn create_modal(doc: &Document, config: ModalConfig) -> Modal {
    modal::build(doc, config)
}

pub fn create_info(doc: &Document, config: InfoConfig) -> Node {
    info::build(doc, config)
}

pub fn create_tag(doc: &Document, config: TagConfig) -> Node {
    tag::build(doc, config)
}

pub fn show_modal(dialog: &Modal) {
    modal::show(dialog)
}

/// Starts the animated close. `on_close` is not called.
pub fn close_modal(dialog: &Modal) {
    modal::close(dialog)
}

/// Shows a Cancel / Confirm dialog.
///
/// Exactly one of `on_confirm` and `on_cancel` runs per button click, and
/// either button closes the dialog.
pub fn show_confirmation(
    doc: &Document,
    title: &str,
    message: &str,
    on_confirm: impl Fn() + 'static,
    on_cancel: Option<Callback>,
) -> Modal {
    let cancel = ButtonConfig::secondary("Cancel")
        .on_click_callback(on_cancel.unwrap_or_else(|| Rc::new(|| {}) as Callback));
    let confirm = ButtonConfig::danger("Confirm").on_click(on_confirm);

    let dialog = modal::build(
        doc,
        ModalConfig::new(title, message).buttons(vec![cancel, confirm]),
    );
    modal::show(&dialog);
    dialog
}

/// Shows a message with a single OK button.
///
/// `on_close` runs when OK is clicked and when the dialog is dismissed by
/// overlay click, close control or Escape.
pub fn show_notification(
    doc: &Document,
    title: &str,
    message: &str,
    on_close: Option<Callback>,
) -> Modal {
    single_button_dialog(doc, title, message, ButtonConfig::new("OK"), on_close)
}

/// Like [`show_notification`], with a danger-styled OK button.
pub fn show_error(doc: &Document, title: &str, message: &str, on_close: Option<Callback>) -> Modal {
    single_button_dialog(doc, title, message, ButtonConfig::danger("OK"), on_close)
}

fn single_button_dialog(
    doc: &Document,
    title: &str,
    message: &str,
    ok: ButtonConfig,
    on_close: Option<Callback>,
) -> Modal {
    let ok = match on_close.clone() {
        Some(handler) => ok.on_click_callback(handler),
        None => ok.on_click(|| {}),
    };
    let dialog = modal::build(
        doc,
        ModalConfig::new(title, message)
            .button(ok)
            .on_close_callback(on_close),
    );
    modal::show(&dialog);
    dialog
}

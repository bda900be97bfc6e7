//! Cosmic-themed UI components built from layered SVG shells.
//!
//! Components are assembled in a headless [`dom::Document`]: build one with
//! a config record, insert the returned root, and drive it with clicks, key
//! presses and the document's virtual clock.

pub mod components;
pub mod config;
pub mod dom;
pub mod facade;
pub mod render;

pub use components::{
    ButtonConfig, ButtonVariant, Callback, CardConfig, Content, InfoConfig, Modal, ModalConfig,
    ModalState, Paint, TagConfig, TitleColor,
};
pub use dom::{Document, EventKind, Node};

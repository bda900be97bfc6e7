//! Headless document model that components are built against.
//!
//! A [`Document`] plays the part of the host page: it owns every node,
//! provides the `body` insertion point, routes pointer and key events, and
//! runs timers on a virtual clock. Everything is single-threaded; handles are
//! `Rc` based and not `Send`.

mod document;
mod event;
mod html;
mod node;

pub use document::Document;
pub use event::{Event, EventKind, KeyEvent, KeySubscription};
pub use node::{Node, NodeId};

/// Namespace used for SVG elements when serializing.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

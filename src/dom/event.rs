//! Pointer and key events routed through a [`Document`](super::Document).

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use super::document::Inner;
use super::node::Node;

pub(super) type Listener = Rc<dyn Fn(&mut Event)>;
pub(super) type KeyListener = Rc<dyn Fn(&KeyEvent)>;

/// Pointer events a node can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Primary button click. Bubbles.
    Click,
    /// Pointer entered the node. Does not bubble.
    MouseEnter,
    /// Pointer left the node. Does not bubble.
    MouseLeave,
}

impl EventKind {
    /// Returns the DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
        }
    }

    /// Whether the event travels from the target up through its ancestors.
    pub fn bubbles(self) -> bool {
        matches!(self, Self::Click)
    }
}

/// A pointer event in flight.
pub struct Event {
    pub(super) kind: EventKind,
    pub(super) target: Node,
    pub(super) current_target: Node,
    pub(super) propagation_stopped: bool,
}

impl Event {
    pub(super) fn new(kind: EventKind, target: Node) -> Self {
        Self {
            kind,
            current_target: target.clone(),
            target,
            propagation_stopped: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The node the event was dispatched on.
    pub fn target(&self) -> &Node {
        &self.target
    }

    /// The node whose listeners are currently running.
    pub fn current_target(&self) -> &Node {
        &self.current_target
    }

    /// Keeps the event from reaching ancestors of the current node.
    /// Remaining listeners on the current node still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("target", &self.target)
            .field("current_target", &self.current_target)
            .field("propagation_stopped", &self.propagation_stopped)
            .finish()
    }
}

/// A key press delivered to document-level key listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key name, e.g. `"Escape"` or `"Enter"`.
    pub key: String,
}

/// Handle to a document-level key listener.
///
/// The listener stays registered until [`release`](Self::release) is called;
/// dropping the handle does not remove it.
#[must_use = "a key listener can only be removed through its subscription"]
pub struct KeySubscription {
    pub(super) doc: Weak<RefCell<Inner>>,
    pub(super) id: u64,
}

impl KeySubscription {
    /// Removes the listener. Calling it again is a no-op.
    pub fn release(&self) {
        let Some(inner) = self.doc.upgrade() else {
            return;
        };
        let removed: Vec<(u64, KeyListener)> = {
            let mut inner = inner.borrow_mut();
            let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut inner.key_listeners)
                .into_iter()
                .partition(|(id, _)| *id == self.id);
            inner.key_listeners = kept;
            removed
        };
        if !removed.is_empty() {
            log::trace!("released key listener {}", self.id);
        }
    }

    /// Whether the listener is still registered.
    pub fn is_active(&self) -> bool {
        let Some(inner) = self.doc.upgrade() else {
            return false;
        };
        let registered = inner.borrow().key_listeners.iter().any(|(id, _)| *id == self.id);
        registered
    }
}

impl fmt::Debug for KeySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySubscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

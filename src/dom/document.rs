//! The document handle: node arena, body, key routing and the timer clock.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use slotmap::SlotMap;

use super::event::{KeyEvent, KeyListener, KeySubscription, Listener};
use super::node::{Node, NodeData, NodeId, NodeKind};
use crate::components::theme::Paint;

struct Timer {
    deadline: Duration,
    seq: u64,
    callback: Box<dyn FnOnce()>,
}

pub(super) struct Inner {
    pub(super) nodes: SlotMap<NodeId, NodeData>,
    pub(super) key_listeners: Vec<(u64, KeyListener)>,
    body: NodeId,
    next_listener_id: u64,
    timers: Vec<Timer>,
    next_timer_seq: u64,
    now: Duration,
    next_unique_id: u64,
    paint: Paint,
}

/// Shared handle to a headless document.
///
/// Cloning is cheap and every clone refers to the same tree. A detached
/// subtree stays in memory until it is handed to
/// [`release_subtree`](Self::release_subtree); handles to released nodes go
/// stale and read as empty, detached elements.
#[derive(Clone)]
pub struct Document {
    pub(super) inner: Rc<RefCell<Inner>>,
}

impl Document {
    /// Creates an empty document using the built-in paint palette.
    pub fn new() -> Self {
        Self::with_paint(Paint::default())
    }

    /// Creates an empty document whose components use `paint`.
    pub fn with_paint(paint: Paint) -> Self {
        let mut nodes = SlotMap::with_key();
        let body = nodes.insert(NodeData::element("body", false));
        let inner = Inner {
            nodes,
            key_listeners: Vec::new(),
            body,
            next_listener_id: 1,
            timers: Vec::new(),
            next_timer_seq: 0,
            now: Duration::ZERO,
            next_unique_id: 1,
            paint,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// The insertion point for shown components.
    pub fn body(&self) -> Node {
        let body = self.borrow().body;
        Node::new(self.clone(), body)
    }

    /// Palette components read when they are built.
    pub fn paint(&self) -> Paint {
        self.borrow().paint.clone()
    }

    /// Replaces the palette. Already-built components keep their colours.
    pub fn set_paint(&self, paint: Paint) {
        self.borrow_mut().paint = paint;
    }

    pub fn create_element(&self, tag: &str) -> Node {
        self.push_node(NodeData::element(tag, false))
    }

    /// Creates an element in the SVG namespace.
    pub fn create_svg_element(&self, tag: &str) -> Node {
        self.push_node(NodeData::element(tag, true))
    }

    pub fn create_text(&self, text: &str) -> Node {
        self.push_node(NodeData::leaf(NodeKind::Text(text.to_string())))
    }

    /// Creates a node holding raw markup that is serialized verbatim.
    pub fn create_markup(&self, markup: &str) -> Node {
        self.push_node(NodeData::leaf(NodeKind::Markup(markup.to_string())))
    }

    fn push_node(&self, data: NodeData) -> Node {
        let id = self.borrow_mut().nodes.insert(data);
        Node::new(self.clone(), id)
    }

    /// Detaches `root` and frees it together with every descendant, dropping
    /// their listeners.
    ///
    /// Returns the number of nodes freed. The body cannot be released.
    pub fn release_subtree(&self, root: &Node) -> usize {
        if !root.document().ptr_eq(self) {
            log::warn!("release_subtree: node belongs to another document");
            return 0;
        }
        if root.id() == self.borrow().body {
            log::warn!("release_subtree: refusing to release the body");
            return 0;
        }
        root.remove();

        let freed: Vec<NodeData> = {
            let mut inner = self.borrow_mut();
            let mut pending = vec![root.id()];
            let mut freed = Vec::new();
            while let Some(id) = pending.pop() {
                if let Some(data) = inner.nodes.remove(id) {
                    pending.extend(data.children.iter().copied());
                    freed.push(data);
                }
            }
            freed
        };
        log::trace!("released {} nodes under {:?}", freed.len(), root.id());
        freed.len()
    }

    /// Number of live nodes, the body included.
    pub fn node_count(&self) -> usize {
        self.borrow().nodes.len()
    }

    /// Number of pointer listeners registered across all live elements.
    pub fn listener_count(&self) -> usize {
        self.borrow()
            .nodes
            .values()
            .map(|node| match &node.kind {
                NodeKind::Element(element) => element.listeners.len(),
                _ => 0,
            })
            .sum()
    }

    /// Returns `prefix-N`, unique within this document.
    ///
    /// Used for SVG `id` attributes so several components can coexist
    /// without their gradient references colliding.
    pub fn unique_id(&self, prefix: &str) -> String {
        let mut inner = self.borrow_mut();
        let n = inner.next_unique_id;
        inner.next_unique_id += 1;
        format!("{}-{}", prefix, n)
    }

    /// Registers a document-level key listener.
    pub fn add_key_listener(&self, handler: impl Fn(&KeyEvent) + 'static) -> KeySubscription {
        let mut inner = self.borrow_mut();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.key_listeners.push((id, Rc::new(handler)));
        KeySubscription {
            doc: Rc::downgrade(&self.inner),
            id,
        }
    }

    pub fn key_listener_count(&self) -> usize {
        self.borrow().key_listeners.len()
    }

    /// Delivers a key press to every registered key listener.
    ///
    /// Listeners released by an earlier listener during the same press are
    /// skipped.
    pub fn press_key(&self, key: &str) {
        let snapshot: Vec<(u64, KeyListener)> = self.borrow().key_listeners.clone();
        let event = KeyEvent {
            key: key.to_string(),
        };
        for (id, listener) in snapshot {
            let still_registered = self.borrow().key_listeners.iter().any(|(l, _)| *l == id);
            if still_registered {
                listener(&event);
            }
        }
    }

    /// Schedules `callback` to run once `delay` has elapsed on the virtual
    /// clock. Timers cannot be cancelled.
    pub fn set_timeout(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        let mut inner = self.borrow_mut();
        let timer = Timer {
            deadline: inner.now + delay,
            seq: inner.next_timer_seq,
            callback: Box::new(callback),
        };
        inner.next_timer_seq += 1;
        inner.timers.push(timer);
    }

    /// Moves the clock forward by `duration`, running every timer that comes
    /// due in order of deadline, then scheduling order.
    ///
    /// Timers scheduled by a running timer fire in the same call if their
    /// deadline falls inside the window.
    pub fn advance(&self, duration: Duration) {
        let target = self.borrow().now + duration;
        loop {
            let next = {
                let mut inner = self.borrow_mut();
                let due = inner
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.deadline <= target)
                    .min_by_key(|(_, timer)| (timer.deadline, timer.seq))
                    .map(|(index, _)| index);
                due.map(|index| {
                    let timer = inner.timers.remove(index);
                    inner.now = timer.deadline;
                    timer.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.borrow_mut().now = target;
    }

    /// Current virtual time since the document was created.
    pub fn now(&self) -> Duration {
        self.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.borrow().timers.len()
    }

    /// Drops every listener and pending timer.
    ///
    /// Handlers usually capture nodes, which hold the document, so a
    /// document with live handlers keeps itself alive. Call this when the
    /// document is no longer needed.
    pub fn dispose(&self) {
        let (timers, keys, listeners) = {
            let mut inner = self.borrow_mut();
            let timers = std::mem::take(&mut inner.timers);
            let keys = std::mem::take(&mut inner.key_listeners);
            let listeners: Vec<Vec<(super::EventKind, Listener)>> = inner
                .nodes
                .values_mut()
                .filter_map(|node| match &mut node.kind {
                    NodeKind::Element(element) => Some(std::mem::take(&mut element.listeners)),
                    _ => None,
                })
                .collect();
            (timers, keys, listeners)
        };
        log::debug!(
            "disposed document: {} timers, {} key listeners, {} listener sets",
            timers.len(),
            keys.len(),
            listeners.len()
        );
    }

    /// Whether both handles refer to the same document.
    pub fn ptr_eq(&self, other: &Document) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(super) fn borrow(&self) -> Ref<'_, Inner> {
        self.inner.borrow()
    }

    pub(super) fn borrow_mut(&self) -> RefMut<'_, Inner> {
        self.inner.borrow_mut()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.borrow();
        f.debug_struct("Document")
            .field("nodes", &inner.nodes.len())
            .field("key_listeners", &inner.key_listeners.len())
            .field("pending_timers", &inner.timers.len())
            .field("now", &inner.now)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_unique_ids_do_not_repeat() {
        let doc = Document::new();
        let a = doc.unique_id("modalGradient");
        let b = doc.unique_id("modalGradient");
        assert_ne!(a, b);
        assert!(a.starts_with("modalGradient-"));
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let doc = Document::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = log.clone();
        doc.set_timeout(Duration::from_millis(300), move || l.borrow_mut().push("late"));
        let l = log.clone();
        doc.set_timeout(Duration::from_millis(100), move || l.borrow_mut().push("early"));

        doc.advance(Duration::from_millis(99));
        assert!(log.borrow().is_empty());

        doc.advance(Duration::from_millis(1));
        assert_eq!(*log.borrow(), vec!["early"]);

        doc.advance(Duration::from_millis(500));
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(doc.pending_timers(), 0);
        assert_eq!(doc.now(), Duration::from_millis(600));
    }

    #[test]
    fn test_nested_timer_fires_within_window() {
        let doc = Document::new();
        let fired = Rc::new(RefCell::new(false));

        let inner_doc = doc.clone();
        let f = fired.clone();
        doc.set_timeout(Duration::from_millis(100), move || {
            inner_doc.set_timeout(Duration::from_millis(50), move || *f.borrow_mut() = true);
        });

        doc.advance(Duration::from_millis(150));
        assert!(*fired.borrow());
    }

    #[test]
    fn test_key_subscription_release_is_idempotent() {
        let doc = Document::new();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let sub = doc.add_key_listener(move |event| {
            if event.key == "Escape" {
                *c.borrow_mut() += 1;
            }
        });

        doc.press_key("Escape");
        doc.press_key("Enter");
        assert_eq!(*count.borrow(), 1);
        assert!(sub.is_active());

        sub.release();
        sub.release();
        assert!(!sub.is_active());
        assert_eq!(doc.key_listener_count(), 0);

        doc.press_key("Escape");
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_listener_released_mid_press_is_skipped() {
        let doc = Document::new();
        let hits = Rc::new(RefCell::new(0));

        let second: Rc<RefCell<Option<KeySubscription>>> = Rc::new(RefCell::new(None));
        let s = second.clone();
        let _first = doc.add_key_listener(move |_| {
            if let Some(sub) = s.borrow().as_ref() {
                sub.release();
            }
        });
        let h = hits.clone();
        *second.borrow_mut() = Some(doc.add_key_listener(move |_| *h.borrow_mut() += 1));

        doc.press_key("Escape");
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_dispose_clears_listeners_and_timers() {
        let doc = Document::new();
        let _sub = doc.add_key_listener(|_| {});
        doc.set_timeout(Duration::from_secs(1), || {});
        doc.dispose();
        assert_eq!(doc.key_listener_count(), 0);
        assert_eq!(doc.pending_timers(), 0);
    }

    #[test]
    fn test_paint_is_replaceable() {
        let doc = Document::new();
        assert_eq!(doc.paint(), Paint::default());
        let paint = Paint {
            accent_border: "#ff8800".to_string(),
            ..Paint::default()
        };
        doc.set_paint(paint.clone());
        assert_eq!(doc.paint(), paint);
    }

    #[test]
    fn test_release_subtree_frees_nodes_and_listeners() {
        use crate::dom::EventKind;

        let doc = Document::new();
        let baseline = (doc.node_count(), doc.listener_count());

        let panel = doc.create_element("div");
        let label = doc.create_element("span");
        label.set_text("Airlock");
        label.add_event_listener(EventKind::Click, |_| {});
        panel.append_child(&label);
        doc.body().append_child(&panel);
        assert_eq!(doc.listener_count(), baseline.1 + 1);

        assert_eq!(doc.release_subtree(&panel), 3);
        assert_eq!((doc.node_count(), doc.listener_count()), baseline);
        assert!(doc.body().children().is_empty());

        // Stale handles read as empty, even after the slot is reused.
        let _reused = doc.create_element("p");
        assert_eq!(label.tag(), None);
        assert_eq!(label.text_content(), "");
        assert!(!panel.is_connected());

        assert_eq!(doc.release_subtree(&doc.body()), 0);
        assert_eq!(doc.release_subtree(&Document::new().create_element("i")), 0);
    }
}

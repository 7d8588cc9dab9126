//! Observer registries for host events
//!
//! The host owns two event sources the overlay cares about: the mutable
//! list (fires after every logical mutation with the full current contents)
//! and the render loop (fires once per frame with a drawing surface).
//! Handlers register for either and receive a [`SubscriptionId`]; teardown
//! is by handle and idempotent, so releasing a handle twice is a no-op.
//!
//! Everything here is single-threaded: registries are shared with the
//! controller via `Rc<RefCell<_>>` and both event kinds are delivered on
//! the same host dispatch thread, never concurrently.

use crate::layout::ListItem;
use crate::overlay::DrawSurface;

/// Handle identifying one registered handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Handler invoked after each list mutation with the full current contents
pub type ListHandler = Box<dyn FnMut(&[ListItem])>;

/// Handler invoked once per frame with the host's drawing surface
pub type FrameHandler = Box<dyn FnMut(&mut dyn DrawSurface)>;

/// Registry of list-change handlers
pub struct ListEvents {
    handlers: Vec<(SubscriptionId, ListHandler)>,
    next_id: u64,
}

impl ListEvents {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a handler, returning its teardown handle
    pub fn subscribe(&mut self, handler: ListHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Remove a handler; unknown or already-released handles are ignored
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
    }

    /// Notify every handler of the list's current contents
    ///
    /// Fired by the host after insert/remove/reorder/edit; subscribers must
    /// treat every notification as "recompute from scratch".
    pub fn notify(&mut self, items: &[ListItem]) {
        for (_, handler) in &mut self.handlers {
            handler(items);
        }
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for ListEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of per-frame handlers
pub struct FrameEvents {
    handlers: Vec<(SubscriptionId, FrameHandler)>,
    next_id: u64,
}

impl FrameEvents {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a handler, returning its teardown handle
    pub fn subscribe(&mut self, handler: FrameHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Remove a handler; unknown or already-released handles are ignored
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
    }

    /// Deliver one frame to every handler
    pub fn dispatch(&mut self, surface: &mut dyn DrawSurface) {
        for (_, handler) in &mut self.handlers {
            handler(surface);
        }
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for FrameEvents {
    fn default() -> Self {
        Self::new()
    }
}

//! Publish/subscribe notifications.
//!
//! Listeners receive the emitting component itself as `&mut C`, so a
//! listener may call back into any public mutator. Delivery is synchronous.
//! An event raised while another is being delivered is queued and delivered,
//! in order, once the current delivery finishes; every listener sees every
//! event exactly once and never re-entrantly.

use std::collections::VecDeque;
use std::fmt;

use crate::key::KeyPress;

/// Notifications emitted by the pager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<K> {
    /// An item became the selection.
    Select(K),
    /// An item was removed.
    Remove(K),
    /// The last item was removed.
    Empty,
    /// The list was reset.
    Reset,
    /// A key arrived. Emitted before the built-in bindings run, carrying the
    /// selection as it was before the key was handled.
    Keypress {
        /// The decoded key.
        key: KeyPress,
        /// The selection before handling.
        previous: Option<K>,
    },
}

impl<K> Event<K> {
    /// Short event name: `select`, `remove`, `empty`, `reset` or `keypress`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::Remove(_) => "remove",
            Self::Empty => "empty",
            Self::Reset => "reset",
            Self::Keypress { .. } => "keypress",
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe the same listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A boxed listener.
pub type Listener<C, E> = Box<dyn FnMut(&mut C, &E)>;

/// The listener registry and delivery queue for one component.
pub struct EventBus<C, E> {
    listeners: Vec<(ListenerId, Listener<C, E>)>,
    live: Vec<ListenerId>,
    removed: Vec<ListenerId>,
    pending: VecDeque<E>,
    dispatching: bool,
    next_id: u64,
}

impl<C, E> Default for EventBus<C, E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            live: Vec::new(),
            removed: Vec::new(),
            pending: VecDeque::new(),
            dispatching: false,
            next_id: 0,
        }
    }
}

impl<C, E> fmt::Debug for EventBus<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.live.len())
            .field("pending", &self.pending.len())
            .field("dispatching", &self.dispatching)
            .finish()
    }
}

impl<C, E> EventBus<C, E> {
    /// An empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener. It receives events emitted after this call.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&mut C, &E) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        self.live.push(id);
        id
    }

    /// Removes the listener registered under `id`. Returns false if it was
    /// not registered. Safe to call from inside a listener, including for
    /// the listener currently running.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let Some(pos) = self.live.iter().position(|l| *l == id) else {
            return false;
        };
        self.live.remove(pos);
        if let Some(pos) = self.listeners.iter().position(|(l, _)| *l == id) {
            self.listeners.remove(pos);
        } else {
            // taken out for delivery; dropped when delivery returns them
            self.removed.push(id);
        }
        true
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.live.len()
    }

    fn take_listeners(&mut self) -> Vec<(ListenerId, Listener<C, E>)> {
        std::mem::take(&mut self.listeners)
    }

    fn return_listeners(&mut self, mut delivered: Vec<(ListenerId, Listener<C, E>)>) {
        let removed = std::mem::take(&mut self.removed);
        delivered.retain(|(id, _)| !removed.contains(id));
        // listeners subscribed during delivery go after the existing ones
        delivered.append(&mut self.listeners);
        self.listeners = delivered;
    }

    fn is_removed(&self, id: ListenerId) -> bool {
        self.removed.contains(&id)
    }
}

/// A component that owns an [`EventBus`] over itself.
pub(crate) trait Emitter<E>: Sized {
    fn event_bus(&mut self) -> &mut EventBus<Self, E>;

    /// Delivers `event` to every listener, or queues it if a delivery is
    /// already in progress further up the stack.
    fn emit(&mut self, event: E) {
        self.event_bus().pending.push_back(event);
        if self.event_bus().dispatching {
            return;
        }
        self.event_bus().dispatching = true;
        while let Some(event) = self.event_bus().pending.pop_front() {
            let mut listeners = self.event_bus().take_listeners();
            for (id, listener) in &mut listeners {
                if self.event_bus().is_removed(*id) {
                    continue;
                }
                listener(self, &event);
            }
            self.event_bus().return_listeners(listeners);
        }
        self.event_bus().dispatching = false;
    }
}

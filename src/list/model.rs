//! The `Pager` struct, its construction and read-only accessors.

use tracing::debug;

use super::events::{Emitter, Event, EventBus, ListenerId};
use super::keys::PagerKeyMap;
use super::selection::Selection;
use super::store::EntryStore;
use super::types::{Header, Id, Item, RunState};
use crate::config::PagerConfig;
use crate::error::Result;
use crate::input::{InputSource, ScriptedInput};
use crate::paginator::{self, Window};
use crate::surface::{BufferSurface, Surface};

/// A scrollable, selectable list of labeled items with header lines above it.
///
/// The pager owns its items, its headers and a single selection. Every
/// mutation redraws the current page onto the surface before returning.
/// Navigation is page-jump: the visible window is always the page of
/// `length` items that contains the selection.
///
/// # Type Parameters
///
/// * `K` - Item and header id type
/// * `S` - Drawing surface
/// * `I` - Source of decoded key events
///
/// # Examples
///
/// ```rust
/// use list_pager::prelude::*;
///
/// let mut list: Pager<&str> = Pager::new(
///     BufferSurface::new(40, 12),
///     ScriptedInput::default(),
///     PagerConfig::default().with_origin(0, 0),
/// )
/// .unwrap();
///
/// list.add_item("g", "Google").unwrap();
/// list.add_item("y", "Yahoo").unwrap();
/// assert_eq!(list.selected(), Some(&"g"));
///
/// list.down().unwrap();
/// assert_eq!(list.selected(), Some(&"y"));
/// list.down().unwrap();
/// assert_eq!(list.selected(), Some(&"y"));
///
/// assert_eq!(list.view(), "  Google\n› Yahoo");
/// ```
pub struct Pager<K = String, S = BufferSurface, I = ScriptedInput>
where
    K: Id,
    S: Surface,
    I: InputSource,
{
    pub(super) items: EntryStore<K>,
    pub(super) headers: EntryStore<K>,
    pub(super) selection: Selection<K>,
    pub(super) paginator: paginator::Model,
    pub(super) bus: EventBus<Pager<K, S, I>, Event<K>>,
    pub(super) surface: S,
    pub(super) input: I,
    pub(super) keymap: PagerKeyMap,
    pub(super) config: PagerConfig,
    pub(super) state: RunState,
}

impl<K: Id, S: Surface, I: InputSource> Pager<K, S, I> {
    /// Creates an empty, stopped pager drawing onto `surface` and reading
    /// keys from `input`.
    ///
    /// Nothing is drawn until the first mutation or `start()`.
    ///
    /// # Errors
    ///
    /// [`PagerError::InvalidConfig`](crate::PagerError::InvalidConfig) if the
    /// config fails validation.
    pub fn new(surface: S, input: I, config: PagerConfig) -> Result<Self> {
        config.validate()?;
        let mut paginator = paginator::Model::new().with_per_page(config.length);
        if let Some(kind) = config.pagination {
            paginator.paginator_type = kind;
        }
        debug!(length = config.length, marker = %config.marker, "pager created");

        Ok(Self {
            items: EntryStore::new("item"),
            headers: EntryStore::new("header"),
            selection: Selection::default(),
            paginator,
            bus: EventBus::new(),
            surface,
            input,
            keymap: PagerKeyMap::default(),
            config,
            state: RunState::Stopped,
        })
    }

    /// Replaces the built-in key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: PagerKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Registers a notification listener.
    ///
    /// The listener gets the pager itself and may call any mutator. Events
    /// raised by those calls are delivered after the current one.
    ///
    /// ```rust
    /// use list_pager::prelude::*;
    /// use std::{cell::RefCell, rc::Rc};
    ///
    /// let mut list: Pager<u32> =
    ///     Pager::new(BufferSurface::new(20, 20), ScriptedInput::default(), PagerConfig::default()).unwrap();
    ///
    /// let seen = Rc::new(RefCell::new(Vec::new()));
    /// let log = Rc::clone(&seen);
    /// list.on(move |_, event| log.borrow_mut().push(event.name()));
    ///
    /// list.add_item(1, "one").unwrap();
    /// list.remove_item(None).unwrap();
    /// assert_eq!(*seen.borrow(), vec!["select", "remove", "empty"]);
    /// ```
    pub fn on<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&mut Self, &Event<K>) + 'static,
    {
        self.bus.subscribe(listener)
    }

    /// Unregisters the listener returned by [`on`](Self::on). Returns false
    /// if it was not registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in navigation order.
    pub fn items(&self) -> &[Item<K>] {
        self.items.entries()
    }

    /// Headers in display order.
    pub fn headers(&self) -> &[Header<K>] {
        self.headers.entries()
    }

    /// The item at position `index`.
    pub fn item_at(&self, index: usize) -> Option<&Item<K>> {
        self.items.at(index)
    }

    /// The item with `id`.
    pub fn get_item(&self, id: &K) -> Option<&Item<K>> {
        self.items.get(id)
    }

    /// The header with `id`.
    pub fn get_header(&self, id: &K) -> Option<&Header<K>> {
        self.headers.get(id)
    }

    /// The selected item id.
    pub fn selected(&self) -> Option<&K> {
        self.selection.get()
    }

    /// Position of the selected item.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index_in(&self.items)
    }

    /// The selected item.
    pub fn selected_item(&self) -> Option<&Item<K>> {
        self.selected_index().and_then(|i| self.items.at(i))
    }

    /// The page currently visible.
    pub fn window(&self) -> Window {
        paginator::window_for(
            self.selected_index(),
            self.paginator.per_page,
            self.items.len(),
        )
    }

    /// Returns true between `start()` and `stop()`.
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// The active configuration.
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// The built-in key bindings.
    pub fn keymap(&self) -> &PagerKeyMap {
        &self.keymap
    }

    /// The drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the drawing surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The input source.
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the input source.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

impl<K: Id, S: Surface, I: InputSource> Emitter<Event<K>> for Pager<K, S, I> {
    fn event_bus(&mut self) -> &mut EventBus<Self, Event<K>> {
        &mut self.bus
    }
}

impl<K: Id, S: Surface, I: InputSource> std::fmt::Debug for Pager<K, S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("items", &self.items.len())
            .field("headers", &self.headers.len())
            .field("selected", &self.selection.get())
            .field("state", &self.state)
            .field("bus", &self.bus)
            .finish_non_exhaustive()
    }
}

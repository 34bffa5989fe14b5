//! Core types shared by the list submodules.

use std::fmt::Debug;
use std::hash::Hash;

/// Requirements for an item or header identifier.
///
/// Blanket-implemented, so `String`, `&'static str`, `u64` and friends all
/// qualify.
pub trait Id: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Id for T {}

/// A labeled row. Items and headers share this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K> {
    /// Caller-supplied identifier, unique within its store.
    pub id: K,
    /// Display text.
    pub label: String,
}

impl<K> Entry<K> {
    /// Creates an entry.
    pub fn new(id: K, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// A navigable, selectable row.
pub type Item<K> = Entry<K>;

/// A static line drawn above the items; never selectable.
pub type Header<K> = Entry<K>;

/// Whether the pager is consuming key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Not listening; the terminal is in its normal state.
    #[default]
    Stopped,
    /// Listening for keys with the cursor hidden and raw mode on.
    Running,
}

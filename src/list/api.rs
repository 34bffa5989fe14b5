//! Item, header and selection mutators.
//!
//! Every mutator keeps the selection pointing at an existing item (or at
//! nothing), emits its notifications after the state change, and redraws
//! before returning.

use tracing::debug;

use super::events::{Emitter, Event};
use super::model::Pager;
use super::types::{Id, Item};
use crate::error::{PagerError, Result};
use crate::input::InputSource;
use crate::surface::Surface;

impl<K: Id, S: Surface, I: InputSource> Pager<K, S, I> {
    /// Appends an item. The first item added to a list with no selection
    /// becomes selected; later adds leave the selection alone.
    ///
    /// # Errors
    ///
    /// [`PagerError::DuplicateId`] if an item with `id` exists, in which case
    /// nothing changes. IO errors from the redraw.
    pub fn add_item(&mut self, id: K, label: impl Into<String>) -> Result<()> {
        self.items.add(id.clone(), label)?;
        debug!(?id, len = self.items.len(), "item added");
        if self.selection.get().is_none() {
            self.select_item(id)
        } else {
            self.draw()
        }
    }

    /// Replaces an item's label.
    ///
    /// # Errors
    ///
    /// [`PagerError::NotFound`] if no item has `id`. IO errors from the redraw.
    pub fn update_item(&mut self, id: &K, label: impl Into<String>) -> Result<()> {
        self.items.update(id, label)?;
        debug!(?id, "item updated");
        self.draw()
    }

    /// Removes an item, the selected one when `id` is `None`.
    ///
    /// Emits `remove`, then `empty` if no items are left. When the removed
    /// item was selected, the item just before it becomes selected; if it was
    /// the first item the selection is cleared. Removing an unselected item
    /// keeps the selection.
    ///
    /// # Errors
    ///
    /// [`PagerError::EmptyState`] for `None` with no selection,
    /// [`PagerError::NotFound`] for an unknown id. IO errors from the redraw.
    pub fn remove_item(&mut self, id: Option<&K>) -> Result<Item<K>> {
        let id = match id {
            Some(id) => id.clone(),
            None => self.selection.get().cloned().ok_or(PagerError::EmptyState)?,
        };
        let was_selected = self.selection.is(&id);
        let (index, removed) = self.items.remove(&id)?;
        // resolved now: listeners below may reshape the list
        let previous = if was_selected {
            self.selection.clear();
            index.checked_sub(1).and_then(|i| self.items.id_at(i)).cloned()
        } else {
            None
        };
        debug!(?id, index, len = self.items.len(), "item removed");

        self.emit(Event::Remove(id));
        if self.items.is_empty() {
            self.emit(Event::Empty);
        }

        // a listener may already have picked a new selection
        if self.selection.get().is_none() {
            if let Some(previous) = previous.filter(|p| self.items.contains(p)) {
                self.select_item(previous)?;
                return Ok(removed);
            }
        }
        self.draw()?;
        Ok(removed)
    }

    /// Selects an item and emits `select`.
    ///
    /// # Errors
    ///
    /// [`PagerError::NotFound`] if no item has `id`; the selection is left
    /// unchanged. IO errors from the redraw.
    pub fn select_item(&mut self, id: K) -> Result<()> {
        if !self.items.contains(&id) {
            return Err(PagerError::not_found("item", &id));
        }
        self.selection.set(id.clone());
        self.emit(Event::Select(id));
        self.draw()
    }

    /// Selects the previous item. No-op on the first item or an empty list.
    ///
    /// # Errors
    ///
    /// IO errors from the redraw.
    pub fn up(&mut self) -> Result<()> {
        match self.selection.previous_in(&self.items) {
            Some(id) => self.select_item(id),
            None => Ok(()),
        }
    }

    /// Selects the next item, or the first one when nothing is selected.
    /// No-op on the last item or an empty list.
    ///
    /// # Errors
    ///
    /// IO errors from the redraw.
    pub fn down(&mut self) -> Result<()> {
        match self.selection.next_in(&self.items) {
            Some(id) => self.select_item(id),
            None => Ok(()),
        }
    }

    /// Removes every item and the selection, then emits `reset`. Headers are
    /// kept. The next `add_item` selects its item exactly as on a fresh pager.
    ///
    /// # Errors
    ///
    /// IO errors from the redraw.
    pub fn reset(&mut self) -> Result<()> {
        self.items.clear();
        self.selection.clear();
        debug!("list reset");
        self.emit(Event::Reset);
        self.draw()
    }

    /// Appends a header line. Headers never affect selection or paging.
    ///
    /// # Errors
    ///
    /// [`PagerError::DuplicateId`] if a header with `id` exists. IO errors
    /// from the redraw.
    pub fn add_header(&mut self, id: K, label: impl Into<String>) -> Result<()> {
        self.headers.add(id.clone(), label)?;
        debug!(?id, "header added");
        self.draw()
    }

    /// Replaces a header's label.
    ///
    /// # Errors
    ///
    /// [`PagerError::NotFound`] if no header has `id`. IO errors from the
    /// redraw.
    pub fn update_header(&mut self, id: &K, label: impl Into<String>) -> Result<()> {
        self.headers.update(id, label)?;
        self.draw()
    }
}

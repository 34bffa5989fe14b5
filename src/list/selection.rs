//! The single active selection and its neighbours by position.

use super::store::EntryStore;
use super::types::Id;

/// Holds the selected id, if any.
///
/// Neighbour lookups follow insertion order and never wrap: the first entry
/// has no previous and the last has no next.
#[derive(Debug, Clone)]
pub struct Selection<K> {
    current: Option<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Id> Selection<K> {
    /// The selected id.
    pub fn get(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Returns true if `id` is the selected id.
    pub fn is(&self, id: &K) -> bool {
        self.current.as_ref() == Some(id)
    }

    /// Selects `id`.
    pub fn set(&mut self, id: K) {
        self.current = Some(id);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Position of the selected id in `store`.
    pub fn index_in(&self, store: &EntryStore<K>) -> Option<usize> {
        self.current.as_ref().and_then(|id| store.position(id))
    }

    /// The id just before the selection, or `None` at the first entry or when
    /// nothing is selected.
    pub fn previous_in(&self, store: &EntryStore<K>) -> Option<K> {
        let i = self.index_in(store)?;
        i.checked_sub(1).and_then(|p| store.id_at(p)).cloned()
    }

    /// The id just after the selection, or `None` at the last entry. With
    /// nothing selected this is the first entry, if any.
    pub fn next_in(&self, store: &EntryStore<K>) -> Option<K> {
        let next = self.index_in(store).map_or(0, |i| i + 1);
        store.id_at(next).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EntryStore<u32> {
        let mut s = EntryStore::new("item");
        for id in [10, 20, 30] {
            s.add(id, format!("#{id}")).unwrap();
        }
        s
    }

    #[test]
    fn test_neighbours_do_not_wrap() {
        let s = store();
        let mut sel = Selection::default();
        sel.set(10);
        assert_eq!(sel.previous_in(&s), None);
        assert_eq!(sel.next_in(&s), Some(20));

        sel.set(30);
        assert_eq!(sel.previous_in(&s), Some(20));
        assert_eq!(sel.next_in(&s), None);
    }

    #[test]
    fn test_empty_selection_moves_down_to_first_entry() {
        let s = store();
        let sel: Selection<u32> = Selection::default();
        assert_eq!(sel.index_in(&s), None);
        assert_eq!(sel.previous_in(&s), None);
        assert_eq!(sel.next_in(&s), Some(10));

        let empty = EntryStore::new("item");
        let mut sel = Selection::default();
        sel.set(10);
        assert_eq!(sel.next_in(&empty), None);
    }
}

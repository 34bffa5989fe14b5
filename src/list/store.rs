//! Insertion-ordered entry storage with O(1) lookup by id.

use std::collections::HashMap;

use super::types::{Entry, Id};
use crate::error::{PagerError, Result};

/// An ordered map of entries.
///
/// Entries keep insertion order for navigation and rendering, and a position
/// index gives constant-time lookup by id. Ids are unique; a colliding add is
/// rejected and leaves the store untouched.
#[derive(Debug, Clone)]
pub struct EntryStore<K: Id> {
    kind: &'static str,
    entries: Vec<Entry<K>>,
    index: HashMap<K, usize>,
}

impl<K: Id> EntryStore<K> {
    /// An empty store. `kind` names the store in error messages.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// [`PagerError::DuplicateId`] if `id` is already present.
    pub fn add(&mut self, id: K, label: impl Into<String>) -> Result<()> {
        if self.index.contains_key(&id) {
            return Err(PagerError::duplicate(self.kind, &id));
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push(Entry::new(id, label));
        Ok(())
    }

    /// The entry at position `i`.
    pub fn at(&self, i: usize) -> Option<&Entry<K>> {
        self.entries.get(i)
    }

    /// The id at position `i`.
    pub fn id_at(&self, i: usize) -> Option<&K> {
        self.entries.get(i).map(|e| &e.id)
    }

    /// The entry with `id`.
    pub fn get(&self, id: &K) -> Option<&Entry<K>> {
        self.position(id).and_then(|i| self.entries.get(i))
    }

    /// Position of `id` in insertion order.
    pub fn position(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns true if `id` is present.
    pub fn contains(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Replaces the label of `id` in place.
    ///
    /// # Errors
    ///
    /// [`PagerError::NotFound`] if `id` is absent.
    pub fn update(&mut self, id: &K, label: impl Into<String>) -> Result<()> {
        let i = self
            .position(id)
            .ok_or_else(|| PagerError::not_found(self.kind, id))?;
        self.entries[i].label = label.into();
        Ok(())
    }

    /// Removes `id`, returning its former position and the entry.
    ///
    /// # Errors
    ///
    /// [`PagerError::NotFound`] if `id` is absent.
    pub fn remove(&mut self, id: &K) -> Result<(usize, Entry<K>)> {
        let i = self
            .index
            .remove(id)
            .ok_or_else(|| PagerError::not_found(self.kind, id))?;
        let entry = self.entries.remove(i);
        for (pos, e) in self.entries.iter().enumerate().skip(i) {
            self.index.insert(e.id.clone(), pos);
        }
        Ok((i, entry))
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry<K>] {
        &self.entries
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K>> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store(ids: &[&'static str]) -> EntryStore<&'static str> {
        let mut s = EntryStore::new("item");
        for id in ids {
            s.add(*id, id.to_uppercase()).unwrap();
        }
        s
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let s = store(&["c", "a", "b"]);
        let ids: Vec<_> = s.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(s.position(&"a"), Some(1));
        assert_eq!(s.at(2).map(|e| e.label.as_str()), Some("B"));
        assert!(s.at(3).is_none());
    }

    #[test]
    fn test_duplicate_add_is_rejected_without_change() {
        let mut s = store(&["a"]);
        let err = s.add("a", "again").unwrap_err();
        assert_eq!(err.code(), "PAGER-1003");
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(&"a").unwrap().label, "A");
    }

    #[test]
    fn test_remove_reindexes_tail() {
        let mut s = store(&["a", "b", "c", "d"]);
        let (pos, entry) = s.remove(&"b").unwrap();
        assert_eq!(pos, 1);
        assert_eq!(entry.label, "B");
        assert_eq!(s.position(&"c"), Some(1));
        assert_eq!(s.position(&"d"), Some(2));
        assert_eq!(s.position(&"a"), Some(0));
        assert!(!s.contains(&"b"));
    }

    #[test]
    fn test_update_and_missing_ids() {
        let mut s = store(&["a"]);
        s.update(&"a", "alpha").unwrap();
        assert_eq!(s.get(&"a").unwrap().label, "alpha");
        assert_eq!(s.update(&"z", "zed").unwrap_err().code(), "PAGER-1001");
        assert_eq!(s.remove(&"z").unwrap_err().code(), "PAGER-1001");
    }

    #[test]
    fn test_clear() {
        let mut s = store(&["a", "b"]);
        s.clear();
        assert!(s.is_empty());
        assert!(s.get(&"a").is_none());
        s.add("a", "again").unwrap();
        assert_eq!(s.position(&"a"), Some(0));
    }
}

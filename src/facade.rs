//! Standard collections presented through [`SimpleSet`], used as baselines

use std::{
    collections::{BTreeSet, HashSet, LinkedList},
    hash::BuildHasher,
};

use crate::SimpleSet;

/// The operations the facade needs from a wrapped string collection
pub trait StringCollection {
    /// Returns true if the collection holds `value`
    fn has(&self, value: &str) -> bool;

    /// Stores `value`; the facade only calls this for absent values
    fn put(&mut self, value: String);

    /// Removes one occurrence of `value`, returning whether it was present
    fn take_out(&mut self, value: &str) -> bool;

    /// Number of stored values
    fn count(&self) -> usize;

    /// Number of cells allocated by the collection
    fn cells(&self) -> usize {
        self.count()
    }
}

impl<S: BuildHasher> StringCollection for HashSet<String, S> {
    fn has(&self, value: &str) -> bool {
        self.contains(value)
    }

    fn put(&mut self, value: String) {
        self.insert(value);
    }

    fn take_out(&mut self, value: &str) -> bool {
        self.remove(value)
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn cells(&self) -> usize {
        self.capacity()
    }
}

impl StringCollection for BTreeSet<String> {
    fn has(&self, value: &str) -> bool {
        self.contains(value)
    }

    fn put(&mut self, value: String) {
        self.insert(value);
    }

    fn take_out(&mut self, value: &str) -> bool {
        self.remove(value)
    }

    fn count(&self) -> usize {
        self.len()
    }
}

impl StringCollection for LinkedList<String> {
    fn has(&self, value: &str) -> bool {
        self.iter().any(|stored| stored == value)
    }

    fn put(&mut self, value: String) {
        self.push_back(value);
    }

    fn take_out(&mut self, value: &str) -> bool {
        let Some(position) = self.iter().position(|stored| stored == value) else {
            return false;
        };
        let mut tail = self.split_off(position);
        tail.pop_front();
        self.append(&mut tail);
        true
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// Wraps a standard collection so it can be measured next to the hash sets.
///
/// `add` checks membership before inserting, so even a list-backed facade
/// never stores duplicates.
#[derive(Debug, Clone, Default)]
pub struct CollectionFacadeSet<C> {
    /// The wrapped collection
    collection: C,
}

impl<C: StringCollection> CollectionFacadeSet<C> {
    /// Creates a facade over `collection`
    pub const fn new(collection: C) -> Self {
        Self { collection }
    }

    /// Gives back the wrapped collection
    pub fn into_inner(self) -> C {
        self.collection
    }
}

impl<C: StringCollection> SimpleSet for CollectionFacadeSet<C> {
    fn add(&mut self, value: &str) -> bool {
        if self.collection.has(value) {
            return false;
        }
        self.collection.put(value.to_owned());
        true
    }

    fn contains(&self, value: &str) -> bool {
        self.collection.has(value)
    }

    fn delete(&mut self, value: &str) -> bool {
        self.collection.take_out(value)
    }

    fn size(&self) -> usize {
        self.collection.count()
    }

    fn capacity(&self) -> usize {
        self.collection.cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_facade_rejects_duplicates() {
        let mut set = CollectionFacadeSet::new(LinkedList::<String>::new());
        assert!(set.add("a"));
        assert!(!set.add("a"));
        assert!(set.add("b"));
        assert_eq!(set.size(), 2);
        assert_eq!(set.capacity(), 2);
    }

    #[test]
    fn test_list_delete_keeps_order() {
        let mut set = CollectionFacadeSet::new(LinkedList::<String>::new());
        for value in ["a", "b", "c", "d"] {
            set.add(value);
        }
        assert!(set.delete("b"));
        assert!(!set.delete("b"));
        assert!(set.delete("d"));

        let remaining: Vec<String> = set.into_inner().into_iter().collect();
        assert_eq!(remaining, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_hash_facade_reports_allocated_capacity() {
        let mut set = CollectionFacadeSet::new(HashSet::<String>::with_capacity(64));
        set.add("a");
        assert!(set.capacity() >= 64);
        assert_eq!(set.size(), 1);
    }

    #[test]
    fn test_tree_facade() {
        let mut set = CollectionFacadeSet::new(BTreeSet::<String>::new());
        assert!(set.add("b"));
        assert!(set.add("a"));
        assert!(set.contains("a"));
        assert!(set.delete("a"));
        assert!(!set.contains("a"));
        assert_eq!(set.into_inner().into_iter().collect::<Vec<_>>(), vec!["b".to_string()]);
    }
}

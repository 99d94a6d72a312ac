//! The capability shared by every string set in the crate

/// A set of strings supporting insertion, lookup and deletion.
///
/// Implementations never store duplicates. The trait is object safe, so
/// heterogeneous sets can be driven through `&mut dyn SimpleSet`.
pub trait SimpleSet {
    /// Adds `value` if it is not already present.
    ///
    /// Returns `false`, leaving the set untouched, if `value` was already stored.
    fn add(&mut self, value: &str) -> bool;

    /// Returns true if `value` is stored in the set
    fn contains(&self, value: &str) -> bool;

    /// Removes `value`, returning whether it was present
    fn delete(&mut self, value: &str) -> bool;

    /// Number of values currently stored
    fn size(&self) -> usize;

    /// Number of cells backing the set.
    ///
    /// For hash tables this is the length of the slot or bucket array, not the
    /// number of stored values.
    fn capacity(&self) -> usize;

    /// Returns true if the set holds no values
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

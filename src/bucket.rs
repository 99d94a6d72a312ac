//! A chain of strings stored at a single index of a [`ChainedHashSet`]
//!
//! [`ChainedHashSet`]: crate::ChainedHashSet

/// The strings that hashed to one bucket, kept in insertion order.
///
/// The bucket itself does not reject duplicates; the owning table checks
/// membership before pushing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBucket {
    /// Values in insertion order
    values: Vec<String>,
}

impl StringBucket {
    /// Creates an empty bucket
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends a value to the end of the chain
    pub fn push(&mut self, value: String) {
        self.values.push(value);
    }

    /// Returns true if the chain holds `value`
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|stored| stored == value)
    }

    /// Removes the first occurrence of `value`, keeping the order of the rest
    pub fn remove(&mut self, value: &str) -> bool {
        match self.values.iter().position(|stored| stored == value) {
            Some(index) => {
                self.values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of values in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the chain is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the chain in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }
}

impl IntoIterator for StringBucket {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a StringBucket {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

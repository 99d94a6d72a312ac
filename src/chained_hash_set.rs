use std::{hash::BuildHasher, mem};

use crate::{
    SimpleSet, StringBucket,
    policy::{self, CapacityPolicy, DefaultHashBuilder, INITIAL_CAPACITY, LoadFactors},
};

/// A string set using open hashing: every index holds a chain of the values
/// hashing to it.
///
/// Buckets are allocated the first time a value lands on their index. The
/// capacity counts buckets, not values, so the load (`size / capacity`) can
/// exceed one if the upper load factor allows it.
///
/// Note: This implementation is not thread-safe. Serialize access externally.
#[derive(Debug, Clone)]
pub struct ChainedHashSet<S = DefaultHashBuilder> {
    /// One optional chain per index, always a power of two long
    buckets: Vec<Option<StringBucket>>,
    /// Total number of values across all chains
    size: usize,
    /// Load factors and the index mask
    policy: CapacityPolicy,
    /// Builds the hasher for every lookup
    hash_builder: S,
}

impl<S> Default for ChainedHashSet<S>
where
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_load_factors_and_hasher(LoadFactors::default(), S::default())
    }
}

impl<T, S> Extend<T> for ChainedHashSet<S>
where
    T: AsRef<str>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value.as_ref());
        }
    }
}

impl<T: AsRef<str>> FromIterator<T> for ChainedHashSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl ChainedHashSet {
    /// Creates an empty set with 16 buckets and load factors 0.75 / 0.25
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with 16 buckets and the given load factors
    #[must_use]
    pub fn with_load_factors(load_factors: LoadFactors) -> Self {
        Self::with_load_factors_and_hasher(load_factors, DefaultHashBuilder::default())
    }

    /// Builds a set by adding `data` one value at a time; duplicates are ignored
    #[must_use]
    pub fn from_data<T: AsRef<str>>(data: &[T]) -> Self {
        data.iter().collect()
    }
}

impl<S: BuildHasher> ChainedHashSet<S> {
    /// Creates an empty set hashing with `hash_builder`
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_load_factors_and_hasher(LoadFactors::default(), hash_builder)
    }

    /// Creates an empty set with the given load factors, hashing with `hash_builder`
    #[must_use]
    pub fn with_load_factors_and_hasher(load_factors: LoadFactors, hash_builder: S) -> Self {
        Self {
            buckets: vec![None; INITIAL_CAPACITY],
            size: 0,
            policy: CapacityPolicy::new(load_factors, INITIAL_CAPACITY),
            hash_builder,
        }
    }

    /// Returns the configured load factors
    #[must_use]
    pub fn load_factors(&self) -> LoadFactors {
        self.policy.load_factors()
    }

    /// Returns the current ratio of stored values to buckets
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        policy::load(self.size, self.buckets.len())
    }

    /// Removes every value and returns to the initial capacity
    pub fn clear(&mut self) {
        self.buckets = vec![None; INITIAL_CAPACITY];
        self.policy.set_capacity(INITIAL_CAPACITY);
        self.size = 0;
    }

    /// Iterates over the stored values, bucket by bucket
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().flatten().flat_map(StringBucket::iter).map(String::as_str)
    }

    /// Index of the bucket `value` belongs to
    fn bucket_index(&self, value: &str) -> usize {
        self.policy.clamp(policy::hash_of(&self.hash_builder, value))
    }

    /// Redistributes every value into a fresh array of `capacity` buckets.
    ///
    /// Chains are not moved wholesale: values sharing an old bucket may split
    /// once the mask changes.
    fn rebuild(&mut self, capacity: usize) {
        let mut policy = self.policy;
        policy.set_capacity(capacity);

        let mut buckets: Vec<Option<StringBucket>> = vec![None; capacity];
        for value in mem::take(&mut self.buckets).into_iter().flatten().flatten() {
            let index = policy.clamp(policy::hash_of(&self.hash_builder, &value));
            if let Some(cell) = buckets.get_mut(index) {
                cell.get_or_insert_with(StringBucket::new).push(value);
            }
        }

        self.buckets = buckets;
        self.policy = policy;
    }
}

impl<S: BuildHasher> SimpleSet for ChainedHashSet<S> {
    fn add(&mut self, value: &str) -> bool {
        let index = self.bucket_index(value);
        let Some(cell) = self.buckets.get_mut(index) else {
            return false;
        };
        let bucket = cell.get_or_insert_with(StringBucket::new);
        if bucket.contains(value) {
            return false;
        }

        bucket.push(value.to_owned());
        self.size = self.size.saturating_add(1);
        if self.policy.exceeds_upper(self.size) {
            self.rebuild(self.policy.grown());
        }
        true
    }

    fn contains(&self, value: &str) -> bool {
        self.buckets
            .get(self.bucket_index(value))
            .and_then(Option::as_ref)
            .is_some_and(|bucket| bucket.contains(value))
    }

    fn delete(&mut self, value: &str) -> bool {
        let index = self.bucket_index(value);
        let removed = match self.buckets.get_mut(index) {
            Some(Some(bucket)) => bucket.remove(value),
            Some(None) | None => false,
        };
        if !removed {
            return false;
        }

        self.size = self.size.saturating_sub(1);
        if self.policy.should_shrink(self.size) {
            self.rebuild(self.policy.shrunk());
        }
        true
    }

    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasherDefault, Hasher};

    use super::*;

    /// Sends every value to the same bucket
    #[derive(Debug, Default)]
    struct CollidingHasher;

    impl Hasher for CollidingHasher {
        fn finish(&self) -> u64 {
            3
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    #[test]
    fn test_add_and_contains() {
        let mut set = ChainedHashSet::new();
        assert!(set.add("key1"));
        assert!(set.add("key2"));
        assert!(!set.add("key1"));

        assert!(set.contains("key1"));
        assert!(set.contains("key2"));
        assert!(!set.contains("key3"));
        assert_eq!(set.size(), 2);
    }

    #[test]
    fn test_buckets_are_lazy() {
        let mut set = ChainedHashSet::new();
        assert!(set.buckets.iter().all(Option::is_none));

        set.add("only");
        assert_eq!(set.buckets.iter().filter(|bucket| bucket.is_some()).count(), 1);
    }

    #[test]
    fn test_colliding_values_share_a_chain() {
        let mut set: ChainedHashSet<BuildHasherDefault<CollidingHasher>> = ChainedHashSet::default();
        for value in ["a", "b", "c", "d"] {
            assert!(set.add(value));
        }
        let chain = set.buckets.get(3).and_then(Option::as_ref).map(StringBucket::len);
        assert_eq!(chain, Some(4));

        assert!(set.delete("b"));
        assert!(!set.contains("b"));
        assert!(["a", "c", "d"].iter().all(|v| set.contains(v)));
    }

    #[test]
    fn test_colliding_values_survive_resizes() {
        let mut set: ChainedHashSet<BuildHasherDefault<CollidingHasher>> = ChainedHashSet::default();
        for i in 0..100 {
            set.add(&i.to_string());
        }
        assert_eq!(set.capacity(), 256);
        assert!((0..100).all(|i| set.contains(&i.to_string())));

        for i in 0..95 {
            set.delete(&i.to_string());
        }
        assert!((95..100).all(|i| set.contains(&i.to_string())));
        assert!(set.capacity() < 256);
    }

    #[test]
    fn test_rebuild_splits_chains() {
        let mut set = ChainedHashSet::new();
        for i in 0..13 {
            set.add(&format!("v{i}"));
        }
        assert_eq!(set.capacity(), 32);
        let chained: usize = set.buckets.iter().flatten().map(StringBucket::len).sum();
        assert_eq!(chained, 13);
    }

    #[test]
    fn test_load_above_one() {
        let mut set = ChainedHashSet::with_load_factors(LoadFactors::new(4.0, 0.5));
        for i in 0..64 {
            set.add(&i.to_string());
        }
        assert_eq!(set.capacity(), 16);
        assert!((set.load_factor() - 4.0).abs() < f64::EPSILON);

        set.add("64");
        assert_eq!(set.capacity(), 32);
    }

    #[test]
    fn test_empty_string_is_a_value() {
        let mut set = ChainedHashSet::new();
        assert!(set.add(""));
        assert!(set.contains(""));
        assert!(set.delete(""));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_from_data_and_iter() {
        let set = ChainedHashSet::from_data(&["x".to_string(), "y".to_string(), "x".to_string()]);
        assert_eq!(set.size(), 2);

        let mut values: Vec<&str> = set.iter().collect();
        values.sort_unstable();
        assert_eq!(values, vec!["x", "y"]);
    }

    #[test]
    fn test_clear() {
        let mut set: ChainedHashSet = (0..40).map(|i| i.to_string()).collect();
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 16);
        assert!(set.iter().next().is_none());
    }
}

use std::{hash::BuildHasher, mem};

use crate::{
    SimpleSet,
    policy::{self, CapacityPolicy, DefaultHashBuilder, INITIAL_CAPACITY, LoadFactors},
};

/// A cell of the probing table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Slot {
    /// Never written since the last rebuild; ends every probe sequence
    #[default]
    Empty,
    /// Held a value that was deleted; probes continue past it
    Tombstone,
    /// Holds a live value
    Occupied(String),
}

/// A string set using closed hashing with quadratic probing.
///
/// Attempt `i` for a value inspects slot `hash + (i * i + i) / 2`, clamped to the
/// table. Because the capacity is a power of two, those triangular offsets visit
/// every slot exactly once per `capacity` attempts.
///
/// Deleted values leave a tombstone behind so that lookups for values placed
/// further along the same probe sequence keep going. Insertion only claims empty
/// slots; tombstones disappear when the table is rebuilt on resize.
///
/// Note: This implementation is not thread-safe. Serialize access externally.
#[derive(Debug, Clone)]
pub struct ProbingHashSet<S = DefaultHashBuilder> {
    /// The table, always a power of two long
    slots: Vec<Slot>,
    /// Number of occupied slots
    size: usize,
    /// Number of tombstone slots
    tombstones: usize,
    /// Load factors and the index mask
    policy: CapacityPolicy,
    /// Builds the hasher for every lookup
    hash_builder: S,
}

impl<S> Default for ProbingHashSet<S>
where
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_load_factors_and_hasher(LoadFactors::default(), S::default())
    }
}

impl<T, S> Extend<T> for ProbingHashSet<S>
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

impl<T: AsRef<str>> FromIterator<T> for ProbingHashSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl ProbingHashSet {
    /// Creates an empty set with 16 slots and load factors 0.75 / 0.25
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with 16 slots and the given load factors
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

impl<S: BuildHasher> ProbingHashSet<S> {
    /// Creates an empty set hashing with `hash_builder`
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_load_factors_and_hasher(LoadFactors::default(), hash_builder)
    }

    /// Creates an empty set with the given load factors, hashing with `hash_builder`
    #[must_use]
    pub fn with_load_factors_and_hasher(load_factors: LoadFactors, hash_builder: S) -> Self {
        Self {
            slots: vec![Slot::Empty; INITIAL_CAPACITY],
            size: 0,
            tombstones: 0,
            policy: CapacityPolicy::new(load_factors, INITIAL_CAPACITY),
            hash_builder,
        }
    }

    /// Returns the configured load factors
    #[must_use]
    pub fn load_factors(&self) -> LoadFactors {
        self.policy.load_factors()
    }

    /// Returns the current ratio of stored values to slots
    #[must_use]
    pub fn load_factor(&self) -> f64 {
        policy::load(self.size, self.slots.len())
    }

    /// Removes every value and returns to the initial capacity
    pub fn clear(&mut self) {
        self.slots = vec![Slot::Empty; INITIAL_CAPACITY];
        self.policy.set_capacity(INITIAL_CAPACITY);
        self.size = 0;
        self.tombstones = 0;
    }

    /// Iterates over the stored values in table order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(value) => Some(value.as_str()),
            Slot::Empty | Slot::Tombstone => None,
        })
    }

    /// Returns the slot index holding `value`, following its probe sequence
    fn find(&self, value: &str) -> Option<usize> {
        let hash = policy::hash_of(&self.hash_builder, value);
        for index in probe_sequence(self.policy, hash) {
            match self.slots.get(index) {
                None | Some(Slot::Empty) => return None,
                Some(Slot::Occupied(stored)) if stored == value => return Some(index),
                Some(_) => {}
            }
        }
        None
    }

    /// Returns true if `occupied` slots fit the table without crossing the upper load
    fn has_room_for(&self, occupied: usize) -> bool {
        occupied <= self.slots.len() && !self.policy.exceeds_upper(occupied)
    }

    /// Replaces the table with one of `capacity` slots holding the same values.
    ///
    /// Tombstones are dropped. The capacity is raised if needed so that every
    /// value finds an empty slot.
    fn rebuild(&mut self, capacity: usize) {
        let capacity = capacity.max(self.size.next_power_of_two());
        let mut policy = self.policy;
        policy.set_capacity(capacity);

        let mut slots = vec![Slot::Empty; capacity];
        for slot in mem::take(&mut self.slots) {
            if let Slot::Occupied(value) = slot {
                let hash = policy::hash_of(&self.hash_builder, &value);
                let placed = place(&mut slots, policy, hash, value);
                debug_assert!(placed, "a rebuilt table always has room for its values");
            }
        }

        self.slots = slots;
        self.policy = policy;
        self.tombstones = 0;
    }
}

impl<S: BuildHasher> SimpleSet for ProbingHashSet<S> {
    fn add(&mut self, value: &str) -> bool {
        if self.contains(value) {
            return false;
        }

        let needed = self.size.saturating_add(1);
        if !self.has_room_for(needed) {
            self.rebuild(self.policy.grown());
        } else if !self.has_room_for(needed.saturating_add(self.tombstones)) {
            // Live values fit, but tombstones would leave no empty slot to claim
            self.rebuild(self.slots.len());
        }

        let hash = policy::hash_of(&self.hash_builder, value);
        let placed = place(&mut self.slots, self.policy, hash, value.to_owned());
        debug_assert!(placed, "load checks keep an empty slot available");
        if placed {
            self.size = needed;
        }
        placed
    }

    fn contains(&self, value: &str) -> bool {
        self.find(value).is_some()
    }

    fn delete(&mut self, value: &str) -> bool {
        let Some(index) = self.find(value) else {
            return false;
        };
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Tombstone;
        }
        self.size = self.size.saturating_sub(1);
        self.tombstones = self.tombstones.saturating_add(1);

        if self.policy.should_shrink(self.size) {
            self.rebuild(self.policy.shrunk());
        }
        true
    }

    fn size(&self) -> usize {
        self.size
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Yields one full cycle of the triangular probe sequence starting at `hash`
fn probe_sequence(policy: CapacityPolicy, hash: usize) -> impl Iterator<Item = usize> {
    (0..policy.capacity()).scan(hash, move |position, attempt: usize| {
        let index = policy.clamp(*position);
        *position = position.wrapping_add(attempt).wrapping_add(1);
        Some(index)
    })
}

/// Stores `value` in the first empty slot of its probe sequence
fn place(slots: &mut [Slot], policy: CapacityPolicy, hash: usize, value: String) -> bool {
    for index in probe_sequence(policy, hash) {
        if let Some(slot) = slots.get_mut(index) {
            if *slot == Slot::Empty {
                *slot = Slot::Occupied(value);
                return true;
            }
        }
    }
    false
}

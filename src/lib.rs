//! # Simple Sets
//!
//! String sets backed by two classic hash table strategies.
//!
//! This crate provides two hash set implementations behind one trait, [`SimpleSet`]:
//!
//! - `ProbingHashSet`: closed hashing, resolving collisions with quadratic probing
//! - `ChainedHashSet`: open hashing, keeping a chain of values per bucket
//!
//! Both start with 16 cells, double their capacity when the load would exceed the
//! upper load factor (0.75 by default) and halve it when a deletion drops the load
//! below the lower load factor (0.25 by default). The capacity is always a power of
//! two, so hashes are clamped to the table with a mask.
//!
//! `CollectionFacadeSet` exposes the standard collections through the same trait,
//! for comparison.
//!
//! ## Basic Usage
//!
//! ```rust
//! use simple_sets::{ProbingHashSet, SimpleSet};
//!
//! let mut set = ProbingHashSet::new();
//!
//! assert!(set.add("apple"));
//! assert!(!set.add("apple"));
//! assert!(set.contains("apple"));
//!
//! assert!(set.delete("apple"));
//! assert!(!set.contains("apple"));
//! assert_eq!(set.size(), 0);
//! ```
//!
//! ## Resizing
//!
//! ```rust
//! use simple_sets::{ChainedHashSet, LoadFactors, SimpleSet};
//!
//! let mut set = ChainedHashSet::with_load_factors(LoadFactors::new(0.75, 0.25));
//! for i in 0..13 {
//!     set.add(&format!("value-{i}"));
//! }
//!
//! // 13 / 16 crosses the upper load factor
//! assert_eq!(set.capacity(), 32);
//! assert_eq!(set.size(), 13);
//! ```
//!
//! ## Comparing Implementations
//!
//! ```rust
//! use simple_sets::{ChainedHashSet, CollectionFacadeSet, ProbingHashSet, SimpleSet};
//! use std::collections::BTreeSet;
//!
//! let mut sets: Vec<Box<dyn SimpleSet>> = Vec::new();
//! sets.push(Box::new(ProbingHashSet::new()));
//! sets.push(Box::new(ChainedHashSet::new()));
//! sets.push(Box::new(CollectionFacadeSet::new(BTreeSet::<String>::new())));
//!
//! for set in &mut sets {
//!     set.add("hi");
//!     assert!(set.contains("hi"));
//! }
//! ```

/// Module implementing the chain stored in each bucket of the chaining set
mod bucket;
/// Module implementing a string set with chained buckets
mod chained_hash_set;
/// Errors reported by configuration
mod error;
/// Module adapting standard collections to the set trait
mod facade;
/// Load factors and capacity bookkeeping shared by the hash sets
mod policy;
/// Module implementing a string set with quadratic probing
mod probing_hash_set;
/// The trait every set implements
mod simple_set;
/// Utility functions for loading and inserting data
mod utils;

pub use bucket::StringBucket;
pub use chained_hash_set::ChainedHashSet;
pub use error::LoadFactorError;
pub use facade::{CollectionFacadeSet, StringCollection};
pub use policy::{
    DEFAULT_LOWER_LOAD_FACTOR, DEFAULT_UPPER_LOAD_FACTOR, DefaultHashBuilder, INITIAL_CAPACITY,
    LoadFactors,
};
pub use probing_hash_set::ProbingHashSet;
pub use simple_set::SimpleSet;
pub use utils::{build_from, file_to_array};

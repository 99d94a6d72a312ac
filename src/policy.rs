//! Load factor thresholds and the capacity mask shared by the hash sets

use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

use crate::error::LoadFactorError;

/// Number of cells a freshly created hash set starts with
pub const INITIAL_CAPACITY: usize = 16;

/// Hash builder used when none is supplied; deterministic across runs
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// Load above which a hash set doubles its capacity
pub const DEFAULT_UPPER_LOAD_FACTOR: f32 = 0.75;

/// Load below which a hash set halves its capacity
pub const DEFAULT_LOWER_LOAD_FACTOR: f32 = 0.25;

/// The pair of thresholds driving automatic resizing.
///
/// A set grows when its load (`size / capacity`) would exceed `upper`, and shrinks
/// when a deletion brings it below `lower`. Both values are fixed for the lifetime
/// of the set they configure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadFactors {
    /// Growth threshold
    upper: f32,
    /// Shrink threshold
    lower: f32,
}

impl Default for LoadFactors {
    fn default() -> Self {
        Self { upper: DEFAULT_UPPER_LOAD_FACTOR, lower: DEFAULT_LOWER_LOAD_FACTOR }
    }
}

impl LoadFactors {
    /// Creates the thresholds without checking them.
    ///
    /// The caller must ensure `0 < lower < upper <= 1`. Other values are accepted
    /// but make the resizing behavior meaningless (a table may thrash between
    /// sizes, or never grow). Use [`LoadFactors::try_new`] for untrusted input.
    #[must_use]
    pub const fn new(upper: f32, lower: f32) -> Self {
        Self { upper, lower }
    }

    /// Creates the thresholds, rejecting values that break `0 < lower < upper <= 1`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadFactorError::OutOfRange`] if either factor is NaN or outside
    /// `(0, 1]`, and [`LoadFactorError::Inverted`] if `lower >= upper`.
    pub fn try_new(upper: f32, lower: f32) -> Result<Self, LoadFactorError> {
        for value in [upper, lower] {
            if value.is_nan() || value <= 0.0 || value > 1.0 {
                return Err(LoadFactorError::OutOfRange { value });
            }
        }
        if lower >= upper {
            return Err(LoadFactorError::Inverted { upper, lower });
        }
        Ok(Self { upper, lower })
    }

    /// Returns the growth threshold
    #[must_use]
    pub const fn upper(self) -> f32 {
        self.upper
    }

    /// Returns the shrink threshold
    #[must_use]
    pub const fn lower(self) -> f32 {
        self.lower
    }
}

/// Returns the ratio of `size` to `capacity`
#[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
pub(crate) fn load(size: usize, capacity: usize) -> f64 {
    size as f64 / capacity as f64
}

/// Hashes a value and truncates the result to a table index before clamping
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn hash_of<S: BuildHasher>(hash_builder: &S, value: &str) -> usize {
    hash_builder.hash_one(value) as usize
}

/// Threshold bookkeeping and index clamping embedded by every hash set.
///
/// The capacity is always a power of two, so `hash & (capacity - 1)` is the same
/// as `hash % capacity`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CapacityPolicy {
    /// The configured thresholds
    load_factors: LoadFactors,
    /// Always `capacity - 1`
    capacity_mask: usize,
}

impl CapacityPolicy {
    /// Creates a policy for a table of `capacity` cells
    pub(crate) fn new(load_factors: LoadFactors, capacity: usize) -> Self {
        debug_assert!(capacity.is_power_of_two());
        Self { load_factors, capacity_mask: capacity.saturating_sub(1) }
    }

    /// Clamps a hash (plus any probe offset) into the valid range of indices
    pub(crate) const fn clamp(self, hash: usize) -> usize {
        hash & self.capacity_mask
    }

    /// Current number of cells
    pub(crate) const fn capacity(self) -> usize {
        self.capacity_mask.wrapping_add(1)
    }

    /// Records a new capacity, which must be a power of two
    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        debug_assert!(capacity.is_power_of_two());
        self.capacity_mask = capacity.saturating_sub(1);
    }

    /// The thresholds this policy enforces
    pub(crate) const fn load_factors(self) -> LoadFactors {
        self.load_factors
    }

    /// Returns true if `size` elements would overload the current capacity
    pub(crate) fn exceeds_upper(self, size: usize) -> bool {
        load(size, self.capacity()) > f64::from(self.load_factors.upper)
    }

    /// Returns true if a table holding `size` elements should halve
    pub(crate) fn should_shrink(self, size: usize) -> bool {
        self.capacity() > 1 && load(size, self.capacity()) < f64::from(self.load_factors.lower)
    }

    /// Capacity after growing
    pub(crate) const fn grown(self) -> usize {
        self.capacity().saturating_mul(2)
    }

    /// Capacity after shrinking, never below one cell
    pub(crate) fn shrunk(self) -> usize {
        (self.capacity() / 2).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_load_factors() {
        let factors = LoadFactors::default();
        assert!((factors.upper() - 0.75).abs() < f32::EPSILON);
        assert!((factors.lower() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_try_new_rejects_bad_factors() {
        assert_eq!(
            LoadFactors::try_new(1.5, 0.25),
            Err(LoadFactorError::OutOfRange { value: 1.5 })
        );
        assert_eq!(
            LoadFactors::try_new(0.75, 0.0),
            Err(LoadFactorError::OutOfRange { value: 0.0 })
        );
        assert!(matches!(
            LoadFactors::try_new(f32::NAN, 0.25),
            Err(LoadFactorError::OutOfRange { .. })
        ));
        assert_eq!(
            LoadFactors::try_new(0.5, 0.5),
            Err(LoadFactorError::Inverted { upper: 0.5, lower: 0.5 })
        );
        assert_eq!(LoadFactors::try_new(1.0, 0.1), Ok(LoadFactors::new(1.0, 0.1)));
    }

    #[test]
    fn test_clamp_masks_to_capacity() {
        let policy = CapacityPolicy::new(LoadFactors::default(), 16);
        assert_eq!(policy.capacity(), 16);
        assert_eq!(policy.clamp(0), 0);
        assert_eq!(policy.clamp(17), 1);
        assert_eq!(policy.clamp(usize::MAX), 15);
    }

    #[test]
    fn test_thresholds() {
        let mut policy = CapacityPolicy::new(LoadFactors::default(), 16);
        assert!(!policy.exceeds_upper(12));
        assert!(policy.exceeds_upper(13));
        assert!(policy.should_shrink(3));
        assert!(!policy.should_shrink(4));

        policy.set_capacity(1);
        assert!(!policy.should_shrink(0));
        assert_eq!(policy.shrunk(), 1);
        assert_eq!(policy.grown(), 2);
    }
}

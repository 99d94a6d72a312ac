//! Errors reported when validating set configuration

use thiserror::Error;

/// Reasons a pair of load factors is rejected by [`LoadFactors::try_new`]
///
/// [`LoadFactors::try_new`]: crate::LoadFactors::try_new
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LoadFactorError {
    /// A factor is NaN or lies outside of `(0, 1]`
    #[error("load factor {value} is outside of the range (0, 1]")]
    OutOfRange {
        /// The offending factor
        value: f32,
    },
    /// The lower factor is not strictly below the upper one
    #[error("lower load factor {lower} must be below upper load factor {upper}")]
    Inverted {
        /// Growth threshold
        upper: f32,
        /// Shrink threshold
        lower: f32,
    },
}

//! Distance metrics between feature vectors.
//!
//! ## Purpose
//!
//! This module provides the distance computations used to rank training
//! samples by closeness to a query. Euclidean (straight-line) distance is
//! the default and the one every classifier guarantee is stated for.
//!
//! ## Design notes
//!
//! * **Two entry points**: `compute` is the unchecked hot-path kernel used
//!   after dimensions were validated once; `distance` checks lengths and
//!   returns an error on mismatch.
//! * **Generic**: All metrics are generic over `Float`.
//! * **Scaled norms**: Euclidean and Minkowski divide every difference by the
//!   largest one before raising it to a power, so large finite coordinates
//!   do not overflow the intermediate sum.
//!
//! ## Invariants
//!
//! * Distance is always non-negative.
//! * Distance is symmetric and zero if and only if the points are identical.
//!
//! ## Non-goals
//!
//! * This module does not rescale features (see the standard scaler).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KnnError;

// ============================================================================
// Distance Metric Enum
// ============================================================================

/// Distance metric for neighbor ranking.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistanceMetric<T> {
    /// Standard Euclidean distance: √(Σ(xᵢ - yᵢ)²)
    #[default]
    Euclidean,

    /// Manhattan distance (L1 norm): Σ|xᵢ - yᵢ|
    Manhattan,

    /// Chebyshev distance (L∞ norm): max|xᵢ - yᵢ|
    Chebyshev,

    /// Minkowski distance (Lp norm): (Σ|xᵢ - yᵢ|^p)^(1/p)
    /// p must be >= 1.0.
    Minkowski(T),
}

// ============================================================================
// Distance Computation Functions
// ============================================================================

impl<T: Float> DistanceMetric<T> {
    /// Compute the distance between two points of equal length.
    ///
    /// Lengths are only checked in debug builds; use [`DistanceMetric::distance`]
    /// when the inputs have not been validated.
    #[inline]
    pub fn compute(&self, a: &[T], b: &[T]) -> T {
        match *self {
            DistanceMetric::Euclidean => Self::euclidean(a, b),
            DistanceMetric::Manhattan => Self::manhattan(a, b),
            DistanceMetric::Chebyshev => Self::chebyshev(a, b),
            DistanceMetric::Minkowski(p) => Self::minkowski(a, b, p),
        }
    }

    /// Compute the distance between two points, checking their lengths.
    pub fn distance(&self, a: &[T], b: &[T]) -> Result<T, KnnError> {
        Validator::validate_dimensions(a.len(), b.len())?;
        Ok(self.compute(a, b))
    }

    /// Compute Euclidean distance between two nD points.
    ///
    /// Evaluated as `m · √(Σ((xᵢ - yᵢ) / m)²)` with `m = max|xᵢ - yᵢ|`.
    #[inline]
    pub fn euclidean(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
        let largest = Self::chebyshev(a, b);
        if largest == T::zero() || !largest.is_finite() {
            return largest;
        }
        let sum_sq = a
            .iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| {
                let r = (ai - bi) / largest;
                r * r
            })
            .fold(T::zero(), |acc, x| acc + x);
        largest * sum_sq.sqrt()
    }

    /// Compute Manhattan distance (L1 norm).
    #[inline]
    pub fn manhattan(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), |acc, x| acc + x)
    }

    /// Compute Chebyshev distance (L-inf norm).
    #[inline]
    pub fn chebyshev(a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| (ai - bi).abs())
            .fold(T::zero(), T::max)
    }

    /// Compute Minkowski distance (Lp norm), scaled like [`Self::euclidean`].
    #[inline]
    pub fn minkowski(a: &[T], b: &[T], p: T) -> T {
        debug_assert_eq!(a.len(), b.len());
        let largest = Self::chebyshev(a, b);
        if largest == T::zero() || !largest.is_finite() {
            return largest;
        }
        let sum_pow = a
            .iter()
            .zip(b.iter())
            .map(|(&ai, &bi)| ((ai - bi).abs() / largest).powf(p))
            .fold(T::zero(), |acc, x| acc + x);
        largest * sum_pow.powf(T::one() / p)
    }
}

/// Euclidean distance between two feature vectors.
///
/// Fails with [`KnnError::DimensionMismatch`] if the lengths differ.
pub fn distance<T: Float>(a: &[T], b: &[T]) -> Result<T, KnnError> {
    DistanceMetric::Euclidean.distance(a, b)
}

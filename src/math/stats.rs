//! Column statistics for standardization.
//!
//! ## Purpose
//!
//! This module computes the per-column arithmetic mean and population
//! standard deviation of a row-major table, the two quantities the standard
//! scaler stores.
//!
//! ## Design notes
//!
//! * **Population variance**: Divides by `n`, not `n - 1`, so that scaling a
//!   table with its own parameters yields unit standard deviation under the
//!   same definition.
//! * **Running mean**: `μ += (x - μ) / i` never forms the column sum, so
//!   values near the floating-point maximum do not overflow it.
//! * **Scaled deviations**: Deviations are divided by the largest one
//!   before squaring and the result is multiplied back.
//!
//! ## Invariants
//!
//! * Standard deviation is non-negative.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (callers validate first).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Column Statistics
// ============================================================================

/// Mean of each column over `rows`.
///
/// Returns zeros if `rows` is empty.
pub fn column_means<T: Float, R: AsRef<[T]>>(rows: &[R], dimensions: usize) -> Vec<T> {
    let mut means = vec![T::zero(); dimensions];

    for (i, row) in rows.iter().enumerate() {
        let count = T::from(i + 1).unwrap_or_else(T::one);
        for (mean, &v) in means.iter_mut().zip(row.as_ref()) {
            *mean = *mean + (v - *mean) / count;
        }
    }

    means
}

/// Population standard deviation of each column around `means`.
///
/// # Formula
///
/// ```text
/// σ_j = sqrt( Σ_i (x_ij - μ_j)² / n )
///     = m_j · sqrt( Σ_i ((x_ij - μ_j) / m_j)² / n ),   m_j = max_i |x_ij - μ_j|
/// ```
pub fn column_std_devs<T: Float, R: AsRef<[T]>>(rows: &[R], means: &[T]) -> Vec<T> {
    let mut largest = vec![T::zero(); means.len()];
    if rows.is_empty() {
        return largest;
    }

    for row in rows {
        for ((m, &v), &mean) in largest.iter_mut().zip(row.as_ref()).zip(means) {
            *m = m.max((v - mean).abs());
        }
    }

    let mut sq = vec![T::zero(); means.len()];
    for row in rows {
        for (((acc, &v), &mean), &m) in sq.iter_mut().zip(row.as_ref()).zip(means).zip(&largest) {
            if m > T::zero() && m.is_finite() {
                let r = (v - mean) / m;
                *acc = *acc + r * r;
            }
        }
    }

    let n = T::from(rows.len()).unwrap_or_else(T::one);
    sq.iter()
        .zip(&largest)
        .map(|(&s, &m)| if m.is_finite() { m * (s / n).sqrt() } else { m })
        .collect()
}

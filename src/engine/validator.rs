//! Input validation for KNN configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions shared by every layer:
//! dimension agreement, finite values, the range of `k`, metric parameters,
//! and builder misuse. Checks run at construction or fit time so that a
//! misconfigured classifier fails before it ever predicts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces `1 <= k <= n_samples` and Minkowski `p >= 1`.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Dimension Checks**: Ensures paired operands have equal length.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distance::DistanceMetric;
use crate::primitives::errors::KnnError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for KNN configuration and input data.
///
/// Provides static methods for validating parameters and input data. All
/// methods return `Result<(), KnnError>` and fail fast upon identifying the
/// first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that an operand has the expected number of features.
    #[inline]
    pub fn validate_dimensions(expected: usize, got: usize) -> Result<(), KnnError> {
        if expected != got {
            return Err(KnnError::DimensionMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate that every value is finite.
    ///
    /// `name` builds the location reported in the error from the index of
    /// the first offending value; it is only called on failure.
    pub fn validate_finite<T: Float, F>(values: &[T], name: F) -> Result<(), KnnError>
    where
        F: Fn(usize) -> String,
    {
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(KnnError::InvalidNumericValue(format!(
                "{}={}",
                name(i),
                values[i].to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that all rows share one width and return it.
    pub fn validate_rows<T: Float, R: AsRef<[T]>>(rows: &[R]) -> Result<usize, KnnError> {
        let first = rows.first().ok_or(KnnError::EmptyInput)?;
        let dimensions = first.as_ref().len();
        if dimensions == 0 {
            return Err(KnnError::InvalidInput(
                "rows must have at least one column".into(),
            ));
        }

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            Self::validate_dimensions(dimensions, row.len())?;
            Self::validate_finite(row, |j| format!("row[{}][{}]", i, j))?;
        }

        Ok(dimensions)
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of neighbors against the training-set size.
    pub fn validate_k(k: usize, n_samples: usize) -> Result<(), KnnError> {
        if k == 0 || k > n_samples {
            return Err(KnnError::InvalidK { k, n_samples });
        }
        Ok(())
    }

    /// Validate metric parameters (Minkowski `p` must be finite and >= 1).
    pub fn validate_metric<T: Float>(metric: &DistanceMetric<T>) -> Result<(), KnnError> {
        if let DistanceMetric::Minkowski(p) = *metric {
            if !p.is_finite() || p < T::one() {
                return Err(KnnError::InvalidInput(format!(
                    "Minkowski p must be finite and >= 1, got {}",
                    p.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), KnnError> {
        if let Some(param) = duplicate_param {
            return Err(KnnError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

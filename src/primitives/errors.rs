//! Error types for KNN classification.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate: dataset construction, feature scaling, neighbor
//! search, classification, resampling, and builder validation.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is
//!   only implemented when the `std` feature is enabled.
//! * **Context-rich**: Variants carry the offending column, dimension, or
//!   parameter so that callers can fix their input.
//! * **Comparable**: Errors implement `Clone` and `PartialEq` for testing.
//!
//! ## Key concepts
//!
//! * **Invalid input**: Empty, non-finite, or insufficiently labeled data.
//! * **Dimension mismatch**: Two operands that must align do not.
//! * **Invalid argument**: `k` outside `1..=n_samples`, or a builder misuse.
//! * **Degenerate column**: A zero-variance predictor under the failing policy.
//!
//! ## Non-goals
//!
//! * This module does not define recovery strategies; none of these errors is
//!   transient.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced by KNN classification and its preprocessing steps.
#[derive(Debug, Clone, PartialEq)]
pub enum KnnError {
    /// No samples (or no rows) were supplied.
    EmptyInput,

    /// Malformed input data.
    InvalidInput(String),

    /// A value that must be finite was NaN or infinite.
    InvalidNumericValue(String),

    /// Class balancing needs at least two distinct labels.
    TooFewClasses {
        /// Number of distinct labels found.
        got: usize,
    },

    /// Feature-vector length (or column count) does not match.
    DimensionMismatch {
        /// Dimensionality the operation was configured with.
        expected: usize,
        /// Dimensionality that was supplied.
        got: usize,
    },

    /// A column the operation was fit on is absent from the supplied table.
    MissingColumn(String),

    /// The number of neighbors is outside `1..=n_samples`.
    InvalidK {
        /// Requested number of neighbors.
        k: usize,
        /// Number of training samples available.
        n_samples: usize,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },

    /// A predictor column has zero variance, so standardization is undefined.
    DegenerateColumn {
        /// Index of the offending column.
        column: usize,
    },
}

impl fmt::Display for KnnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnnError::EmptyInput => write!(f, "Input is empty"),
            KnnError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            KnnError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            KnnError::TooFewClasses { got } => write!(
                f,
                "Too few classes: got {}, need at least 2 distinct labels",
                got
            ),
            KnnError::DimensionMismatch { expected, got } => write!(
                f,
                "Dimension mismatch: expected {} features, got {}",
                expected, got
            ),
            KnnError::MissingColumn(name) => write!(f, "Missing column: '{}'", name),
            KnnError::InvalidK { k, n_samples } => write!(
                f,
                "Invalid k: {} (must be in [1, {}])",
                k, n_samples
            ),
            KnnError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            KnnError::DegenerateColumn { column } => write!(
                f,
                "Degenerate column {}: zero variance, cannot standardize",
                column
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KnnError {}

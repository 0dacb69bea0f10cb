//! Feature standardization.
//!
//! ## Purpose
//!
//! KNN ranks samples by raw distance, so a predictor measured in large units
//! (area in hundreds) drowns out one measured in small units (smoothness in
//! hundredths). Standardizing every predictor to mean 0 and standard
//! deviation 1 gives each one equal influence.
//!
//! ## Design notes
//!
//! * **Fit / transform split**: `StandardScaler::fit` estimates parameters
//!   from one reference table and returns an immutable `ScalingParameters`
//!   value; `transform` applies those exact coefficients to any table of
//!   the same width. Training and query data therefore can never be scaled
//!   differently.
//! * **Population deviation**: σ divides by `n` (see `math::stats`).
//! * **Zero variance**: A column whose σ is not distinguishable from zero is
//!   handled by `ZeroVariancePolicy`, decided at fit time and stored in the
//!   parameters. Division by zero never happens.
//!
//! ## Key concepts
//!
//! * **Centering**: `x - μ` (disable with `with_mean(false)`).
//! * **Scaling**: `/ σ` (disable with `with_std(false)`).
//!
//! ## Invariants
//!
//! * Fit followed by transform on the same table yields per-column mean 0
//!   and population standard deviation 1 (non-degenerate columns).
//! * Transform is a pure function of the parameters and the input.
//!
//! ## Non-goals
//!
//! * This module does not select columns by name (see `ColumnScaler`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::stats::{column_means, column_std_devs};
use crate::primitives::dataset::{LabeledSample, TrainingSet};
use crate::primitives::errors::KnnError;

// ============================================================================
// Policies
// ============================================================================

/// Behavior for predictor columns with zero variance in the fit table.
///
/// A column is degenerate when `σ <= ε · |μ|`, with `ε` the machine epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroVariancePolicy {
    /// Fail at fit time with `KnnError::DegenerateColumn`.
    #[default]
    Error,

    /// Map every value of the column to 0.
    Zero,
}

// ============================================================================
// Scaler
// ============================================================================

/// Estimator for standardization parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardScaler {
    with_mean: bool,
    with_std: bool,
    zero_variance: ZeroVariancePolicy,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardScaler {
    /// Create a scaler that centers and scales, failing on zero variance.
    pub fn new() -> Self {
        Self {
            with_mean: true,
            with_std: true,
            zero_variance: ZeroVariancePolicy::default(),
        }
    }

    /// Set whether to subtract the column mean.
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.with_mean = with_mean;
        self
    }

    /// Set whether to divide by the column standard deviation.
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.with_std = with_std;
        self
    }

    /// Set the zero-variance policy.
    pub fn zero_variance_policy(mut self, policy: ZeroVariancePolicy) -> Self {
        self.zero_variance = policy;
        self
    }

    /// Estimate per-column parameters from row-major `rows`.
    pub fn fit<T: Float, R: AsRef<[T]>>(&self, rows: &[R]) -> Result<ScalingParameters<T>, KnnError> {
        let dimensions = Validator::validate_rows(rows)?;

        let means = column_means(rows, dimensions);
        let sigmas = column_std_devs(rows, &means);

        for (column, (&mean, &sigma)) in means.iter().zip(sigmas.iter()).enumerate() {
            if !mean.is_finite() || !sigma.is_finite() {
                return Err(KnnError::InvalidNumericValue(format!(
                    "column {} mean or standard deviation is not representable",
                    column
                )));
            }
        }

        let mut degenerate = vec![false; dimensions];
        if self.with_std {
            for (column, (&mean, &sigma)) in means.iter().zip(sigmas.iter()).enumerate() {
                if is_degenerate(mean, sigma) {
                    if self.zero_variance == ZeroVariancePolicy::Error {
                        return Err(KnnError::DegenerateColumn { column });
                    }
                    degenerate[column] = true;
                }
            }
        }

        let means = if self.with_mean {
            means
        } else {
            vec![T::zero(); dimensions]
        };
        let std_devs = if self.with_std {
            sigmas
        } else {
            vec![T::one(); dimensions]
        };

        log::debug!(
            "fitted standard scaler on {} rows x {} columns ({} degenerate)",
            rows.len(),
            dimensions,
            degenerate.iter().filter(|&&d| d).count()
        );

        Ok(ScalingParameters {
            means,
            std_devs,
            degenerate,
            policy: self.zero_variance,
        })
    }

    /// Estimate parameters from a row-major flattened array.
    pub fn fit_flat<T: Float>(
        &self,
        values: &[T],
        dimensions: usize,
    ) -> Result<ScalingParameters<T>, KnnError> {
        if dimensions == 0 {
            return Err(KnnError::InvalidInput("dimensions must be at least 1".into()));
        }
        if values.len() % dimensions != 0 {
            return Err(KnnError::InvalidInput(format!(
                "{} values is not a multiple of {} columns",
                values.len(),
                dimensions
            )));
        }
        let rows: Vec<&[T]> = values.chunks(dimensions).collect();
        self.fit(&rows)
    }

    /// Estimate parameters from the features of a training set.
    pub fn fit_training_set<T: Float, L>(
        &self,
        training_set: &TrainingSet<T, L>,
    ) -> Result<ScalingParameters<T>, KnnError> {
        let rows: Vec<&[T]> = training_set.samples().iter().map(|s| s.features()).collect();
        self.fit(&rows)
    }

    /// Fit on `rows` and return the parameters with the transformed rows.
    pub fn fit_transform<T: Float, R: AsRef<[T]>>(
        &self,
        rows: &[R],
    ) -> Result<(ScalingParameters<T>, Vec<Vec<T>>), KnnError> {
        let params = self.fit(rows)?;
        let scaled = params.transform(rows)?;
        Ok((params, scaled))
    }
}

/// Whether `sigma` is indistinguishable from zero relative to the column's magnitude.
///
/// The threshold is purely relative, so a column of tiny but varying values
/// is not degenerate; a column centered on zero is degenerate only if σ is 0.
#[inline]
fn is_degenerate<T: Float>(mean: T, sigma: T) -> bool {
    sigma <= T::epsilon() * mean.abs()
}

// ============================================================================
// Parameters
// ============================================================================

/// Per-column standardization coefficients estimated from one fit table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingParameters<T> {
    means: Vec<T>,
    std_devs: Vec<T>,
    degenerate: Vec<bool>,
    policy: ZeroVariancePolicy,
}

impl<T: Float> ScalingParameters<T> {
    /// Number of columns the parameters were fit on.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.means.len()
    }

    /// Per-column means subtracted by `transform` (zeros if centering is off).
    #[inline]
    pub fn means(&self) -> &[T] {
        &self.means
    }

    /// Per-column divisors used by `transform` (ones if scaling is off).
    #[inline]
    pub fn std_devs(&self) -> &[T] {
        &self.std_devs
    }

    /// Whether `column` had zero variance in the fit table.
    pub fn is_degenerate(&self, column: usize) -> bool {
        self.degenerate.get(column).copied().unwrap_or(false)
    }

    /// The zero-variance policy the parameters were fit with.
    #[inline]
    pub fn policy(&self) -> ZeroVariancePolicy {
        self.policy
    }

    /// Standardize one value of `column`.
    #[inline]
    fn scale_value(&self, column: usize, value: T) -> T {
        if self.degenerate[column] {
            T::zero()
        } else {
            (value - self.means[column]) / self.std_devs[column]
        }
    }

    /// Standardize one feature vector.
    pub fn transform_row(&self, row: &[T]) -> Result<Vec<T>, KnnError> {
        Validator::validate_dimensions(self.dimensions(), row.len())?;
        Ok(row
            .iter()
            .enumerate()
            .map(|(column, &v)| self.scale_value(column, v))
            .collect())
    }

    /// Standardize every row of a table.
    pub fn transform<R: AsRef<[T]>>(&self, rows: &[R]) -> Result<Vec<Vec<T>>, KnnError> {
        rows.iter().map(|r| self.transform_row(r.as_ref())).collect()
    }

    /// Standardize the features of every sample, keeping labels and order.
    pub fn transform_training_set<L>(
        &self,
        training_set: TrainingSet<T, L>,
    ) -> Result<TrainingSet<T, L>, KnnError> {
        Validator::validate_dimensions(self.dimensions(), training_set.dimensions())?;
        let dimensions = training_set.dimensions();
        let samples = training_set
            .into_samples()
            .into_iter()
            .map(|s| {
                let (features, label) = s.into_parts();
                let scaled = features
                    .iter()
                    .enumerate()
                    .map(|(column, &v)| self.scale_value(column, v))
                    .collect();
                LabeledSample::new(scaled, label)
            })
            .collect();
        Ok(TrainingSet::from_validated(samples, dimensions))
    }

    /// Map standardized values back to the original units.
    ///
    /// Degenerate columns map back to their fit-table mean.
    pub fn inverse_transform_row(&self, row: &[T]) -> Result<Vec<T>, KnnError> {
        Validator::validate_dimensions(self.dimensions(), row.len())?;
        Ok(row
            .iter()
            .enumerate()
            .map(|(column, &v)| {
                if self.degenerate[column] {
                    self.means[column]
                } else {
                    v * self.std_devs[column] + self.means[column]
                }
            })
            .collect())
    }
}

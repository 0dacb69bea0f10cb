//! High-level API for KNN classification.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the classifier and its preprocessing, and a
//! fitted `KnnModel` that applies the same preprocessing to every query.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Pipeline**: Standardization parameters are fitted on the training set
//!   once and stored in the model; queries are never scaled with their own
//!   statistics.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Preparation order**: balance classes → fit scaler → transform
//!   training set → build classifier.
//! * **Column scaling**: `ColumnScaler` standardizes named columns of a
//!   `Table` and passes the others through.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KnnBuilder`] via `Knn::new()`.
//! 2. Chain configuration methods (`.k()`, `.standardize()`, etc.).
//! 3. Call `.build(training_set)` (or `.build_from_table(...)`) to get a model.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::resampling::Resampler;
pub use crate::algorithms::scaling::{ScalingParameters, StandardScaler, ZeroVariancePolicy};
pub use crate::algorithms::voting::{majority_vote, VoteTally};
pub use crate::engine::executor::{KnnClassifier, KnnConfig};
pub use crate::math::distance::{distance, DistanceMetric};
pub use crate::math::neighborhood::{Neighbor, NeighborResult, NeighborSelector};
pub use crate::primitives::dataset::{LabeledSample, TrainingSet};
pub use crate::primitives::errors::KnnError;
pub use crate::primitives::table::{Column, ColumnData, Table};

/// Number of voting neighbors when `k` is not set.
pub const DEFAULT_K: usize = 5;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a KNN classifier and its preprocessing.
#[derive(Debug, Clone)]
pub struct KnnBuilder<T> {
    /// Number of voting neighbors.
    pub k: Option<usize>,

    /// Distance metric used to rank neighbors.
    pub distance_metric: Option<DistanceMetric<T>>,

    /// Standardize predictors before building the classifier.
    pub standardize: Option<bool>,

    /// Subtract column means when standardizing.
    pub with_mean: Option<bool>,

    /// Divide by column standard deviations when standardizing.
    pub with_std: Option<bool>,

    /// Behavior for zero-variance columns when standardizing.
    pub zero_variance_policy: Option<ZeroVariancePolicy>,

    /// Oversample minority classes before fitting.
    pub balance_classes: Option<bool>,

    /// Seed for class balancing.
    pub seed: Option<u64>,

    /// Parallel execution hint for batch prediction.
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for KnnBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> KnnBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            k: None,
            distance_metric: None,
            standardize: None,
            with_mean: None,
            with_std: None,
            zero_variance_policy: None,
            balance_classes: None,
            seed: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of voting neighbors (default 5).
    pub fn k(mut self, k: usize) -> Self {
        if self.k.is_some() {
            self.duplicate_param = Some("k");
        }
        self.k = Some(k);
        self
    }

    /// Set the distance metric (default Euclidean).
    pub fn distance_metric(mut self, metric: DistanceMetric<T>) -> Self {
        if self.distance_metric.is_some() {
            self.duplicate_param = Some("distance_metric");
        }
        self.distance_metric = Some(metric);
        self
    }

    /// Standardize every predictor to mean 0 and standard deviation 1.
    pub fn standardize(mut self) -> Self {
        if self.standardize.is_some() {
            self.duplicate_param = Some("standardize");
        }
        self.standardize = Some(true);
        self
    }

    /// Set whether standardization subtracts the mean. Implies `standardize`.
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        if self.with_mean.is_some() {
            self.duplicate_param = Some("with_mean");
        }
        self.with_mean = Some(with_mean);
        self
    }

    /// Set whether standardization divides by σ. Implies `standardize`.
    pub fn with_std(mut self, with_std: bool) -> Self {
        if self.with_std.is_some() {
            self.duplicate_param = Some("with_std");
        }
        self.with_std = Some(with_std);
        self
    }

    /// Set the zero-variance policy. Implies `standardize`.
    pub fn zero_variance_policy(mut self, policy: ZeroVariancePolicy) -> Self {
        if self.zero_variance_policy.is_some() {
            self.duplicate_param = Some("zero_variance_policy");
        }
        self.zero_variance_policy = Some(policy);
        self
    }

    /// Oversample minority classes up to the majority count before fitting.
    pub fn balance_classes(mut self) -> Self {
        if self.balance_classes.is_some() {
            self.duplicate_param = Some("balance_classes");
        }
        self.balance_classes = Some(true);
        self
    }

    /// Set the seed used by `balance_classes`.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set parallel execution hint for `predict_many`.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Whether any scaler option was set.
    fn standardizes(&self) -> bool {
        self.standardize.unwrap_or(false)
            || self.with_mean.is_some()
            || self.with_std.is_some()
            || self.zero_variance_policy.is_some()
    }

    /// The scaler described by this builder.
    fn scaler(&self) -> StandardScaler {
        StandardScaler::new()
            .with_mean(self.with_mean.unwrap_or(true))
            .with_std(self.with_std.unwrap_or(true))
            .zero_variance_policy(self.zero_variance_policy.unwrap_or_default())
    }

    /// Validate the configuration and fit a model on `training_set`.
    pub fn build<L: PartialEq + Clone>(
        self,
        training_set: TrainingSet<T, L>,
    ) -> Result<KnnModel<T, L>, KnnError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if self.seed.is_some() && !self.balance_classes.unwrap_or(false) {
            return Err(KnnError::InvalidInput(
                "seed is only used together with balance_classes".into(),
            ));
        }

        let config = KnnConfig {
            k: self.k.unwrap_or(DEFAULT_K),
            metric: self.distance_metric.unwrap_or(DistanceMetric::Euclidean),
            parallel: self.parallel.unwrap_or(false),
        };
        Validator::validate_metric(&config.metric)?;

        let training_set = if self.balance_classes.unwrap_or(false) {
            Resampler::balance(&training_set, self.seed)?
        } else {
            training_set
        };

        let (scaling, training_set) = if self.standardizes() {
            let params = self.scaler().fit_training_set(&training_set)?;
            let scaled = params.transform_training_set(training_set)?;
            (Some(params), scaled)
        } else {
            (None, training_set)
        };

        Ok(KnnModel {
            scaling,
            classifier: KnnClassifier::with_config(training_set, config)?,
            predictors: None,
        })
    }

    /// Select `label` and `predictors` from `table` and fit a model on them.
    ///
    /// The model remembers the predictor names so it can predict tables.
    pub fn build_from_table(
        self,
        table: &Table<T>,
        label: &str,
        predictors: &[&str],
    ) -> Result<KnnModel<T, String>, KnnError> {
        let training_set = table.training_set(label, predictors)?;
        let mut model = self.build(training_set)?;
        model.predictors = Some(predictors.iter().map(|p| String::from(*p)).collect());
        Ok(model)
    }
}

// ============================================================================
// Model
// ============================================================================

/// A fitted classifier together with the scaling applied to its training set.
#[derive(Debug, Clone)]
pub struct KnnModel<T, L> {
    scaling: Option<ScalingParameters<T>>,
    classifier: KnnClassifier<T, L>,
    predictors: Option<Vec<String>>,
}

impl<T: Float, L: PartialEq + Clone> KnnModel<T, L> {
    /// Scaling fitted on the training set, if standardization was enabled.
    #[inline]
    pub fn scaling_parameters(&self) -> Option<&ScalingParameters<T>> {
        self.scaling.as_ref()
    }

    /// The underlying classifier (its training set is in scaled units).
    #[inline]
    pub fn classifier(&self) -> &KnnClassifier<T, L> {
        &self.classifier
    }

    /// Number of voting neighbors.
    #[inline]
    pub fn k(&self) -> usize {
        self.classifier.k()
    }

    /// Predictor column names, for models built from a table.
    pub fn predictors(&self) -> Option<&[String]> {
        self.predictors.as_deref()
    }

    /// Map a raw query into the classifier's feature space.
    pub fn transform_query(&self, query: &[T]) -> Result<Vec<T>, KnnError> {
        match &self.scaling {
            Some(params) => params.transform_row(query),
            None => {
                Validator::validate_dimensions(self.classifier.dimensions(), query.len())?;
                Ok(query.to_vec())
            }
        }
    }

    /// The `k` nearest training samples to a raw query, nearest first.
    pub fn neighbors(&self, query: &[T]) -> Result<NeighborResult<'_, T, L>, KnnError> {
        let query = self.transform_query(query)?;
        self.classifier.neighbors(&query)
    }

    /// Label counts among the neighbors of a raw query.
    pub fn vote(&self, query: &[T]) -> Result<VoteTally<L>, KnnError> {
        let query = self.transform_query(query)?;
        self.classifier.vote(&query)
    }

    /// Predict the label of one raw query.
    pub fn predict_one(&self, query: &[T]) -> Result<L, KnnError> {
        let query = self.transform_query(query)?;
        self.classifier.predict_one(&query)
    }
}

impl<T, L> KnnModel<T, L>
where
    T: Float + Send + Sync,
    L: PartialEq + Clone + Send + Sync,
{
    /// Predict a label for every raw query, preserving input order.
    pub fn predict_many<Q: AsRef<[T]>>(&self, queries: &[Q]) -> Result<Vec<L>, KnnError> {
        let scaled = queries
            .iter()
            .map(|q| self.transform_query(q.as_ref()))
            .collect::<Result<Vec<_>, KnnError>>()?;
        self.classifier.predict_many(&scaled)
    }

    /// Predict a label for every row of `table`.
    ///
    /// Only available for models built with `build_from_table`; the table
    /// must contain every predictor column.
    pub fn predict_table(&self, table: &Table<T>) -> Result<Vec<L>, KnnError> {
        let predictors = self.predictors.as_ref().ok_or_else(|| {
            KnnError::InvalidInput("model was not built from a table".into())
        })?;
        let names: Vec<&str> = predictors.iter().map(String::as_str).collect();
        let rows = table.feature_rows(&names)?;
        self.predict_many(&rows)
    }
}

// ============================================================================
// Column Scaler
// ============================================================================

/// Standardizes a named subset of a table's numeric columns.
///
/// Columns that were not named at fit time pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnScaler<T> {
    columns: Vec<String>,
    parameters: ScalingParameters<T>,
}

impl<T: Float> ColumnScaler<T> {
    /// Fit `scaler` on `columns` of `table`.
    pub fn fit(scaler: &StandardScaler, table: &Table<T>, columns: &[&str]) -> Result<Self, KnnError> {
        for (i, name) in columns.iter().enumerate() {
            if columns[..i].contains(name) {
                return Err(KnnError::InvalidInput(format!(
                    "column '{}' listed more than once",
                    name
                )));
            }
        }
        let rows = table.feature_rows(columns)?;
        let parameters = scaler.fit(&rows)?;

        Ok(Self {
            columns: columns.iter().map(|c| String::from(*c)).collect(),
            parameters,
        })
    }

    /// Names of the scaled columns, in fit order.
    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Fitted coefficients, one per scaled column.
    #[inline]
    pub fn parameters(&self) -> &ScalingParameters<T> {
        &self.parameters
    }

    /// Standardize the fitted columns of `table`.
    pub fn transform(&self, table: Table<T>) -> Result<Table<T>, KnnError> {
        let names: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        let rows = table.feature_rows(&names)?;
        let scaled = self.parameters.transform(&rows)?;

        let mut out = table;
        for (j, name) in self.columns.iter().enumerate() {
            let values = scaled.iter().map(|row| row[j]).collect();
            out = out.with_numeric_column(name, values);
        }
        Ok(out)
    }

    /// Fit on `columns` of `table` and return the transformed table.
    pub fn fit_transform(
        scaler: &StandardScaler,
        table: Table<T>,
        columns: &[&str],
    ) -> Result<(Self, Table<T>), KnnError> {
        let fitted = Self::fit(scaler, &table, columns)?;
        let scaled = fitted.transform(table)?;
        Ok((fitted, scaled))
    }
}

//! Execution engine for KNN classification.
//!
//! ## Purpose
//!
//! This module provides `KnnClassifier`, which owns a training set and a
//! fixed `k` and answers queries: it selects the `k` nearest training samples
//! and returns their majority label. It is the component that coordinates
//! the neighbor selector and the vote tally.
//!
//! ## Design notes
//!
//! * **Fail at build**: `k` and metric parameters are validated when the
//!   classifier is built, so a misconfigured classifier never predicts.
//! * **Owned training set**: The set is moved in and never mutated; the
//!   classifier is `Send + Sync` when its types are.
//! * **Independent queries**: `predict_many` keeps input order and shares no
//!   mutable state between queries. With the `parallel` feature and the
//!   parallel flag set, queries are distributed with rayon, one search
//!   buffer per worker.
//!
//! ## Key concepts
//!
//! * **Prediction**: neighbors → tally (nearest first) → winner.
//! * **Explanation**: `neighbors` and `vote` expose the intermediate steps.
//!
//! ## Invariants
//!
//! * `1 <= k <= training_set.len()`.
//! * Predictions are deterministic for a fixed training set and query.
//!
//! ## Non-goals
//!
//! * This module does not scale features (see `KnnModel`).
//! * This module does not choose `k`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::voting::VoteTally;
use crate::engine::validator::Validator;
use crate::math::distance::DistanceMetric;
use crate::math::neighborhood::{NeighborResult, NeighborSelector};
use crate::primitives::buffer::NeighborSearchBuffer;
use crate::primitives::dataset::TrainingSet;
use crate::primitives::errors::KnnError;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for building a classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnnConfig<T> {
    /// Number of neighbors that vote.
    pub k: usize,
    /// Metric used to rank neighbors.
    pub metric: DistanceMetric<T>,
    /// Whether batch prediction may run in parallel.
    pub parallel: bool,
}

impl<T> KnnConfig<T> {
    /// Euclidean, sequential configuration with the given `k`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: DistanceMetric::Euclidean,
            parallel: false,
        }
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Majority-vote K-nearest-neighbors classifier.
#[derive(Debug, Clone)]
pub struct KnnClassifier<T, L> {
    training_set: TrainingSet<T, L>,
    k: usize,
    selector: NeighborSelector<T>,
    parallel: bool,
}

impl<T: Float, L: PartialEq + Clone> KnnClassifier<T, L> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a Euclidean classifier voting over `k` neighbors.
    pub fn build(training_set: TrainingSet<T, L>, k: usize) -> Result<Self, KnnError> {
        Self::with_config(training_set, KnnConfig::new(k))
    }

    /// Build a classifier from a full configuration.
    pub fn with_config(
        training_set: TrainingSet<T, L>,
        config: KnnConfig<T>,
    ) -> Result<Self, KnnError> {
        Validator::validate_k(config.k, training_set.len())?;
        Validator::validate_metric(&config.metric)?;

        log::debug!(
            "built KNN classifier: k={}, {} samples x {} features",
            config.k,
            training_set.len(),
            training_set.dimensions()
        );

        Ok(Self {
            training_set,
            k: config.k,
            selector: NeighborSelector::new(config.metric),
            parallel: config.parallel,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of neighbors that vote.
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// The training set the classifier was built from.
    #[inline]
    pub fn training_set(&self) -> &TrainingSet<T, L> {
        &self.training_set
    }

    /// Number of features each query must have.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.training_set.dimensions()
    }

    /// The metric used to rank neighbors.
    #[inline]
    pub fn metric(&self) -> &DistanceMetric<T> {
        self.selector.metric()
    }

    /// Consume the classifier and return its training set.
    pub fn into_training_set(self) -> TrainingSet<T, L> {
        self.training_set
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// The `k` nearest training samples to `query`, nearest first.
    pub fn neighbors(&self, query: &[T]) -> Result<NeighborResult<'_, T, L>, KnnError> {
        self.selector.nearest(&self.training_set, query, self.k)
    }

    /// Label counts among the `k` nearest neighbors, nearest label first.
    pub fn vote(&self, query: &[T]) -> Result<VoteTally<L>, KnnError> {
        let neighbors = self.neighbors(query)?;
        Ok(VoteTally::from_labels(neighbors.labels()))
    }

    /// Predict the label of one query.
    pub fn predict_one(&self, query: &[T]) -> Result<L, KnnError> {
        let mut buffer = NeighborSearchBuffer::new(self.k);
        self.predict_with_buffer(query, &mut buffer)
    }

    /// Predict one query using a caller-owned search buffer.
    fn predict_with_buffer(
        &self,
        query: &[T],
        buffer: &mut NeighborSearchBuffer<T>,
    ) -> Result<L, KnnError> {
        let neighbors =
            self.selector
                .nearest_with_buffer(&self.training_set, query, self.k, buffer)?;
        VoteTally::from_labels(neighbors.labels())
            .into_winner()
            .ok_or(KnnError::EmptyInput)
    }
}

impl<T, L> KnnClassifier<T, L>
where
    T: Float + Send + Sync,
    L: PartialEq + Clone + Send + Sync,
{
    /// Predict a label for every query, preserving input order.
    ///
    /// Fails on the first invalid query; no partial results are returned.
    pub fn predict_many<Q: AsRef<[T]> + Sync>(&self, queries: &[Q]) -> Result<Vec<L>, KnnError> {
        #[cfg(feature = "parallel")]
        if self.parallel && queries.len() > 1 {
            return queries
                .par_iter()
                .map_init(
                    || NeighborSearchBuffer::new(self.k),
                    |buffer, q| self.predict_with_buffer(q.as_ref(), buffer),
                )
                .collect();
        }

        let mut buffer = NeighborSearchBuffer::new(self.k);
        queries
            .iter()
            .map(|q| self.predict_with_buffer(q.as_ref(), &mut buffer))
            .collect()
    }

    /// Whether batch prediction is allowed to run in parallel.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }
}

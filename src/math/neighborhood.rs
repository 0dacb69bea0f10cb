//! Exhaustive k-nearest neighbor selection.
//!
//! ## Purpose
//!
//! This module finds the `k` training samples closest to a query vector. It
//! scans every sample once, keeping the best `k` candidates in a bounded
//! max-heap, which costs O(n log k) per query.
//!
//! ## Design notes
//!
//! * **Stable ties**: Candidates are ranked by `(distance, insertion index)`,
//!   so among equidistant samples the one inserted first is selected, and
//!   repeated queries always return the same neighbors in the same order.
//! * **Buffer reuse**: `nearest_with_buffer` accepts a caller-owned heap so
//!   batch prediction does not reallocate per query.
//! * **Trait-free**: The metric is a value (`DistanceMetric`), not a trait
//!   object.
//!
//! ## Key concepts
//!
//! * **Neighbor**: A borrowed training sample with its index and distance.
//! * **NeighborResult**: Exactly `k` neighbors, ascending by distance.
//!
//! ## Invariants
//!
//! * `1 <= k <= n_samples`; anything else is rejected before scanning.
//! * The query has the training set's dimensionality and finite values.
//!
//! ## Non-goals
//!
//! * This module does not build spatial indices or approximate search.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::distance::DistanceMetric;
use crate::primitives::buffer::{Candidate, NeighborSearchBuffer};
use crate::primitives::dataset::{LabeledSample, TrainingSet};
use crate::primitives::errors::KnnError;

// ============================================================================
// Neighbor Result
// ============================================================================

/// One training sample selected as a neighbor of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a, T, L> {
    /// Position of the sample in the training set.
    pub index: usize,
    /// The training sample.
    pub sample: &'a LabeledSample<T, L>,
    /// Distance from the query.
    pub distance: T,
}

impl<T, L> Neighbor<'_, T, L> {
    /// Label of the neighboring sample.
    #[inline]
    pub fn label(&self) -> &L {
        self.sample.label()
    }
}

/// The `k` nearest neighbors of one query, ascending by distance.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborResult<'a, T, L> {
    neighbors: Vec<Neighbor<'a, T, L>>,
}

impl<'a, T: Float, L> NeighborResult<'a, T, L> {
    /// Number of neighbors (always the requested `k`).
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if no neighbors are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors in ascending distance order.
    #[inline]
    pub fn as_slice(&self) -> &[Neighbor<'a, T, L>] {
        &self.neighbors
    }

    /// Iterate over neighbors in ascending distance order.
    pub fn iter(&self) -> impl Iterator<Item = &Neighbor<'a, T, L>> {
        self.neighbors.iter()
    }

    /// Labels of the neighbors in ascending distance order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.neighbors.iter().map(|n| n.label())
    }

    /// Training-set indices of the neighbors in ascending distance order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.neighbors.iter().map(|n| n.index)
    }

    /// Distance to the farthest selected neighbor.
    pub fn max_distance(&self) -> T {
        self.neighbors
            .last()
            .map(|n| n.distance)
            .unwrap_or_else(T::zero)
    }
}

impl<'a, T, L> IntoIterator for NeighborResult<'a, T, L> {
    type Item = Neighbor<'a, T, L>;
    type IntoIter = <Vec<Neighbor<'a, T, L>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.neighbors.into_iter()
    }
}

// ============================================================================
// Neighbor Selector
// ============================================================================

/// Full-scan k-nearest neighbor search over a training set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NeighborSelector<T> {
    metric: DistanceMetric<T>,
}

impl<T: Float> NeighborSelector<T> {
    // ------------------------------------------------------------------------
    // Public API
    // ------------------------------------------------------------------------

    /// Create a selector using the given metric.
    pub fn new(metric: DistanceMetric<T>) -> Self {
        Self { metric }
    }

    /// The metric used to rank samples.
    #[inline]
    pub fn metric(&self) -> &DistanceMetric<T> {
        &self.metric
    }

    /// Find the `k` training samples nearest to `query`.
    pub fn nearest<'a, L>(
        &self,
        training_set: &'a TrainingSet<T, L>,
        query: &[T],
        k: usize,
    ) -> Result<NeighborResult<'a, T, L>, KnnError> {
        let mut buffer = NeighborSearchBuffer::new(k);
        self.nearest_with_buffer(training_set, query, k, &mut buffer)
    }

    /// Find the `k` nearest samples, reusing `buffer` for the candidate heap.
    pub fn nearest_with_buffer<'a, L>(
        &self,
        training_set: &'a TrainingSet<T, L>,
        query: &[T],
        k: usize,
        buffer: &mut NeighborSearchBuffer<T>,
    ) -> Result<NeighborResult<'a, T, L>, KnnError> {
        Validator::validate_k(k, training_set.len())?;
        Validator::validate_dimensions(training_set.dimensions(), query.len())?;
        Validator::validate_finite(query, |j| format!("query[{}]", j))?;

        self.scan(training_set, query, k, buffer)
    }

    // ------------------------------------------------------------------------
    // Private Helpers & Algorithms
    // ------------------------------------------------------------------------

    /// Scan all samples and collect the best `k`. Inputs must be validated.
    ///
    /// Fails if a distance is not representable, since infinite distances
    /// cannot be ranked against each other.
    fn scan<'a, L>(
        &self,
        training_set: &'a TrainingSet<T, L>,
        query: &[T],
        k: usize,
        buffer: &mut NeighborSearchBuffer<T>,
    ) -> Result<NeighborResult<'a, T, L>, KnnError> {
        buffer.clear();
        buffer.ensure_capacity(k);

        for (index, sample) in training_set.samples().iter().enumerate() {
            let distance = self.metric.compute(query, sample.features());
            if !distance.is_finite() {
                return Err(KnnError::InvalidNumericValue(format!(
                    "distance from query to sample {} overflows",
                    index
                )));
            }
            buffer.offer(Candidate { index, distance }, k);
        }

        let mut ranked = Vec::with_capacity(k);
        buffer.drain_sorted(&mut ranked);

        let samples = training_set.samples();
        let neighbors = ranked
            .into_iter()
            .map(|c| Neighbor {
                index: c.index,
                sample: &samples[c.index],
                distance: c.distance,
            })
            .collect();

        log::trace!("selected {} neighbors from {} samples", k, samples.len());

        Ok(NeighborResult { neighbors })
    }
}

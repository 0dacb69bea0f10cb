//! Labeled samples and training sets.
//!
//! ## Purpose
//!
//! This module defines the in-memory data model consumed by the classifier,
//! the scaler, and the resampler: a `LabeledSample` pairs one feature vector
//! with its label, and a `TrainingSet` is an ordered, validated collection of
//! samples sharing one dimensionality.
//!
//! ## Design notes
//!
//! * **Validated once**: All invariants are checked in `TrainingSet::new`,
//!   so downstream components never re-check per sample.
//! * **Immutable**: Fields are private; samples are read through accessors.
//! * **Order-preserving**: Insertion order is kept because neighbor
//!   tie-breaking depends on it.
//!
//! ## Invariants
//!
//! * A training set is non-empty.
//! * Every sample has the same number of features (at least one).
//! * Every feature value is finite.
//!
//! ## Non-goals
//!
//! * This module does not load data from files.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KnnError;

// ============================================================================
// Labeled Sample
// ============================================================================

/// A feature vector paired with its class label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample<T, L> {
    features: Vec<T>,
    label: L,
}

impl<T, L> LabeledSample<T, L> {
    /// Create a new labeled sample.
    pub fn new(features: Vec<T>, label: L) -> Self {
        Self { features, label }
    }

    /// The predictor values of this sample.
    #[inline]
    pub fn features(&self) -> &[T] {
        &self.features
    }

    /// The class label of this sample.
    #[inline]
    pub fn label(&self) -> &L {
        &self.label
    }

    /// Number of predictor values.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.features.len()
    }

    /// Split the sample into its features and label.
    pub fn into_parts(self) -> (Vec<T>, L) {
        (self.features, self.label)
    }
}

// ============================================================================
// Training Set
// ============================================================================

/// An ordered, non-empty collection of labeled samples of equal dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet<T, L> {
    samples: Vec<LabeledSample<T, L>>,
    dimensions: usize,
}

impl<T: Float, L> TrainingSet<T, L> {
    /// Build a training set from samples, validating every invariant.
    pub fn new(samples: Vec<LabeledSample<T, L>>) -> Result<Self, KnnError> {
        let first = samples.first().ok_or(KnnError::EmptyInput)?;
        let dimensions = first.dimensions();
        if dimensions == 0 {
            return Err(KnnError::InvalidInput(
                "samples must have at least one feature".into(),
            ));
        }

        for (i, sample) in samples.iter().enumerate() {
            Validator::validate_dimensions(dimensions, sample.dimensions())?;
            Validator::validate_finite(sample.features(), |j| format!("sample[{}][{}]", i, j))?;
        }

        Ok(Self {
            samples,
            dimensions,
        })
    }

    /// Build a training set from parallel slices of feature rows and labels.
    pub fn from_rows(rows: Vec<Vec<T>>, labels: Vec<L>) -> Result<Self, KnnError> {
        if rows.len() != labels.len() {
            return Err(KnnError::InvalidInput(format!(
                "{} feature rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }
        let samples = rows
            .into_iter()
            .zip(labels)
            .map(|(features, label)| LabeledSample::new(features, label))
            .collect();
        Self::new(samples)
    }

    /// Build a training set from a row-major flattened feature array.
    pub fn from_flat(values: &[T], dimensions: usize, labels: Vec<L>) -> Result<Self, KnnError> {
        if dimensions == 0 {
            return Err(KnnError::InvalidInput("dimensions must be at least 1".into()));
        }
        if values.len() != labels.len() * dimensions {
            return Err(KnnError::InvalidInput(format!(
                "{} values cannot hold {} rows of {} features",
                values.len(),
                labels.len(),
                dimensions
            )));
        }
        let rows = values.chunks(dimensions).map(|c| c.to_vec()).collect();
        Self::from_rows(rows, labels)
    }
}

impl<T, L> TrainingSet<T, L> {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false: a training set cannot be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of predictor values per sample.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The samples in insertion order.
    #[inline]
    pub fn samples(&self) -> &[LabeledSample<T, L>] {
        &self.samples
    }

    /// Iterate over the labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.samples.iter().map(|s| s.label())
    }

    /// Consume the set and return its samples.
    pub fn into_samples(self) -> Vec<LabeledSample<T, L>> {
        self.samples
    }

    /// Rebuild a set from samples that are already known to be valid.
    pub(crate) fn from_validated(samples: Vec<LabeledSample<T, L>>, dimensions: usize) -> Self {
        debug_assert!(!samples.is_empty());
        debug_assert!(samples.iter().all(|s| s.dimensions() == dimensions));
        Self {
            samples,
            dimensions,
        }
    }
}

impl<T, L: PartialEq + Clone> TrainingSet<T, L> {
    /// Count samples per label, in order of first appearance.
    pub fn class_counts(&self) -> Vec<(L, usize)> {
        let mut counts: Vec<(L, usize)> = Vec::new();
        for label in self.labels() {
            match counts.iter_mut().find(|(l, _)| l == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label.clone(), 1)),
            }
        }
        counts
    }
}

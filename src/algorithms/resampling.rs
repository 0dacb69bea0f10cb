//! Class-balance oversampling.
//!
//! ## Purpose
//!
//! With a rare class, majority voting is biased toward the common label: a
//! query surrounded by a handful of rare samples is still outvoted by the
//! many common ones nearby. Oversampling duplicates rare-class rows until
//! every class is as large as the largest one.
//!
//! ## Design notes
//!
//! * **Keep then draw**: Every original row of a minority class is kept, and
//!   the remaining rows are drawn uniformly with replacement from that
//!   class's own members.
//! * **Output order**: Classes appear in order of first appearance; within a
//!   class the original rows come first, then the drawn rows.
//! * **Reproducible**: A seed selects `StdRng`; without one a thread-local
//!   RNG is used (a fixed seed when built without `std`).
//!
//! ## Invariants
//!
//! * Every class count in the output equals the input's majority count.
//! * Feature values are never altered; only whole samples are duplicated.
//! * The majority class passes through unchanged.
//!
//! ## Non-goals
//!
//! * This module does not synthesize new samples (no interpolation).
//! * This module does not undersample.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Internal dependencies
use crate::primitives::dataset::TrainingSet;
use crate::primitives::errors::KnnError;

/// Seed used for unseeded calls when no thread-local RNG is available.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0x5eed;

// ============================================================================
// Resampler
// ============================================================================

/// Oversampler that equalizes class counts.
pub struct Resampler;

impl Resampler {
    /// Balance class counts by oversampling every minority class.
    ///
    /// With `Some(seed)` the output is identical across calls.
    pub fn balance<T: Float, L: PartialEq + Clone>(
        training_set: &TrainingSet<T, L>,
        seed: Option<u64>,
    ) -> Result<TrainingSet<T, L>, KnnError> {
        match seed {
            Some(seed) => Self::balance_with_rng(training_set, &mut StdRng::seed_from_u64(seed)),
            #[cfg(feature = "std")]
            None => Self::balance_with_rng(training_set, &mut rand::rng()),
            #[cfg(not(feature = "std"))]
            None => Self::balance_with_rng(training_set, &mut StdRng::seed_from_u64(FALLBACK_SEED)),
        }
    }

    /// Balance class counts drawing from the supplied random source.
    pub fn balance_with_rng<T: Float, L: PartialEq + Clone, R: Rng>(
        training_set: &TrainingSet<T, L>,
        rng: &mut R,
    ) -> Result<TrainingSet<T, L>, KnnError> {
        let classes = Self::partition(training_set);
        if classes.len() < 2 {
            return Err(KnnError::TooFewClasses { got: classes.len() });
        }

        let majority = classes.iter().map(|(_, m)| m.len()).max().unwrap_or(0);
        let samples = training_set.samples();
        let mut out = Vec::with_capacity(majority * classes.len());

        for (_, members) in &classes {
            out.extend(members.iter().map(|&i| samples[i].clone()));
            for _ in members.len()..majority {
                let pick = members[rng.random_range(0..members.len())];
                out.push(samples[pick].clone());
            }
        }

        log::debug!(
            "balanced {} classes to {} samples each ({} -> {} rows)",
            classes.len(),
            majority,
            training_set.len(),
            out.len()
        );

        Ok(TrainingSet::from_validated(out, training_set.dimensions()))
    }

    /// Group sample indices by label, in order of first appearance.
    fn partition<T, L: PartialEq>(training_set: &TrainingSet<T, L>) -> Vec<(&L, Vec<usize>)> {
        let mut classes: Vec<(&L, Vec<usize>)> = Vec::new();
        for (i, label) in training_set.labels().enumerate() {
            match classes.iter_mut().find(|(l, _)| *l == label) {
                Some((_, members)) => members.push(i),
                None => classes.push((label, vec![i])),
            }
        }
        classes
    }
}

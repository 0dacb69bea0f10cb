//! Reusable scratch space for neighbor search.
//!
//! ## Purpose
//!
//! This module provides `NeighborSearchBuffer`, a bounded max-heap used by the
//! neighbor selector to keep the `k` best candidates seen so far during a
//! full scan of the training set. Reusing one buffer across many queries
//! avoids reallocating the heap for every prediction.
//!
//! ## Design notes
//!
//! * **Lexicographic key**: Candidates are ordered by `(distance, index)`, so
//!   the heap top is the worst candidate and equidistant samples are ranked
//!   by insertion order.
//! * **Capacity never shrinks**: `ensure_capacity` only grows the heap.
//! * **One buffer per worker**: Buffers are passed explicitly so parallel
//!   prediction can give each thread its own.
//!
//! ## Invariants
//!
//! * The heap never holds more than `k` candidates after `offer`.
//! * `drain_sorted` yields candidates ascending by `(distance, index)`.

// Feature-gated dependencies
#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::{self, Equal};
use num_traits::Float;

// ============================================================================
// Candidate
// ============================================================================

/// A training-sample index paired with its distance to the current query.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<T> {
    /// Position of the sample in the training set.
    pub index: usize,
    /// Distance from the query.
    pub distance: T,
}

impl<T: PartialOrd> PartialEq for Candidate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Equal
    }
}
impl<T: PartialOrd> Eq for Candidate<T> {}

impl<T: PartialOrd> PartialOrd for Candidate<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for Candidate<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Equal)
            .then(self.index.cmp(&other.index))
    }
}

// ============================================================================
// Search Buffer
// ============================================================================

/// Bounded max-heap of the best `k` candidates for one query.
#[derive(Debug, Clone)]
pub struct NeighborSearchBuffer<T> {
    heap: BinaryHeap<Candidate<T>>,
}

impl<T: Float> NeighborSearchBuffer<T> {
    /// Create a buffer able to hold `k` candidates without reallocating.
    pub fn new(k: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(k),
        }
    }

    /// Grow the heap so it can hold `k` candidates. Never shrinks.
    #[inline]
    pub fn ensure_capacity(&mut self, k: usize) {
        let cap = self.heap.capacity();
        if cap < k {
            self.heap.reserve(k - self.heap.len());
        }
    }

    /// Remove all candidates, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Number of candidates currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no candidates are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offer a candidate; keeps it only if it ranks among the best `k`.
    #[inline]
    pub fn offer(&mut self, candidate: Candidate<T>, k: usize) {
        if self.heap.len() < k {
            self.heap.push(candidate);
        } else if let Some(mut worst) = self.heap.peek_mut() {
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    /// Move the held candidates into `out`, ascending by `(distance, index)`.
    pub fn drain_sorted(&mut self, out: &mut Vec<Candidate<T>>) {
        out.clear();
        out.extend(self.heap.drain());
        out.sort_unstable();
    }
}

impl<T: Float> Default for NeighborSearchBuffer<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

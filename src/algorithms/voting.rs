//! Majority voting over neighbor labels.
//!
//! ## Purpose
//!
//! This module turns the labels of the `k` nearest neighbors into a single
//! predicted label: the label that occurs most often wins.
//!
//! ## Design notes
//!
//! * **First-seen order**: Labels are tallied in the order they are fed in.
//!   The classifier feeds them in ascending distance order, so the tally's
//!   order is "nearest neighbor first".
//! * **Tie-break**: Among labels sharing the maximum count, the one seen
//!   first wins, i.e. the label of the nearest neighbor among the tied
//!   labels. An odd `k` avoids ties for two classes.
//! * **No hashing**: `k` is small, so a linear scan over a `Vec` is used and
//!   labels only need `PartialEq`.
//!
//! ## Invariants
//!
//! * The sum of all counts equals the number of labels tallied.
//! * `winner` is `None` only for an empty tally.
//!
//! ## Non-goals
//!
//! * This module does not weight votes by distance.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Vote Tally
// ============================================================================

/// Label counts among a query's neighbors, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally<L> {
    counts: Vec<(L, usize)>,
    total: usize,
}

impl<L: PartialEq + Clone> VoteTally<L> {
    /// Tally labels in the order given.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        let mut counts: Vec<(L, usize)> = Vec::new();
        let mut total = 0;
        for label in labels {
            total += 1;
            match counts.iter_mut().find(|(l, _)| l == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label.clone(), 1)),
            }
        }
        Self { counts, total }
    }

    /// The winning label, with ties resolved in favor of the first-seen label.
    pub fn winner(&self) -> Option<&L> {
        let mut best: Option<&(L, usize)> = None;
        for entry in &self.counts {
            // Strictly greater keeps the earliest label on ties.
            match best {
                Some(b) if entry.1 <= b.1 => {}
                _ => best = Some(entry),
            }
        }
        best.map(|(label, _)| label)
    }

    /// Consume the tally and return the winning label.
    pub fn into_winner(self) -> Option<L> {
        self.winner().cloned()
    }

    /// Number of votes for `label`.
    pub fn count(&self, label: &L) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Whether two or more labels share the maximum count.
    pub fn is_tie(&self) -> bool {
        let max = self.counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
        self.counts.iter().filter(|(_, c)| *c == max).count() > 1
    }
}

impl<L> VoteTally<L> {
    /// `(label, count)` pairs in first-seen order.
    #[inline]
    pub fn counts(&self) -> &[(L, usize)] {
        &self.counts
    }

    /// Total number of votes cast.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }
}

/// Majority label of `labels`, ties going to the first-seen label.
pub fn majority_vote<'a, L, I>(labels: I) -> Option<L>
where
    L: PartialEq + Clone + 'a,
    I: IntoIterator<Item = &'a L>,
{
    VoteTally::from_labels(labels).into_winner()
}

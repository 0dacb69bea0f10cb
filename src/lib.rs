//! # KNN — K-Nearest-Neighbors Classification for Rust
//!
//! A small, dependable implementation of majority-vote K-nearest-neighbors
//! classification, together with the preprocessing it needs in practice:
//! feature standardization and class-balance oversampling.
//!
//! ## What is KNN?
//!
//! A K-nearest-neighbors classifier predicts the label of a new observation
//! from the labels of the `k` training observations closest to it. Distances
//! are computed in predictor space (straight-line Euclidean distance by
//! default), and the label held by most of those `k` neighbors wins.
//!
//! **Things that matter in practice:**
//! - Predictors on different scales must be standardized, otherwise the
//!   predictor with the largest units dominates every distance.
//! - A rare class is systematically outvoted; oversampling it restores
//!   balance before the classifier is built.
//! - An odd `k` avoids ties between two classes.
//!
//! **How a prediction is made:**
//!
//! 1. Standardize the query with the parameters fitted on the training set
//! 2. Compute the distance from the query to every training sample
//! 3. Keep the `k` nearest (ties broken by training order)
//! 4. Return the most common label among them (ties go to the nearer label)
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use knn_rs::prelude::*;
//!
//! // Five standardized (Perimeter, Concavity) observations
//! let training_set = TrainingSet::from_rows(
//!     vec![
//!         vec![0.24, 2.65],
//!         vec![0.75, 2.87],
//!         vec![0.62, 2.54],
//!         vec![0.42, 2.31],
//!         vec![-1.16, 4.04],
//!     ],
//!     vec!["Benign", "Malignant", "Malignant", "Malignant", "Benign"],
//! )?;
//!
//! let model = Knn::new().k(5).build(training_set)?;
//!
//! assert_eq!(model.predict_one(&[0.0, 3.5])?, "Malignant");
//! # Result::<(), KnnError>::Ok(())
//! ```
//!
//! ### Tables and Standardization
//!
//! ```rust
//! use knn_rs::prelude::*;
//!
//! let cancer = Table::new(vec![
//!     Column::numeric("Area", vec![500.0, 520.0, 1500.0, 1450.0, 480.0, 1600.0]),
//!     Column::numeric("Smoothness", vec![0.07, 0.08, 0.10, 0.11, 0.075, 0.105]),
//!     Column::categorical("Class", vec!["B", "B", "M", "M", "B", "M"]),
//! ])?;
//!
//! // Scaling is fitted on the training table and reused for every query
//! let model = Knn::new()
//!     .k(3)
//!     .standardize()
//!     .build_from_table(&cancer, "Class", &["Area", "Smoothness"])?;
//!
//! let new_observations = Table::new(vec![
//!     Column::numeric("Area", vec![500.0, 1500.0]),
//!     Column::numeric("Smoothness", vec![0.075, 0.1]),
//! ])?;
//!
//! assert_eq!(model.predict_table(&new_observations)?, vec!["B", "M"]);
//! # Result::<(), KnnError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, KnnError>`. Errors are raised
//! eagerly, when a model is built or a scaler is fitted, and always name the
//! offending value:
//!
//! ```rust
//! use knn_rs::prelude::*;
//!
//! let training_set = TrainingSet::from_rows(
//!     vec![vec![0.0, 0.0], vec![1.0, 1.0]],
//!     vec!["a", "b"],
//! )?;
//!
//! match Knn::new().k(3).build(training_set) {
//!     Err(KnnError::InvalidK { k, n_samples }) => {
//!         assert_eq!((k, n_samples), (3, 2));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! # Result::<(), KnnError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! All builder parameters have sensible defaults. Each can be set once.
//!
//! | Parameter                | Default     | Description                                      |
//! |--------------------------|-------------|--------------------------------------------------|
//! | **k**                    | 5           | Number of voting neighbors, `1 <= k <= n`        |
//! | **distance_metric**      | `Euclidean` | `Euclidean`, `Manhattan`, `Chebyshev`, `Minkowski(p)` |
//! | **standardize**          | off         | Fit a standard scaler on the training set        |
//! | **with_mean**            | true        | Center when standardizing                        |
//! | **with_std**             | true        | Scale to unit deviation when standardizing       |
//! | **zero_variance_policy** | `Error`     | `Error` fails the fit, `Zero` maps the column to 0 |
//! | **balance_classes**      | off         | Oversample minority classes before fitting       |
//! | **seed**                 | none        | Make `balance_classes` reproducible              |
//! | **parallel**             | false       | Run `predict_many` on rayon (feature `parallel`) |
//!
//! ### Class Balancing
//!
//! ```rust
//! use knn_rs::prelude::*;
//!
//! let mut rows = vec![vec![0.0, 0.0]; 8];
//! let mut labels = vec!["common"; 8];
//! rows.push(vec![5.0, 5.0]);
//! labels.push("rare");
//!
//! let training_set = TrainingSet::from_rows(rows, labels)?;
//! let balanced = Resampler::balance(&training_set, Some(42))?;
//!
//! assert_eq!(balanced.class_counts(), vec![("common", 8), ("rare", 8)]);
//! # Result::<(), KnnError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! knn-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, unseeded class balancing uses a fixed seed.
//!
//! ## Logging
//!
//! The crate emits `debug` records through the `log` facade when a
//! classifier is built, a scaler is fitted or classes are balanced, and
//! `trace` records per neighbor search. No logger is installed.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type, labeled samples and training sets, named-column
// tables, and the bounded neighbor heap.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains distance metrics, column statistics, and k-nearest selection.
mod math;

// Layer 3: Algorithms - preprocessing and voting.
//
// Contains standardization, majority voting, and class-balance oversampling.
mod algorithms;

// Layer 4: Engine - validation and classification.
//
// Contains the central validator and the KNN classifier.
mod engine;

// High-level fluent API.
//
// Provides the `Knn` builder, the fitted `KnnModel`, and `ColumnScaler`.
mod api;

// ============================================================================
// Public API
// ============================================================================

pub use api::*;

// ============================================================================
// Prelude
// ============================================================================

/// Standard KNN prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use knn_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        distance, majority_vote, Column, ColumnData, ColumnScaler,
        DistanceMetric::{self, Chebyshev, Euclidean, Manhattan, Minkowski},
        KnnBuilder as Knn, KnnClassifier, KnnConfig, KnnError, KnnModel, LabeledSample, Neighbor,
        NeighborResult, NeighborSelector, Resampler, ScalingParameters, StandardScaler, Table,
        TrainingSet, VoteTally, ZeroVariancePolicy,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal preprocessing and voting algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

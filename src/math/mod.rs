//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout KNN:
//! - Distance metrics between feature vectors
//! - Column statistics (mean, population standard deviation)
//! - Exhaustive k-nearest neighbor selection
//!
//! These are reusable mathematical building blocks with no classifier-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Distance metrics.
pub mod distance;

/// Column mean and standard deviation.
pub mod stats;

/// K-nearest neighbor selection.
pub mod neighborhood;

//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the KNN building blocks that operate on whole tables
//! or neighbor sets:
//! - Standardization (fit / transform)
//! - Majority voting with a nearest-first tie-break
//! - Class-balance oversampling
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Feature standardization.
pub mod scaling;

/// Majority voting.
pub mod voting;

/// Class-balance oversampling.
pub mod resampling;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every other layer builds on:
//! - The crate error type
//! - Labeled samples and training sets
//! - Named-column tables
//! - Reusable neighbor-search buffers
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for all fallible operations.
pub mod errors;

/// Labeled samples and training sets.
pub mod dataset;

/// Named-column tables.
pub mod table;

/// Bounded heap buffers for neighbor search.
pub mod buffer;

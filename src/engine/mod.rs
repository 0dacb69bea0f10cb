//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates configuration and runs classification:
//! - Fail-fast validation shared by every layer
//! - The majority-vote classifier
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and parameter validation.
pub mod validator;

/// The KNN classifier.
pub mod executor;

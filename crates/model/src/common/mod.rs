//! Common types used throughout the memory-hierarchy model.
//!
//! This module provides the fundamental building blocks shared across all
//! components of the model. It includes:
//! 1. **Address Type:** A strong type for block addresses in the working set.
//! 2. **Access Outcomes:** The hit/miss classification carried with every request.
//! 3. **Error Handling:** The crate-wide error type for config, run, and persistence failures.

/// Block address type definition.
pub mod addr;

/// Access outcome definitions.
pub mod data;

/// Error types for the model.
pub mod error;

pub use addr::BlockAddr;
pub use data::AccessOutcome;
pub use error::Error;

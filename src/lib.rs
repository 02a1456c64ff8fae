//! Compact JSON serialization for a dynamically-typed value tree.
//!
//! Output is produced in two passes over the same tree: an estimator
//! computes the encoded length, then an encoder writes into a buffer of
//! exactly that size without growing it.

/// Value model, size estimation, and pre-sized buffer encoding.
pub mod json;

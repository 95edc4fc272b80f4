//! Graph representation
//!
//! This module turns a sentence's dependency edges into the dense weight
//! matrix consumed by the shortest-path solvers.

pub mod matrix;
pub mod weight;

pub use matrix::Matrix;
pub use weight::WeightMatrix;

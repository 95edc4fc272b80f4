//! Weight matrix construction from a sentence's dependency edges
//!
//! Dependency edges are treated as undirected for distance purposes; the
//! direction survives separately in the tokens' edge records and is only
//! consulted again when a [`Path`](crate::path::Path) is built.

use super::matrix::Matrix;
use crate::error::{DepPathError, Result};
use crate::types::{Sentence, TokenId};

/// Cost of traversing one dependency edge
pub const EDGE_WEIGHT: f64 = 1.0;

/// Symmetric V×V adjacency matrix with unit edge costs
///
/// - `w[u][u] == 0`
/// - `w[u][v] == 1` if `u` and `v` share a dependency edge (either direction)
/// - `w[u][v] == +inf` otherwise
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    inner: Matrix<f64>,
}

impl WeightMatrix {
    /// Build the weight matrix of a sentence
    ///
    /// Edges pointing outside the sentence are skipped; sentence validation
    /// reports them before this point when enabled.
    pub fn from_sentence(sentence: &Sentence) -> Self {
        let n = sentence.len();
        let mut inner = Matrix::filled(n, f64::INFINITY);

        for from_token in sentence {
            for edge in &from_token.dependency_to {
                // set() ignores out-of-range ids
                inner.set(from_token.id, edge.token, EDGE_WEIGHT);
                inner.set(edge.token, from_token.id, EDGE_WEIGHT);
            }
        }

        // Diagonal last, so a self-loop edge cannot leave a 1 on it
        for u in 0..n {
            *inner.at_mut(u, u) = 0.0;
        }

        Self { inner }
    }

    /// Wrap caller-supplied weights after checking the solver preconditions
    ///
    /// Rejects non-square input, NaN or negative weights, a non-zero
    /// diagonal and asymmetric weights.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let inner = Matrix::from_rows(rows)
            .ok_or_else(|| DepPathError::InvalidWeightMatrix("matrix is not square".into()))?;

        let n = inner.size();
        for i in 0..n {
            for j in 0..n {
                let w = *inner.at(i, j);
                if w.is_nan() || w < 0.0 {
                    return Err(DepPathError::InvalidWeightMatrix(format!(
                        "weight[{i}][{j}] = {w} is not a non-negative number"
                    )));
                }
                if i == j && w != 0.0 {
                    return Err(DepPathError::InvalidWeightMatrix(format!(
                        "diagonal weight[{i}][{i}] = {w} must be 0"
                    )));
                }
            }
        }
        if !inner.is_symmetric() {
            return Err(DepPathError::InvalidWeightMatrix(
                "matrix is not symmetric".into(),
            ));
        }

        Ok(Self { inner })
    }

    /// Number of vertices (tokens)
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Check if the matrix has no vertices
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Weight of `(u, v)`, `+inf` when unconnected or out of range
    pub fn weight(&self, u: TokenId, v: TokenId) -> f64 {
        self.inner.get(u, v).copied().unwrap_or(f64::INFINITY)
    }

    /// Whether `u != v` are directly connected
    pub fn are_neighbors(&self, u: TokenId, v: TokenId) -> bool {
        u != v && self.weight(u, v).is_finite()
    }

    /// Iterate over the direct neighbors of `u` with their weights
    pub fn neighbors(&self, u: TokenId) -> impl Iterator<Item = (TokenId, f64)> + '_ {
        self.inner
            .row(u)
            .iter()
            .enumerate()
            .filter(move |&(v, w)| v as TokenId != u && w.is_finite())
            .map(|(v, &w)| (v as TokenId, w))
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        let n = self.size();
        (0..n)
            .map(|i| (i + 1..n).filter(|&j| self.inner.at(i, j).is_finite()).count())
            .sum()
    }

    /// Underlying dense matrix
    pub fn as_matrix(&self) -> &Matrix<f64> {
        &self.inner
    }
}

//! Floyd–Warshall all-pairs shortest paths with path reconstruction
//!
//! O(V³) time and O(V²) space, which is fine for a single sentence. Solve
//! once per sentence and answer every token pair from the result.

use super::{NextHopMatrix, Route, ShortestPathSolver, ShortestPaths};
use crate::graph::{Matrix, WeightMatrix};
use crate::types::TokenId;

/// All-pairs solver
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Compute distance and next-hop matrices for every pair
    ///
    /// `next[i][j]` is initialized to `j` wherever `weight[i][j]` is finite.
    /// Each improvement through an intermediate `k` copies `next[i][k]`
    /// (the first hop toward `k`, not `k` itself), so a route can be walked
    /// forward from `i`.
    pub fn solve(&self, weight: &WeightMatrix) -> ShortestPaths {
        let n = weight.size();
        let mut dist = weight.as_matrix().clone();
        let mut next: NextHopMatrix = Matrix::filled(n, None);

        for i in 0..n {
            for j in 0..n {
                if dist.at(i, j).is_finite() {
                    *next.at_mut(i, j) = Some(j as TokenId);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let dist_i_k = *dist.at(i, k);
                if dist_i_k.is_infinite() {
                    continue;
                }
                let hop_i_k = *next.at(i, k);

                for j in 0..n {
                    let through_k = dist_i_k + *dist.at(k, j);
                    if through_k < *dist.at(i, j) {
                        *dist.at_mut(i, j) = through_k;
                        *next.at_mut(i, j) = hop_i_k;
                    }
                }
            }
        }

        ShortestPaths { dist, next }
    }
}

impl ShortestPathSolver for FloydWarshall {
    fn name(&self) -> &'static str {
        "floyd_warshall"
    }

    fn route(&self, weight: &WeightMatrix, source: TokenId, target: TokenId) -> Route {
        let paths = self.solve(weight);
        let tokens = paths.path_tokens(source, target);
        if tokens.is_empty() {
            return Route::unreachable();
        }
        Route {
            tokens,
            distance: paths.distance(source, target),
        }
    }
}

//! Shortest-path solvers
//!
//! This module provides the all-pairs Floyd–Warshall solver, whose
//! next-hop matrix answers every token-pair query of a sentence, and a
//! single-source Dijkstra solver for one-off queries.

pub mod dijkstra;
pub mod floyd_warshall;

use serde::Serialize;

pub use dijkstra::{Dijkstra, SingleSourcePaths};
pub use floyd_warshall::FloydWarshall;

use crate::graph::{Matrix, WeightMatrix};
use crate::path::reconstruct::walk_next_hops;
use crate::types::TokenId;

/// `dist[u][v]`: number of edges on the shortest u→v path, `+inf` if none
pub type DistanceMatrix = Matrix<f64>;

/// `next[u][v]`: first token after `u` on the shortest u→v path, `None` if
/// `v` is unreachable from `u`
pub type NextHopMatrix = Matrix<Option<TokenId>>;

/// All-pairs result: distances plus the next-hop matrix for reconstruction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub dist: DistanceMatrix,
    pub next: NextHopMatrix,
}

impl ShortestPaths {
    /// Number of tokens covered
    pub fn size(&self) -> usize {
        self.dist.size()
    }

    /// Distance from `u` to `v` (`+inf` when unreachable or out of range)
    pub fn distance(&self, u: TokenId, v: TokenId) -> f64 {
        self.dist.get(u, v).copied().unwrap_or(f64::INFINITY)
    }

    /// Distance as an edge count, `None` when unreachable
    pub fn hops(&self, u: TokenId, v: TokenId) -> Option<u32> {
        let d = self.distance(u, v);
        d.is_finite().then_some(d as u32)
    }

    /// First hop from `u` toward `v`
    pub fn next_hop(&self, u: TokenId, v: TokenId) -> Option<TokenId> {
        self.next.get(u, v).copied().flatten()
    }

    /// Whether `v` is reachable from `u`
    pub fn is_reachable(&self, u: TokenId, v: TokenId) -> bool {
        self.next_hop(u, v).is_some()
    }

    /// Token ids on the shortest u→v path, empty when unreachable
    pub fn path_tokens(&self, u: TokenId, v: TokenId) -> Vec<TokenId> {
        walk_next_hops(&self.next, u, v)
    }
}

/// A single reconstructed route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Token ids from source to target; empty when unreachable
    pub tokens: Vec<TokenId>,
    /// Route length, `+inf` when unreachable
    pub distance: f64,
}

impl Route {
    /// The "no path" route
    pub fn unreachable() -> Self {
        Self {
            tokens: Vec::new(),
            distance: f64::INFINITY,
        }
    }

    /// Whether the route connects its endpoints
    pub fn is_reachable(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// A solver able to answer one source/target query on a weight matrix
///
/// Both solvers agree on distances; on graphs with several equally short
/// routes they may pick different ones. Dependency trees have exactly one.
pub trait ShortestPathSolver {
    /// Short, stable identifier (e.g. `"floyd_warshall"`)
    fn name(&self) -> &'static str;

    /// Shortest route from `source` to `target`
    fn route(&self, weight: &WeightMatrix, source: TokenId, target: TokenId) -> Route;
}

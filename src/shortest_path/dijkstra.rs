//! Single-source Dijkstra with early exit at the target
//!
//! An O(V²) alternative to the all-pairs solver when a sentence only needs
//! one token pair. The unvisited set starts with every vertex except the
//! source, selection is by minimal tentative distance, and only existing
//! edges are relaxed.

use super::{Route, ShortestPathSolver};
use crate::graph::WeightMatrix;
use crate::types::TokenId;

/// Single-source, single-target solver
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

/// Distances and predecessors from one source
///
/// Only settled vertices carry final distances: the search stops as soon as
/// the target is settled, so farther vertices may keep tentative values.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleSourcePaths {
    pub source: TokenId,
    pub dist: Vec<f64>,
    pub prev: Vec<Option<TokenId>>,
    pub settled: Vec<bool>,
}

impl SingleSourcePaths {
    /// Distance from the source to `v` (`+inf` when unknown or out of range)
    pub fn distance(&self, v: TokenId) -> f64 {
        self.dist.get(v as usize).copied().unwrap_or(f64::INFINITY)
    }

    /// Whether the distance to `v` is final
    pub fn is_settled(&self, v: TokenId) -> bool {
        self.settled.get(v as usize).copied().unwrap_or(false)
    }

    /// Token ids from the source to `v`, empty unless `v` is settled
    pub fn route_to(&self, v: TokenId) -> Vec<TokenId> {
        if !self.is_settled(v) {
            return Vec::new();
        }

        let mut tokens = vec![v];
        let mut current = v;
        while current != self.source {
            match self.prev[current as usize] {
                Some(p) => {
                    tokens.push(p);
                    current = p;
                }
                None => return Vec::new(),
            }
            // prev links strictly shorten the distance, but never walk forever
            if tokens.len() > self.dist.len() {
                return Vec::new();
            }
        }
        tokens.reverse();
        tokens
    }

    /// First token after the source on the route to `v`
    ///
    /// This is the source's row of a next-hop matrix, computed forward from
    /// the predecessor links.
    pub fn first_hop(&self, v: TokenId) -> Option<TokenId> {
        let route = self.route_to(v);
        match route.len() {
            0 => None,
            1 => Some(v),
            _ => Some(route[1]),
        }
    }
}

impl Dijkstra {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Search from `source` until `target` is settled or nothing reachable
    /// remains
    pub fn solve(&self, weight: &WeightMatrix, source: TokenId, target: TokenId) -> SingleSourcePaths {
        let n = weight.size();
        let mut dist = vec![f64::INFINITY; n];
        let mut prev = vec![None; n];
        let mut settled = vec![false; n];

        let s = source as usize;
        if s >= n {
            return SingleSourcePaths {
                source,
                dist,
                prev,
                settled,
            };
        }

        dist[s] = 0.0;
        settled[s] = true;
        for (v, w) in weight.neighbors(source) {
            dist[v as usize] = w;
            prev[v as usize] = Some(source);
        }

        while source != target {
            // min_by keeps the first of equal minima, so ties go to the lower id
            let closest = (0..n)
                .filter(|&v| !settled[v] && dist[v].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]));

            let Some(u) = closest else {
                break;
            };
            settled[u] = true;
            if u == target as usize {
                break;
            }

            for (v, w) in weight.neighbors(u as TokenId) {
                let v = v as usize;
                if settled[v] {
                    continue;
                }
                let through_u = dist[u] + w;
                if through_u < dist[v] {
                    dist[v] = through_u;
                    prev[v] = Some(u as TokenId);
                }
            }
        }

        SingleSourcePaths {
            source,
            dist,
            prev,
            settled,
        }
    }
}

impl ShortestPathSolver for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn route(&self, weight: &WeightMatrix, source: TokenId, target: TokenId) -> Route {
        let paths = self.solve(weight, source, target);
        let tokens = paths.route_to(target);
        if tokens.is_empty() {
            return Route::unreachable();
        }
        Route {
            tokens,
            distance: paths.distance(target),
        }
    }
}

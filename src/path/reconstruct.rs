//! Next-hop matrix walking
//!
//! After one O(V³) solve, any route is recovered in time linear in its
//! length by repeatedly following `next[current][target]`.

use super::Path;
use crate::error::Result;
use crate::shortest_path::NextHopMatrix;
use crate::types::{Sentence, TokenId};

/// Token ids on the route from `u` to `v`, empty when `v` is unreachable
///
/// A chain that breaks or runs longer than the sentence (impossible for a
/// matrix produced by [`FloydWarshall`](crate::shortest_path::FloydWarshall))
/// also yields an empty route.
pub fn walk_next_hops(next: &NextHopMatrix, u: TokenId, v: TokenId) -> Vec<TokenId> {
    let hop = |from: TokenId| next.get(from, v).copied().flatten();

    if hop(u).is_none() {
        return Vec::new();
    }

    let mut tokens = vec![u];
    let mut current = u;
    while current != v {
        match hop(current) {
            Some(h) => {
                tokens.push(h);
                current = h;
            }
            None => return Vec::new(),
        }
        if tokens.len() > next.size() {
            return Vec::new();
        }
    }
    tokens
}

/// Build the [`Path`] from `u` to `v` out of a next-hop matrix
pub fn reconstruct<'a>(
    u: TokenId,
    v: TokenId,
    next: &NextHopMatrix,
    sentence: &'a Sentence,
) -> Result<Path<'a>> {
    Path::from_ids(sentence, &walk_next_hops(next, u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Matrix, WeightMatrix};
    use crate::shortest_path::FloydWarshall;

    fn chain_sentence() -> Sentence {
        Sentence::builder()
            .token("T0")
            .token("T1")
            .token("T2")
            .token("T3")
            .dependency(0, 1, "nsubj")
            .dependency(1, 2, "dobj")
            .build()
    }

    #[test]
    fn test_walk_follows_next_hops() {
        let sentence = chain_sentence();
        let paths = FloydWarshall.solve(&WeightMatrix::from_sentence(&sentence));

        assert_eq!(walk_next_hops(&paths.next, 0, 2), vec![0, 1, 2]);
        assert_eq!(walk_next_hops(&paths.next, 2, 0), vec![2, 1, 0]);
        assert_eq!(walk_next_hops(&paths.next, 1, 1), vec![1]);
        assert!(walk_next_hops(&paths.next, 0, 3).is_empty());
    }

    #[test]
    fn test_cyclic_next_hops_terminate() {
        // 0 -> 1 -> 0 -> ... never reaches 2
        let mut next: NextHopMatrix = Matrix::filled(3, None);
        next.set(0, 2, Some(1));
        next.set(1, 2, Some(0));
        assert!(walk_next_hops(&next, 0, 2).is_empty());
    }

    #[test]
    fn test_broken_chain_is_empty() {
        let mut next: NextHopMatrix = Matrix::filled(3, None);
        next.set(0, 2, Some(1));
        assert!(walk_next_hops(&next, 0, 2).is_empty());
    }

    #[test]
    fn test_reconstruct_builds_path() {
        let sentence = chain_sentence();
        let paths = FloydWarshall.solve(&WeightMatrix::from_sentence(&sentence));

        let path = reconstruct(0, 2, &paths.next, &sentence).unwrap();
        assert_eq!(path.token_ids(), vec![0, 1, 2]);

        let none = reconstruct(0, 3, &paths.next, &sentence).unwrap();
        assert!(none.is_empty());
    }
}

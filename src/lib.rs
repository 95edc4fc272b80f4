//! Shortest paths over sentence dependency graphs.
//!
//! A parsed sentence is treated as an undirected graph with one unit-weight
//! edge per dependency relation. Floyd–Warshall solves all pairs once; any
//! token pair is then answered by walking the next-hop matrix, and the
//! resulting [`Path`] knows, for every step, the relation label and whether
//! the step goes from head to dependent (`F`) or back (`B`).
//!
//! ```rust
//! use rapid_deppath::types::Sentence;
//!
//! let sentence = Sentence::builder()
//!     .token("mutation")
//!     .token("reduces")
//!     .token("activity")
//!     .dependency(1, 0, "nsubj")
//!     .dependency(1, 2, "dobj")
//!     .build();
//!
//! let path = rapid_deppath::compute_shortest_path(&sentence, &sentence[0], &sentence[2]).unwrap();
//! assert_eq!(path.str_directed_edge_only(), "nsubj B ~ dobj F");
//! assert_eq!(path.str_token_only(), "reduces");
//! ```
//!
//! For configuration, validation and batches see [`engine::PathEngine`].

pub mod config;
pub mod engine;
pub mod error;
pub mod features;
pub mod graph;
pub mod path;
pub mod shortest_path;
pub mod types;
pub mod validation;

pub use config::{ExistsSemantics, PathConfig, PathSpec, SolverKind};
pub use engine::{PathEngine, SentencePaths};
pub use error::{DepPathError, Result};
pub use features::PathFeatures;
pub use graph::WeightMatrix;
pub use path::{Direction, Path, PathNode};
pub use shortest_path::{Dijkstra, FloydWarshall, ShortestPathSolver, ShortestPaths};
pub use types::{DependencyEdge, Sentence, SentenceBuilder, Token, TokenId};

/// Distance and next-hop matrices for every token pair of `sentence`
///
/// The sentence is checked with the default rules first; a token with more
/// than one head fails with [`DepPathError::InvalidSentence`].
pub fn compute_shortest_paths(sentence: &Sentence) -> Result<ShortestPaths> {
    Ok(PathEngine::default().prepare(sentence)?.into_matrices())
}

/// Shortest dependency path between two tokens of `sentence`
///
/// Returns an empty path when the tokens are not connected. Validation is
/// the same as for [`compute_shortest_paths`].
pub fn compute_shortest_path<'a>(
    sentence: &'a Sentence,
    token_u: &Token,
    token_v: &Token,
) -> Result<Path<'a>> {
    PathEngine::default()
        .prepare(sentence)?
        .path(token_u.id, token_v.id)
}

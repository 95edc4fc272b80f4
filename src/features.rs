//! Path renderings bundled as relation-extraction feature values.

use serde::{Deserialize, Serialize};

use crate::config::ExistsSemantics;
use crate::path::Path;
use crate::types::TokenId;

/// String-valued features of the shortest path between two tokens
///
/// An unreachable pair produces empty strings, `distance == None` and
/// `exists == false`; callers treat that as "no feature value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathFeatures {
    pub source: TokenId,
    pub target: TokenId,
    /// Number of edges on the path
    pub distance: Option<u32>,
    pub exists: bool,
    pub full: String,
    pub token_only: String,
    pub undirected_edges: String,
    pub directed_edges: String,
}

impl PathFeatures {
    /// Render every feature of `path`
    pub fn from_path(
        source: TokenId,
        target: TokenId,
        path: &Path<'_>,
        exists: ExistsSemantics,
    ) -> Self {
        Self {
            source,
            target,
            distance: path.edge_count().map(|d| d as u32),
            exists: path.exists_with(exists),
            full: path.str_full(),
            token_only: path.str_token_only(),
            undirected_edges: path.str_undirected_edge_only(),
            directed_edges: path.str_directed_edge_only(),
        }
    }

    /// Whether the two tokens are connected at all
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

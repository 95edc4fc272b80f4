//! Directional, labeled dependency paths
//!
//! A [`Path`] wraps the token sequence of a shortest route and resolves, for
//! each consecutive pair, which token heads the other and by which relation.
//! Its string renderings are the relation-extraction features.
//!
//! # Partitioning
//!
//! | Part | Nodes |
//! |------|-------|
//! | `head` | the first node (empty for an empty path) |
//! | `middle` | interior nodes |
//! | `last` | the final, label-less node (empty for an empty path) |
//!
//! A one-token path has the same node as head and last and no middle.

pub mod node;
pub mod reconstruct;

pub use node::{Direction, PathNode};
pub use reconstruct::{reconstruct, walk_next_hops};

use crate::config::ExistsSemantics;
use crate::error::{DepPathError, Result};
use crate::types::{Sentence, Token, TokenId};

/// Default separator between rendered nodes
pub const NODE_SEPARATOR: &str = " ~ ";

/// An ordered walk between two tokens of one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    nodes: Vec<PathNode<'a>>,
    separator: String,
}

impl<'a> Path<'a> {
    /// The "no path" value
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            separator: NODE_SEPARATOR.to_string(),
        }
    }

    /// Resolve edge labels and directions along a token sequence
    ///
    /// For each pair `(u, v)`: if `v`'s head is `u` the edge is forward,
    /// else if `u`'s head is `v` it is backward, otherwise the pair is not
    /// linked and construction fails with [`DepPathError::InvalidPath`].
    pub fn from_tokens(tokens: &[&'a Token]) -> Result<Self> {
        let mut nodes = Vec::with_capacity(tokens.len());

        for pair in tokens.windows(2) {
            let (u, v) = (pair[0], pair[1]);

            let node = match (&v.dependency_from, &u.dependency_from) {
                (Some(v_from), _) if v_from.token == u.id => {
                    PathNode::new(u, &v_from.label, Some(Direction::Forward))
                }
                (_, Some(u_from)) if u_from.token == v.id => {
                    PathNode::new(u, &u_from.label, Some(Direction::Backward))
                }
                _ => return Err(DepPathError::InvalidPath { from: u.id, to: v.id }),
            };
            nodes.push(node);
        }

        if let Some(last) = tokens.last() {
            nodes.push(PathNode::terminal(*last));
        }

        Ok(Self {
            nodes,
            separator: NODE_SEPARATOR.to_string(),
        })
    }

    /// [`from_tokens`](Self::from_tokens) over token ids of `sentence`
    pub fn from_ids(sentence: &'a Sentence, ids: &[TokenId]) -> Result<Self> {
        let tokens = ids
            .iter()
            .map(|&id| {
                sentence.get(id).ok_or(DepPathError::TokenOutOfRange {
                    id,
                    len: sentence.len(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_tokens(&tokens)
    }

    /// Use a different separator between rendered nodes
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    // ─── Structure ──────────────────────────────────────────────────────

    pub fn nodes(&self) -> &[PathNode<'a>] {
        &self.nodes
    }

    /// Number of nodes (tokens) on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> &[PathNode<'a>] {
        &self.nodes[..self.nodes.len().min(1)]
    }

    pub fn middle(&self) -> &[PathNode<'a>] {
        if self.nodes.len() < 2 {
            return &[];
        }
        &self.nodes[1..self.nodes.len() - 1]
    }

    pub fn last(&self) -> &[PathNode<'a>] {
        match self.nodes.len() {
            0 => &[],
            n => &self.nodes[n - 1..],
        }
    }

    pub fn tokens(&self) -> Vec<&'a Token> {
        self.nodes.iter().map(|n| n.token).collect()
    }

    pub fn token_ids(&self) -> Vec<TokenId> {
        self.nodes.iter().map(|n| n.token.id).collect()
    }

    pub fn source(&self) -> Option<&'a Token> {
        self.nodes.first().map(|n| n.token)
    }

    pub fn target(&self) -> Option<&'a Token> {
        self.nodes.last().map(|n| n.token)
    }

    /// Number of edges, `None` for the empty path
    pub fn edge_count(&self) -> Option<usize> {
        self.nodes.len().checked_sub(1)
    }

    /// Whether the path connects two distinct tokens (at least two nodes)
    pub fn exists(&self) -> bool {
        self.exists_with(ExistsSemantics::NodeCount)
    }

    pub fn exists_with(&self, semantics: ExistsSemantics) -> bool {
        match semantics {
            ExistsSemantics::NodeCount => self.nodes.len() >= 2,
            ExistsSemantics::LegacyHead => self.head().len() >= 2,
        }
    }

    // ─── Renderings ─────────────────────────────────────────────────────

    /// Head edge context followed by the interior nodes in full
    ///
    /// The head's token text is left out, since callers already hold the
    /// start token and compose it with other features.
    pub fn str_full(&self) -> String {
        self.str_full_with(|token| token.text.clone())
    }

    /// [`str_full`](Self::str_full) with a custom token-to-text function
    /// for the interior nodes
    pub fn str_full_with<F>(&self, token_text: F) -> String
    where
        F: Fn(&Token) -> String,
    {
        self.head()
            .iter()
            .map(|n| n.str_full_with(""))
            .chain(self.middle().iter().map(|n| n.str_full_with(&token_text(n.token))))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Text of the interior tokens
    pub fn str_token_only(&self) -> String {
        self.middle()
            .iter()
            .map(|n| n.str_token_only())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Labels of head and interior nodes
    pub fn str_undirected_edge_only(&self) -> String {
        self.edge_nodes()
            .map(|n| n.str_undirected_edge_only())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Labels with direction markers of head and interior nodes
    pub fn str_directed_edge_only(&self) -> String {
        self.edge_nodes()
            .map(|n| n.str_directed_edge_only())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    fn edge_nodes(&self) -> impl Iterator<Item = &PathNode<'a>> {
        self.head().iter().chain(self.middle().iter())
    }
}

impl Default for Path<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.str_full())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `T0 -nsubj-> T1 -dobj-> T2`, `T3` isolated
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

    /// "mutation reduces activity": reduces heads both
    fn vee_sentence() -> Sentence {
        Sentence::builder()
            .token("mutation")
            .token("reduces")
            .token("activity")
            .dependency(1, 0, "nsubj")
            .dependency(1, 2, "dobj")
            .build()
    }

    #[test]
    fn test_forward_chain() {
        let sentence = chain_sentence();
        let path = Path::from_ids(&sentence, &[0, 1, 2]).unwrap();

        let nodes = path.nodes();
        assert_eq!(nodes[0].label, "nsubj");
        assert_eq!(nodes[0].direction, Some(Direction::Forward));
        assert_eq!(nodes[1].label, "dobj");
        assert_eq!(nodes[1].direction, Some(Direction::Forward));
        assert_eq!(nodes[2].label, "");
        assert_eq!(nodes[2].direction, None);
    }

    #[test]
    fn test_backward_then_forward() {
        let sentence = vee_sentence();
        let path = Path::from_ids(&sentence, &[0, 1, 2]).unwrap();

        assert_eq!(path.nodes()[0].direction, Some(Direction::Backward));
        assert_eq!(path.nodes()[0].label, "nsubj");
        assert_eq!(path.nodes()[1].direction, Some(Direction::Forward));

        assert_eq!(path.str_full(), "nsubj B ~ reduces dobj F");
        assert_eq!(path.str_token_only(), "reduces");
        assert_eq!(path.str_undirected_edge_only(), "nsubj ~ dobj");
        assert_eq!(path.str_directed_edge_only(), "nsubj B ~ dobj F");
        assert_eq!(path.to_string(), path.str_full());
    }

    #[test]
    fn test_unlinked_pair_is_invalid() {
        let sentence = chain_sentence();
        let err = Path::from_ids(&sentence, &[0, 2]).unwrap_err();
        assert!(matches!(err, DepPathError::InvalidPath { from: 0, to: 2 }));
    }

    #[test]
    fn test_out_of_range_id() {
        let sentence = chain_sentence();
        let err = Path::from_ids(&sentence, &[0, 9]).unwrap_err();
        assert!(matches!(err, DepPathError::TokenOutOfRange { id: 9, len: 4 }));
    }

    #[test]
    fn test_partitions() {
        let sentence = chain_sentence();
        let path = Path::from_ids(&sentence, &[0, 1, 2]).unwrap();
        assert_eq!(path.head().len(), 1);
        assert_eq!(path.middle().len(), 1);
        assert_eq!(path.last().len(), 1);
        assert_eq!(path.head()[0].token.id, 0);
        assert_eq!(path.middle()[0].token.id, 1);
        assert_eq!(path.last()[0].token.id, 2);
        assert_eq!(path.edge_count(), Some(2));
    }

    #[test]
    fn test_empty_path() {
        let path = Path::from_tokens(&[]).unwrap();
        assert!(path.is_empty());
        assert!(path.head().is_empty());
        assert!(path.middle().is_empty());
        assert!(path.last().is_empty());
        assert!(!path.exists());
        assert_eq!(path.edge_count(), None);
        assert_eq!(path.str_full(), "");
        assert_eq!(path, Path::default());
    }

    #[test]
    fn test_single_token_path() {
        let sentence = chain_sentence();
        let path = Path::from_ids(&sentence, &[3]).unwrap();

        assert_eq!(path.head(), path.last());
        assert!(path.middle().is_empty());
        assert!(!path.exists());
        assert_eq!(path.str_full(), "");
    }

    #[test]
    fn test_direct_edge_renderings() {
        let sentence = chain_sentence();
        let path = Path::from_ids(&sentence, &[1, 2]).unwrap();

        assert!(path.exists());
        assert_eq!(path.str_full(), "dobj F");
        assert_eq!(path.str_token_only(), "");
        assert_eq!(path.str_directed_edge_only(), "dobj F");
    }

    #[test]
    fn test_legacy_exists_is_never_true() {
        let sentence = chain_sentence();
        let path = Path::from_ids(&sentence, &[0, 1, 2]).unwrap();
        assert!(path.exists_with(ExistsSemantics::NodeCount));
        assert!(!path.exists_with(ExistsSemantics::LegacyHead));
    }

    #[test]
    fn test_custom_separator_and_token_text() {
        let sentence = chain_sentence();
        let path = Path::from_ids(&sentence, &[0, 1, 2])
            .unwrap()
            .with_separator(" | ");

        assert_eq!(path.str_full(), "nsubj F | T1 dobj F");
        assert_eq!(
            path.str_full_with(|t| t.text.to_lowercase()),
            "nsubj F | t1 dobj F"
        );
    }

    #[test]
    fn test_source_and_target() {
        let sentence = chain_sentence();
        let path = Path::from_ids(&sentence, &[2, 1, 0]).unwrap();
        assert_eq!(path.source().unwrap().id, 2);
        assert_eq!(path.target().unwrap().id, 0);
        assert_eq!(path.str_directed_edge_only(), "dobj B ~ nsubj B");
    }
}

//! A single step of a dependency path.

use serde::{Deserialize, Serialize};

use crate::types::Token;

/// Orientation of the dependency edge between a node and its successor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// The node is the head of its successor
    Forward,
    /// The node is a dependent of its successor
    Backward,
}

impl Direction {
    /// `F` or `B`
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Forward => "F",
            Self::Backward => "B",
        }
    }
}

/// A token together with the edge leading to the next token of the path
///
/// The last node of a path has an empty label and no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode<'a> {
    pub token: &'a Token,
    pub label: &'a str,
    pub direction: Option<Direction>,
}

impl<'a> PathNode<'a> {
    pub fn new(token: &'a Token, label: &'a str, direction: Option<Direction>) -> Self {
        Self {
            token,
            label,
            direction,
        }
    }

    /// Node without a successor
    pub fn terminal(token: &'a Token) -> Self {
        Self::new(token, "", None)
    }

    pub fn is_terminal(&self) -> bool {
        self.direction.is_none()
    }

    /// Token text, label and direction marker, space-separated, empty parts
    /// omitted
    pub fn str_full(&self) -> String {
        self.str_full_with(&self.token.text)
    }

    /// [`str_full`](Self::str_full) with the token text replaced
    pub fn str_full_with(&self, token_text: &str) -> String {
        join_non_empty(&[token_text, self.label, self.str_direction()])
    }

    pub fn str_token_only(&self) -> &'a str {
        &self.token.text
    }

    pub fn str_undirected_edge_only(&self) -> &'a str {
        self.label
    }

    pub fn str_directed_edge_only(&self) -> String {
        join_non_empty(&[self.label, self.str_direction()])
    }

    /// Empty unless the node has both a label and a direction
    pub fn str_direction(&self) -> &'static str {
        match self.direction {
            Some(direction) if !self.label.is_empty() => direction.marker(),
            _ => "",
        }
    }
}

impl std::fmt::Display for PathNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.str_full())
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_node() {
        let token = Token::new(0, "binds");
        let node = PathNode::new(&token, "dobj", Some(Direction::Forward));

        assert_eq!(node.str_full(), "binds dobj F");
        assert_eq!(node.str_token_only(), "binds");
        assert_eq!(node.str_undirected_edge_only(), "dobj");
        assert_eq!(node.str_directed_edge_only(), "dobj F");
        assert_eq!(node.to_string(), "binds dobj F");
    }

    #[test]
    fn test_backward_node_with_replaced_text() {
        let token = Token::new(3, "p53");
        let node = PathNode::new(&token, "nsubj", Some(Direction::Backward));

        assert_eq!(node.str_full_with(""), "nsubj B");
        assert_eq!(node.str_full_with("GENE"), "GENE nsubj B");
    }

    #[test]
    fn test_terminal_node() {
        let token = Token::new(1, "DNA");
        let node = PathNode::terminal(&token);

        assert!(node.is_terminal());
        assert_eq!(node.str_direction(), "");
        assert_eq!(node.str_full(), "DNA");
        assert_eq!(node.str_directed_edge_only(), "");
    }

    #[test]
    fn test_direction_hidden_without_label() {
        let token = Token::new(0, "x");
        let node = PathNode::new(&token, "", Some(Direction::Forward));
        assert_eq!(node.str_direction(), "");
    }
}

//! Core data types: tokens, sentences and the dependency edges between them.
//!
//! A [`Sentence`] is produced by an external dependency parser and is treated
//! as read-only by everything else in this crate. Token ids double as matrix
//! indices, so the token at position `i` must carry id `i`.

use serde::{Deserialize, Serialize};

/// Index of a token inside its sentence (and of its row/column in every matrix)
pub type TokenId = u32;

/// A labeled dependency edge as seen from one of its endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// The token on the other end of the edge
    pub token: TokenId,
    /// Dependency relation label (e.g. `nsubj`, `dobj`)
    pub label: String,
}

impl DependencyEdge {
    /// Create a new edge endpoint
    pub fn new(token: TokenId, label: impl Into<String>) -> Self {
        Self {
            token,
            label: label.into(),
        }
    }
}

/// A token with its dependency edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Position of the token in the sentence
    pub id: TokenId,
    /// Surface text
    pub text: String,
    /// Outgoing edges: this token is the head, `edge.token` the dependent
    #[serde(default)]
    pub dependency_to: Vec<DependencyEdge>,
    /// Incoming edge: `edge.token` is this token's head (None for the root)
    #[serde(default)]
    pub dependency_from: Option<DependencyEdge>,
}

impl Token {
    /// Create a token without any dependency edges
    pub fn new(id: TokenId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            dependency_to: Vec::new(),
            dependency_from: None,
        }
    }

    /// The id of this token's head, if any
    pub fn head(&self) -> Option<TokenId> {
        self.dependency_from.as_ref().map(|e| e.token)
    }

    /// Whether this token has no incoming edge
    pub fn is_root(&self) -> bool {
        self.dependency_from.is_none()
    }

    /// Matrix index of this token
    #[inline]
    pub fn index(&self) -> usize {
        self.id as usize
    }
}

/// An ordered, parsed sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Wrap parser output without any checks (see [`crate::validation`])
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Start building a sentence token by token
    pub fn builder() -> SentenceBuilder {
        SentenceBuilder::new()
    }

    /// Number of tokens (V)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by id
    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id as usize)
    }

    /// Iterate over tokens in sentence order
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Total number of outgoing dependency edges
    pub fn edge_count(&self) -> usize {
        self.tokens.iter().map(|t| t.dependency_to.len()).sum()
    }
}

impl std::ops::Index<TokenId> for Sentence {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Token {
        &self.tokens[id as usize]
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Incremental sentence construction that keeps both edge directions in sync
///
/// Every call to [`SentenceBuilder::add_dependency`] records the edge on the
/// head's outgoing list *and* as the dependent's incoming edge, which is the
/// shape path construction relies on.
#[derive(Debug, Default)]
pub struct SentenceBuilder {
    tokens: Vec<Token>,
}

impl SentenceBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Create a builder with pre-allocated token capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append a token, returning its id
    pub fn add_token(&mut self, text: impl Into<String>) -> TokenId {
        let id = self.tokens.len() as TokenId;
        self.tokens.push(Token::new(id, text));
        id
    }

    /// Chainable variant of [`add_token`](Self::add_token)
    pub fn token(mut self, text: impl Into<String>) -> Self {
        self.add_token(text);
        self
    }

    /// Record `head --label--> dependent`
    ///
    /// Unknown ids are ignored. A second head for the same dependent replaces
    /// its incoming edge but keeps the earlier outgoing entry, which the
    /// sentence validator then reports as a multi-parent token.
    pub fn add_dependency(&mut self, head: TokenId, dependent: TokenId, label: &str) {
        if head as usize >= self.tokens.len() || dependent as usize >= self.tokens.len() {
            return;
        }
        self.tokens[head as usize]
            .dependency_to
            .push(DependencyEdge::new(dependent, label));
        self.tokens[dependent as usize].dependency_from = Some(DependencyEdge::new(head, label));
    }

    /// Chainable variant of [`add_dependency`](Self::add_dependency)
    pub fn dependency(mut self, head: TokenId, dependent: TokenId, label: &str) -> Self {
        self.add_dependency(head, dependent, label);
        self
    }

    /// Number of tokens added so far
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no tokens were added
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Finish building
    pub fn build(self) -> Sentence {
        Sentence::new(self.tokens)
    }
}

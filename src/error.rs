//! Crate-wide error type.

use thiserror::Error;

use crate::types::TokenId;
use crate::validation::SpecDiagnostic;

#[derive(Debug, Error)]
pub enum DepPathError {
    /// Two consecutive tokens of a reconstructed path share no dependency
    /// edge. The next-hop matrix and the sentence's edge data disagree.
    #[error("invalid path: tokens {from} and {to} are not linked by a dependency edge")]
    InvalidPath { from: TokenId, to: TokenId },

    #[error("token {id} is out of range for a sentence of {len} tokens")]
    TokenOutOfRange { id: TokenId, len: usize },

    #[error("invalid sentence: {0}")]
    InvalidSentence(SpecDiagnostic),

    #[error("invalid weight matrix: {0}")]
    InvalidWeightMatrix(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(SpecDiagnostic),

    #[error("sentence has {tokens} tokens, exceeding the limit of {limit}")]
    LimitExceeded { tokens: usize, limit: usize },

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DepPathError>;

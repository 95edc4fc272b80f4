//! Stable, machine-readable codes attached to every diagnostic.

use serde::{Deserialize, Serialize};

/// Diagnostic code shared by sentence and configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A token's id does not match its position in the sentence.
    InvalidTokenId,
    /// A dependency edge points outside the sentence.
    DanglingEdge,
    /// A token has more than one incoming dependency edge.
    MultipleParents,
    /// Outgoing and incoming edge records disagree.
    InconsistentEdge,
    /// A token depends on itself.
    SelfLoop,
    /// The configuration document uses an unsupported version.
    UnsupportedVersion,
    /// A configuration field is not recognized.
    UnknownField,
    /// A configuration value is malformed.
    InvalidValue,
}

impl ErrorCode {
    /// The snake_case name used in JSON output and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTokenId => "invalid_token_id",
            Self::DanglingEdge => "dangling_edge",
            Self::MultipleParents => "multiple_parents",
            Self::InconsistentEdge => "inconsistent_edge",
            Self::SelfLoop => "self_loop",
            Self::UnsupportedVersion => "unsupported_version",
            Self::UnknownField => "unknown_field",
            Self::InvalidValue => "invalid_value",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

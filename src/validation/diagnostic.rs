//! A single validation finding with its location and a fix hint.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;

/// An error or warning produced by a validation rule.
///
/// `path` is a JSON pointer into the validated document, e.g.
/// `/tokens/3/dependency_from` or `/limits/max_tokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("[{code}] {path}: {message}")]
pub struct SpecDiagnostic {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SpecDiagnostic {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    /// Attach a hint on how to fix the problem.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

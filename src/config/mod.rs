//! Engine configuration.
//!
//! [`PathSpec`] is the serializable document; [`PathConfig`] is the resolved
//! runtime form consumed by [`PathEngine`](crate::engine::PathEngine).

pub mod spec;

use serde::{Deserialize, Serialize};

pub use spec::{LimitsSpec, PathSpec};

use crate::error::{DepPathError, Result};
use crate::path::NODE_SEPARATOR;
use crate::validation::{ErrorCode, SpecDiagnostic, ValidationEngine};

/// Solver used to answer a single token-pair query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    /// All-pairs Floyd–Warshall, then next-hop reconstruction.
    #[default]
    FloydWarshall,
    /// Single-source Dijkstra with early exit at the target.
    Dijkstra,
}

impl SolverKind {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "floyd_warshall" | "floyd-warshall" | "floyd" | "all_pairs" | "apsp" => {
                Some(SolverKind::FloydWarshall)
            }
            "dijkstra" | "single_source" | "single-source" | "sssp" => Some(SolverKind::Dijkstra),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FloydWarshall => "floyd_warshall",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl std::str::FromStr for SolverKind {
    type Err = DepPathError;

    fn from_str(value: &str) -> Result<Self> {
        SolverKind::parse(value).ok_or_else(|| {
            DepPathError::InvalidConfig(
                SpecDiagnostic::new(
                    ErrorCode::InvalidValue,
                    "/solver",
                    format!("unknown solver {value:?}"),
                )
                .with_hint("Use \"floyd_warshall\" or \"dijkstra\""),
            )
        })
    }
}

/// How [`Path::exists`](crate::path::Path::exists) decides that a path is
/// non-trivial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistsSemantics {
    /// At least two nodes, i.e. the endpoints differ and are connected.
    #[default]
    NodeCount,
    /// `head.len() >= 2`. Never true, since the head holds at most one node;
    /// kept only to reproduce feature sets computed with that check.
    LegacyHead,
}

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConfig {
    /// Solver for single-pair queries
    pub solver: SolverKind,
    /// Semantics of `exists()`
    pub exists: ExistsSemantics,
    /// Separator between rendered path nodes
    pub separator: String,
    /// Run sentence validation before solving
    pub validate: bool,
    /// Reject sentences longer than this
    pub max_tokens: Option<usize>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            solver: SolverKind::default(),
            exists: ExistsSemantics::default(),
            separator: NODE_SEPARATOR.to_string(),
            validate: true,
            max_tokens: None,
        }
    }
}

impl PathConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the solver
    pub fn with_solver(mut self, solver: SolverKind) -> Self {
        self.solver = solver;
        self
    }

    /// Set the `exists()` semantics
    pub fn with_exists(mut self, exists: ExistsSemantics) -> Self {
        self.exists = exists;
        self
    }

    /// Set the node separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enable or disable sentence validation
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Set the maximum sentence length
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Validate a spec and resolve it, filling defaults for omitted fields.
    ///
    /// Fails with the first error diagnostic; warnings are logged and
    /// otherwise ignored.
    pub fn from_spec(spec: &PathSpec) -> Result<Self> {
        let report = ValidationEngine::for_specs().validate(spec);

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(%warning, "path spec warning");
        }

        if let Some(err) = report.first_error() {
            return Err(DepPathError::InvalidConfig(err.clone()));
        }

        let defaults = Self::default();
        Ok(Self {
            solver: spec.solver.unwrap_or(defaults.solver),
            exists: spec.exists.unwrap_or(defaults.exists),
            separator: spec.separator.clone().unwrap_or(defaults.separator),
            validate: spec.validate.unwrap_or(defaults.validate),
            max_tokens: spec.limits.max_tokens,
        })
    }

    /// Parse, validate and resolve a JSON spec.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_spec(&PathSpec::from_json(json)?)
    }
}

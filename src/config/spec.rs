//! JSON configuration document for the path engine.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "solver": "floyd_warshall",
//!   "exists": "node_count",
//!   "separator": " ~ ",
//!   "validate": true,
//!   "limits": { "max_tokens": 512 },
//!   "strict": false
//! }
//! ```
//!
//! Every field except `v` is optional. [`PathConfig::from_spec`] resolves a
//! validated spec into the runtime configuration.
//!
//! [`PathConfig::from_spec`]: super::PathConfig::from_spec

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{ExistsSemantics, SolverKind};

/// Top-level engine specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Which solver answers single-pair queries.
    #[serde(default)]
    pub solver: Option<SolverKind>,

    /// Semantics of [`Path::exists`](crate::path::Path::exists).
    #[serde(default)]
    pub exists: Option<ExistsSemantics>,

    /// Separator placed between rendered path nodes.
    #[serde(default)]
    pub separator: Option<String>,

    /// Whether sentences are validated before matrices are built.
    #[serde(default)]
    pub validate: Option<bool>,

    /// Size limits.
    #[serde(default)]
    pub limits: LimitsSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl PathSpec {
    /// Parse a spec from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for PathSpec {
    fn default() -> Self {
        Self {
            v: 1,
            solver: None,
            exists: None,
            separator: None,
            validate: None,
            limits: LimitsSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Size limits (fail-fast guards against the O(V³) solve).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsSpec {
    /// Maximum number of tokens in a sentence before rejecting.
    #[serde(default)]
    pub max_tokens: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

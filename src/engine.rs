//! Engine — validates sentences, solves them and answers path queries.
//!
//! [`PathEngine`] applies a [`PathConfig`] to each sentence: boundary
//! validation, size limits, the weight matrix and the solve. The result of
//! [`PathEngine::prepare`] is a [`SentencePaths`], which keeps the all-pairs
//! matrices of one sentence so that every token pair of that sentence is
//! answered without solving again. The caller owns its lifetime.
//!
//! # Stages
//!
//! | Stage | Work |
//! |-------|------|
//! | `validate` | dependency-tree precondition rules |
//! | `weights` | sentence → weight matrix |
//! | `solve` | Floyd–Warshall, or Dijkstra for a single pair |
//! | `reconstruct` | next hops → [`Path`] |

use rayon::prelude::*;

use crate::config::{ExistsSemantics, PathConfig, SolverKind};
use crate::error::{DepPathError, Result};
use crate::features::PathFeatures;
use crate::graph::WeightMatrix;
use crate::path::{reconstruct, Path};
use crate::shortest_path::{Dijkstra, FloydWarshall, ShortestPathSolver, ShortestPaths};
use crate::types::{Sentence, TokenId};
use crate::validation::ValidationEngine;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

pub const STAGE_VALIDATE: &str = "validate";
pub const STAGE_WEIGHTS: &str = "weights";
pub const STAGE_SOLVE: &str = "solve";
pub const STAGE_RECONSTRUCT: &str = "reconstruct";

/// Enter a tracing span for an engine stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("path_stage", stage = $name).entered();
    };
}

// ============================================================================
// SentencePaths — per-sentence query object
// ============================================================================

/// All-pairs shortest paths of one sentence, ready for token-pair queries
#[derive(Debug, Clone)]
pub struct SentencePaths<'a> {
    sentence: &'a Sentence,
    paths: ShortestPaths,
    separator: String,
    exists: ExistsSemantics,
}

impl<'a> SentencePaths<'a> {
    fn from_parts(sentence: &'a Sentence, paths: ShortestPaths, cfg: &PathConfig) -> Self {
        Self {
            sentence,
            paths,
            separator: cfg.separator.clone(),
            exists: cfg.exists,
        }
    }

    pub fn sentence(&self) -> &'a Sentence {
        self.sentence
    }

    /// Distance and next-hop matrices
    pub fn matrices(&self) -> &ShortestPaths {
        &self.paths
    }

    /// Give up the sentence borrow and keep the matrices
    pub fn into_matrices(self) -> ShortestPaths {
        self.paths
    }

    /// Distance between two tokens (`+inf` when unreachable)
    pub fn distance(&self, u: TokenId, v: TokenId) -> f64 {
        self.paths.distance(u, v)
    }

    /// First hop from `u` toward `v`
    pub fn next_hop(&self, u: TokenId, v: TokenId) -> Option<TokenId> {
        self.paths.next_hop(u, v)
    }

    /// Shortest path between two tokens; empty when unreachable
    pub fn path(&self, u: TokenId, v: TokenId) -> Result<Path<'a>> {
        self.check_token(u)?;
        self.check_token(v)?;

        trace_stage!(STAGE_RECONSTRUCT);
        let path = reconstruct(u, v, &self.paths.next, self.sentence)?;

        #[cfg(feature = "tracing")]
        if path.is_empty() {
            tracing::debug!(source = u, target = v, "no dependency path between tokens");
        }

        Ok(path.with_separator(self.separator.as_str()))
    }

    /// Rendered features of the path between two tokens
    pub fn features(&self, u: TokenId, v: TokenId) -> Result<PathFeatures> {
        let path = self.path(u, v)?;
        Ok(PathFeatures::from_path(u, v, &path, self.exists))
    }

    fn check_token(&self, id: TokenId) -> Result<()> {
        if (id as usize) < self.sentence.len() {
            Ok(())
        } else {
            Err(DepPathError::TokenOutOfRange {
                id,
                len: self.sentence.len(),
            })
        }
    }
}

// ============================================================================
// PathEngine — configured entry point
// ============================================================================

/// Configured shortest-path engine
///
/// Stateless between calls and `Sync`, so one engine can serve many worker
/// threads.
pub struct PathEngine {
    config: PathConfig,
    sentence_rules: ValidationEngine<Sentence>,
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new(PathConfig::default())
    }
}

impl PathEngine {
    /// Create an engine with the default sentence rules
    pub fn new(config: PathConfig) -> Self {
        Self {
            config,
            sentence_rules: ValidationEngine::for_sentences(),
        }
    }

    /// Create an engine from a JSON spec
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(PathConfig::from_json(json)?))
    }

    /// Replace the sentence validation rules
    pub fn with_sentence_rules(mut self, rules: ValidationEngine<Sentence>) -> Self {
        self.sentence_rules = rules;
        self
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Validate `sentence` and solve all pairs
    pub fn prepare<'a>(&self, sentence: &'a Sentence) -> Result<SentencePaths<'a>> {
        self.check(sentence)?;

        let weight = {
            trace_stage!(STAGE_WEIGHTS);
            WeightMatrix::from_sentence(sentence)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            tokens = weight.size(),
            edges = weight.edge_count(),
            "solving all-pairs shortest paths"
        );

        let paths = {
            trace_stage!(STAGE_SOLVE);
            FloydWarshall.solve(&weight)
        };

        Ok(SentencePaths::from_parts(sentence, paths, &self.config))
    }

    /// Prepare independent sentences in parallel
    ///
    /// Results keep the input order; one failing sentence does not affect
    /// the others.
    pub fn prepare_batch<'a>(&self, sentences: &'a [Sentence]) -> Vec<Result<SentencePaths<'a>>> {
        sentences.par_iter().map(|s| self.prepare(s)).collect()
    }

    /// Answer a single token-pair query with the configured solver
    ///
    /// Prefer [`prepare`](Self::prepare) when a sentence has several pairs:
    /// the all-pairs solve is then paid once.
    pub fn shortest_path<'a>(
        &self,
        sentence: &'a Sentence,
        u: TokenId,
        v: TokenId,
    ) -> Result<Path<'a>> {
        self.check(sentence)?;
        for id in [u, v] {
            if id as usize >= sentence.len() {
                return Err(DepPathError::TokenOutOfRange {
                    id,
                    len: sentence.len(),
                });
            }
        }

        let weight = {
            trace_stage!(STAGE_WEIGHTS);
            WeightMatrix::from_sentence(sentence)
        };

        let route = {
            trace_stage!(STAGE_SOLVE);
            self.solver().route(&weight, u, v)
        };

        trace_stage!(STAGE_RECONSTRUCT);
        let path = Path::from_ids(sentence, &route.tokens)?;
        Ok(path.with_separator(self.config.separator.as_str()))
    }

    /// Rendered features for a single token pair
    pub fn features(&self, sentence: &Sentence, u: TokenId, v: TokenId) -> Result<PathFeatures> {
        let path = self.shortest_path(sentence, u, v)?;
        Ok(PathFeatures::from_path(u, v, &path, self.config.exists))
    }

    fn solver(&self) -> &'static dyn ShortestPathSolver {
        match self.config.solver {
            SolverKind::FloydWarshall => &FloydWarshall,
            SolverKind::Dijkstra => &Dijkstra,
        }
    }

    /// Limits first (cheap), then the validation rules
    fn check(&self, sentence: &Sentence) -> Result<()> {
        if let Some(limit) = self.config.max_tokens {
            if sentence.len() > limit {
                return Err(DepPathError::LimitExceeded {
                    tokens: sentence.len(),
                    limit,
                });
            }
        }

        if !self.config.validate {
            return Ok(());
        }

        trace_stage!(STAGE_VALIDATE);
        let report = self.sentence_rules.validate(sentence);

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(%warning, "sentence validation warning");
        }

        match report.first_error() {
            Some(err) => Err(DepPathError::InvalidSentence(err.clone())),
            None => Ok(()),
        }
    }
}

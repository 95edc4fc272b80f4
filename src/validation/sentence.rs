//! Dependency-tree precondition rules for parser output.
//!
//! Path construction resolves edge direction from each token's single
//! incoming edge, so these rules enforce "exactly one head per non-root
//! token" and the agreement of outgoing and incoming edge records before any
//! matrix is built.

use rustc_hash::FxHashMap;

use super::{ErrorCode, SpecDiagnostic, ValidationDiagnostic, ValidationRule};
use crate::types::{Sentence, TokenId};

// ─── 1. Token ids match positions ───────────────────────────────────────────

pub struct TokenIdRule;

impl ValidationRule<Sentence> for TokenIdRule {
    fn name(&self) -> &str {
        "token_ids"
    }

    fn validate(&self, sentence: &Sentence) -> Vec<ValidationDiagnostic> {
        sentence
            .iter()
            .enumerate()
            .filter(|(pos, token)| token.index() != *pos)
            .map(|(pos, token)| {
                ValidationDiagnostic::error(
                    SpecDiagnostic::new(
                        ErrorCode::InvalidTokenId,
                        format!("/tokens/{pos}/id"),
                        format!("token at position {pos} has id {}", token.id),
                    )
                    .with_hint("Token ids must be 0..V in sentence order"),
                )
            })
            .collect()
    }
}

// ─── 2. Edge endpoints inside the sentence ──────────────────────────────────

pub struct EdgeTargetRule;

impl ValidationRule<Sentence> for EdgeTargetRule {
    fn name(&self) -> &str {
        "edge_targets"
    }

    fn validate(&self, sentence: &Sentence) -> Vec<ValidationDiagnostic> {
        let len = sentence.len();
        let mut out = Vec::new();

        for (pos, token) in sentence.iter().enumerate() {
            for (i, edge) in token.dependency_to.iter().enumerate() {
                if edge.token as usize >= len {
                    out.push(dangling(
                        format!("/tokens/{pos}/dependency_to/{i}"),
                        edge.token,
                        len,
                    ));
                }
            }
            if let Some(edge) = &token.dependency_from {
                if edge.token as usize >= len {
                    out.push(dangling(
                        format!("/tokens/{pos}/dependency_from"),
                        edge.token,
                        len,
                    ));
                }
            }
        }

        out
    }
}

fn dangling(path: String, target: TokenId, len: usize) -> ValidationDiagnostic {
    ValidationDiagnostic::error(SpecDiagnostic::new(
        ErrorCode::DanglingEdge,
        path,
        format!("edge points to token {target} in a sentence of {len} tokens"),
    ))
}

// ─── 3. At most one head per token ──────────────────────────────────────────

pub struct MultipleParentsRule;

impl ValidationRule<Sentence> for MultipleParentsRule {
    fn name(&self) -> &str {
        "multiple_parents"
    }

    fn validate(&self, sentence: &Sentence) -> Vec<ValidationDiagnostic> {
        let mut heads: FxHashMap<TokenId, Vec<TokenId>> = FxHashMap::default();
        for token in sentence {
            for edge in &token.dependency_to {
                heads.entry(edge.token).or_default().push(token.id);
            }
        }

        let mut offenders: Vec<_> = heads.into_iter().filter(|(_, h)| h.len() > 1).collect();
        offenders.sort_by_key(|(dependent, _)| *dependent);

        offenders
            .into_iter()
            .map(|(dependent, heads)| {
                ValidationDiagnostic::error(
                    SpecDiagnostic::new(
                        ErrorCode::MultipleParents,
                        format!("/tokens/{dependent}"),
                        format!(
                            "token {dependent} has {} incoming edges (from {heads:?})",
                            heads.len()
                        ),
                    )
                    .with_hint("Dependency graphs must be trees: keep a single head per token"),
                )
            })
            .collect()
    }
}

// ─── 4. Outgoing and incoming records agree ─────────────────────────────────

pub struct EdgeConsistencyRule;

impl ValidationRule<Sentence> for EdgeConsistencyRule {
    fn name(&self) -> &str {
        "edge_consistency"
    }

    fn validate(&self, sentence: &Sentence) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();

        for (pos, token) in sentence.iter().enumerate() {
            // Every outgoing edge must be mirrored by the dependent's head.
            for (i, edge) in token.dependency_to.iter().enumerate() {
                let Some(dependent) = sentence.get(edge.token) else {
                    continue;
                };
                let mirrored = dependent
                    .dependency_from
                    .as_ref()
                    .is_some_and(|from| from.token == token.id && from.label == edge.label);
                if !mirrored {
                    out.push(inconsistent(
                        format!("/tokens/{pos}/dependency_to/{i}"),
                        format!(
                            "edge {} -{}-> {} has no matching incoming edge on token {}",
                            token.id, edge.label, edge.token, edge.token
                        ),
                    ));
                }
            }

            // Every incoming edge must be listed by its head.
            if let Some(from) = &token.dependency_from {
                let Some(head) = sentence.get(from.token) else {
                    continue;
                };
                let listed = head
                    .dependency_to
                    .iter()
                    .any(|e| e.token == token.id && e.label == from.label);
                if !listed {
                    out.push(inconsistent(
                        format!("/tokens/{pos}/dependency_from"),
                        format!(
                            "incoming edge {} -{}-> {} is not listed by token {}",
                            from.token, from.label, token.id, from.token
                        ),
                    ));
                }
            }
        }

        out
    }
}

fn inconsistent(path: String, message: String) -> ValidationDiagnostic {
    ValidationDiagnostic::error(
        SpecDiagnostic::new(ErrorCode::InconsistentEdge, path, message)
            .with_hint("Record each edge on both the head and the dependent"),
    )
}

// ─── 5. Self loops (warning) ────────────────────────────────────────────────

/// A token listed as its own dependent contributes nothing to distances
/// (the diagonal stays 0) but would make direction resolution ambiguous.
pub struct SelfLoopRule;

impl ValidationRule<Sentence> for SelfLoopRule {
    fn name(&self) -> &str {
        "self_loops"
    }

    fn validate(&self, sentence: &Sentence) -> Vec<ValidationDiagnostic> {
        sentence
            .iter()
            .enumerate()
            .filter(|(_, token)| token.dependency_to.iter().any(|e| e.token == token.id))
            .map(|(pos, token)| {
                ValidationDiagnostic::warning(SpecDiagnostic::new(
                    ErrorCode::SelfLoop,
                    format!("/tokens/{pos}"),
                    format!("token {} depends on itself", token.id),
                ))
            })
            .collect()
    }
}

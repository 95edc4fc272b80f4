//! Boundary validation for parser output and engine configuration.
//!
//! A [`ValidationEngine`] runs every registered [`ValidationRule`] against a
//! target (a [`Sentence`](crate::types::Sentence) or a
//! [`PathSpec`](crate::config::PathSpec)) and collects every diagnostic into
//! a [`ValidationReport`]. It never short-circuits on the first error, so
//! callers see all problems at once.
//!
//! # Quick start
//!
//! ```rust
//! use rapid_deppath::types::Sentence;
//! use rapid_deppath::validation::ValidationEngine;
//!
//! let sentence = Sentence::builder()
//!     .token("BRCA1")
//!     .token("mutations")
//!     .dependency(1, 0, "compound")
//!     .build();
//!
//! let report = ValidationEngine::for_sentences().validate(&sentence);
//! assert!(report.is_valid());
//! ```

pub mod diagnostic;
pub mod error_code;
pub mod sentence;
pub mod spec;

use serde::Serialize;

pub use diagnostic::SpecDiagnostic;
pub use error_code::ErrorCode;

use crate::config::PathSpec;
use crate::types::Sentence;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A [`SpecDiagnostic`] tagged with its severity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SpecDiagnostic,
}

impl ValidationDiagnostic {
    pub fn error(err: SpecDiagnostic) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SpecDiagnostic) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SpecDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SpecDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// The first error, if any.
    pub fn first_error(&self) -> Option<&SpecDiagnostic> {
        self.errors().next()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a `T` and returns zero or more
/// diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so one engine can be shared
/// by the workers of a parallel batch.
pub trait ValidationRule<T: ?Sized>: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"multiple_parents"`).
    fn name(&self) -> &str;

    /// Inspect `target` and return any findings.
    fn validate(&self, target: &T) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s and collects all diagnostics into a
/// [`ValidationReport`].
pub struct ValidationEngine<T: ?Sized> {
    rules: Vec<Box<dyn ValidationRule<T>>>,
}

impl<T: ?Sized> ValidationEngine<T> {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule<T>>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in execution order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run all rules against `target` and return the collected report.
    pub fn validate(&self, target: &T) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(target));
        }
        report
    }
}

impl<T: ?Sized> Default for ValidationEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine<Sentence> {
    /// Engine pre-loaded with the dependency-tree precondition rules.
    pub fn for_sentences() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(sentence::TokenIdRule));
        engine.add_rule(Box::new(sentence::EdgeTargetRule));
        engine.add_rule(Box::new(sentence::MultipleParentsRule));
        engine.add_rule(Box::new(sentence::EdgeConsistencyRule));
        engine.add_rule(Box::new(sentence::SelfLoopRule));
        engine
    }
}

impl ValidationEngine<PathSpec> {
    /// Engine pre-loaded with the configuration rules.
    pub fn for_specs() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(spec::VersionRule));
        engine.add_rule(Box::new(spec::LimitsRule));
        engine.add_rule(Box::new(spec::SeparatorRule));
        engine.add_rule(Box::new(spec::UnknownFieldsRule));
        engine
    }
}

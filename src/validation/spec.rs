//! Configuration rules for [`PathSpec`].

use std::collections::HashMap;

use super::{ErrorCode, SpecDiagnostic, ValidationDiagnostic, ValidationRule};
use crate::config::PathSpec;

// ─── 1. Supported version ───────────────────────────────────────────────────

pub struct VersionRule;

impl ValidationRule<PathSpec> for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, spec: &PathSpec) -> Vec<ValidationDiagnostic> {
        if spec.v == 1 {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecDiagnostic::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported spec version {}", spec.v),
            )
            .with_hint("Set \"v\": 1"),
        )]
    }
}

// ─── 2. Limits must be positive when set ────────────────────────────────────

pub struct LimitsRule;

impl ValidationRule<PathSpec> for LimitsRule {
    fn name(&self) -> &str {
        "limits"
    }

    fn validate(&self, spec: &PathSpec) -> Vec<ValidationDiagnostic> {
        if spec.limits.max_tokens != Some(0) {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            SpecDiagnostic::new(
                ErrorCode::InvalidValue,
                "/limits/max_tokens",
                "max_tokens must be greater than 0",
            )
            .with_hint("Remove max_tokens to disable the limit, or set it to a positive value"),
        )]
    }
}

// ─── 3. Separator must be non-empty ─────────────────────────────────────────

pub struct SeparatorRule;

impl ValidationRule<PathSpec> for SeparatorRule {
    fn name(&self) -> &str {
        "separator"
    }

    fn validate(&self, spec: &PathSpec) -> Vec<ValidationDiagnostic> {
        match spec.separator.as_deref() {
            Some("") => vec![ValidationDiagnostic::error(
                SpecDiagnostic::new(
                    ErrorCode::InvalidValue,
                    "/separator",
                    "separator must not be empty",
                )
                .with_hint("Omit separator to use \" ~ \""),
            )],
            _ => vec![],
        }
    }
}

// ─── 4. Unknown fields (strict → error, non-strict → warning) ──────────────

pub struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let mut keys: Vec<_> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let diag_fn = if strict {
                    ValidationDiagnostic::error
                } else {
                    ValidationDiagnostic::warning
                };
                diag_fn(
                    SpecDiagnostic::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule<PathSpec> for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &PathSpec) -> Vec<ValidationDiagnostic> {
        let mut out = Self::check_unknowns("", &spec.unknown_fields, spec.strict);
        out.extend(Self::check_unknowns(
            "/limits",
            &spec.limits.unknown_fields,
            spec.strict,
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Severity, ValidationEngine};

    fn spec(json: &str) -> PathSpec {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine<PathSpec> {
        ValidationEngine::for_specs()
    }

    #[test]
    fn test_minimal_spec_is_valid() {
        let report = engine().validate(&spec(r#"{ "v": 1 }"#));
        assert!(report.is_empty());
    }

    #[test]
    fn test_default_spec_is_valid() {
        assert!(engine().validate(&PathSpec::default()).is_empty());
    }

    #[test]
    fn test_wrong_version() {
        let report = engine().validate(&spec(r#"{ "v": 3 }"#));
        let err = report.first_error().unwrap();
        assert_eq!(err.code, ErrorCode::UnsupportedVersion);
        assert_eq!(err.path, "/v");
    }

    #[test]
    fn test_zero_max_tokens() {
        let report = engine().validate(&spec(r#"{ "v": 1, "limits": { "max_tokens": 0 } }"#));
        let err = report.first_error().unwrap();
        assert_eq!(err.code, ErrorCode::InvalidValue);
        assert_eq!(err.path, "/limits/max_tokens");
    }

    #[test]
    fn test_empty_separator() {
        let report = engine().validate(&spec(r#"{ "v": 1, "separator": "" }"#));
        assert_eq!(report.first_error().unwrap().code, ErrorCode::InvalidValue);
    }

    #[test]
    fn test_unknown_fields_lenient_vs_strict() {
        let lenient = engine().validate(&spec(r#"{ "v": 1, "foo": 1, "limits": { "bar": 2 } }"#));
        assert!(lenient.is_valid());
        let paths: Vec<_> = lenient.warnings().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["/foo", "/limits/bar"]);

        let strict = engine().validate(&spec(r#"{ "v": 1, "strict": true, "foo": 1 }"#));
        assert!(strict.has_errors());
        assert_eq!(strict.diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn test_all_errors_collected() {
        let report = engine().validate(&spec(
            r#"{ "v": 0, "separator": "", "limits": { "max_tokens": 0 } }"#,
        ));
        assert_eq!(report.errors().count(), 3);
    }
}

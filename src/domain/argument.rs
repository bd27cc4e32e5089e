//! Typed argument model and the evaluator derived from a handler's
//! declared parameter shape.
//!
//! The evaluator is built once at registration time and is read-only
//! afterwards, so concurrent invocations of the same handler share it
//! without locking.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The type a parameter expects its token to parse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    Str,
    Int,
    Float,
    Bool,
    /// Joins all remaining tokens into one string. Must be last.
    Greedy,
}

/// One declared parameter of a handler signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub kind: ArgumentKind,
    #[serde(default)]
    pub optional: bool,
    /// Textual default for an absent optional parameter, parsed with the
    /// same per-kind rules as a supplied token.
    #[serde(default)]
    pub default: Option<String>,
}

impl ParameterSpec {
    pub fn required(name: impl Into<String>, kind: ArgumentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            default: None,
        }
    }

    pub fn optional(name: impl Into<String>, kind: ArgumentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: true,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.optional = true;
        self.default = Some(default.into());
        self
    }
}

/// An evaluated argument, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Absent optional parameter with no default.
    None,
}

impl Argument {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Argument::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Argument::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Argument::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Argument::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Argument::None)
    }
}

/// Rejected parameter shape, reported at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("required parameter '{name}' follows an optional parameter")]
    RequiredAfterOptional { name: String },

    #[error("greedy parameter '{name}' must be the last parameter")]
    GreedyNotLast { name: String },

    #[error("parameter '{name}' has unparseable default value '{value}'")]
    InvalidDefault { name: String, value: String },
}

/// Failed evaluation of a concrete invocation against the shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("missing required argument '{name}'")]
    MissingArgument { name: String },

    #[error("argument '{name}' has invalid value '{value}'")]
    InvalidValue { name: String, value: String },

    #[error("too many arguments: expected at most {expected}, got {actual}")]
    TooManyArguments { expected: usize, actual: usize },
}

/// Converts raw invocation tokens into an ordered, typed argument
/// sequence matching one handler's parameter shape.
#[derive(Debug, Clone)]
pub struct ArgumentEvaluator {
    specs: Vec<ParameterSpec>,
    // Parallel to specs; pre-parsed defaults so evaluation never re-parses.
    defaults: Vec<Option<Argument>>,
}

impl ArgumentEvaluator {
    /// Validates the shape and pre-parses defaults. Fails fast so a bad
    /// handler signature is rejected at registration, not at first use.
    pub fn from_shape(shape: &[ParameterSpec]) -> Result<Self, ShapeError> {
        let mut seen_optional = false;
        let mut defaults = Vec::with_capacity(shape.len());

        for (i, spec) in shape.iter().enumerate() {
            if spec.kind == ArgumentKind::Greedy && i != shape.len() - 1 {
                return Err(ShapeError::GreedyNotLast {
                    name: spec.name.clone(),
                });
            }
            if spec.optional {
                seen_optional = true;
            } else if seen_optional {
                return Err(ShapeError::RequiredAfterOptional {
                    name: spec.name.clone(),
                });
            }

            let default = match &spec.default {
                Some(value) => Some(parse_token(spec.kind, value).ok_or_else(|| {
                    ShapeError::InvalidDefault {
                        name: spec.name.clone(),
                        value: value.clone(),
                    }
                })?),
                None => None,
            };
            defaults.push(default);
        }

        Ok(Self {
            specs: shape.to_vec(),
            defaults,
        })
    }

    pub fn shape(&self) -> &[ParameterSpec] {
        &self.specs
    }

    /// Evaluates raw tokens into typed arguments, one per declared
    /// parameter, in declaration order.
    pub fn parse(&self, tokens: &[String]) -> Result<Vec<Argument>, EvaluationError> {
        let mut out = Vec::with_capacity(self.specs.len());
        let mut idx = 0;

        for (spec, default) in self.specs.iter().zip(&self.defaults) {
            if spec.kind == ArgumentKind::Greedy {
                if idx < tokens.len() {
                    out.push(Argument::Str(tokens[idx..].join(" ")));
                    idx = tokens.len();
                } else {
                    out.push(self.absent(spec, default)?);
                }
                continue;
            }

            if idx < tokens.len() {
                let token = &tokens[idx];
                let arg = parse_token(spec.kind, token).ok_or_else(|| {
                    EvaluationError::InvalidValue {
                        name: spec.name.clone(),
                        value: token.clone(),
                    }
                })?;
                out.push(arg);
                idx += 1;
            } else {
                out.push(self.absent(spec, default)?);
            }
        }

        if idx < tokens.len() {
            return Err(EvaluationError::TooManyArguments {
                expected: self.specs.len(),
                actual: tokens.len(),
            });
        }

        Ok(out)
    }

    fn absent(
        &self,
        spec: &ParameterSpec,
        default: &Option<Argument>,
    ) -> Result<Argument, EvaluationError> {
        if !spec.optional {
            return Err(EvaluationError::MissingArgument {
                name: spec.name.clone(),
            });
        }
        Ok(default.clone().unwrap_or(Argument::None))
    }
}

fn parse_token(kind: ArgumentKind, token: &str) -> Option<Argument> {
    match kind {
        ArgumentKind::Str | ArgumentKind::Greedy => Some(Argument::Str(token.to_string())),
        ArgumentKind::Int => token.parse::<i64>().map(Argument::Int).ok(),
        ArgumentKind::Float => token.parse::<f64>().map(Argument::Float).ok(),
        ArgumentKind::Bool => match token.to_ascii_lowercase().as_str() {
            "true" => Some(Argument::Bool(true)),
            "false" => Some(Argument::Bool(false)),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_typed_arguments_in_order() {
        let evaluator = ArgumentEvaluator::from_shape(&[
            ParameterSpec::required("player", ArgumentKind::Str),
            ParameterSpec::required("days", ArgumentKind::Int),
            ParameterSpec::required("silent", ArgumentKind::Bool),
        ])
        .unwrap();

        let args = evaluator.parse(&tokens(&["Notch", "7", "true"])).unwrap();
        assert_eq!(
            args,
            vec![
                Argument::Str("Notch".into()),
                Argument::Int(7),
                Argument::Bool(true),
            ]
        );
    }

    #[test]
    fn non_numeric_token_for_int_parameter_fails() {
        let evaluator =
            ArgumentEvaluator::from_shape(&[ParameterSpec::required("days", ArgumentKind::Int)])
                .unwrap();

        let err = evaluator.parse(&tokens(&["seven"])).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::InvalidValue {
                name: "days".into(),
                value: "seven".into(),
            }
        );
    }

    #[test]
    fn missing_required_argument_fails() {
        let evaluator = ArgumentEvaluator::from_shape(&[
            ParameterSpec::required("player", ArgumentKind::Str),
            ParameterSpec::required("days", ArgumentKind::Int),
        ])
        .unwrap();

        let err = evaluator.parse(&tokens(&["Notch"])).unwrap_err();
        assert_eq!(err, EvaluationError::MissingArgument { name: "days".into() });
    }

    #[test]
    fn surplus_tokens_fail() {
        let evaluator =
            ArgumentEvaluator::from_shape(&[ParameterSpec::required("player", ArgumentKind::Str)])
                .unwrap();

        let err = evaluator.parse(&tokens(&["Notch", "extra"])).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::TooManyArguments {
                expected: 1,
                actual: 2,
            }
        );
    }

    #[test]
    fn absent_optional_uses_default() {
        let evaluator = ArgumentEvaluator::from_shape(&[
            ParameterSpec::required("player", ArgumentKind::Str),
            ParameterSpec::optional("days", ArgumentKind::Int).with_default("30"),
        ])
        .unwrap();

        let args = evaluator.parse(&tokens(&["Notch"])).unwrap();
        assert_eq!(args[1], Argument::Int(30));
    }

    #[test]
    fn absent_optional_without_default_is_none() {
        let evaluator = ArgumentEvaluator::from_shape(&[
            ParameterSpec::optional("reason", ArgumentKind::Str),
        ])
        .unwrap();

        let args = evaluator.parse(&[]).unwrap();
        assert!(args[0].is_none());
    }

    #[test]
    fn greedy_joins_remaining_tokens() {
        let evaluator = ArgumentEvaluator::from_shape(&[
            ParameterSpec::required("player", ArgumentKind::Str),
            ParameterSpec::required("reason", ArgumentKind::Greedy),
        ])
        .unwrap();

        let args = evaluator
            .parse(&tokens(&["Notch", "griefing", "the", "spawn"]))
            .unwrap();
        assert_eq!(args[1], Argument::Str("griefing the spawn".into()));
    }

    #[test]
    fn required_after_optional_is_rejected_at_construction() {
        let err = ArgumentEvaluator::from_shape(&[
            ParameterSpec::optional("days", ArgumentKind::Int),
            ParameterSpec::required("player", ArgumentKind::Str),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ShapeError::RequiredAfterOptional {
                name: "player".into(),
            }
        );
    }

    #[test]
    fn greedy_must_be_last() {
        let err = ArgumentEvaluator::from_shape(&[
            ParameterSpec::required("reason", ArgumentKind::Greedy),
            ParameterSpec::required("player", ArgumentKind::Str),
        ])
        .unwrap_err();

        assert_eq!(err, ShapeError::GreedyNotLast { name: "reason".into() });
    }

    #[test]
    fn unparseable_default_is_rejected_at_construction() {
        let err = ArgumentEvaluator::from_shape(&[
            ParameterSpec::optional("days", ArgumentKind::Int).with_default("soon"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ShapeError::InvalidDefault {
                name: "days".into(),
                value: "soon".into(),
            }
        );
    }

    #[test]
    fn bool_tokens_are_case_insensitive() {
        let evaluator =
            ArgumentEvaluator::from_shape(&[ParameterSpec::required("silent", ArgumentKind::Bool)])
                .unwrap();

        let args = evaluator.parse(&tokens(&["TRUE"])).unwrap();
        assert_eq!(args[0], Argument::Bool(true));
    }

    proptest! {
        #[test]
        fn any_i64_token_round_trips(value: i64) {
            let evaluator = ArgumentEvaluator::from_shape(&[
                ParameterSpec::required("n", ArgumentKind::Int),
            ]).unwrap();

            let args = evaluator.parse(&[value.to_string()]).unwrap();
            prop_assert_eq!(args[0].as_int(), Some(value));
        }

        #[test]
        fn str_parameter_accepts_any_token(token in "\\S{1,40}") {
            let evaluator = ArgumentEvaluator::from_shape(&[
                ParameterSpec::required("s", ArgumentKind::Str),
            ]).unwrap();

            let args = evaluator.parse(&[token.clone()]).unwrap();
            prop_assert_eq!(args[0].as_str(), Some(token.as_str()));
        }
    }
}

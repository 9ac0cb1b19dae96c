//! Declarative field validation for request messages.
//!
//! Each message type declares its per-field rules next to its definition by
//! implementing [`Validate`]. The RPC layer decides which message of a call to
//! check (see `rpc::Validator`).
//!
//! All violations of a message are collected, so a caller sees every bad field
//! at once rather than fixing them one round-trip at a time.

mod rules;

pub use rules::*;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// The field that failed validation.
    pub field: String,
    /// Description of the violated rule.
    pub rule: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

/// Structured failure describing every violated field of a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", describe(.violations))]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

fn describe(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl ValidationFailure {
    /// Returns true if `field` appears among the violations.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

/// Implemented by every message that declares field constraints.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationFailure>;
}

/// Collects violations for one message.
///
/// ```ignore
/// Constraints::new()
///     .text("name", &self.name, &[Rule::Required, Rule::MaxBytes(64)])
///     .range("age", self.age, 0, 150)
///     .finish()
/// ```
#[derive(Debug, Default)]
pub struct Constraints {
    violations: Vec<FieldViolation>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `rules` to a string field. `Rule::Optional` anywhere in the
    /// list makes an empty value pass without checking the remaining rules.
    pub fn text(mut self, field: &str, value: &str, rules: &[Rule]) -> Self {
        if value.is_empty() && rules.contains(&Rule::Optional) {
            return self;
        }
        for rule in rules {
            if let Some(message) = rule.check(value) {
                self.violations.push(FieldViolation {
                    field: field.to_string(),
                    rule: message,
                });
            }
        }
        self
    }

    /// Requires an integer field to lie in `min..=max`.
    pub fn range(mut self, field: &str, value: i32, min: i32, max: i32) -> Self {
        if value < min || value > max {
            self.violations.push(FieldViolation {
                field: field.to_string(),
                rule: format!("must be between {} and {}, got {}", min, max, value),
            });
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationFailure> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { violations: self.violations })
        }
    }
}

use serde::{Deserialize, Serialize};

use super::{User, MAX_NAME_BYTES};
use crate::validation::{Constraints, Rule, Validate, ValidationFailure};

/// Placeholder request and acknowledgment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

impl Validate for Empty {
    fn validate(&self) -> Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Lookup key for `GetUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
}

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for Name {
    fn validate(&self) -> Result<(), ValidationFailure> {
        Constraints::new()
            .text("name", &self.name, &[Rule::Required, Rule::MaxBytes(MAX_NAME_BYTES), Rule::Printable])
            .finish()
    }
}

/// Every registered user. Order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Users {
    pub users: Vec<User>,
}

impl From<Vec<User>> for Users {
    fn from(users: Vec<User>) -> Self {
        Self { users }
    }
}

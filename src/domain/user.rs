use serde::{Deserialize, Serialize};

use crate::validation::{Constraints, Rule, Validate, ValidationFailure};

pub const MAX_NAME_BYTES: usize = 64;
pub const MAX_AGE: i32 = 150;
pub const MAX_PHONE_BYTES: usize = 32;
pub const MAX_MAIL_BYTES: usize = 254;

/// Represents a registered user. The name is the unique key in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub age: i32,
    /// Empty when absent.
    #[serde(default)]
    pub phone: String,
    /// Empty when absent.
    #[serde(default)]
    pub mail: String,
}

impl User {
    /// Creates a user with no phone or mail.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
            phone: String::new(),
            mail: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_mail(mut self, mail: impl Into<String>) -> Self {
        self.mail = mail.into();
        self
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationFailure> {
        Constraints::new()
            .text("name", &self.name, &[Rule::Required, Rule::MaxBytes(MAX_NAME_BYTES), Rule::Printable])
            .range("age", self.age, 0, MAX_AGE)
            .text("phone", &self.phone, &[Rule::Optional, Rule::MaxBytes(MAX_PHONE_BYTES), Rule::Phone])
            .text("mail", &self.mail, &[Rule::Optional, Rule::MaxBytes(MAX_MAIL_BYTES), Rule::Mail])
            .finish()
    }
}

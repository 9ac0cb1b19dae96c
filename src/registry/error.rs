use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("User name must not be empty")]
    EmptyName,
    #[error("User already exists: {0}")]
    DuplicateName(String),
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for RegistryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::AlreadyExists(name) => RegistryError::DuplicateName(name),
            other => RegistryError::ActorCommunicationError(other.to_string()),
        }
    }
}

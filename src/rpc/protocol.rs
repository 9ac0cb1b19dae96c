//! Wire messages for the user service.
//!
//! Every frame is one JSON document. Requests carry a caller-chosen id that
//! the matching response echoes back.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Empty, Name, User, Users};
use crate::validation::{FieldViolation, ValidationFailure};

/// The three procedures and their request messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "procedure", content = "payload")]
pub enum RpcRequest {
    AddUser(User),
    GetUser(Name),
    GetUsers(Empty),
}

impl RpcRequest {
    pub fn procedure(&self) -> &'static str {
        match self {
            RpcRequest::AddUser(_) => "AddUser",
            RpcRequest::GetUser(_) => "GetUser",
            RpcRequest::GetUsers(_) => "GetUsers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload")]
pub enum RpcResponse {
    Empty(Empty),
    User(User),
    Users(Users),
}

impl RpcResponse {
    pub fn kind(&self) -> &'static str {
        match self {
            RpcResponse::Empty(_) => "Empty",
            RpcResponse::User(_) => "User",
            RpcResponse::Users(_) => "Users",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestFrame {
    pub id: u64,
    pub call: RpcRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFrame {
    pub id: u64,
    pub result: Result<RpcResponse, Status>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Code {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Internal,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Code::InvalidArgument => "invalid argument",
            Code::NotFound => "not found",
            Code::AlreadyExists => "already exists",
            Code::Internal => "internal",
        };
        f.write_str(s)
    }
}

/// Application-level failure of a single call. The connection stays usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub code: Code,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            violations: Vec::new(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(Code::InvalidArgument, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(Code::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(Code::AlreadyExists, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Code::Internal, message)
    }
}

impl From<ValidationFailure> for Status {
    fn from(failure: ValidationFailure) -> Self {
        Self {
            code: Code::InvalidArgument,
            message: failure.to_string(),
            violations: failure.violations,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for Status {}

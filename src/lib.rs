//! # User Registry
//!
//! An in-memory user registry served over a small request/response RPC
//! protocol.
//!
//! - **Registry** - a single actor owns the `name -> User` map, so every add is
//!   one atomic check-and-insert → [`RegistryClient`]
//! - **Service** - binds `AddUser`, `GetUser` and `GetUsers` to the registry
//!   → [`UserService`]
//! - **Interceptors** - declared field constraints are checked before dispatch
//!   → [`ValidationInterceptor`], [`Validate`]
//! - **Transport** - length-prefixed JSON frames over TCP → [`RpcServer`],
//!   [`RpcClient`]
//! - **System** - startup, shutdown and tracing setup → [`ServerSystem`],
//!   [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use user_registry::{Empty, RpcClient, ServerSystem, User};
//!
//! let system = ServerSystem::start("127.0.0.1:50051".parse()?, true).await?;
//!
//! let mut client = RpcClient::connect(system.local_addr()).await?;
//! client.add_user(User::new("Bob", 24)).await?;
//! let users = client.get_users(Empty {}).await?;
//! assert_eq!(users.users.len(), 1);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod domain;
pub mod registry;
pub mod rpc;
pub mod service;
pub mod validation;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, AppError, ClientConfig, ServerConfig, ServerSystem};
pub use clients::RegistryClient;
pub use domain::{Empty, Name, User, Users};
pub use registry::RegistryError;
pub use rpc::{ClientError, DeclaredConstraints, RpcClient, RpcServer, Status, ValidationInterceptor, Validator};
pub use service::UserService;
pub use validation::{Validate, ValidationFailure};

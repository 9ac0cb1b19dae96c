//! Request/response transport for the user service.
//!
//! A [`RpcServer`] accepts TCP connections and feeds each decoded request to
//! an [`RpcHandler`]; [`Intercepted`] puts a chain of [`Interceptor`]s in
//! front of any handler. [`RpcClient`] is the caller side.

pub mod client;
pub mod codec;
pub mod interceptor;
pub mod protocol;
pub mod server;

pub use client::*;
pub use interceptor::*;
pub use protocol::*;
pub use server::*;

use async_trait::async_trait;

/// Executes one decoded call.
#[async_trait]
pub trait RpcHandler: Send + Sync + 'static {
    async fn handle(&self, request: RpcRequest) -> Result<RpcResponse, Status>;
}

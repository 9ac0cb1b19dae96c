use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::{RpcHandler, RpcRequest, RpcResponse, Status};
use crate::validation::{Validate, ValidationFailure};

/// Pre-dispatch hook. Returning `Err` rejects the call before the handler
/// sees it.
pub trait Interceptor: Send + Sync + 'static {
    fn intercept(&self, request: &RpcRequest) -> Result<(), Status>;
}

/// Pluggable validation capability invoked before dispatch.
pub trait Validator: Send + Sync + 'static {
    fn validate(&self, request: &RpcRequest) -> Result<(), ValidationFailure>;
}

/// Validator that evaluates the constraints declared on each request message.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclaredConstraints;

impl Validator for DeclaredConstraints {
    fn validate(&self, request: &RpcRequest) -> Result<(), ValidationFailure> {
        match request {
            RpcRequest::AddUser(user) => user.validate(),
            RpcRequest::GetUser(name) => name.validate(),
            RpcRequest::GetUsers(empty) => empty.validate(),
        }
    }
}

/// Rejects requests whose declared field constraints are violated.
pub struct ValidationInterceptor<V: Validator> {
    validator: V,
}

impl<V: Validator> ValidationInterceptor<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V: Validator> Interceptor for ValidationInterceptor<V> {
    fn intercept(&self, request: &RpcRequest) -> Result<(), Status> {
        self.validator.validate(request).map_err(|failure| {
            warn!(procedure = request.procedure(), error = %failure, "Request rejected");
            Status::from(failure)
        })
    }
}

/// A handler behind an ordered interceptor chain. The first rejection wins.
pub struct Intercepted<H: RpcHandler> {
    inner: H,
    chain: Vec<Arc<dyn Interceptor>>,
}

impl<H: RpcHandler> Intercepted<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            chain: Vec::new(),
        }
    }

    pub fn with(mut self, interceptor: impl Interceptor) -> Self {
        self.chain.push(Arc::new(interceptor));
        self
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

#[async_trait]
impl<H: RpcHandler> RpcHandler for Intercepted<H> {
    async fn handle(&self, request: RpcRequest) -> Result<RpcResponse, Status> {
        for interceptor in &self.chain {
            interceptor.intercept(&request)?;
        }
        self.inner.handle(request).await
    }
}

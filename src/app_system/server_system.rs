use std::future::Future;
use std::io;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::AppError;
use crate::clients::RegistryClient;
use crate::rpc::{DeclaredConstraints, Intercepted, RpcServer, ValidationInterceptor};
use crate::service::UserService;

pub const REGISTRY_BUFFER: usize = 32;

/// The running server: registry actor plus RPC listener.
///
/// Responsible for starting both, wiring the interceptor chain in front of
/// the service, and stopping them in order.
pub struct ServerSystem {
    local_addr: SocketAddr,
    stop: oneshot::Sender<()>,
    server_handle: JoinHandle<io::Result<()>>,
    registry_handle: JoinHandle<()>,
}

impl ServerSystem {
    /// Binds `listen` and starts serving. With `validation` off the service
    /// runs behind an empty interceptor chain.
    pub async fn start(listen: SocketAddr, validation: bool) -> Result<Self, AppError> {
        let listener = TcpListener::bind(listen)
            .await
            .map_err(|source| AppError::Bind { addr: listen, source })?;
        let local_addr = listener.local_addr()?;

        let (registry, registry_handle) = RegistryClient::spawn(REGISTRY_BUFFER);
        let mut service = Intercepted::new(UserService::new(registry));
        if validation {
            service = service.with(ValidationInterceptor::new(DeclaredConstraints));
        }
        info!(%local_addr, interceptors = service.len(), "Starting user registry");

        let server = RpcServer::from_listener(listener, service);
        let (stop, stopped) = oneshot::channel::<()>();
        let server_handle = tokio::spawn(server.serve(async {
            let _ = stopped.await;
        }));

        Ok(Self {
            local_addr,
            stop,
            server_handle,
            registry_handle,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Runs until `signal` completes, then shuts down.
    pub async fn run_until(self, signal: impl Future<Output = ()>) -> Result<(), AppError> {
        signal.await;
        self.shutdown().await
    }

    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down system...");
        let _ = self.stop.send(());

        // The server owns the last registry handles; once it returns the
        // registry actor sees its channel close and stops.
        let served = self.server_handle.await?;
        if let Err(e) = &served {
            error!(error = %e, "RPC server failed");
        }
        self.registry_handle.await?;
        served?;

        info!("System shutdown complete.");
        Ok(())
    }
}

use std::future::Future;
use std::io;
use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::codec::{self, Transport};
use super::{RequestFrame, ResponseFrame, RpcHandler, Status};

/// Accepts connections and serves each one on its own task.
pub struct RpcServer<H: RpcHandler> {
    listener: TcpListener,
    handler: Arc<H>,
}

impl<H: RpcHandler> RpcServer<H> {
    pub fn from_listener(listener: TcpListener, handler: H) -> Self {
        Self {
            listener,
            handler: Arc::new(handler),
        }
    }

    /// Serves until `shutdown` completes, then drops every open connection.
    pub async fn serve(self, shutdown: impl Future<Output = ()>) -> io::Result<()> {
        let addr = self.listener.local_addr()?;
        info!(%addr, "RPC server listening");
        tokio::pin!(shutdown);
        let mut connections = JoinSet::new();

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!(open_connections = connections.len(), "RPC server stopping");
                    connections.shutdown().await;
                    return Ok(());
                }
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
                accepted = self.listener.accept() => {
                    let (stream, peer) = match accepted {
                        Ok(pair) => pair,
                        Err(e) => {
                            warn!(error = %e, "Failed to accept connection");
                            continue;
                        }
                    };
                    let handler = Arc::clone(&self.handler);
                    let span = info_span!("connection", %peer);
                    connections.spawn(
                        async move {
                            if let Err(e) = serve_connection(stream, handler).await {
                                error!(error = %e, "Connection failed");
                            }
                        }
                        .instrument(span),
                    );
                }
            }
        }
    }
}

async fn serve_connection<H: RpcHandler>(stream: TcpStream, handler: Arc<H>) -> io::Result<()> {
    debug!("Connection opened");
    let mut transport: Transport = codec::framed(stream);

    while let Some(frame) = transport.next().await {
        let frame = frame?;
        let response = match codec::decode::<RequestFrame>(&frame) {
            Ok(RequestFrame { id, call }) => {
                let procedure = call.procedure();
                let result = handler
                    .handle(call)
                    .instrument(info_span!("call", id, procedure))
                    .await;
                if let Err(status) = &result {
                    debug!(id, procedure, %status, "Call failed");
                }
                ResponseFrame { id, result }
            }
            Err(e) => {
                warn!(error = %e, "Malformed request frame");
                ResponseFrame {
                    id: 0,
                    result: Err(Status::invalid_argument(format!("malformed request: {}", e))),
                }
            }
        };

        let bytes = codec::encode(&response).map_err(io::Error::other)?;
        transport.send(bytes).await?;
    }

    debug!("Connection closed");
    Ok(())
}

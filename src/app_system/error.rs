use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Server(#[from] std::io::Error),
    #[error("task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

use futures::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::{TcpStream, ToSocketAddrs};
use tracing::{debug, instrument};

use super::codec::{self, Transport};
use super::{RequestFrame, ResponseFrame, RpcRequest, RpcResponse, Status};
use crate::domain::{Empty, Name, User, Users};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("{0}")]
    Status(#[from] Status),
    #[error("connection closed by server")]
    ConnectionClosed,
    #[error("response id {received} does not match request id {expected}")]
    IdMismatch { expected: u64, received: u64 },
    #[error("unexpected {0} response")]
    UnexpectedResponse(&'static str),
}

impl ClientError {
    /// The application-level status, if the server answered with one.
    pub fn status(&self) -> Option<&Status> {
        match self {
            ClientError::Status(status) => Some(status),
            _ => None,
        }
    }
}

/// Generate typed call methods that wrap a request variant and unwrap the
/// expected response variant.
macro_rules! client_method {
    (fn $method:ident($param:ident: $param_type:ty) -> $return_type:ty as $request:ident => $response:ident) => {
        #[instrument(skip(self))]
        pub async fn $method(&mut self, $param: $param_type) -> Result<$return_type, ClientError> {
            debug!("Sending request");
            match self.call(RpcRequest::$request($param)).await? {
                RpcResponse::$response(value) => Ok(value),
                other => Err(ClientError::UnexpectedResponse(other.kind())),
            }
        }
    };
}

/// Caller side of one connection. Calls are issued one at a time.
pub struct RpcClient {
    transport: Transport,
    next_id: u64,
}

impl RpcClient {
    pub async fn connect(addr: impl ToSocketAddrs) -> Result<Self, ClientError> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self {
            transport: codec::framed(stream),
            next_id: 1,
        })
    }

    pub async fn call(&mut self, call: RpcRequest) -> Result<RpcResponse, ClientError> {
        let id = self.next_id;
        self.next_id += 1;

        self.transport.send(codec::encode(&RequestFrame { id, call })?).await?;
        let frame = self
            .transport
            .next()
            .await
            .ok_or(ClientError::ConnectionClosed)??;

        let response: ResponseFrame = codec::decode(&frame)?;
        if response.id != id {
            return Err(ClientError::IdMismatch { expected: id, received: response.id });
        }
        Ok(response.result?)
    }

    client_method!(fn add_user(user: User) -> Empty as AddUser => Empty);
    client_method!(fn get_user(name: Name) -> User as GetUser => User);
    client_method!(fn get_users(empty: Empty) -> Users as GetUsers => Users);
}

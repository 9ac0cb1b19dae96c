use async_trait::async_trait;
use tracing::{error, info, instrument};

use crate::clients::RegistryClient;
use crate::domain::{Empty, Name, User, Users};
use crate::registry::RegistryError;
use crate::rpc::{RpcHandler, RpcRequest, RpcResponse, Status};

/// Binds the registry to the `AddUser`, `GetUser` and `GetUsers` procedures.
///
/// Holds no state of its own between calls.
#[derive(Clone)]
pub struct UserService {
    registry: RegistryClient,
}

impl UserService {
    pub fn new(registry: RegistryClient) -> Self {
        Self { registry }
    }

    #[instrument(fields(user_name = %user.name), skip(self, user))]
    async fn add_user(&self, user: User) -> Result<Empty, Status> {
        self.registry.add(user).await.map_err(into_status)?;
        Ok(Empty {})
    }

    #[instrument(fields(user_name = %name.name), skip(self, name))]
    async fn get_user(&self, name: Name) -> Result<User, Status> {
        self.registry.find_by_name(&name.name).await.map_err(into_status)
    }

    #[instrument(skip(self, _empty))]
    async fn get_users(&self, _empty: Empty) -> Result<Users, Status> {
        let users = self.registry.list_all().await.map_err(into_status)?;
        info!(user_count = users.len(), "Listed users");
        Ok(Users::from(users))
    }
}

fn into_status(e: RegistryError) -> Status {
    match e {
        RegistryError::EmptyName => Status::invalid_argument("user name must not be empty"),
        RegistryError::DuplicateName(_) => Status::already_exists("user already exists"),
        RegistryError::NotFound(_) => Status::not_found("user not found"),
        RegistryError::ActorCommunicationError(reason) => {
            error!(%reason, "Registry unavailable");
            Status::internal("registry unavailable")
        }
    }
}

#[async_trait]
impl RpcHandler for UserService {
    async fn handle(&self, request: RpcRequest) -> Result<RpcResponse, Status> {
        match request {
            RpcRequest::AddUser(user) => self.add_user(user).await.map(RpcResponse::Empty),
            RpcRequest::GetUser(name) => self.get_user(name).await.map(RpcResponse::User),
            RpcRequest::GetUsers(empty) => self.get_users(empty).await.map(RpcResponse::Users),
        }
    }
}

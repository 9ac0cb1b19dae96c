//! # Mock Framework
//!
//! Utilities for testing registry callers in isolation.
//!
//! Use [`create_mock_registry`] to get a [`RegistryClient`] and the receiver it
//! talks to. Then use [`expect_insert`], [`expect_get`] or [`expect_list`] to
//! assert what reached the registry and to script its answer.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use crate::clients::RegistryClient;
use crate::domain::User;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// No `ResourceActor` runs behind the client: the test plays the actor by
/// reading requests off `receiver` and answering them, which makes failures
/// and orderings deterministic.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

pub fn create_mock_registry(buffer_size: usize) -> (RegistryClient, mpsc::Receiver<ResourceRequest<User>>) {
    let (client, receiver) = create_mock_client::<User>(buffer_size);
    (RegistryClient::new(client), receiver)
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Key, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { key, respond_to }) => Some((key, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_registry() {
        let (registry, mut receiver) = create_mock_registry(10);

        let add_task = tokio::spawn(async move { registry.add(User::new("Test", 40)).await });

        let (user, responder) = expect_insert(&mut receiver).await.expect("Expected Insert request");
        assert_eq!(user.name, "Test");
        responder.send(Ok(())).unwrap();

        assert_eq!(add_task.await.unwrap(), Ok(()));
    }
}

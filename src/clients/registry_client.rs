use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};
use crate::actor_framework::{ResourceActor, ResourceClient};
use crate::domain::User;
use crate::registry::RegistryError;

/// Handle to the user registry actor.
///
/// This is the only way to reach the stored users: add, find by name and
/// list. There is no update or delete.
#[derive(Clone)]
pub struct RegistryClient {
    inner: ResourceClient<User>,
}

impl RegistryClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Starts an empty registry actor and returns a client for it.
    pub fn spawn(buffer_size: usize) -> (Self, JoinHandle<()>) {
        let (actor, inner) = ResourceActor::<User>::new(buffer_size);
        let handle = tokio::spawn(actor.run());
        (Self::new(inner), handle)
    }

    /// Stores `user` unless its name is empty or already taken.
    #[instrument(fields(user_name = %user.name), skip(self, user))]
    pub async fn add(&self, user: User) -> Result<(), RegistryError> {
        if user.name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        debug!("Sending request");
        self.inner.insert(user).await?;
        info!("User registered");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<User, RegistryError> {
        debug!("Sending request");
        self.inner
            .get(name.to_string())
            .await?
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<User>, RegistryError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn bob() -> User {
        User::new("Bob", 24)
    }

    #[tokio::test]
    async fn test_fresh_registry_is_empty() {
        let (registry, _handle) = RegistryClient::spawn(8);
        assert!(registry.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_distinct_names_are_all_listed() {
        let (registry, _handle) = RegistryClient::spawn(8);
        let alice = User::new("Alice", 31).with_mail("alice@example.com");

        registry.add(bob()).await.unwrap();
        registry.add(alice.clone()).await.unwrap();

        let mut users = registry.list_all().await.unwrap();
        users.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(users, vec![alice, bob()]);
    }

    #[tokio::test]
    async fn test_duplicate_name_does_not_overwrite() {
        let (registry, _handle) = RegistryClient::spawn(8);
        registry.add(bob()).await.unwrap();

        let second = User::new("Bob", 30).with_phone("555-0100");
        let err = registry.add(second).await.unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("Bob".to_string()));

        assert_eq!(registry.find_by_name("Bob").await.unwrap(), bob());
        assert_eq!(registry.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let (registry, _handle) = RegistryClient::spawn(8);

        let err = registry.add(User::new("", -5)).await.unwrap_err();
        assert_eq!(err, RegistryError::EmptyName);
        assert!(registry.list_all().await.unwrap().is_empty());

        registry.add(User::new("Frank", -5)).await.unwrap();
        assert_eq!(registry.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_returns_every_field() {
        let (registry, _handle) = RegistryClient::spawn(8);
        let carol = User::new("Carol", 45)
            .with_phone("+44 20 7946 0000")
            .with_mail("carol@example.org");
        registry.add(carol.clone()).await.unwrap();

        assert_eq!(registry.find_by_name("Carol").await.unwrap(), carol);
    }

    #[tokio::test]
    async fn test_find_unknown_name_is_not_found() {
        let (registry, _handle) = RegistryClient::spawn(8);
        assert_eq!(
            registry.find_by_name("nonexistent").await.unwrap_err(),
            RegistryError::NotFound("nonexistent".to_string())
        );

        registry.add(bob()).await.unwrap();
        assert!(matches!(
            registry.find_by_name("nonexistent").await,
            Err(RegistryError::NotFound(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_of_one_name_admit_exactly_one() {
        let (registry, _handle) = RegistryClient::spawn(64);
        let registry = Arc::new(registry);
        let k = 32;

        let tasks: Vec<_> = (0..k)
            .map(|age| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move { registry.add(User::new("Dave", age)).await })
            })
            .collect();

        let mut successes = 0;
        let mut duplicates = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(()) => successes += 1,
                Err(RegistryError::DuplicateName(name)) => {
                    assert_eq!(name, "Dave");
                    duplicates += 1;
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, k - 1);
        let users = registry.list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Dave");
    }

    #[tokio::test]
    async fn test_stopped_actor_surfaces_communication_error() {
        let (registry, handle) = RegistryClient::spawn(8);
        handle.abort();
        let _ = handle.await;

        assert!(matches!(
            registry.list_all().await,
            Err(RegistryError::ActorCommunicationError(_))
        ));
    }
}

use std::collections::hash_map::{Entry, HashMap};
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any record must implement to be held by a [`ResourceActor`].
///
/// The key is carried by the record itself; the actor's map is the only index.
pub trait Entity: Clone + Send + Sync + 'static {
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;

    fn key(&self) -> &Self::Key;
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Key already exists: {0}")]
    AlreadyExists(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Insert {
        item: T,
        respond_to: Response<()>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns the store. Every request is handled to completion before the next
/// one is received, so a key check and its insert can never interleave with
/// another mutation.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Key, T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Insert { item, respond_to } => {
                    let _ = respond_to.send(self.insert(item));
                }
                ResourceRequest::Get { key, respond_to } => {
                    let item = self.store.get(&key).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(count = items.len(), "Listed items");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }
        info!(count = self.store.len(), "ResourceActor stopped");
    }

    fn insert(&mut self, item: T) -> Result<(), FrameworkError> {
        match self.store.entry(item.key().clone()) {
            Entry::Occupied(entry) => Err(FrameworkError::AlreadyExists(entry.key().to_string())),
            Entry::Vacant(entry) => {
                entry.insert(item);
                Ok(())
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn insert(&self, item: T) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Insert { item, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, key: T::Key) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::Get { key, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ResourceRequest::List { respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        label: String,
        weight: u32,
    }

    impl Entity for Tag {
        type Key = String;

        fn key(&self) -> &String { &self.label }
    }

    fn tag(label: &str, weight: u32) -> Tag {
        Tag { label: label.to_string(), weight }
    }

    #[tokio::test]
    async fn test_resource_actor_insert_get_list() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        client.insert(tag("red", 1)).await.unwrap();
        client.insert(tag("blue", 2)).await.unwrap();

        let red = client.get("red".to_string()).await.unwrap();
        assert_eq!(red, Some(tag("red", 1)));
        assert_eq!(client.get("green".to_string()).await.unwrap(), None);

        let mut all = client.list().await.unwrap();
        all.sort_by(|a, b| a.label.cmp(&b.label));
        assert_eq!(all, vec![tag("blue", 2), tag("red", 1)]);
    }

    #[tokio::test]
    async fn test_duplicate_key_keeps_first_item() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        client.insert(tag("red", 1)).await.unwrap();
        let err = client.insert(tag("red", 9)).await.unwrap_err();
        assert_eq!(err, FrameworkError::AlreadyExists("red".to_string()));

        let red = client.get("red".to_string()).await.unwrap().unwrap();
        assert_eq!(red.weight, 1);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_closed() {
        let (actor, client) = ResourceActor::<Tag>::new(1);
        drop(actor);

        assert_eq!(client.list().await.unwrap_err(), FrameworkError::ActorClosed);
    }
}

//! The user registry: a [`ResourceActor`](crate::actor_framework::ResourceActor)
//! keyed by user name.

pub mod entity;
pub mod error;

pub use error::*;

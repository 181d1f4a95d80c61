//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent resource stores. The crate implements a
//! **Resource-Oriented Architecture (ROA)** on top of the **Actor Model**: each resource type
//! (products, materials, …) lives in one actor that owns an ordered collection of records, and
//! everything else talks to it through a cloneable client.
//!
//! ## Why ROA + Actor Model?
//!
//! - Every store speaks the same small vocabulary (insert, get, list, replace-all, update,
//!   delete, custom actions) so clients look alike across resources.
//! - State is isolated per actor and processed sequentially: no locks, no shared memory.
//! - When resources interact (a sale drawing down paper and rings) they do so through **Action
//!   messages** sent by a workflow, not by reaching into each other's state.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the records and their hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and the store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Trees
//!
//! Entities may nest (a group record owning child records). By overriding
//! [`ActorEntity::find`] and [`ActorEntity::find_mut`] an entity lets the actor address its
//! children directly, depth-first, for `get`, `update` and actions. Deletion stays top-level.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Drawer { id: String, items: u32, inner: Vec<Drawer> }
//!
//! #[derive(Debug)] enum DrawerAction { Put(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("drawer error")] struct DrawerError;
//!
//! #[async_trait]
//! impl ActorEntity for Drawer {
//!     type Id = String;
//!     type Update = u32;
//!     type Action = DrawerAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = DrawerError;
//!
//!     fn id(&self) -> &String { &self.id }
//!
//!     fn find(&self, id: &String) -> Option<&Self> {
//!         if &self.id == id { return Some(self); }
//!         self.inner.iter().find_map(|d| d.find(id))
//!     }
//!
//!     fn find_mut(&mut self, id: &String) -> Option<&mut Self> {
//!         if &self.id == id { return Some(self); }
//!         self.inner.iter_mut().find_map(|d| d.find_mut(id))
//!     }
//!
//!     async fn on_update(&mut self, items: u32, _: &()) -> Result<(), DrawerError> {
//!         self.items = items;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: DrawerAction, _: &()) -> Result<u32, DrawerError> {
//!         match action {
//!             DrawerAction::Put(n) => { self.items += n; Ok(self.items) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let top = Drawer {
//!         id: "desk".into(),
//!         items: 0,
//!         inner: vec![Drawer { id: "left".into(), items: 2, inner: vec![] }],
//!     };
//!     let (actor, client) = ResourceActor::with_items(10, vec![top]);
//!     tokio::spawn(actor.run(()));
//!
//!     let count = client.perform_action("left".into(), DrawerAction::Put(3)).await.unwrap();
//!     assert_eq!(count, 5);
//!     assert_eq!(client.list().await.unwrap()[0].inner[0].items, 5);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time, so
//! actors can be created first and wired afterwards. Entities that need nothing use `()`.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Multiple actors run in **parallel**
//! - A workflow spanning several requests is *not* atomic: every request stands alone
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient<T>` from a queue of expectations so
//! client-side logic can be tested without actors. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

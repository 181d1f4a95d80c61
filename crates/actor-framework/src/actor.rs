//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of one resource
//! collection. It implements the "Server" side of the Actor Model, processing messages
//! sequentially and ensuring exclusive access to the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the store needs no
/// `Mutex` or `RwLock`: every request sees the result of the one before it, and there is
/// exactly one writer.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_items()` to seed it) to get the
///     `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)] struct Shelf { id: u32, label: String }
/// #[derive(Debug, thiserror::Error)] #[error("shelf error")] struct ShelfError;
///
/// #[async_trait]
/// impl ActorEntity for Shelf {
///     type Id = u32;
///     type Update = String;
///     type Action = Infallible;
///     type ActionResult = ();
///     type Context = ();
///     type Error = ShelfError;
///
///     fn id(&self) -> &u32 { &self.id }
///     async fn on_update(&mut self, label: String, _: &()) -> Result<(), ShelfError> {
///         self.label = label;
///         Ok(())
///     }
///     async fn handle_action(&mut self, action: Infallible, _: &()) -> Result<(), ShelfError> {
///         match action {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Shelf>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.insert(Shelf { id: 1, label: "A".into() }).await.unwrap();
///     let shelf = client.update(1, "B".into()).await.unwrap();
///     assert_eq!(shelf.label, "B");
/// }
/// ```
///
/// # Implementation Details
///
/// The store is a `Vec` kept in insertion order. Lookups walk the top-level records in order and
/// ask each one to [`find`](ActorEntity::find) the id, so nested records are found depth-first.
///
/// * **Insert**: rejects ids already present anywhere in the store, runs `on_create`, appends.
/// * **Get**: depth-first lookup, returns a clone or `None`.
/// * **List / ReplaceAll**: snapshot or verbatim replacement of the whole collection.
/// * **Update / Action**: depth-first lookup (mutable), then the entity hook; `NotFound` when the
///   id is unknown, in which case nothing is touched.
/// * **Delete**: top-level only; returns the removed record, or `None` when absent.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    loading: bool,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new, empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_items(buffer_size, Vec::new())
    }

    /// Creates an actor whose store starts with `items`, in the given order.
    pub fn with_items(buffer_size: usize, items: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: items,
            loading: false,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn locate(&self, id: &T::Id) -> Option<&T> {
        self.store.iter().find_map(|item| item.find(id))
    }

    fn locate_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.store.iter_mut().find_map(|item| item.find_mut(id))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Material" instead of "notebook_inventory::model::material::Material")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Insert {
                    mut item,
                    respond_to,
                } => {
                    let id = item.id().clone();
                    debug!(entity_type, %id, "Insert");
                    if self.locate(&id).is_some() {
                        warn!(entity_type, %id, "Duplicate id");
                        let _ = respond_to.send(Err(FrameworkError::DuplicateId(id.to_string())));
                        continue;
                    }
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, %id, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.push(item);
                    info!(entity_type, %id, size = self.store.len(), "Inserted");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.locate(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::ReplaceAll { items, respond_to } => {
                    let previous = std::mem::replace(&mut self.store, items);
                    info!(
                        entity_type,
                        previous = previous.len(),
                        size = self.store.len(),
                        "Replaced all"
                    );
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.locate_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(position) = self.store.iter().position(|item| item.id() == &id) else {
                        debug!(entity_type, %id, "Nothing to delete");
                        let _ = respond_to.send(Ok(None));
                        continue;
                    };
                    if let Err(e) = self.store[position].on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let removed = self.store.remove(position);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(Some(removed)));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.locate_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::SetLoading {
                    loading,
                    respond_to,
                } => {
                    debug!(entity_type, loading, "SetLoading");
                    self.loading = loading;
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::IsLoading { respond_to } => {
                    let _ = respond_to.send(Ok(self.loading));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Product, Material, …) implements to be
//! owned by a generic `ResourceActor`. It names the identifier, the update DTO, the custom action
//! enum, the injected context and the error type, and it exposes lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Identity and Nesting
//! Entities carry their own identity ([`ActorEntity::id`]); the actor never invents ids. Callers
//! insert complete records, which is what a catalog seeded from fixed data needs.
//!
//! Some resources are trees (a material group owning colour variants). The provided
//! [`ActorEntity::find`] / [`ActorEntity::find_mut`] methods let such an entity expose its nested
//! children to the actor, so `Get`, `Update` and `Action` requests address any node of the tree by
//! id. Flat entities keep the default implementation, which only matches the entity itself.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::find`] / [`ActorEntity::find_mut`]
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The default hooks do nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Failure Contract
/// Hooks that return `Err` must leave the entity exactly as they found it. The actor forwards the
/// error to the caller and keeps the stored value, so validating before mutating is the
/// implementor's job.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// The `Context` type is injected into every hook when the actor starts running ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., a string newtype).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to update an existing instance.
    ///
    /// Entities that are never updated through the framework can use
    /// [`std::convert::Infallible`].
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AppendTransaction`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor: clients deal with a single type and can match on it after
    /// downcasting [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identity of this entity.
    fn id(&self) -> &Self::Id;

    /// Locate `id` within this entity, itself included.
    ///
    /// Tree-shaped entities override this to search their children depth-first.
    fn find(&self, id: &Self::Id) -> Option<&Self> {
        (self.id() == id).then_some(self)
    }

    /// Mutable counterpart of [`ActorEntity::find`].
    fn find_mut(&mut self, id: &Self::Id) -> Option<&mut Self> {
        if self.id() == id {
            Some(self)
        } else {
            None
        }
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called before a freshly inserted entity is stored.
    /// Use this hook to validate the record.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor owns one ordered collection of a single resource type. Instead of ad-hoc messages
/// per operation, every actor speaks the same small vocabulary:
///
/// - **Insert**: add a caller-built record; its id must not exist anywhere in the store.
/// - **Get**: fetch one record (nested records included) by id.
/// - **List**: snapshot of the whole collection in insertion order.
/// - **ReplaceAll**: discard the collection and install a new one verbatim.
/// - **Update**: apply an [`ActorEntity::Update`] to one record.
/// - **Delete**: remove a top-level record; absent ids are a no-op answered with `None`.
/// - **Action**: run a custom [`ActorEntity::Action`] on one record.
/// - **SetLoading / IsLoading**: a transient presentation flag with no business effect.
///
/// The enum is generic over `T: ActorEntity`, so a product payload can never reach the material
/// actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Insert {
        item: T,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    ReplaceAll {
        items: Vec<T>,
        respond_to: Response<()>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    SetLoading {
        loading: bool,
        respond_to: Response<()>,
    },
    IsLoading {
        respond_to: Response<bool>,
    },
}

//! # Material Actor
//!
//! The material ledger: a forest of leaf and group materials owned by one [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Material`]
//! - [`actions`] - [`MaterialAction`] and [`MaterialActionResult`]
//! - [`error`] - [`MaterialError`]
//!
//! ## Custom Actions
//!
//! The ledger has a single mutating business operation:
//!
//! ```rust,ignore
//! // Post a movement to any leaf, top-level or inside a group
//! let outcome = material_client
//!     .append_transaction("ring-pink".into(), NewTransaction::outbound(50, 1.2, today))
//!     .await?;
//! assert_eq!(outcome.stock, 150);
//! ```
//!
//! The actor resolves the id depth-first across the forest; an unknown id is answered with
//! [`MaterialError::NotFound`] and nothing changes.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Material;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates an empty Material actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Material>, ResourceClient<Material>) {
    ResourceActor::new(buffer_size)
}

/// Creates a Material actor that starts with `forest`, in order.
pub fn with_materials(
    buffer_size: usize,
    forest: Vec<Material>,
) -> (ResourceActor<Material>, ResourceClient<Material>) {
    ResourceActor::with_items(buffer_size, forest)
}

//! # Product Actor
//!
//! The product catalog: a flat, insertion-ordered list of sellable notebooks owned by one
//! [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] / [`with_products()`] - factory functions that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use notebook_inventory::clients::ProductClient;
//! use notebook_inventory::model::Product;
//! use notebook_inventory::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .add_product(Product::new("6", "B6收纳册", "收纳册", 39.0, 20))
//!         .await?;
//!     assert_eq!(client.products().await?.len(), 1);
//!     assert!(client.delete_product(id).await?);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates an empty Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}

/// Creates a Product actor that starts with `products`, in order.
pub fn with_products(
    buffer_size: usize,
    products: Vec<Product>,
) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::with_items(buffer_size, products)
}

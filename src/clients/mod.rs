//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! [`ProductClient`] and [`MaterialClient`] each front one actor; [`SaleClient`] composes both
//! with the consumption rules.

pub mod material_client;
pub mod product_client;
pub mod sale_client;

pub use material_client::*;
pub use product_client::*;
pub use sale_client::*;

//! # Notebook Inventory
//!
//! Inventory for a small workshop that sells handmade ring-bound notebooks. Two resource
//! actors hold the state:
//!
//! - the **product catalog**, a flat list of [`Product`](model::Product)s
//! - the **material ledger**, a forest of [`Material`](model::Material)s where a group (the
//!   transparent rings) aggregates interchangeable colour variants
//!
//! Stock on a leaf only moves by appending a [`MaterialTransaction`](model::MaterialTransaction);
//! stock, weighted average price and the sufficiency flag are recomputed from the history on
//! every append.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain types and the pure computations over them: ledger arithmetic, group rollups, the
//! inventory overview and the search filters.
//!
//! ### 2. The Actors ([`product_actor`], [`material_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations run by the generic
//! [`ResourceActor`](actor_framework::ResourceActor). Each request is handled to completion
//! before the next one, so an append never interleaves with a read.
//!
//! ### 3. The Rules ([`consumption`])
//! What one notebook consumes, and whether the ledger can cover a run.
//!
//! ### 4. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) and [`MaterialClient`](clients::MaterialClient)
//! wrap the actors; [`SaleClient`](clients::SaleClient) ties them to the rules.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`InventorySystem`](lifecycle::InventorySystem) spawns the actors from an
//! [`InventoryConfig`](config::InventoryConfig) and shuts them down.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notebook_inventory::clients::RingAllocation;
//! use notebook_inventory::config::InventoryConfig;
//! use notebook_inventory::lifecycle::InventorySystem;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let system = InventorySystem::new(&InventoryConfig::default());
//!
//! let answer = system.sale_client.can_produce("A7收纳册", 1).await?;
//! assert!(answer.possible());
//!
//! let receipt = system
//!     .sale_client
//!     .record_sale("A7收纳册", 1, &[RingAllocation::new("ring-pink", 1)])
//!     .await?;
//! assert!(receipt.is_complete());
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod consumption;
pub mod lifecycle;
pub mod material_actor;
pub mod model;
pub mod product_actor;
pub mod seed;

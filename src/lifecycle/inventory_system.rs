use std::sync::Arc;

use tracing::{error, info};

use crate::clients::{MaterialClient, ProductClient, SaleClient};
use crate::config::InventoryConfig;
use crate::consumption::RuleTable;
use crate::{material_actor, product_actor, seed};

/// Owns the running actors and hands out their clients.
///
/// # Architecture
///
/// - **Product actor**: the catalog, a flat list of [`Product`](crate::model::Product)s
/// - **Material actor**: the ledger, a forest of leaf and group materials
/// - **[`SaleClient`]**: no actor of its own; it drives both of the above with the rule table
///
/// Neither actor needs context, so both run with `()`.
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(&InventoryConfig::default());
/// let board = system.sale_client.production_board().await?;
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    pub product_client: ProductClient,
    pub material_client: MaterialClient,
    pub sale_client: SaleClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Spawns both actors with the notebook rule table.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &InventoryConfig) -> Self {
        Self::with_rules(config, RuleTable::notebooks())
    }

    pub fn with_rules(config: &InventoryConfig, rules: RuleTable) -> Self {
        let (products, materials) = if config.seed_demo_data {
            (seed::products(), seed::materials())
        } else {
            (Vec::new(), Vec::new())
        };
        info!(
            products = products.len(),
            materials = materials.len(),
            "Starting inventory system"
        );

        let (product_actor, product_client) =
            product_actor::with_products(config.actor_buffer, products);
        let (material_actor, material_client) =
            material_actor::with_materials(config.actor_buffer, materials);

        let product_handle = tokio::spawn(product_actor.run(()));
        let material_handle = tokio::spawn(material_actor.run(()));

        let product_client = ProductClient::new(product_client);
        let material_client = MaterialClient::new(material_client);
        let sale_client = SaleClient::new(
            product_client.clone(),
            material_client.clone(),
            Arc::new(rules),
            config.ring_group_id.as_str(),
        );

        Self {
            product_client,
            material_client,
            sale_client,
            handles: vec![product_handle, material_handle],
        }
    }

    /// Drops every client, which closes the channels, then waits for the actors to exit.
    ///
    /// Clones of the clients held elsewhere keep their actor alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system...");

        drop(self.sale_client);
        drop(self.product_client);
        drop(self.material_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}

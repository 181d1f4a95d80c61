//! Demo run: prints the dashboard and the production board, then records one sale.
//!
//! Set `RUST_LOG=debug` to watch every actor request.

use actor_framework::tracing::setup_tracing;
use notebook_inventory::clients::RingAllocation;
use notebook_inventory::config::InventoryConfig;
use notebook_inventory::lifecycle::InventorySystem;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = InventoryConfig::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting notebook inventory");

    let system = InventorySystem::new(&config);

    let overview = system
        .material_client
        .overview()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        materials = overview.material_count,
        total_value = overview.total_value,
        low_stock = overview.low_stock_count,
        categories = ?overview.categories,
        "Inventory overview"
    );

    let board = system
        .sale_client
        .production_board()
        .await
        .map_err(|e| e.to_string())?;
    for row in &board {
        info!(
            product = %row.product.name,
            possible = row.producibility.possible(),
            reason = %row.producibility.reason(),
            "Production board"
        );
    }

    let span = tracing::info_span!("sale", product = "A6收纳册");
    let sale = async {
        system
            .sale_client
            .record_sale(
                "A6收纳册",
                1,
                &[
                    RingAllocation::new("ring-pink", 1),
                    RingAllocation::new("ring-blue", 1),
                ],
            )
            .await
    }
    .instrument(span)
    .await;

    match sale {
        Ok(receipt) => info!(
            order_id = %receipt.order_id,
            applied = receipt.applied.len(),
            skipped = receipt.skipped.len(),
            "Sale processed"
        ),
        Err(e) => error!(error = %e, "Sale failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

//! # Material Client
//!
//! High‑level API over the `Material` actor: snapshots of the forest, the derived views, and
//! the single mutating operation, appending a transaction to a leaf.
use crate::material_actor::{AppendOutcome, MaterialAction, MaterialActionResult, MaterialError};
use crate::model::{
    InventoryOverview, Material, MaterialFilter, MaterialId, NewTransaction, TransactionType,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::Local;
use tracing::{debug, instrument};

/// Note attached to manual corrections.
pub const MANUAL_ADJUSTMENT_NOTE: &str = "手动调整库存";

/// Client for interacting with the Material actor.
#[derive(Clone)]
pub struct MaterialClient {
    inner: ResourceClient<Material>,
}

impl MaterialClient {
    pub fn new(inner: ResourceClient<Material>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Material> for MaterialClient {
    type Error = MaterialError;

    fn inner(&self) -> &ResourceClient<Material> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MaterialError::NotFound(id),
            other => other
                .into_entity_error::<MaterialError>()
                .unwrap_or_else(|e| MaterialError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl MaterialClient {
    /// The top-level forest, groups carrying their children.
    pub async fn materials(&self) -> Result<Vec<Material>, MaterialError> {
        self.list().await
    }

    /// Any node by id, searching inside groups too.
    pub async fn find_by_id(&self, id: MaterialId) -> Result<Option<Material>, MaterialError> {
        self.get(id).await
    }

    #[instrument(skip(self, forest), fields(count = forest.len()))]
    pub async fn replace_all(&self, forest: Vec<Material>) -> Result<(), MaterialError> {
        self.inner.replace_all(forest).await.map_err(Self::map_error)
    }

    /// Posts a movement to the leaf `id` and returns its figures right after.
    #[instrument(skip(self))]
    pub async fn append_transaction(
        &self,
        id: MaterialId,
        transaction: NewTransaction,
    ) -> Result<AppendOutcome, MaterialError> {
        let result = self
            .inner
            .perform_action(id, MaterialAction::AppendTransaction(transaction))
            .await
            .map_err(Self::map_error)?;

        let MaterialActionResult::AppendTransaction(outcome) = result;
        debug!(stock = outcome.stock, "append_transaction done");
        Ok(outcome)
    }

    /// Manual correction dated today at a zero unit price.
    ///
    /// Zero-priced inbound rows count towards the weighted average, so a manual "in" pulls the
    /// average price down.
    pub async fn adjust_stock(
        &self,
        id: MaterialId,
        quantity: u32,
        kind: TransactionType,
    ) -> Result<AppendOutcome, MaterialError> {
        let today = Local::now().date_naive();
        let transaction =
            NewTransaction::new(kind, quantity, 0.0, today).notes(MANUAL_ADJUSTMENT_NOTE);
        self.append_transaction(id, transaction).await
    }

    pub async fn overview(&self) -> Result<InventoryOverview, MaterialError> {
        let forest = self.list().await?;
        Ok(InventoryOverview::from_forest(&forest))
    }

    pub async fn search(&self, filter: &MaterialFilter) -> Result<Vec<Material>, MaterialError> {
        let forest = self.list().await?;
        Ok(filter.apply(&forest))
    }
}

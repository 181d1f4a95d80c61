//! [`ActorEntity`] implementation for [`Material`].
//!
//! `find`/`find_mut` descend into group children, so a request addressed to `ring-pink` reaches
//! the child of `transparent-ring`. Materials are never updated wholesale (`Update =
//! Infallible`); stock only moves through [`MaterialAction::AppendTransaction`].

use super::actions::{AppendOutcome, MaterialAction, MaterialActionResult};
use super::error::MaterialError;
use crate::model::{Material, MaterialId, NewTransaction, TransactionId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Material {
    type Id = MaterialId;
    type Update = Infallible;
    type Action = MaterialAction;
    type ActionResult = MaterialActionResult;
    type Context = ();
    type Error = MaterialError;

    fn id(&self) -> &MaterialId {
        &self.id
    }

    fn find(&self, id: &MaterialId) -> Option<&Self> {
        self.find_node(id)
    }

    fn find_mut(&mut self, id: &MaterialId) -> Option<&mut Self> {
        self.find_node_mut(id)
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), MaterialError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: MaterialAction,
        _ctx: &(),
    ) -> Result<MaterialActionResult, MaterialError> {
        match action {
            MaterialAction::AppendTransaction(new) => {
                self.append(new).map(MaterialActionResult::AppendTransaction)
            }
        }
    }
}

impl Material {
    /// Validates `new`, then posts it to this leaf's ledger under a fresh id.
    fn append(&mut self, new: NewTransaction) -> Result<AppendOutcome, MaterialError> {
        if new.quantity == 0 {
            return Err(MaterialError::InvalidQuantity);
        }
        if !(new.unit_price.is_finite() && new.unit_price >= 0.0) {
            return Err(MaterialError::InvalidUnitPrice(new.unit_price));
        }
        let id = self.id.to_string();
        let ledger = self
            .ledger_mut()
            .ok_or(MaterialError::GroupNotPostable(id))?;

        let transaction = new.record(TransactionId::generate());
        ledger.post(transaction.clone());
        debug!(
            transaction = %transaction.id,
            stock = ledger.stock,
            average_price = ledger.average_price,
            "Posted"
        );

        Ok(AppendOutcome {
            transaction,
            stock: ledger.stock,
            average_price: ledger.average_price,
            is_stock_sufficient: ledger.is_stock_sufficient,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockLedger;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn pink() -> Material {
        Material::leaf(
            "ring-pink",
            "粉色透明环",
            "环扣",
            StockLedger::seeded(200, 1.2, true, vec![]),
        )
    }

    async fn post(
        material: &mut Material,
        new: NewTransaction,
    ) -> Result<AppendOutcome, MaterialError> {
        let MaterialActionResult::AppendTransaction(outcome) = material
            .handle_action(MaterialAction::AppendTransaction(new), &())
            .await?;
        Ok(outcome)
    }

    #[tokio::test]
    async fn test_append_reports_new_figures() {
        let mut material = pink();
        let outcome = post(&mut material, NewTransaction::outbound(150, 1.2, day()))
            .await
            .unwrap();

        assert_eq!(outcome.stock, 50);
        assert!(!outcome.is_stock_sufficient);
        assert_eq!(outcome.average_price, 1.2);
        assert_eq!(material.transactions(), [outcome.transaction]);
    }

    #[tokio::test]
    async fn test_rejected_appends_leave_ledger_untouched() {
        let mut material = pink();

        let zero = post(&mut material, NewTransaction::inbound(0, 1.0, day())).await;
        assert_eq!(zero, Err(MaterialError::InvalidQuantity));

        let negative = post(&mut material, NewTransaction::inbound(5, -1.0, day())).await;
        assert_eq!(negative, Err(MaterialError::InvalidUnitPrice(-1.0)));

        assert_eq!(material, pink());
    }

    #[tokio::test]
    async fn test_groups_are_not_postable() {
        let mut group = Material::group("transparent-ring", "透明环", "环扣", vec![pink()]);
        let result = post(&mut group, NewTransaction::inbound(5, 1.0, day())).await;
        assert_eq!(
            result,
            Err(MaterialError::GroupNotPostable("transparent-ring".into()))
        );
    }

    #[test]
    fn test_find_reaches_children() {
        let group = Material::group("transparent-ring", "透明环", "环扣", vec![pink()]);
        let found = ActorEntity::find(&group, &"ring-pink".into()).unwrap();
        assert_eq!(found.name, "粉色透明环");
    }
}

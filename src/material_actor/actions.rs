//! Custom actions for the Material actor.
//!
//! These are handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action)
//! on the addressed node of the forest. See the implementation in [`super::entity`].

use crate::model::{MaterialTransaction, NewTransaction};

/// Custom actions for Material entities.
#[derive(Debug, Clone)]
pub enum MaterialAction {
    /// Records a stock movement on a leaf material.
    ///
    /// # Errors
    /// Fails without touching the ledger for a group, a zero quantity or an invalid unit price.
    AppendTransaction(NewTransaction),
}

/// Results from MaterialActions - variants match 1:1 with MaterialAction
#[derive(Debug, Clone)]
pub enum MaterialActionResult {
    AppendTransaction(AppendOutcome),
}

/// The recorded transaction and the leaf's figures right after it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendOutcome {
    pub transaction: MaterialTransaction,
    pub stock: i64,
    pub average_price: f64,
    pub is_stock_sufficient: bool,
}

//! # Consumption
//!
//! What selling a notebook takes out of the material ledger.
//!
//! - [`rules`] - the static [`RuleTable`] keyed by product name
//! - [`producibility`] - [`check`], deciding whether the ledger can cover a run
//!
//! Nothing here talks to an actor. The [`SaleClient`](crate::clients::SaleClient) fetches the
//! snapshots and posts the resulting transactions.

pub mod producibility;
pub mod rules;

pub use producibility::{check, Blocker, Producibility};
pub use rules::{ConsumptionRule, RuleTable};

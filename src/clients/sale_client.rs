//! # Sale Client
//!
//! Coordinates the catalog and the material ledger: answers whether a notebook can be made
//! and records what a sale consumes.
//!
//! A sale is a sequence of independent appends, not a transaction. Appends the ledger refuses
//! (an unknown ring colour, a group id) are reported in [`SaleReceipt::skipped`] and the
//! remaining ones still go through. Stock may go negative; the producibility check is advisory.
use std::sync::Arc;

use chrono::{Local, Utc};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::{MaterialClient, ProductClient};
use crate::consumption::{check, Blocker, ConsumptionRule, Producibility, RuleTable};
use crate::material_actor::{AppendOutcome, MaterialError};
use crate::model::{MaterialId, NewTransaction, Product};
use crate::product_actor::ProductError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    /// The product name has no consumption rule.
    #[error("No consumption rule for product: {0}")]
    Unconfigured(String),

    /// `quantity × paper_count` does not fit a transaction quantity.
    #[error("Sale of {quantity} units needs more paper than one transaction can hold")]
    QuantityTooLarge { quantity: u32 },

    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Product(#[from] ProductError),
}

/// How many rings of one colour a sale draws.
#[derive(Debug, Clone, PartialEq)]
pub struct RingAllocation {
    pub ring: MaterialId,
    pub quantity: u32,
}

impl RingAllocation {
    pub fn new(ring: impl Into<MaterialId>, quantity: u32) -> Self {
        Self {
            ring: ring.into(),
            quantity,
        }
    }
}

/// An append the ledger refused during a sale.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedAppend {
    pub material: MaterialId,
    pub quantity: u32,
    pub error: MaterialError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaleReceipt {
    /// Shared by every transaction of this sale.
    pub order_id: String,
    pub applied: Vec<AppendOutcome>,
    pub skipped: Vec<SkippedAppend>,
}

impl SaleReceipt {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// One row of the production board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub product: Product,
    pub rule: Option<ConsumptionRule>,
    /// For a single unit.
    pub producibility: Producibility,
}

#[derive(Clone)]
pub struct SaleClient {
    products: ProductClient,
    materials: MaterialClient,
    rules: Arc<RuleTable>,
    ring_group: MaterialId,
}

impl SaleClient {
    pub fn new(
        products: ProductClient,
        materials: MaterialClient,
        rules: Arc<RuleTable>,
        ring_group: impl Into<MaterialId>,
    ) -> Self {
        Self {
            products,
            materials,
            rules,
            ring_group: ring_group.into(),
        }
    }

    /// Whether the current ledger covers `quantity` units of `product_name`.
    ///
    /// Unconfigured products are answered without touching the ledger.
    #[instrument(skip(self))]
    pub async fn can_produce(
        &self,
        product_name: &str,
        quantity: u32,
    ) -> Result<Producibility, SaleError> {
        let Some(rule) = self.rules.rule_for(product_name) else {
            return Ok(Producibility::Blocked(Blocker::Unconfigured));
        };

        let paper = self.materials.find_by_id(rule.paper.clone()).await?;
        let ring_group = if rule.rings > 0 {
            self.materials.find_by_id(self.ring_group.clone()).await?
        } else {
            None
        };

        Ok(check(
            Some(rule),
            quantity,
            paper.as_ref(),
            ring_group.as_ref(),
        ))
    }

    /// Records the consumption of a sale: the paper first, then each ring allocation.
    ///
    /// Every movement is an outbound transaction at the material's current average price,
    /// dated today and tagged with one `SALE-<millis>` order id. Ring allocations are ignored
    /// for products whose rule uses no rings.
    ///
    /// # Errors
    /// [`SaleError::Unconfigured`] and [`SaleError::QuantityTooLarge`] before anything is
    /// posted; a lost actor aborts the sale after whatever was already applied.
    #[instrument(skip(self))]
    pub async fn record_sale(
        &self,
        product_name: &str,
        quantity: u32,
        allocations: &[RingAllocation],
    ) -> Result<SaleReceipt, SaleError> {
        let rule = self
            .rules
            .rule_for(product_name)
            .ok_or_else(|| SaleError::Unconfigured(product_name.to_string()))?;

        let paper_quantity = quantity
            .checked_mul(rule.paper_count)
            .ok_or(SaleError::QuantityTooLarge { quantity })?;

        let mut receipt = SaleReceipt {
            order_id: format!("SALE-{}", Utc::now().timestamp_millis()),
            applied: Vec::new(),
            skipped: Vec::new(),
        };
        let notes = format!("{product_name} 销售消耗");

        self.consume(&mut receipt, rule.paper.clone(), paper_quantity, &notes)
            .await?;

        if rule.rings > 0 {
            for allocation in allocations {
                self.consume(
                    &mut receipt,
                    allocation.ring.clone(),
                    allocation.quantity,
                    &notes,
                )
                .await?;
            }
        }

        info!(
            order_id = %receipt.order_id,
            applied = receipt.applied.len(),
            skipped = receipt.skipped.len(),
            "Sale recorded"
        );
        Ok(receipt)
    }

    async fn consume(
        &self,
        receipt: &mut SaleReceipt,
        material: MaterialId,
        quantity: u32,
        notes: &str,
    ) -> Result<(), SaleError> {
        let unit_price = self
            .materials
            .find_by_id(material.clone())
            .await?
            .map_or(0.0, |m| m.average_price());

        let today = Local::now().date_naive();
        let transaction = NewTransaction::outbound(quantity, unit_price, today)
            .order_id(receipt.order_id.clone())
            .notes(notes);

        match self
            .materials
            .append_transaction(material.clone(), transaction)
            .await
        {
            Ok(outcome) => {
                debug!(%material, stock = outcome.stock, "Sale append applied");
                receipt.applied.push(outcome);
            }
            Err(MaterialError::ActorCommunicationError(e)) => {
                return Err(MaterialError::ActorCommunicationError(e).into())
            }
            Err(error) => {
                warn!(%material, %error, "Sale append skipped");
                receipt.skipped.push(SkippedAppend {
                    material,
                    quantity,
                    error,
                });
            }
        }
        Ok(())
    }

    /// Every notebook in the catalog with its rule and whether one unit can be made.
    pub async fn production_board(&self) -> Result<Vec<BoardRow>, SaleError> {
        let notebooks = self.products.notebooks().await?;
        let mut rows = Vec::with_capacity(notebooks.len());
        for product in notebooks {
            let producibility = self.can_produce(&product.name, 1).await?;
            rows.push(BoardRow {
                rule: self.rules.rule_for(&product.name).cloned(),
                product,
                producibility,
            });
        }
        Ok(rows)
    }
}

//! Raw materials: a forest of leaf materials that own a stock ledger and group materials that
//! aggregate their children.
//!
//! # Actor Framework
//! [`Material`] implements [`ActorEntity`](actor_framework::ActorEntity) in
//! [`material_actor`](crate::material_actor). It overrides `find`/`find_mut` so the actor can
//! post transactions to a child of a group by id.
//!
//! # Rollups
//! Groups never store stock, price or sufficiency. Every accessor on [`Material`] recomputes them
//! from the children on each call, so a group always agrees with its leaves.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::transaction::{MaterialTransaction, TransactionType};

/// A leaf is "sufficient" strictly above this many units.
pub const LOW_STOCK_THRESHOLD: i64 = 100;

pub fn is_sufficient(stock: i64) -> bool {
    stock > LOW_STOCK_THRESHOLD
}

/// Type-safe identifier for Materials, unique across the whole forest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub String);

impl From<&str> for MaterialId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stock and running average price of a leaf, with its append-only history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLedger {
    pub stock: i64,
    pub average_price: f64,
    pub is_stock_sufficient: bool,
    pub transactions: Vec<MaterialTransaction>,
}

impl StockLedger {
    /// Installs the given figures verbatim, without checking them against the history.
    pub fn seeded(
        stock: i64,
        average_price: f64,
        is_stock_sufficient: bool,
        transactions: Vec<MaterialTransaction>,
    ) -> Self {
        Self {
            stock,
            average_price,
            is_stock_sufficient,
            transactions,
        }
    }

    /// Append `tx` and recompute every derived figure.
    ///
    /// Stock moves by the signed quantity with no floor. The average is rebuilt from all `in`
    /// transactions and keeps its previous value when there are none.
    pub fn post(&mut self, tx: MaterialTransaction) {
        self.stock += tx.signed_quantity();
        self.transactions.push(tx);
        if let Some(average) = weighted_in_average(&self.transactions) {
            self.average_price = average;
        }
        self.is_stock_sufficient = is_sufficient(self.stock);
    }

    /// Rebuild the ledger from an empty one by posting the history in order.
    pub fn replay(&self) -> StockLedger {
        let mut ledger = StockLedger::default();
        for tx in &self.transactions {
            ledger.post(tx.clone());
        }
        ledger
    }

    pub fn value(&self) -> f64 {
        self.average_price * self.stock as f64
    }
}

/// Σ(quantity × unit price) / Σ quantity over the `in` transactions, `None` without any.
pub fn weighted_in_average(transactions: &[MaterialTransaction]) -> Option<f64> {
    let (value, quantity) = transactions
        .iter()
        .filter(|t| t.kind == TransactionType::In)
        .fold((0.0, 0u64), |(value, quantity), t| {
            (value + t.value(), quantity + u64::from(t.quantity))
        });
    (quantity > 0).then(|| value / quantity as f64)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialNode {
    Leaf(StockLedger),
    Group(Vec<Material>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub category: String,
    /// Informational back-reference; structure comes from containment.
    pub parent_id: Option<MaterialId>,
    pub node: MaterialNode,
}

/// In/out totals over a material's history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementSummary {
    pub in_quantity: u64,
    pub out_quantity: u64,
    pub in_value: f64,
    pub out_value: f64,
}

impl Material {
    pub fn leaf(
        id: impl Into<MaterialId>,
        name: impl Into<String>,
        category: impl Into<String>,
        ledger: StockLedger,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            parent_id: None,
            node: MaterialNode::Leaf(ledger),
        }
    }

    /// Builds a group and points every child's `parent_id` at it.
    pub fn group(
        id: impl Into<MaterialId>,
        name: impl Into<String>,
        category: impl Into<String>,
        mut children: Vec<Material>,
    ) -> Self {
        let id = id.into();
        for child in &mut children {
            child.parent_id = Some(id.clone());
        }
        Self {
            id,
            name: name.into(),
            category: category.into(),
            parent_id: None,
            node: MaterialNode::Group(children),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.node, MaterialNode::Group(_))
    }

    pub fn ledger(&self) -> Option<&StockLedger> {
        match &self.node {
            MaterialNode::Leaf(ledger) => Some(ledger),
            MaterialNode::Group(_) => None,
        }
    }

    pub fn ledger_mut(&mut self) -> Option<&mut StockLedger> {
        match &mut self.node {
            MaterialNode::Leaf(ledger) => Some(ledger),
            MaterialNode::Group(_) => None,
        }
    }

    /// Children of a group; empty for a leaf.
    pub fn children(&self) -> &[Material] {
        match &self.node {
            MaterialNode::Leaf(_) => &[],
            MaterialNode::Group(children) => children,
        }
    }

    pub fn stock(&self) -> i64 {
        match &self.node {
            MaterialNode::Leaf(ledger) => ledger.stock,
            MaterialNode::Group(children) => children.iter().map(Material::stock).sum(),
        }
    }

    /// Average × stock for a leaf, the sum over children for a group.
    pub fn stock_value(&self) -> f64 {
        match &self.node {
            MaterialNode::Leaf(ledger) => ledger.value(),
            MaterialNode::Group(children) => children.iter().map(Material::stock_value).sum(),
        }
    }

    /// A group's average is its value over its stock, or 0 when it holds nothing.
    pub fn average_price(&self) -> f64 {
        match &self.node {
            MaterialNode::Leaf(ledger) => ledger.average_price,
            MaterialNode::Group(_) => {
                let stock = self.stock();
                if stock > 0 {
                    self.stock_value() / stock as f64
                } else {
                    0.0
                }
            }
        }
    }

    pub fn is_stock_sufficient(&self) -> bool {
        match &self.node {
            MaterialNode::Leaf(ledger) => ledger.is_stock_sufficient,
            MaterialNode::Group(children) => children.iter().all(Material::is_stock_sufficient),
        }
    }

    /// History of a leaf; groups have none of their own.
    pub fn transactions(&self) -> &[MaterialTransaction] {
        match &self.node {
            MaterialNode::Leaf(ledger) => &ledger.transactions,
            MaterialNode::Group(_) => &[],
        }
    }

    /// The leaves under this node (the node itself when it is a leaf).
    pub fn leaves(&self) -> Vec<&Material> {
        match &self.node {
            MaterialNode::Leaf(_) => vec![self],
            MaterialNode::Group(children) => children.iter().flat_map(Material::leaves).collect(),
        }
    }

    /// Totals over the history of every leaf under this node.
    pub fn movement_summary(&self) -> MovementSummary {
        self.leaves()
            .into_iter()
            .flat_map(Material::transactions)
            .fold(MovementSummary::default(), |mut summary, tx| {
                match tx.kind {
                    TransactionType::In => {
                        summary.in_quantity += u64::from(tx.quantity);
                        summary.in_value += tx.value();
                    }
                    TransactionType::Out => {
                        summary.out_quantity += u64::from(tx.quantity);
                        summary.out_value += tx.value();
                    }
                }
                summary
            })
    }

    /// Depth-first search: this node, then each child in order.
    pub fn find_node(&self, id: &MaterialId) -> Option<&Material> {
        if &self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find_node(id))
    }

    pub fn find_node_mut(&mut self, id: &MaterialId) -> Option<&mut Material> {
        if &self.id == id {
            return Some(self);
        }
        match &mut self.node {
            MaterialNode::Leaf(_) => None,
            MaterialNode::Group(children) => children
                .iter_mut()
                .find_map(|child| child.find_node_mut(id)),
        }
    }
}

/// First match of a depth-first walk over the forest.
pub fn find_in_forest<'a>(forest: &'a [Material], id: &MaterialId) -> Option<&'a Material> {
    forest.iter().find_map(|material| material.find_node(id))
}

//! Stock movements recorded against a leaf material.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Identifier of a recorded transaction, unique for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    In,
    Out,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::In => f.write_str("in"),
            TransactionType::Out => f.write_str("out"),
        }
    }
}

/// A recorded movement. Never modified after it has been appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialTransaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub quantity: u32,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub order_id: Option<String>,
    pub notes: Option<String>,
}

impl MaterialTransaction {
    /// Quantity with the sign of its effect on stock.
    pub fn signed_quantity(&self) -> i64 {
        match self.kind {
            TransactionType::In => i64::from(self.quantity),
            TransactionType::Out => -i64::from(self.quantity),
        }
    }

    pub fn value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// A transaction as submitted, before the ledger assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub quantity: u32,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub order_id: Option<String>,
    pub notes: Option<String>,
}

impl NewTransaction {
    pub fn new(kind: TransactionType, quantity: u32, unit_price: f64, date: NaiveDate) -> Self {
        Self {
            date,
            kind,
            quantity,
            unit_price,
            supplier: None,
            order_id: None,
            notes: None,
        }
    }

    pub fn inbound(quantity: u32, unit_price: f64, date: NaiveDate) -> Self {
        Self::new(TransactionType::In, quantity, unit_price, date)
    }

    pub fn outbound(quantity: u32, unit_price: f64, date: NaiveDate) -> Self {
        Self::new(TransactionType::Out, quantity, unit_price, date)
    }

    pub fn supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn record(self, id: TransactionId) -> MaterialTransaction {
        MaterialTransaction {
            id,
            date: self.date,
            kind: self.kind,
            quantity: self.quantity,
            unit_price: self.unit_price,
            supplier: self.supplier,
            order_id: self.order_id,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = TransactionId::generate();
        let b = TransactionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_keeps_every_field() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let tx = NewTransaction::inbound(1000, 2.3, date)
            .supplier("华南塑料厂")
            .notes("新年补货")
            .record("t1".into());

        assert_eq!(tx.id.0, "t1");
        assert_eq!(tx.kind, TransactionType::In);
        assert_eq!(tx.signed_quantity(), 1000);
        assert_eq!(tx.supplier.as_deref(), Some("华南塑料厂"));
        assert_eq!(tx.order_id, None);
        assert!((tx.value() - 2300.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_is_negative() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let tx = NewTransaction::outbound(500, 2.3, date).record(TransactionId::generate());
        assert_eq!(tx.signed_quantity(), -500);
        assert_eq!(tx.kind.to_string(), "out");
    }
}

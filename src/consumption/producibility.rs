//! Whether the ledger can cover a production run.
//!
//! [`check`] is a pure function over snapshots of the paper material and the ring group, so the
//! same answer comes back whether the snapshots were fetched from the actor or built in a test.

use std::fmt::Display;

use super::rules::ConsumptionRule;
use crate::model::{Material, MaterialId};

/// Shown when the paper material is missing from the ledger.
const FALLBACK_PAPER_NAME: &str = "硫酸纸";

/// The first constraint a run failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Blocker {
    /// The product has no consumption rule.
    Unconfigured,
    PaperShortage {
        paper: MaterialId,
        /// `None` when the paper material does not exist.
        name: Option<String>,
        required: i64,
        available: i64,
    },
    RingShortage {
        group: MaterialId,
        name: String,
        required: i64,
        available: i64,
    },
}

impl Display for Blocker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Blocker::Unconfigured => f.write_str("未配置材料消耗"),
            Blocker::PaperShortage {
                name,
                required,
                available,
                ..
            } => write!(
                f,
                "{}库存不足，需要 {}，当前 {}",
                name.as_deref().unwrap_or(FALLBACK_PAPER_NAME),
                required,
                available
            ),
            Blocker::RingShortage {
                name,
                required,
                available,
                ..
            } => write!(f, "{name}库存不足，需要 {required}，当前总计 {available}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Producibility {
    Producible,
    Blocked(Blocker),
}

impl Producibility {
    pub fn possible(&self) -> bool {
        matches!(self, Producibility::Producible)
    }

    /// Human-readable reason; empty when producible.
    pub fn reason(&self) -> String {
        match self {
            Producibility::Producible => String::new(),
            Producibility::Blocked(blocker) => blocker.to_string(),
        }
    }

    pub fn blocker(&self) -> Option<&Blocker> {
        match self {
            Producibility::Producible => None,
            Producibility::Blocked(blocker) => Some(blocker),
        }
    }
}

/// Checks paper first, then rings.
///
/// Rings are counted across the children of `ring_group`. When the group is absent, is a leaf, or
/// has no children, the ring constraint is not applied at all.
pub fn check(
    rule: Option<&ConsumptionRule>,
    quantity: u32,
    paper: Option<&Material>,
    ring_group: Option<&Material>,
) -> Producibility {
    let Some(rule) = rule else {
        return Producibility::Blocked(Blocker::Unconfigured);
    };

    let paper_required = rule.paper_needed(quantity);
    let paper_stock = paper.map_or(0, Material::stock);
    if paper.is_none() || paper_stock < paper_required {
        return Producibility::Blocked(Blocker::PaperShortage {
            paper: rule.paper.clone(),
            name: paper.map(|p| p.name.clone()),
            required: paper_required,
            available: paper_stock,
        });
    }

    if rule.rings > 0 {
        if let Some(group) = ring_group.filter(|g| !g.children().is_empty()) {
            let total: i64 = group.children().iter().map(Material::stock).sum();
            let rings_required = rule.rings_needed(quantity);
            if total < rings_required {
                return Producibility::Blocked(Blocker::RingShortage {
                    group: group.id.clone(),
                    name: group.name.clone(),
                    required: rings_required,
                    available: total,
                });
            }
        }
    }

    Producibility::Producible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockLedger;

    fn leaf(id: &str, name: &str, stock: i64) -> Material {
        Material::leaf(id, name, "x", StockLedger::seeded(stock, 1.0, stock > 100, vec![]))
    }

    fn rings(stocks: &[i64]) -> Material {
        let children = stocks
            .iter()
            .enumerate()
            .map(|(i, &s)| leaf(&format!("ring-{i}"), "环", s))
            .collect();
        Material::group("transparent-ring", "透明环", "环扣", children)
    }

    fn a7() -> ConsumptionRule {
        ConsumptionRule::new(1, "sulfuric-a4", 1)
    }

    #[test]
    fn test_unconfigured() {
        let result = check(None, 1, None, None);
        assert!(!result.possible());
        assert_eq!(result.reason(), "未配置材料消耗");
    }

    #[test]
    fn test_producible_has_empty_reason() {
        let paper = leaf("sulfuric-a4", "硫酸纸A4", 800);
        let result = check(Some(&a7()), 1, Some(&paper), Some(&rings(&[200, 150, 180, 220, 100])));
        assert!(result.possible());
        assert_eq!(result.reason(), "");
        assert_eq!(result.blocker(), None);
    }

    #[test]
    fn test_paper_shortage_reason() {
        let paper = leaf("sulfuric-a4", "硫酸纸A4", 800);
        let result = check(Some(&a7()), 801, Some(&paper), None);
        assert_eq!(result.reason(), "硫酸纸A4库存不足，需要 801，当前 800");
    }

    #[test]
    fn test_missing_paper_uses_fallback_name() {
        let result = check(Some(&a7()), 1, None, None);
        assert_eq!(result.reason(), "硫酸纸库存不足，需要 1，当前 0");
        assert!(matches!(
            result.blocker(),
            Some(Blocker::PaperShortage { name: None, .. })
        ));
    }

    #[test]
    fn test_ring_shortage_sums_children() {
        let paper = leaf("sulfuric-a4", "硫酸纸A4", 800);
        let rule = ConsumptionRule::new(2, "sulfuric-a4", 1);
        let result = check(Some(&rule), 100, Some(&paper), Some(&rings(&[60, 30])));
        assert_eq!(result.reason(), "透明环库存不足，需要 200，当前总计 90");
    }

    #[test]
    fn test_paper_is_checked_before_rings() {
        let paper = leaf("sulfuric-a4", "硫酸纸A4", 0);
        let result = check(Some(&a7()), 1, Some(&paper), Some(&rings(&[0])));
        assert!(matches!(result.blocker(), Some(Blocker::PaperShortage { .. })));
    }

    #[test]
    fn test_missing_or_childless_ring_group_is_not_a_constraint() {
        let paper = leaf("sulfuric-a4", "硫酸纸A4", 800);
        assert!(check(Some(&a7()), 10, Some(&paper), None).possible());
        assert!(check(Some(&a7()), 10, Some(&paper), Some(&rings(&[]))).possible());
        let lone = leaf("transparent-ring", "透明环", 0);
        assert!(check(Some(&a7()), 10, Some(&paper), Some(&lone)).possible());
    }
}

//! The name-keyed table saying what one notebook consumes.

use crate::model::MaterialId;

/// Materials consumed by one unit of a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionRule {
    /// Rings per unit, drawn from any colour of the ring group.
    pub rings: u32,
    pub paper: MaterialId,
    /// Paper sheets per unit.
    pub paper_count: u32,
}

impl ConsumptionRule {
    pub fn new(rings: u32, paper: impl Into<MaterialId>, paper_count: u32) -> Self {
        Self {
            rings,
            paper: paper.into(),
            paper_count,
        }
    }

    pub fn paper_needed(&self, quantity: u32) -> i64 {
        i64::from(quantity) * i64::from(self.paper_count)
    }

    pub fn rings_needed(&self, quantity: u32) -> i64 {
        i64::from(quantity) * i64::from(self.rings)
    }
}

/// Rules keyed by exact product name. Renaming a product orphans its rule.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<(String, ConsumptionRule)>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notebook range sold today.
    pub fn notebooks() -> Self {
        Self::new()
            .with_rule("法棍收纳册", ConsumptionRule::new(2, "sulfuric-a4", 1))
            .with_rule("A6收纳册", ConsumptionRule::new(2, "sulfuric-a4", 1))
            .with_rule("A7收纳册", ConsumptionRule::new(1, "sulfuric-a4", 1))
            .with_rule("小面包收纳册", ConsumptionRule::new(1, "sulfuric-b5", 1))
            .with_rule("TN收纳册", ConsumptionRule::new(2, "sulfuric-a4", 1))
    }

    /// Adds a rule, replacing any previous rule for the same name.
    pub fn with_rule(mut self, product_name: impl Into<String>, rule: ConsumptionRule) -> Self {
        let product_name = product_name.into();
        self.rules.retain(|(name, _)| *name != product_name);
        self.rules.push((product_name, rule));
        self
    }

    pub fn rule_for(&self, product_name: &str) -> Option<&ConsumptionRule> {
        self.rules
            .iter()
            .find(|(name, _)| name == product_name)
            .map(|(_, rule)| rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConsumptionRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notebook_rules() {
        let table = RuleTable::notebooks();
        assert_eq!(table.iter().count(), 5);

        let bread = table.rule_for("小面包收纳册").unwrap();
        assert_eq!(bread.rings, 1);
        assert_eq!(bread.paper, MaterialId::from("sulfuric-b5"));
        assert_eq!(bread.paper_count, 1);

        assert_eq!(table.rule_for("TN收纳册").unwrap().rings_needed(3), 6);
    }

    #[test]
    fn test_lookup_is_by_exact_name() {
        let table = RuleTable::notebooks();
        assert!(table.rule_for("A7收纳册").is_some());
        assert!(table.rule_for("A7").is_none());
        assert!(table.rule_for("a7收纳册").is_none());
    }

    #[test]
    fn test_with_rule_replaces() {
        let table = RuleTable::notebooks()
            .with_rule("A7收纳册", ConsumptionRule::new(0, "sulfuric-b5", 2));
        assert_eq!(table.iter().count(), 5);
        assert_eq!(table.rule_for("A7收纳册").unwrap().paper_needed(4), 8);
    }
}

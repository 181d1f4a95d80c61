//! Read-only views over the material forest: dashboard statistics and the tree-aware search.

use super::material::Material;

/// Figures over the flattened forest, where every group is replaced by its leaves.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryOverview {
    pub material_count: usize,
    pub total_value: f64,
    pub low_stock_count: usize,
    /// Distinct categories, in the order they are first met.
    pub categories: Vec<String>,
}

impl InventoryOverview {
    pub fn from_forest(forest: &[Material]) -> Self {
        let leaves: Vec<&Material> = forest.iter().flat_map(Material::leaves).collect();

        let mut categories: Vec<String> = Vec::new();
        for leaf in &leaves {
            if !categories.contains(&leaf.category) {
                categories.push(leaf.category.clone());
            }
        }

        Self {
            material_count: leaves.len(),
            total_value: leaves.iter().map(|m| m.stock_value()).sum(),
            low_stock_count: leaves.iter().filter(|m| !m.is_stock_sufficient()).count(),
            categories,
        }
    }
}

/// Search over the top level of the forest.
///
/// A leaf is kept when its name contains `text` (case-insensitive) and its category matches.
/// A group is kept when its own name matches, or when any child matches both name and category;
/// a kept group keeps all of its children.
#[derive(Debug, Clone, Default)]
pub struct MaterialFilter {
    pub text: String,
    pub category: Option<String>,
}

impl MaterialFilter {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn name_matches(&self, material: &Material) -> bool {
        material
            .name
            .to_lowercase()
            .contains(&self.text.to_lowercase())
    }

    fn category_matches(&self, material: &Material) -> bool {
        self.category
            .as_deref()
            .is_none_or(|c| c == material.category)
    }

    pub fn keeps(&self, material: &Material) -> bool {
        if material.is_group() && !material.children().is_empty() {
            return self.name_matches(material)
                || material
                    .children()
                    .iter()
                    .any(|child| self.name_matches(child) && self.category_matches(child));
        }
        self.name_matches(material) && self.category_matches(material)
    }

    pub fn apply(&self, forest: &[Material]) -> Vec<Material> {
        forest.iter().filter(|m| self.keeps(m)).cloned().collect()
    }
}

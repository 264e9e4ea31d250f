use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IngredientCategory {
    Fruit,
    Vegetable,
    Liquid,
    Protein,
    Supplement,
    Extra,
}

/// Dominant flavor note, used by the UI layer for preference chips.
#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Flavor {
    Sweet,
    Tart,
    Earthy,
    Creamy,
    Fresh,
    Spiced,
    Bitter,
}

/// Nutrition-science reference entry for a single ingredient.
///
/// Nutrient figures are per 100 g. Immutable static data; the allergen list
/// here is what the recommendation pre-filter matches profiles against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientReference {
    pub name: String,
    pub category: IngredientCategory,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fiber: u32,
    pub vitamins: Vec<String>,
    pub minerals: Vec<String>,
    pub benefits: Vec<String>,
    pub allergens: Vec<String>,
    /// Health-goal tags this ingredient supports ("energy", "recovery", ...).
    pub good_for: Vec<String>,
    pub flavor: Flavor,
}

impl IngredientReference {
    pub fn has_allergen(&self, allergen: &str) -> bool {
        let wanted = allergen.trim().to_lowercase();
        self.allergens.iter().any(|a| a.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_allergen_case_insensitive() {
        let entry = IngredientReference {
            name: "peanut butter".to_string(),
            category: IngredientCategory::Protein,
            calories: 588,
            protein: 25,
            carbs: 20,
            fiber: 6,
            vitamins: vec![],
            minerals: vec![],
            benefits: vec![],
            allergens: vec!["peanuts".to_string()],
            good_for: vec![],
            flavor: Flavor::Creamy,
        };

        assert!(entry.has_allergen("Peanuts"));
        assert!(entry.has_allergen(" peanuts "));
        assert!(!entry.has_allergen("tree nuts"));
    }
}

use serde::{Deserialize, Serialize};

/// One ingredient line of a recipe.
///
/// `quantity` is deliberately free text ("1 banana", "250ml", "2 tbsp") the
/// way recipe authors write it; the packaging layer estimates grams from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub quantity: String,
}

/// Nutrition facts for a prepared smoothie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fiber: u32,
    pub fat: u32,
}

/// A smoothie recipe in the catalog. Static reference data, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<RecipeIngredient>,
    pub macros: Macros,
    pub instructions: Vec<String>,
    pub scientific_explanation: String,
    /// Profile-fit score (0-100) precomputed for the catalog entry.
    pub base_match_score: u8,
}

impl CatalogItem {
    /// Lower-cased ingredient names, the shape keyword matching works on.
    pub fn ingredient_names_lowercase(&self) -> Vec<String> {
        self.ingredients
            .iter()
            .map(|i| i.name.to_lowercase())
            .collect()
    }
}

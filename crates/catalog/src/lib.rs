pub mod data;
pub mod error;
pub mod item;
pub mod reference;

pub use error::CatalogError;
pub use item::{CatalogItem, Macros, RecipeIngredient};
pub use reference::{Flavor, IngredientCategory, IngredientReference};

/// Immutable catalog of smoothie recipes plus the ingredient reference table.
///
/// Loaded once at startup and shared read-only across request handlers; a
/// malformed entry is a configuration bug and fails the load, never a request.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    reference: Vec<IngredientReference>,
}

impl Catalog {
    /// Validate and assemble a catalog from explicit data.
    pub fn new(
        items: Vec<CatalogItem>,
        reference: Vec<IngredientReference>,
    ) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyItemId(item.name.clone()));
            }
            if !seen.insert(item.id.clone()) {
                return Err(CatalogError::DuplicateItemId(item.id.clone()));
            }
            if item.ingredients.is_empty() {
                return Err(CatalogError::NoIngredients(item.id.clone()));
            }
            if item.base_match_score > 100 {
                return Err(CatalogError::MatchScoreOutOfRange {
                    id: item.id.clone(),
                    score: item.base_match_score,
                });
            }
        }
        Ok(Self { items, reference })
    }

    /// The built-in, versioned-in-process catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(data::catalog_items(), data::reference_entries())
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Ingredient reference lookup by name, case-insensitive.
    pub fn reference_for(&self, ingredient_name: &str) -> Option<&IngredientReference> {
        let wanted = ingredient_name.trim().to_lowercase();
        self.reference
            .iter()
            .find(|r| r.name.to_lowercase() == wanted)
    }

    pub fn reference_entries(&self) -> &[IngredientReference] {
        &self.reference
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

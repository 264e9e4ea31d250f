use std::collections::BTreeMap;

use catalog::CatalogItem;
use serde::{Deserialize, Serialize};

use crate::quantity::to_grams;
use crate::storage::{categorize, Storage};

/// Fresh ingredient kinds that fit one shared vacuum bag.
pub const FRESH_PER_BAG: usize = 5;
/// Dry ingredient kinds that fit one shared vacuum bag.
pub const DRY_PER_BAG: usize = 8;

/// One ingredient line inside a package, annotated for the packing slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedIngredient {
    pub name: String,
    pub quantity_text: String,
    pub grams: u32,
    pub storage: Storage,
}

/// One vacuum-sealed package, always covering exactly one smoothie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub source_item_id: String,
    pub source_item_name: String,
    pub ingredients: Vec<PackedIngredient>,
}

/// Aggregated grams for one ingredient kind across the whole cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientTotal {
    /// Lower-cased ingredient name, the aggregation key.
    pub name: String,
    pub grams: u32,
    pub storage_instruction: String,
}

/// Shipping breakdown for a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingSummary {
    /// Always equals the cart size: one package per smoothie.
    pub total_packages: usize,
    pub packages: Vec<Package>,
    pub fresh_ingredients: Vec<IngredientTotal>,
    pub dry_ingredients: Vec<IngredientTotal>,
    /// Informational only: bags needed if fresh kinds were bundled
    /// [`FRESH_PER_BAG`] to a bag instead of packed per smoothie.
    pub fresh_bag_estimate: usize,
    /// Informational only, as above with [`DRY_PER_BAG`].
    pub dry_bag_estimate: usize,
}

/// Build the package for a single cart item.
pub fn build_package(item: &CatalogItem) -> Package {
    Package {
        source_item_id: item.id.clone(),
        source_item_name: item.name.clone(),
        ingredients: item
            .ingredients
            .iter()
            .map(|ing| PackedIngredient {
                name: ing.name.clone(),
                quantity_text: ing.quantity.clone(),
                grams: to_grams(&ing.quantity),
                storage: categorize(&ing.name),
            })
            .collect(),
    }
}

/// Compute the full packaging breakdown for a cart.
///
/// Each smoothie ships as its own vacuum-sealed package so ingredients stay
/// fresh per serving; the cart is treated as a flat multiset, so selecting
/// the same recipe for two slots yields two packages. Per-ingredient totals
/// are folded into ordered maps keyed by lower-cased name, which makes the
/// output identical for identical carts. An empty cart yields an empty,
/// all-zero summary.
pub fn calculate(cart: &[CatalogItem]) -> PackagingSummary {
    let packages: Vec<Package> = cart.iter().map(build_package).collect();

    let (fresh, dry) = packages
        .iter()
        .flat_map(|p| p.ingredients.iter())
        .fold(
            (BTreeMap::new(), BTreeMap::new()),
            |(mut fresh, mut dry), ing| {
                let key = ing.name.to_lowercase();
                let bucket: &mut BTreeMap<String, u32> = match ing.storage {
                    Storage::Fresh => &mut fresh,
                    Storage::Dry => &mut dry,
                };
                *bucket.entry(key).or_insert(0) += ing.grams;
                (fresh, dry)
            },
        );

    let fresh_bag_estimate = fresh.len().div_ceil(FRESH_PER_BAG);
    let dry_bag_estimate = dry.len().div_ceil(DRY_PER_BAG);

    PackagingSummary {
        total_packages: packages.len(),
        packages,
        fresh_ingredients: totals(fresh, Storage::Fresh),
        dry_ingredients: totals(dry, Storage::Dry),
        fresh_bag_estimate,
        dry_bag_estimate,
    }
}

fn totals(bucket: BTreeMap<String, u32>, storage: Storage) -> Vec<IngredientTotal> {
    bucket
        .into_iter()
        .map(|(name, grams)| IngredientTotal {
            name,
            grams,
            storage_instruction: storage.instruction().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    fn cart_of(ids: &[&str]) -> Vec<CatalogItem> {
        let catalog = Catalog::builtin().unwrap();
        ids.iter()
            .map(|id| catalog.item(id).expect("known catalog id").clone())
            .collect()
    }

    #[test]
    fn test_one_package_per_cart_item() {
        let cart = cart_of(&["sunrise-oat-banana", "green-machine", "cacao-recovery-shake"]);
        let summary = calculate(&cart);

        assert_eq!(summary.total_packages, 3);
        assert_eq!(summary.packages.len(), 3);
    }

    #[test]
    fn test_duplicate_items_are_separate_packages() {
        let cart = cart_of(&["green-machine", "green-machine"]);
        let summary = calculate(&cart);

        assert_eq!(
            summary.total_packages, 2,
            "a recipe picked twice ships twice"
        );
    }

    #[test]
    fn test_grams_are_conserved_between_packages_and_totals() {
        let cart = cart_of(&[
            "sunrise-oat-banana",
            "berry-protein-builder",
            "sunrise-oat-banana",
        ]);
        let summary = calculate(&cart);

        let package_grams: u32 = summary
            .packages
            .iter()
            .flat_map(|p| p.ingredients.iter())
            .map(|i| i.grams)
            .sum();
        let total_grams: u32 = summary
            .fresh_ingredients
            .iter()
            .chain(summary.dry_ingredients.iter())
            .map(|t| t.grams)
            .sum();

        assert_eq!(package_grams, total_grams);
    }

    #[test]
    fn test_totals_aggregate_by_lowercased_name() {
        let cart = cart_of(&["sunrise-oat-banana", "sunrise-oat-banana"]);
        let summary = calculate(&cart);

        let banana = summary
            .fresh_ingredients
            .iter()
            .find(|t| t.name == "banana")
            .expect("banana aggregated under its lowercase name");
        assert_eq!(banana.grams, 200, "two default-weight bananas");
    }

    #[test]
    fn test_storage_instructions_annotated() {
        let summary = calculate(&cart_of(&["sunrise-oat-banana"]));

        for t in &summary.fresh_ingredients {
            assert_eq!(t.storage_instruction, "Refrigerate upon delivery");
        }
        for t in &summary.dry_ingredients {
            assert_eq!(t.storage_instruction, "Store in cool, dry place");
        }
        assert!(
            summary.dry_ingredients.iter().any(|t| t.name == "chia seeds"),
            "chia seeds belong in the dry bucket"
        );
    }

    #[test]
    fn test_bag_estimates_round_up() {
        // sunrise-oat-banana splits into 2 fresh kinds (banana, almond
        // milk) and 3 dry kinds (oats, chia, honey): one bag each.
        let summary = calculate(&cart_of(&["sunrise-oat-banana"]));
        assert_eq!(summary.fresh_bag_estimate, 1);
        assert_eq!(summary.dry_bag_estimate, 1);

        let bigger = calculate(&cart_of(&[
            "sunrise-oat-banana",
            "green-machine",
            "berry-protein-builder",
            "cherry-almond-wind-down",
        ]));
        assert_eq!(
            bigger.fresh_bag_estimate,
            bigger.fresh_ingredients.len().div_ceil(FRESH_PER_BAG)
        );
    }

    #[test]
    fn test_empty_cart_yields_zero_summary() {
        let summary = calculate(&[]);

        assert_eq!(summary.total_packages, 0);
        assert!(summary.packages.is_empty());
        assert!(summary.fresh_ingredients.is_empty());
        assert!(summary.dry_ingredients.is_empty());
        assert_eq!(summary.fresh_bag_estimate, 0);
        assert_eq!(summary.dry_bag_estimate, 0);
    }

    #[test]
    fn test_identical_carts_yield_identical_summaries() {
        let cart = cart_of(&["matcha-morning-kick", "golden-papaya-soother"]);
        assert_eq!(calculate(&cart), calculate(&cart));
    }
}

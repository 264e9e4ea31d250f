use account::UserProfile;
use catalog::{Catalog, CatalogItem};

/// Drop catalog items containing any ingredient whose reference entry lists
/// an allergen from the profile.
///
/// Applied by callers before [`crate::generate_weekly`], never inside it,
/// so the generator's per-slot cardinality stays a function of its input.
/// The reference table decides what carries an allergen; an ingredient with
/// no reference entry contributes none rather than being guessed at from
/// its name. An empty allergen list returns the catalog unfiltered.
pub fn filter_allergen_safe(catalog: &Catalog, profile: &UserProfile) -> Vec<CatalogItem> {
    if profile.allergens.is_empty() {
        return catalog.items().to_vec();
    }

    catalog
        .items()
        .iter()
        .filter(|item| {
            item.ingredients.iter().all(|ing| {
                catalog
                    .reference_for(&ing.name)
                    .is_none_or(|r| !profile.allergens.iter().any(|a| r.has_allergen(a)))
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_allergens_returns_everything() {
        let catalog = Catalog::builtin().unwrap();
        let safe = filter_allergen_safe(&catalog, &UserProfile::default());
        assert_eq!(safe.len(), catalog.len());
    }

    #[test]
    fn test_peanut_allergy_drops_peanut_butter_items() {
        let catalog = Catalog::builtin().unwrap();
        let profile = UserProfile {
            allergens: vec!["peanuts".to_string()],
            ..Default::default()
        };

        let safe = filter_allergen_safe(&catalog, &profile);

        assert!(safe.len() < catalog.len(), "some items contain peanut butter");
        for item in &safe {
            assert!(
                !item
                    .ingredients
                    .iter()
                    .any(|i| i.name.to_lowercase() == "peanut butter"),
                "{} should have been filtered",
                item.id
            );
        }
    }

    #[test]
    fn test_allergen_match_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let profile = UserProfile {
            allergens: vec!["Milk".to_string()],
            ..Default::default()
        };

        let safe = filter_allergen_safe(&catalog, &profile);
        for item in &safe {
            for ing in &item.ingredients {
                if let Some(r) = catalog.reference_for(&ing.name) {
                    assert!(
                        !r.has_allergen("milk"),
                        "{} still contains a dairy ingredient",
                        item.id
                    );
                }
            }
        }
    }
}

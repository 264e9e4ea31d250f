//! Built-in ingredient reference table and smoothie catalog.
//!
//! Static, versioned-in-process data. Editing an entry here is a release,
//! not a runtime operation.

use crate::item::{CatalogItem, Macros, RecipeIngredient};
use crate::reference::{Flavor, IngredientCategory, IngredientReference};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    category: IngredientCategory,
    calories: u32,
    protein: u32,
    carbs: u32,
    fiber: u32,
    vitamins: &[&str],
    minerals: &[&str],
    benefits: &[&str],
    allergens: &[&str],
    good_for: &[&str],
    flavor: Flavor,
) -> IngredientReference {
    IngredientReference {
        name: name.to_string(),
        category,
        calories,
        protein,
        carbs,
        fiber,
        vitamins: strings(vitamins),
        minerals: strings(minerals),
        benefits: strings(benefits),
        allergens: strings(allergens),
        good_for: strings(good_for),
        flavor,
    }
}

fn ingredient(name: &str, quantity: &str) -> RecipeIngredient {
    RecipeIngredient {
        name: name.to_string(),
        quantity: quantity.to_string(),
    }
}

pub fn reference_entries() -> Vec<IngredientReference> {
    use Flavor::*;
    use IngredientCategory::*;

    vec![
        entry(
            "banana",
            Fruit,
            89,
            1,
            23,
            3,
            &["B6", "C"],
            &["potassium", "magnesium"],
            &["sustained energy", "muscle function"],
            &[],
            &["energy", "recovery"],
            Sweet,
        ),
        entry(
            "blueberries",
            Fruit,
            57,
            1,
            14,
            2,
            &["C", "K"],
            &["manganese"],
            &["antioxidants", "cognitive support"],
            &[],
            &["focus", "immunity"],
            Sweet,
        ),
        entry(
            "strawberries",
            Fruit,
            32,
            1,
            8,
            2,
            &["C", "folate"],
            &["manganese"],
            &["antioxidants", "skin health"],
            &[],
            &["immunity", "weight-loss"],
            Sweet,
        ),
        entry(
            "cherries",
            Fruit,
            63,
            1,
            16,
            2,
            &["C", "A"],
            &["potassium"],
            &["natural melatonin", "reduced soreness"],
            &[],
            &["sleep", "recovery"],
            Tart,
        ),
        entry(
            "mango",
            Fruit,
            60,
            1,
            15,
            2,
            &["A", "C"],
            &["copper"],
            &["quick carbohydrates", "eye health"],
            &[],
            &["energy"],
            Sweet,
        ),
        entry(
            "pineapple",
            Fruit,
            50,
            1,
            13,
            1,
            &["C", "B6"],
            &["manganese"],
            &["bromelain for digestion"],
            &[],
            &["digestion"],
            Tart,
        ),
        entry(
            "papaya",
            Fruit,
            43,
            1,
            11,
            2,
            &["C", "A", "folate"],
            &["potassium"],
            &["papain enzyme", "gentle on the stomach"],
            &[],
            &["digestion"],
            Sweet,
        ),
        entry(
            "apple",
            Fruit,
            52,
            0,
            14,
            2,
            &["C"],
            &["potassium"],
            &["pectin fiber"],
            &[],
            &["digestion", "weight-loss"],
            Fresh,
        ),
        entry(
            "orange",
            Fruit,
            47,
            1,
            12,
            2,
            &["C", "folate"],
            &["calcium"],
            &["immune support"],
            &[],
            &["immunity"],
            Tart,
        ),
        entry(
            "dates",
            Fruit,
            282,
            2,
            75,
            8,
            &["B6"],
            &["potassium", "magnesium"],
            &["fast natural sugars"],
            &[],
            &["energy"],
            Sweet,
        ),
        entry(
            "avocado",
            Fruit,
            160,
            2,
            9,
            7,
            &["K", "E", "folate"],
            &["potassium"],
            &["healthy fats", "satiety"],
            &[],
            &["heart-health", "weight-loss"],
            Creamy,
        ),
        entry(
            "spinach",
            Vegetable,
            23,
            3,
            4,
            2,
            &["K", "A", "folate"],
            &["iron", "magnesium"],
            &["micronutrient density"],
            &[],
            &["immunity", "energy"],
            Earthy,
        ),
        entry(
            "kale",
            Vegetable,
            35,
            3,
            4,
            4,
            &["K", "C", "A"],
            &["calcium", "manganese"],
            &["antioxidants"],
            &[],
            &["immunity"],
            Earthy,
        ),
        entry(
            "cucumber",
            Vegetable,
            15,
            1,
            4,
            1,
            &["K"],
            &["potassium"],
            &["hydration"],
            &[],
            &["hydration", "weight-loss"],
            Fresh,
        ),
        entry(
            "beetroot",
            Vegetable,
            43,
            2,
            10,
            3,
            &["folate"],
            &["manganese", "potassium"],
            &["nitrates for blood flow"],
            &[],
            &["endurance", "heart-health"],
            Earthy,
        ),
        entry(
            "carrot",
            Vegetable,
            41,
            1,
            10,
            3,
            &["A", "K"],
            &["potassium"],
            &["beta-carotene"],
            &[],
            &["immunity"],
            Sweet,
        ),
        entry(
            "ginger",
            Extra,
            80,
            2,
            18,
            2,
            &["B6"],
            &["magnesium"],
            &["gingerol, settles the stomach"],
            &[],
            &["digestion"],
            Spiced,
        ),
        entry(
            "almond milk",
            Liquid,
            17,
            1,
            1,
            0,
            &["E", "D"],
            &["calcium"],
            &["light dairy-free base"],
            &["tree nuts"],
            &["weight-loss"],
            Creamy,
        ),
        entry(
            "oat milk",
            Liquid,
            46,
            1,
            8,
            1,
            &["D", "B12"],
            &["calcium"],
            &["creamy fiber-carrying base"],
            &["gluten"],
            &["heart-health"],
            Creamy,
        ),
        entry(
            "coconut water",
            Liquid,
            19,
            0,
            4,
            0,
            &["C"],
            &["potassium", "sodium"],
            &["natural electrolytes"],
            &[],
            &["hydration", "recovery"],
            Fresh,
        ),
        entry(
            "greek yogurt",
            Protein,
            59,
            10,
            4,
            0,
            &["B12"],
            &["calcium"],
            &["probiotics", "complete protein"],
            &["milk"],
            &["recovery", "digestion"],
            Creamy,
        ),
        entry(
            "protein powder",
            Protein,
            370,
            80,
            8,
            1,
            &["B12"],
            &["calcium"],
            &["concentrated whey protein"],
            &["milk"],
            &["muscle-gain", "recovery"],
            Creamy,
        ),
        entry(
            "peanut butter",
            Protein,
            588,
            25,
            20,
            6,
            &["E", "B3"],
            &["magnesium"],
            &["protein and healthy fats"],
            &["peanuts"],
            &["muscle-gain", "energy"],
            Creamy,
        ),
        entry(
            "almond butter",
            Protein,
            614,
            21,
            19,
            10,
            &["E"],
            &["magnesium", "calcium"],
            &["vitamin E and satiety"],
            &["tree nuts"],
            &["heart-health"],
            Creamy,
        ),
        entry(
            "chia seeds",
            Supplement,
            486,
            17,
            42,
            34,
            &["B1", "B3"],
            &["calcium", "magnesium"],
            &["omega-3 and soluble fiber"],
            &[],
            &["digestion", "heart-health"],
            Earthy,
        ),
        entry(
            "rolled oats",
            Extra,
            389,
            17,
            66,
            10,
            &["B1"],
            &["manganese", "iron"],
            &["slow-release carbohydrates"],
            &["gluten"],
            &["energy", "heart-health"],
            Earthy,
        ),
        entry(
            "cacao powder",
            Supplement,
            228,
            20,
            58,
            33,
            &["B2"],
            &["magnesium", "iron"],
            &["flavanols and a mild theobromine lift"],
            &[],
            &["focus", "mood"],
            Bitter,
        ),
        entry(
            "matcha",
            Supplement,
            324,
            31,
            39,
            38,
            &["A", "C"],
            &["potassium"],
            &["l-theanine plus caffeine for calm focus"],
            &[],
            &["focus", "energy"],
            Bitter,
        ),
        entry(
            "maca powder",
            Supplement,
            325,
            14,
            71,
            7,
            &["C", "B6"],
            &["copper", "iron"],
            &["adaptogenic energy support"],
            &[],
            &["energy", "mood"],
            Earthy,
        ),
        entry(
            "espresso",
            Extra,
            9,
            0,
            2,
            0,
            &["B2", "B3"],
            &["magnesium"],
            &["caffeine for alertness"],
            &[],
            &["energy", "focus"],
            Bitter,
        ),
        entry(
            "honey",
            Extra,
            304,
            0,
            82,
            0,
            &[],
            &["potassium"],
            &["quick glucose"],
            &[],
            &["energy"],
            Sweet,
        ),
        entry(
            "cinnamon",
            Extra,
            247,
            4,
            81,
            53,
            &["K"],
            &["calcium", "manganese"],
            &["blood-sugar friendly spice"],
            &[],
            &["heart-health"],
            Spiced,
        ),
        entry(
            "vanilla extract",
            Extra,
            288,
            0,
            13,
            0,
            &[],
            &[],
            &["comforting aroma"],
            &[],
            &["mood"],
            Sweet,
        ),
        entry(
            "lime juice",
            Liquid,
            25,
            0,
            8,
            0,
            &["C"],
            &["potassium"],
            &["brightens heavy blends"],
            &[],
            &["immunity"],
            Tart,
        ),
    ]
}

pub fn catalog_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "sunrise-oat-banana".to_string(),
            name: "Sunrise Oat & Banana".to_string(),
            description: "A slow-burning breakfast classic with oats, banana and chia."
                .to_string(),
            ingredients: vec![
                ingredient("Banana", "1 banana"),
                ingredient("Rolled oats", "40g"),
                ingredient("Chia seeds", "1 tbsp"),
                ingredient("Almond milk", "250ml"),
                ingredient("Honey", "1 tsp"),
            ],
            macros: Macros {
                calories: 380,
                protein: 11,
                carbs: 62,
                fiber: 9,
                fat: 9,
            },
            instructions: strings(&[
                "Soak the oats and chia in almond milk for five minutes.",
                "Add the banana and honey, blend until smooth.",
            ]),
            scientific_explanation: "Oat beta-glucans slow glucose absorption, so the banana's \
                sugars release over hours rather than minutes."
                .to_string(),
            base_match_score: 78,
        },
        CatalogItem {
            id: "matcha-morning-kick".to_string(),
            name: "Matcha Morning Kick".to_string(),
            description: "Green tea caffeine smoothed out by yogurt and dates.".to_string(),
            ingredients: vec![
                ingredient("Matcha", "1 tsp"),
                ingredient("Spinach", "30g"),
                ingredient("Banana", "1 banana"),
                ingredient("Greek yogurt", "100g"),
                ingredient("Almond milk", "200ml"),
                ingredient("Dates", "2 dates"),
            ],
            macros: Macros {
                calories: 330,
                protein: 17,
                carbs: 48,
                fiber: 6,
                fat: 7,
            },
            instructions: strings(&[
                "Whisk the matcha into a splash of warm almond milk.",
                "Blend with the remaining ingredients until bright green.",
            ]),
            scientific_explanation: "Matcha pairs caffeine with l-theanine, which flattens the \
                jitter curve compared to coffee alone."
                .to_string(),
            base_match_score: 74,
        },
        CatalogItem {
            id: "berry-protein-builder".to_string(),
            name: "Berry Protein Builder".to_string(),
            description: "Double berries over a whey and yogurt protein base.".to_string(),
            ingredients: vec![
                ingredient("Blueberries", "80g"),
                ingredient("Strawberries", "80g"),
                ingredient("Protein powder", "30g"),
                ingredient("Greek yogurt", "100g"),
                ingredient("Oat milk", "200ml"),
            ],
            macros: Macros {
                calories: 420,
                protein: 28,
                carbs: 46,
                fiber: 7,
                fat: 8,
            },
            instructions: strings(&[
                "Blend the berries with oat milk first.",
                "Add yogurt and protein powder, pulse until just combined.",
            ]),
            scientific_explanation: "Whey's leucine content triggers muscle protein synthesis; \
                berry polyphenols blunt exercise-induced oxidative stress."
                .to_string(),
            base_match_score: 82,
        },
        CatalogItem {
            id: "green-machine".to_string(),
            name: "Green Machine".to_string(),
            description: "Spinach, kale and cucumber with apple to keep it friendly.".to_string(),
            ingredients: vec![
                ingredient("Spinach", "40g"),
                ingredient("Kale", "30g"),
                ingredient("Cucumber", "0.5 cup"),
                ingredient("Apple", "1 apple"),
                ingredient("Ginger", "1 tsp"),
                ingredient("Coconut water", "250ml"),
            ],
            macros: Macros {
                calories: 240,
                protein: 6,
                carbs: 38,
                fiber: 8,
                fat: 7,
            },
            instructions: strings(&[
                "Blend the leafy greens with coconut water until fully broken down.",
                "Add apple, cucumber and ginger, blend again.",
            ]),
            scientific_explanation: "Leafy greens deliver folate and vitamin K at very low \
                caloric cost; coconut water adds potassium for fluid balance."
                .to_string(),
            base_match_score: 70,
        },
        CatalogItem {
            id: "cacao-recovery-shake".to_string(),
            name: "Cacao Recovery Shake".to_string(),
            description: "Post-workout chocolate without the candy bar.".to_string(),
            ingredients: vec![
                ingredient("Cacao powder", "2 tbsp"),
                ingredient("Banana", "1 banana"),
                ingredient("Peanut butter", "1 tbsp"),
                ingredient("Protein powder", "25g"),
                ingredient("Oat milk", "250ml"),
                ingredient("Dates", "2 dates"),
            ],
            macros: Macros {
                calories: 480,
                protein: 30,
                carbs: 55,
                fiber: 8,
                fat: 14,
            },
            instructions: strings(&[
                "Blend everything on high until the dates disappear.",
            ]),
            scientific_explanation: "A roughly 3:1 carb-to-protein ratio restocks glycogen while \
                whey repairs muscle; cacao flavanols support blood flow."
                .to_string(),
            base_match_score: 80,
        },
        CatalogItem {
            id: "tropical-afternoon-lift".to_string(),
            name: "Tropical Afternoon Lift".to_string(),
            description: "Mango and pineapple for the mid-day slump.".to_string(),
            ingredients: vec![
                ingredient("Mango", "120g"),
                ingredient("Pineapple", "100g"),
                ingredient("Banana", "1 banana"),
                ingredient("Coconut water", "200ml"),
                ingredient("Lime juice", "1 tbsp"),
            ],
            macros: Macros {
                calories: 290,
                protein: 4,
                carbs: 64,
                fiber: 6,
                fat: 2,
            },
            instructions: strings(&[
                "Blend the fruit with coconut water.",
                "Finish with lime juice to taste.",
            ]),
            scientific_explanation: "Fruit fructose plus electrolytes raises blood glucose \
                gently, avoiding the crash of refined-sugar snacks."
                .to_string(),
            base_match_score: 72,
        },
        CatalogItem {
            id: "cherry-almond-wind-down".to_string(),
            name: "Cherry Almond Wind-Down".to_string(),
            description: "Tart cherries and almond butter to close the day.".to_string(),
            ingredients: vec![
                ingredient("Cherries", "100g"),
                ingredient("Almond butter", "1 tbsp"),
                ingredient("Banana", "1 banana"),
                ingredient("Vanilla extract", "1 tsp"),
                ingredient("Almond milk", "250ml"),
                ingredient("Cinnamon", "1 tsp"),
            ],
            macros: Macros {
                calories: 320,
                protein: 9,
                carbs: 44,
                fiber: 7,
                fat: 11,
            },
            instructions: strings(&[
                "Pit the cherries if using fresh.",
                "Blend everything until creamy.",
            ]),
            scientific_explanation: "Tart cherries are one of the few food sources of melatonin; \
                magnesium from almonds supports muscle relaxation."
                .to_string(),
            base_match_score: 76,
        },
        CatalogItem {
            id: "espresso-oat-jumpstart".to_string(),
            name: "Espresso Oat Jumpstart".to_string(),
            description: "Breakfast and coffee in one glass.".to_string(),
            ingredients: vec![
                ingredient("Espresso", "60ml"),
                ingredient("Rolled oats", "30g"),
                ingredient("Banana", "1 banana"),
                ingredient("Cacao powder", "1 tbsp"),
                ingredient("Oat milk", "200ml"),
            ],
            macros: Macros {
                calories: 340,
                protein: 10,
                carbs: 56,
                fiber: 6,
                fat: 8,
            },
            instructions: strings(&[
                "Pull the espresso and let it cool slightly.",
                "Blend with the remaining ingredients over ice.",
            ]),
            scientific_explanation: "Caffeine's alertness peak lands 30-45 minutes after \
                drinking; oats keep energy steady once it fades."
                .to_string(),
            base_match_score: 75,
        },
        CatalogItem {
            id: "golden-papaya-soother".to_string(),
            name: "Golden Papaya Soother".to_string(),
            description: "Papaya and ginger for easy digestion.".to_string(),
            ingredients: vec![
                ingredient("Papaya", "150g"),
                ingredient("Ginger", "1 tsp"),
                ingredient("Greek yogurt", "100g"),
                ingredient("Honey", "1 tsp"),
                ingredient("Oat milk", "150ml"),
            ],
            macros: Macros {
                calories: 260,
                protein: 9,
                carbs: 42,
                fiber: 5,
                fat: 5,
            },
            instructions: strings(&[
                "Blend papaya, ginger and oat milk.",
                "Stir in yogurt and honey at the end.",
            ]),
            scientific_explanation: "Papain and gingerol both aid protein breakdown, and yogurt \
                cultures support the gut microbiome."
                .to_string(),
            base_match_score: 71,
        },
        CatalogItem {
            id: "maca-power-breakfast".to_string(),
            name: "Maca Power Breakfast".to_string(),
            description: "A dense, adaptogenic start for heavy training days.".to_string(),
            ingredients: vec![
                ingredient("Maca powder", "1 tsp"),
                ingredient("Banana", "1 banana"),
                ingredient("Peanut butter", "1 tbsp"),
                ingredient("Rolled oats", "30g"),
                ingredient("Protein powder", "20g"),
                ingredient("Almond milk", "250ml"),
            ],
            macros: Macros {
                calories: 470,
                protein: 26,
                carbs: 52,
                fiber: 9,
                fat: 15,
            },
            instructions: strings(&[
                "Blend everything on high for a full minute.",
            ]),
            scientific_explanation: "Maca is studied for perceived-energy benefits; the real \
                engine here is the oat-peanut-whey macro stack."
                .to_string(),
            base_match_score: 79,
        },
        CatalogItem {
            id: "vanilla-berry-nightcap".to_string(),
            name: "Vanilla Berry Nightcap".to_string(),
            description: "Light, caffeine-free and faintly sweet.".to_string(),
            ingredients: vec![
                ingredient("Blueberries", "80g"),
                ingredient("Vanilla extract", "1 tsp"),
                ingredient("Greek yogurt", "150g"),
                ingredient("Almond milk", "150ml"),
                ingredient("Cinnamon", "1 tsp"),
            ],
            macros: Macros {
                calories: 280,
                protein: 15,
                carbs: 34,
                fiber: 5,
                fat: 8,
            },
            instructions: strings(&[
                "Blend berries with almond milk.",
                "Add yogurt, vanilla and cinnamon, blend briefly.",
            ]),
            scientific_explanation: "Casein in yogurt digests slowly overnight, and the blend \
                stays under the caloric load that disturbs sleep."
                .to_string(),
            base_match_score: 73,
        },
        CatalogItem {
            id: "beet-citrus-refresher".to_string(),
            name: "Beet Citrus Refresher".to_string(),
            description: "Earthy beets brightened with orange and carrot.".to_string(),
            ingredients: vec![
                ingredient("Beetroot", "100g"),
                ingredient("Orange", "1 orange"),
                ingredient("Carrot", "80g"),
                ingredient("Ginger", "1 tsp"),
                ingredient("Coconut water", "200ml"),
            ],
            macros: Macros {
                calories: 220,
                protein: 5,
                carbs: 48,
                fiber: 7,
                fat: 1,
            },
            instructions: strings(&[
                "Use cooked beetroot for a smoother texture.",
                "Blend everything until no fibrous bits remain.",
            ]),
            scientific_explanation: "Beet nitrates convert to nitric oxide, which dilates blood \
                vessels and is linked to improved endurance."
                .to_string(),
            base_match_score: 68,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_names_are_lowercase_and_unique() {
        let entries = reference_entries();
        let mut names: Vec<_> = entries.iter().map(|e| e.name.clone()).collect();
        for name in &names {
            assert_eq!(
                name,
                &name.to_lowercase(),
                "reference names are stored lowercase"
            );
        }
        names.sort();
        names.dedup();
        assert_eq!(names.len(), entries.len(), "reference names must be unique");
    }

    #[test]
    fn test_every_recipe_ingredient_has_a_reference_entry() {
        let entries = reference_entries();
        for item in catalog_items() {
            for ing in &item.ingredients {
                let found = entries
                    .iter()
                    .any(|e| e.name == ing.name.to_lowercase());
                assert!(
                    found,
                    "ingredient '{}' of '{}' is missing from the reference table",
                    ing.name, item.id
                );
            }
        }
    }
}

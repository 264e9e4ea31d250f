use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// How an ingredient must be stored once delivered.
#[derive(
    EnumString,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Storage {
    Fresh,
    Dry,
}

impl Storage {
    /// Fixed instruction printed on the packing slip.
    pub fn instruction(self) -> &'static str {
        match self {
            Storage::Fresh => "Refrigerate upon delivery",
            Storage::Dry => "Store in cool, dry place",
        }
    }
}

/// Perishables: produce, dairy and refrigerated liquid bases.
const FRESH_KEYWORDS: &[&str] = &[
    "banana",
    "berry",
    "berries",
    "cherry",
    "cherries",
    "mango",
    "pineapple",
    "papaya",
    "apple",
    "orange",
    "kiwi",
    "avocado",
    "spinach",
    "kale",
    "cucumber",
    "celery",
    "beetroot",
    "carrot",
    "ginger",
    "yogurt",
    "milk",
    "juice",
    "coconut water",
];

/// Shelf-stable powders, seeds, butters and sweeteners.
const DRY_KEYWORDS: &[&str] = &[
    "powder",
    "protein",
    "oats",
    "granola",
    "chia",
    "flax",
    "hemp",
    "seeds",
    "nuts",
    "almond butter",
    "peanut butter",
    "cacao",
    "cocoa",
    "matcha",
    "spirulina",
    "maca",
    "collagen",
    "dates",
    "cinnamon",
    "vanilla",
    "honey",
    "espresso",
];

/// Classify an ingredient as fresh or dry by case-insensitive substring
/// containment.
///
/// The fresh list is checked first and unknown ingredients default to
/// fresh: a perishable shipped as shelf-stable spoils, a powder kept in
/// the fridge does not.
pub fn categorize(ingredient_name: &str) -> Storage {
    let name = ingredient_name.trim().to_lowercase();

    if FRESH_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Storage::Fresh;
    }
    if DRY_KEYWORDS.iter().any(|kw| name.contains(kw)) {
        return Storage::Dry;
    }
    Storage::Fresh
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat delivery fee below the free-delivery threshold.
pub const FLAT_DELIVERY_FEE: f64 = 8.0;
/// Orders of at least this many smoothies ship free.
pub const FREE_DELIVERY_THRESHOLD: u32 = 10;
/// Refundable insulated-bag deposit charged on a customer's first order.
pub const FIRST_ORDER_BAG_DEPOSIT: f64 = 15.0;
/// Single-smoothie price used for the marketing savings comparison.
pub const REFERENCE_UNIT_PRICE: f64 = 12.0;

#[derive(Error, Debug, PartialEq)]
pub enum PricingError {
    #[error("tier table is empty")]
    EmptyTierTable,

    #[error("first tier starts at {0}, expected 1")]
    FirstTierNotAtOne(u32),

    #[error("tier '{label}' has min {min} above max {max}")]
    InvertedTier { label: String, min: u32, max: u32 },

    #[error("tier '{label}' starts at {found}, expected {expected} (gap or overlap)")]
    BrokenTierChain {
        label: String,
        expected: u32,
        found: u32,
    },
}

/// One row of the volume discount table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub min_qty: u32,
    pub max_qty: u32,
    pub price_per_unit: f64,
    pub label: String,
    /// Discount versus the single-unit price, for display.
    pub savings_percent: f32,
}

/// Quote for one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub quantity: u32,
    pub price_per_unit: f64,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub bag_deposit: f64,
    pub total: f64,
    /// `None` when the quantity falls outside every tier; the top tier's
    /// unit price still applies.
    pub matched_tier: Option<PriceTier>,
    pub free_delivery_applied: bool,
}

fn tier(min_qty: u32, max_qty: u32, price_per_unit: f64, label: &str, savings_percent: f32) -> PriceTier {
    PriceTier {
        min_qty,
        max_qty,
        price_per_unit,
        label: label.to_string(),
        savings_percent,
    }
}

/// The production discount table. Asserted contiguous in tests.
pub fn standard_tiers() -> Vec<PriceTier> {
    vec![
        tier(1, 4, 12.0, "Starter", 0.0),
        tier(5, 9, 10.5, "Regular", 12.5),
        tier(10, 14, 9.5, "Weekly", 20.8),
        tier(15, 24, 8.0, "Household", 33.3),
    ]
}

/// Volume pricing schedule: a contiguous tier table plus the delivery and
/// deposit rules.
///
/// Stateless and read-only once built; quoting is a pure function of
/// `(quantity, first_order)`.
#[derive(Debug, Clone)]
pub struct PricingSchedule {
    tiers: Vec<PriceTier>,
}

impl PricingSchedule {
    /// Build a schedule from an explicit tier table.
    ///
    /// The table must be ascending and partition the positive integers up
    /// to its top tier's max: starts at 1, no gaps, no overlaps. A broken
    /// table is a configuration bug surfaced at load, not at quote time.
    pub fn new(tiers: Vec<PriceTier>) -> Result<Self, PricingError> {
        let first = tiers.first().ok_or(PricingError::EmptyTierTable)?;
        if first.min_qty != 1 {
            return Err(PricingError::FirstTierNotAtOne(first.min_qty));
        }

        let mut expected_min = 1u32;
        for tier in &tiers {
            if tier.min_qty > tier.max_qty {
                return Err(PricingError::InvertedTier {
                    label: tier.label.clone(),
                    min: tier.min_qty,
                    max: tier.max_qty,
                });
            }
            if tier.min_qty != expected_min {
                return Err(PricingError::BrokenTierChain {
                    label: tier.label.clone(),
                    expected: expected_min,
                    found: tier.min_qty,
                });
            }
            expected_min = tier.max_qty + 1;
        }

        Ok(Self { tiers })
    }

    /// The production schedule.
    pub fn standard() -> Self {
        Self {
            tiers: standard_tiers(),
        }
    }

    pub fn tiers(&self) -> &[PriceTier] {
        &self.tiers
    }

    pub fn tier_for(&self, quantity: u32) -> Option<&PriceTier> {
        self.tiers
            .iter()
            .find(|t| quantity >= t.min_qty && quantity <= t.max_qty)
    }

    /// Quote an order.
    ///
    /// A quantity above the top tier keeps the top tier's unit price (the
    /// quantity itself is never clamped) and reports no matched tier;
    /// quantity 0 takes the same unmatched path and prices to a bare
    /// delivery fee plus any deposit.
    pub fn quote(&self, quantity: u32, first_order: bool) -> PriceQuote {
        let matched_tier = self.tier_for(quantity).cloned();
        let price_per_unit = matched_tier
            .as_ref()
            .map(|t| t.price_per_unit)
            .or_else(|| self.tiers.last().map(|t| t.price_per_unit))
            .unwrap_or(REFERENCE_UNIT_PRICE);

        let subtotal = price_per_unit * f64::from(quantity);
        let free_delivery_applied = quantity >= FREE_DELIVERY_THRESHOLD;
        let delivery_fee = if free_delivery_applied {
            0.0
        } else {
            FLAT_DELIVERY_FEE
        };
        let bag_deposit = if first_order {
            FIRST_ORDER_BAG_DEPOSIT
        } else {
            0.0
        };

        PriceQuote {
            quantity,
            price_per_unit,
            subtotal,
            delivery_fee,
            bag_deposit,
            total: subtotal + delivery_fee + bag_deposit,
            matched_tier,
            free_delivery_applied,
        }
    }

    /// What the order saves versus buying every smoothie at the single-unit
    /// price, delivery included. Marketing display only, never billed.
    pub fn savings(&self, quantity: u32) -> f64 {
        REFERENCE_UNIT_PRICE * f64::from(quantity) - self.quote(quantity, false).total
    }
}

impl Default for PricingSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

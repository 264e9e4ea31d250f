use chrono::{DateTime, Duration, Utc};
use packaging::PackagingSummary;
use recommendation::TimeOfDay;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Packed,
    Delivered,
}

/// One chosen smoothie in an order, tagged with its delivery slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: String,
    pub item_name: String,
    pub time_of_day: TimeOfDay,
}

/// Fresh/dry split carried on the order for warehouse picking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingBreakdown {
    pub fresh_ingredient_names: Vec<String>,
    pub dry_ingredient_names: Vec<String>,
}

/// The order shape handed to the caller for persistence.
///
/// This service assembles it but never stores it; writing it (and charging
/// the quoted total through the payment processor) is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: Uuid,
    pub order_date: DateTime<Utc>,
    pub delivery_date: DateTime<Utc>,
    pub items: Vec<OrderLine>,
    pub status: OrderStatus,
    pub packaging_breakdown: PackagingBreakdown,
}

/// Assemble an order preview from chosen lines and their packaging summary.
///
/// `order_date` is passed in rather than read from a clock so previews are
/// reproducible in tests.
pub fn build_order_preview(
    lines: Vec<OrderLine>,
    summary: &PackagingSummary,
    order_date: DateTime<Utc>,
    lead_time_days: i64,
) -> OrderRecord {
    OrderRecord {
        id: Uuid::new_v4(),
        order_date,
        delivery_date: order_date + Duration::days(lead_time_days),
        items: lines,
        status: OrderStatus::Pending,
        packaging_breakdown: PackagingBreakdown {
            fresh_ingredient_names: summary
                .fresh_ingredients
                .iter()
                .map(|t| t.name.clone())
                .collect(),
            dry_ingredient_names: summary
                .dry_ingredients
                .iter()
                .map(|t| t.name.clone())
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    #[test]
    fn test_order_preview_carries_packaging_breakdown() {
        let catalog = Catalog::builtin().unwrap();
        let item = catalog.item("sunrise-oat-banana").unwrap().clone();
        let summary = packaging::calculate(std::slice::from_ref(&item));

        let lines = vec![OrderLine {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            time_of_day: TimeOfDay::Morning,
        }];
        let now = Utc::now();
        let order = build_order_preview(lines, &summary, now, 3);

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.delivery_date, now + Duration::days(3));
        assert_eq!(order.items.len(), 1);
        assert_eq!(
            order.packaging_breakdown.fresh_ingredient_names,
            summary
                .fresh_ingredients
                .iter()
                .map(|t| t.name.clone())
                .collect::<Vec<_>>()
        );
        assert!(!order.packaging_breakdown.dry_ingredient_names.is_empty());
    }
}

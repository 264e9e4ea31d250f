use account::{DailyCheckin, UserProfile};
use catalog::CatalogItem;

use crate::scorer::{score_item, TimeScoredItem};
use crate::time_of_day::TimeOfDay;

/// Recommendations kept per delivery slot.
pub const TOP_PER_SLOT: usize = 7;

const FAVORITE_MATCH_BOOST: u8 = 15;
const FAVORITE_TIME_BOOST: u8 = 10;
const FAVORITE_REASON: &str = "One of your favorites";

/// Generate the weekly recommendation set: the top seven items for each of
/// morning, afternoon and evening, concatenated in that order.
///
/// Every item is scored for every slot, favorites get a capped boost, and
/// each slot is ranked by an even blend of time relevance and match score
/// (descending; ties keep catalog order via the stable sort). A catalog
/// smaller than a full slot yields all of it, not an error.
///
/// Deterministic: the same items, profile, favorites and check-in always
/// produce the same output. Time of day is iterated internally, never read
/// from a clock.
pub fn generate_weekly(
    items: &[CatalogItem],
    profile: &UserProfile,
    favorite_ids: &[String],
    checkin: Option<&DailyCheckin>,
) -> Vec<TimeScoredItem> {
    let mut out = Vec::with_capacity(TOP_PER_SLOT * TimeOfDay::ALL.len());

    for time_of_day in TimeOfDay::ALL {
        let mut slot: Vec<TimeScoredItem> = items
            .iter()
            .map(|item| {
                let mut scored = score_item(item, time_of_day, profile, checkin);
                if favorite_ids.iter().any(|id| id == &scored.item.id) {
                    boost_favorite(&mut scored);
                }
                scored
            })
            .collect();

        slot.sort_by(|a, b| {
            b.blended_score()
                .partial_cmp(&a.blended_score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        slot.truncate(TOP_PER_SLOT);
        out.extend(slot);
    }

    out
}

fn boost_favorite(scored: &mut TimeScoredItem) {
    scored.match_score = scored.match_score.saturating_add(FAVORITE_MATCH_BOOST).min(100);
    scored.time_relevance_score = scored
        .time_relevance_score
        .saturating_add(FAVORITE_TIME_BOOST)
        .min(100);
    scored.match_reasons.push(FAVORITE_REASON.to_string());
}

use account::{ActivityLevel, DailyCheckin, UserProfile};
use catalog::CatalogItem;
use serde::{Deserialize, Serialize};

use crate::time_of_day::TimeOfDay;
use crate::triggers::Trigger;

const BASE_SCORE: i32 = 50;

/// Check-in values below this read as "low" on the 0-10 scale.
const LOW_CHECKIN: u8 = 5;

/// A catalog item scored for one delivery slot. Ephemeral, rebuilt per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeScoredItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub time_of_day: TimeOfDay,
    /// 0-100, clamped.
    pub time_relevance_score: u8,
    pub time_reasons: Vec<String>,
    /// Base match score, possibly favorite-boosted by the generator.
    pub match_score: u8,
    pub match_reasons: Vec<String>,
}

impl TimeScoredItem {
    /// Ranking key: an even blend of slot fit and profile fit.
    pub fn blended_score(&self) -> f32 {
        0.5 * f32::from(self.time_relevance_score) + 0.5 * f32::from(self.match_score)
    }
}

/// Scratch state for one scoring pass: running total plus deduplicated
/// reasons in first-occurrence order.
struct ScorePass {
    score: i32,
    reasons: Vec<String>,
}

impl ScorePass {
    fn new() -> Self {
        Self {
            score: BASE_SCORE,
            reasons: Vec::new(),
        }
    }

    fn apply(&mut self, delta: i32, reason: String) {
        self.score += delta;
        if !self.reasons.contains(&reason) {
            self.reasons.push(reason);
        }
    }
}

/// Score a catalog item for one time of day.
///
/// Starts at 50 and applies the slot's adjustment rules in a fixed order;
/// the result is clamped to 0-100. Pure: no I/O, no randomness, no clock.
/// Missing profile fields or an absent check-in simply skip the rules that
/// depend on them.
pub fn score_item(
    item: &CatalogItem,
    time_of_day: TimeOfDay,
    profile: &UserProfile,
    checkin: Option<&DailyCheckin>,
) -> TimeScoredItem {
    let names = item.ingredient_names_lowercase();
    let mut pass = ScorePass::new();

    match time_of_day {
        TimeOfDay::Morning => score_morning(item, &names, checkin, &mut pass),
        TimeOfDay::Afternoon => score_afternoon(item, &names, profile, checkin, &mut pass),
        TimeOfDay::Evening => score_evening(item, &names, checkin, &mut pass),
    }

    TimeScoredItem {
        item: item.clone(),
        time_of_day,
        time_relevance_score: pass.score.clamp(0, 100) as u8,
        time_reasons: pass.reasons,
        match_score: item.base_match_score,
        match_reasons: Vec::new(),
    }
}

fn score_morning(
    item: &CatalogItem,
    names: &[String],
    checkin: Option<&DailyCheckin>,
    pass: &mut ScorePass,
) {
    for term in Trigger::MorningBoost.matched_terms(names) {
        pass.apply(8, format!("Contains {term} for steady morning energy"));
    }
    if item.macros.protein > 15 {
        pass.apply(10, "High protein to start the day".to_string());
    }
    if item.macros.fiber > 8 {
        pass.apply(8, "Fiber keeps you full until lunch".to_string());
    }
    if item.macros.calories > 450 {
        pass.apply(-10, "On the heavy side for breakfast".to_string());
    }
    if checkin.is_some_and(|c| c.sleep < LOW_CHECKIN) && Trigger::WakeUp.matches(names) {
        pass.apply(12, "An extra lift after a short night".to_string());
    }
}

fn score_afternoon(
    item: &CatalogItem,
    names: &[String],
    profile: &UserProfile,
    checkin: Option<&DailyCheckin>,
    pass: &mut ScorePass,
) {
    for term in Trigger::AfternoonPower.matched_terms(names) {
        pass.apply(6, format!("Contains {term} for afternoon staying power"));
    }
    if item.macros.protein > 12 && item.macros.protein < 25 {
        pass.apply(10, "Balanced protein for midday".to_string());
    }
    let high_training = profile
        .activity_level
        .is_some_and(ActivityLevel::is_high_training);
    if high_training && item.macros.protein > 20 {
        pass.apply(12, "Extra protein for your training load".to_string());
    }
    if checkin.is_some_and(|c| c.energy < LOW_CHECKIN) && Trigger::EnergyDip.matches(names) {
        pass.apply(10, "Natural sugars to lift an energy dip".to_string());
    }
}

fn score_evening(
    item: &CatalogItem,
    names: &[String],
    checkin: Option<&DailyCheckin>,
    pass: &mut ScorePass,
) {
    for term in Trigger::Calming.matched_terms(names) {
        pass.apply(7, format!("Contains {term} to help you wind down"));
    }
    if Trigger::Stimulant.matches(names) {
        pass.apply(-20, "Contains stimulants, better enjoyed earlier".to_string());
    } else {
        pass.apply(8, "Caffeine-free for the evening".to_string());
    }
    if item.macros.calories < 350 {
        pass.apply(10, "Light enough before bed".to_string());
    }
    if Trigger::DigestiveAid.matches(names) {
        pass.apply(8, "Supports evening digestion".to_string());
    }
    if checkin.is_some_and(|c| c.mood < LOW_CHECKIN) && Trigger::ComfortLift.matches(names) {
        pass.apply(10, "A comforting pick after a rough day".to_string());
    }
}

/// Tagged ingredient keyword classes used by the time relevance rules.
///
/// Each variant owns an ordered term list; a term matches when any of the
/// item's lower-cased ingredient names contains it as a substring. Keeping
/// the lists behind one enum makes the whole matching table inspectable in
/// one place instead of scattering string literals through the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Slow-carb and gentle-caffeine breakfast staples.
    MorningBoost,
    /// Dense snacks that carry through the afternoon.
    AfternoonPower,
    /// Ingredients associated with winding down.
    Calming,
    /// Caffeine and other stimulants, penalized in the evening.
    Stimulant,
    /// Enzyme- and culture-carrying digestive aids.
    DigestiveAid,
    /// Strong lifts offered after a short night of sleep.
    WakeUp,
    /// Fast natural sugars offered during an energy dip.
    EnergyDip,
    /// Comfort picks offered on a low-mood day.
    ComfortLift,
}

impl Trigger {
    pub const fn terms(self) -> &'static [&'static str] {
        match self {
            Trigger::MorningBoost => &[
                "banana", "berries", "oats", "chia", "matcha", "espresso", "dates", "maca",
            ],
            Trigger::AfternoonPower => {
                &["cacao", "almond butter", "peanut butter", "banana", "protein"]
            }
            Trigger::Calming => &["banana", "berries", "cherry", "almond", "vanilla", "cinnamon"],
            Trigger::Stimulant => &["matcha", "espresso", "coffee", "guarana"],
            Trigger::DigestiveAid => &["ginger", "papaya", "pineapple", "yogurt"],
            Trigger::WakeUp => &["matcha", "espresso", "maca", "cacao"],
            Trigger::EnergyDip => &["banana", "dates", "mango", "cacao"],
            Trigger::ComfortLift => &["cacao", "banana", "berries"],
        }
    }

    /// Terms of this class present among the given lower-cased ingredient
    /// names, in table order. Each term is reported once however many
    /// ingredients contain it.
    pub fn matched_terms(self, ingredient_names: &[String]) -> Vec<&'static str> {
        self.terms()
            .iter()
            .copied()
            .filter(|term| ingredient_names.iter().any(|name| name.contains(term)))
            .collect()
    }

    pub fn matches(self, ingredient_names: &[String]) -> bool {
        !self.matched_terms(ingredient_names).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_lowercase()).collect()
    }

    #[test]
    fn test_matched_terms_use_substring_containment() {
        let ingredients = names(&["Blueberries", "Rolled oats", "Almond milk"]);

        let matched = Trigger::MorningBoost.matched_terms(&ingredients);
        assert_eq!(matched, vec!["berries", "oats"]);
    }

    #[test]
    fn test_term_reported_once_across_ingredients() {
        let ingredients = names(&["Blueberries", "Strawberries"]);

        let matched = Trigger::MorningBoost.matched_terms(&ingredients);
        assert_eq!(matched, vec!["berries"], "shared term counts once");
    }

    #[test]
    fn test_stimulant_detection() {
        assert!(Trigger::Stimulant.matches(&names(&["Espresso", "Banana"])));
        assert!(!Trigger::Stimulant.matches(&names(&["Banana", "Cherries"])));
    }

    #[test]
    fn test_maca_does_not_match_matcha() {
        let ingredients = names(&["Matcha"]);
        let matched = Trigger::WakeUp.matched_terms(&ingredients);
        assert_eq!(matched, vec!["matcha"]);
    }
}

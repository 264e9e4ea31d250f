use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Self-reported activity level from onboarding.
///
/// Owned by the external identity/profile store; consumed read-only here.
#[derive(
    EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    Athlete,
}

impl ActivityLevel {
    /// Levels that qualify for the high-training-load scoring bonus.
    pub fn is_high_training(self) -> bool {
        matches!(self, ActivityLevel::VeryActive | ActivityLevel::Athlete)
    }
}

/// User profile as read from the external profile store.
///
/// Every field tolerates absence: a missing field simply disables the
/// scoring rules that depend on it, it never fails a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default)]
    pub health_goals: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub flavor_preferences: Vec<String>,
}

/// Daily wellbeing check-in on a 0-10 scale; values below 5 read as "low".
///
/// Only the most recent check-in influences recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCheckin {
    pub sleep: u8,
    pub energy: u8,
    pub mood: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_high_training() {
        assert!(ActivityLevel::VeryActive.is_high_training());
        assert!(ActivityLevel::Athlete.is_high_training());
        assert!(!ActivityLevel::Sedentary.is_high_training());
        assert!(!ActivityLevel::ModeratelyActive.is_high_training());
    }

    #[test]
    fn test_profile_deserializes_with_missing_fields() {
        let profile: UserProfile = serde_json::from_str("{}").unwrap();

        assert_eq!(profile.activity_level, None);
        assert!(profile.health_goals.is_empty());
        assert!(profile.allergens.is_empty());
    }

    #[test]
    fn test_activity_level_snake_case_wire_format() {
        let level: ActivityLevel = serde_json::from_str("\"very_active\"").unwrap();
        assert_eq!(level, ActivityLevel::VeryActive);
    }
}

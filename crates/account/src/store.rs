use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{DailyCheckin, UserProfile};

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("profile store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Read-only boundary to the external identity/profile store.
///
/// The core never writes through this trait; favorites updates, check-in
/// recording and order persistence go through the store's own write API,
/// outside this codebase.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>, AccountError>;

    async fn favorite_item_ids(&self, user_id: &str) -> Result<Vec<String>, AccountError>;

    /// Most recent daily check-in, if the user has any.
    async fn latest_checkin(&self, user_id: &str) -> Result<Option<DailyCheckin>, AccountError>;
}

#[derive(Default)]
struct StoredAccount {
    profile: UserProfile,
    favorites: Vec<String>,
    checkins: Vec<DailyCheckin>,
}

/// In-memory store used by tests and the demo server.
#[derive(Default)]
pub struct InMemoryProfileStore {
    accounts: RwLock<HashMap<String, StoredAccount>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_profile(&self, user_id: &str, profile: UserProfile) {
        let mut accounts = self.accounts.write().expect("profile store lock poisoned");
        accounts.entry(user_id.to_string()).or_default().profile = profile;
    }

    pub fn set_favorites(&self, user_id: &str, favorites: Vec<String>) {
        let mut accounts = self.accounts.write().expect("profile store lock poisoned");
        accounts.entry(user_id.to_string()).or_default().favorites = favorites;
    }

    pub fn record_checkin(&self, user_id: &str, checkin: DailyCheckin) {
        let mut accounts = self.accounts.write().expect("profile store lock poisoned");
        accounts
            .entry(user_id.to_string())
            .or_default()
            .checkins
            .push(checkin);
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>, AccountError> {
        let accounts = self.accounts.read().expect("profile store lock poisoned");
        Ok(accounts.get(user_id).map(|a| a.profile.clone()))
    }

    async fn favorite_item_ids(&self, user_id: &str) -> Result<Vec<String>, AccountError> {
        let accounts = self.accounts.read().expect("profile store lock poisoned");
        Ok(accounts
            .get(user_id)
            .map(|a| a.favorites.clone())
            .unwrap_or_default())
    }

    async fn latest_checkin(&self, user_id: &str) -> Result<Option<DailyCheckin>, AccountError> {
        let accounts = self.accounts.read().expect("profile store lock poisoned");
        Ok(accounts.get(user_id).and_then(|a| a.checkins.last().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_user_yields_none() {
        let store = InMemoryProfileStore::new();

        assert!(store.profile("missing").await.unwrap().is_none());
        assert!(store.favorite_item_ids("missing").await.unwrap().is_empty());
        assert!(store.latest_checkin("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_latest_checkin_wins() {
        let store = InMemoryProfileStore::new();
        store.record_checkin(
            "u1",
            DailyCheckin {
                sleep: 8,
                energy: 8,
                mood: 8,
            },
        );
        store.record_checkin(
            "u1",
            DailyCheckin {
                sleep: 3,
                energy: 4,
                mood: 5,
            },
        );

        let latest = store.latest_checkin("u1").await.unwrap().unwrap();
        assert_eq!(latest.sleep, 3, "most recent check-in should be returned");
    }

    #[tokio::test]
    async fn test_profile_roundtrip() {
        let store = InMemoryProfileStore::new();
        let profile = UserProfile {
            activity_level: Some(crate::types::ActivityLevel::Athlete),
            health_goals: vec!["muscle-gain".to_string()],
            ..Default::default()
        };
        store.insert_profile("u1", profile.clone());
        store.set_favorites("u1", vec!["green-machine".to_string()]);

        assert_eq!(store.profile("u1").await.unwrap(), Some(profile));
        assert_eq!(
            store.favorite_item_ids("u1").await.unwrap(),
            vec!["green-machine".to_string()]
        );
    }
}

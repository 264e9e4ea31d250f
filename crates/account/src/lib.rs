pub mod store;
pub mod types;

pub use store::{AccountError, InMemoryProfileStore, ProfileStore};
pub use types::{ActivityLevel, DailyCheckin, UserProfile};

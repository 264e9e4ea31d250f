pub mod filter;
pub mod generator;
pub mod scorer;
pub mod time_of_day;
pub mod triggers;

pub use filter::filter_allergen_safe;
pub use generator::{generate_weekly, TOP_PER_SLOT};
pub use scorer::{score_item, TimeScoredItem};
pub use time_of_day::TimeOfDay;
pub use triggers::Trigger;

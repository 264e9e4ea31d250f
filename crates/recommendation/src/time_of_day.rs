use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Delivery slot a smoothie is recommended for.
///
/// Always an explicit parameter of the scoring functions; resolving "now"
/// into a slot is the caller's job, never this crate's.
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
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Slot order as presented to the user, morning first.
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];
}

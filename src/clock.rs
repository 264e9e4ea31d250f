use chrono::{Local, Timelike};
use recommendation::TimeOfDay;

/// Map an hour of day (0-23) to a delivery slot.
///
/// The core scoring functions take the slot explicitly; this adapter is the
/// single place wall-clock time enters the system, so everything below it
/// stays reproducible.
pub fn time_of_day_at(hour: u32) -> TimeOfDay {
    match hour {
        5..=10 => TimeOfDay::Morning,
        11..=16 => TimeOfDay::Afternoon,
        _ => TimeOfDay::Evening,
    }
}

/// The delivery slot matching the server's local time right now.
pub fn current_time_of_day() -> TimeOfDay {
    time_of_day_at(Local::now().hour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_mapping() {
        assert_eq!(time_of_day_at(5), TimeOfDay::Morning);
        assert_eq!(time_of_day_at(10), TimeOfDay::Morning);
        assert_eq!(time_of_day_at(11), TimeOfDay::Afternoon);
        assert_eq!(time_of_day_at(16), TimeOfDay::Afternoon);
        assert_eq!(time_of_day_at(17), TimeOfDay::Evening);
        assert_eq!(time_of_day_at(23), TimeOfDay::Evening);
        assert_eq!(time_of_day_at(0), TimeOfDay::Evening);
        assert_eq!(time_of_day_at(4), TimeOfDay::Evening);
    }
}

use crate::{time_of_day::TimeOfDay, weekday::Weekday};
use serde::{Deserialize, Serialize};

/// Opening hours of a court on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySlot {
    pub day: Weekday,
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
}

impl DailySlot {
    /// One slot per weekday, all sharing the same operating window.
    pub fn for_weekdays(
        weekdays: &[Weekday],
        open_time: TimeOfDay,
        close_time: TimeOfDay,
    ) -> Vec<Self> {
        weekdays
            .iter()
            .map(|day| DailySlot {
                day: *day,
                open_time,
                close_time,
            })
            .collect()
    }
}

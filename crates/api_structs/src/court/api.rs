use chrono::{DateTime, FixedOffset};
use court_scheduler_domain::{DailySlot, OffDayException, OffDayScope, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExceptionType {
    Maintenance,
}

pub mod create_court_availability {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub court: ID,
        pub daily_slots: Vec<DailySlot>,
    }
}

pub mod create_court_unavailability {
    use super::*;

    /// Reason sent with every off-day created from the court form
    pub const DEFAULT_REASON: &str = "other";

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub court: ID,
        pub start_datetime: DateTime<FixedOffset>,
        pub end_datetime: DateTime<FixedOffset>,
        pub exception_type: ExceptionType,
        pub reason: String,
        pub scope: OffDayScope,
    }

    impl RequestBody {
        pub fn new(court: ID, exception: &OffDayException) -> Self {
            Self {
                court,
                start_datetime: *exception.start_datetime(),
                end_datetime: *exception.end_datetime(),
                exception_type: ExceptionType::Maintenance,
                reason: DEFAULT_REASON.into(),
                scope: exception.scope(),
            }
        }
    }
}

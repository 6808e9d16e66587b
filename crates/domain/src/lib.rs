mod availability;
mod off_day;
mod schedule_form;
mod shared;
mod time_of_day;
mod weekday;

pub use availability::DailySlot;
pub use off_day::{localize, DateRange, OffDayException, OffDayScope};
pub use schedule_form::{
    CourtScheduleForm, CourtSchedulePlan, OffDayDates, OffDayForm, ScheduleValidationError,
};
pub use shared::entity::{InvalidIDError, ID};
pub use time_of_day::{parse_time_to_minutes, InvalidTimeOfDayError, TimeOfDay, INVALID_TIME};
pub use weekday::{expand_weekday_pattern, InvalidWeekdayPatternError, Weekday, WeekdayPattern};

pub use chrono_tz::Tz;

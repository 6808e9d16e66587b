use crate::{
    availability::DailySlot,
    off_day::{DateRange, OffDayException, OffDayScope},
    time_of_day::TimeOfDay,
    weekday::expand_weekday_pattern,
};
use chrono::{DateTime, NaiveDate, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw state of the court schedule form, as the owner filled it in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtScheduleForm {
    pub weekday_pattern: Option<String>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    #[serde(default)]
    pub off_day: Option<OffDayForm>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffDayForm {
    #[serde(default)]
    pub enabled: bool,
    pub dates: Option<OffDayDates>,
    #[serde(default)]
    pub scope: OffDayScope,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Dates picked in the off-day calendar. A missing `to` means a single day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OffDayDates {
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
}

/// Everything that has to be written to the backend for one submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtSchedulePlan {
    pub daily_slots: Vec<DailySlot>,
    pub off_day: Option<OffDayException>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleValidationError {
    #[error("Please select a weekday.")]
    MissingWeekday,
    #[error("Operating hours are required.")]
    MissingOperatingHours,
    #[error("Please select off-day dates.")]
    MissingOffDayDates,
    #[error("The off-day end date cannot be before its start date.")]
    InvalidOffDayRange,
    #[error("Off-day dates cannot be in the past.")]
    OffDayInPast,
    #[error("Full off-days must be scheduled at least one day in advance.")]
    FullOffDayTooSoon,
    #[error("Partial off-day start and end times are required.")]
    MissingPartialTimes,
    #[error("Invalid time format: `{0}`. Expected HH:MM.")]
    InvalidTimeFormat(String),
    #[error("Start time must be before end time.")]
    StartNotBeforeEnd,
    #[error("Off-day must fall within {opening} and {closing}.")]
    OutsideOperatingHours {
        opening: TimeOfDay,
        closing: TimeOfDay,
    },
    #[error("Off-day start time cannot be in the past.")]
    StartInPast,
    #[error("The local time {datetime} does not exist in timezone {timezone}.")]
    NonexistentLocalTime { datetime: String, timezone: String },
}

fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_time(value: &str) -> Result<TimeOfDay, ScheduleValidationError> {
    value
        .parse::<TimeOfDay>()
        .map_err(|_| ScheduleValidationError::InvalidTimeFormat(value.to_string()))
}

impl CourtScheduleForm {
    /// Validates the form and derives the availability and off-day payloads.
    ///
    /// `now` decides what "today" is and must be expressed in the court
    /// timezone. Checks run in a fixed order and the first failure wins.
    pub fn build_plan(
        &self,
        now: DateTime<Tz>,
    ) -> Result<CourtSchedulePlan, ScheduleValidationError> {
        let weekdays = self
            .weekday_pattern
            .as_deref()
            .map(expand_weekday_pattern)
            .unwrap_or_default();
        if weekdays.is_empty() {
            return Err(ScheduleValidationError::MissingWeekday);
        }

        let (opening, closing) =
            match (required(&self.opening_time), required(&self.closing_time)) {
                (Some(opening), Some(closing)) => (parse_time(opening)?, parse_time(closing)?),
                _ => return Err(ScheduleValidationError::MissingOperatingHours),
            };

        let daily_slots = DailySlot::for_weekdays(&weekdays, opening, closing);

        let off_day = match &self.off_day {
            Some(off_day) if off_day.enabled => {
                Some(off_day.build_exception(opening, closing, now)?)
            }
            _ => None,
        };

        Ok(CourtSchedulePlan {
            daily_slots,
            off_day,
        })
    }
}

impl OffDayForm {
    fn build_exception(
        &self,
        opening: TimeOfDay,
        closing: TimeOfDay,
        now: DateTime<Tz>,
    ) -> Result<OffDayException, ScheduleValidationError> {
        let dates = self
            .dates
            .ok_or(ScheduleValidationError::MissingOffDayDates)?;
        let range = DateRange::new(dates.from, dates.to.unwrap_or(dates.from))
            .ok_or(ScheduleValidationError::InvalidOffDayRange)?;

        let today = now.date_naive();
        if range.from() < today {
            return Err(ScheduleValidationError::OffDayInPast);
        }
        let starts_today = range.from() == today;

        let (start, end) = match self.scope {
            OffDayScope::Full => {
                if starts_today {
                    return Err(ScheduleValidationError::FullOffDayTooSoon);
                }
                (TimeOfDay::START_OF_DAY, TimeOfDay::END_OF_DAY)
            }
            OffDayScope::Partial => {
                let (start, end) = match (required(&self.start_time), required(&self.end_time)) {
                    (Some(start), Some(end)) => (parse_time(start)?, parse_time(end)?),
                    _ => return Err(ScheduleValidationError::MissingPartialTimes),
                };
                if start >= end {
                    return Err(ScheduleValidationError::StartNotBeforeEnd);
                }
                if start < opening || end > closing {
                    return Err(ScheduleValidationError::OutsideOperatingHours { opening, closing });
                }
                let now_minutes = now.hour() * 60 + now.minute();
                if starts_today && start.minutes_since_midnight() < now_minutes {
                    return Err(ScheduleValidationError::StartInPast);
                }
                (start, end)
            }
        };

        OffDayException::from_range(&range, start, end, self.scope, &now.timezone())
    }
}

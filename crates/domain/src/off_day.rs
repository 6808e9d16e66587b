use crate::{schedule_form::ScheduleValidationError, time_of_day::TimeOfDay};
use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OffDayScope {
    /// The court is closed for the whole day
    Full,
    /// The court is closed for part of its operating hours
    Partial,
}

impl Default for OffDayScope {
    fn default() -> Self {
        Self::Full
    }
}

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Option<Self> {
        if to < from {
            return None;
        }
        Some(Self { from, to })
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }
}

/// A blackout window layered on top of the weekly court schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OffDayException {
    start_datetime: DateTime<FixedOffset>,
    end_datetime: DateTime<FixedOffset>,
    scope: OffDayScope,
}

impl OffDayException {
    pub fn new(
        start_datetime: DateTime<FixedOffset>,
        end_datetime: DateTime<FixedOffset>,
        scope: OffDayScope,
    ) -> Result<Self, ScheduleValidationError> {
        if start_datetime >= end_datetime {
            return Err(ScheduleValidationError::StartNotBeforeEnd);
        }
        Ok(Self {
            start_datetime,
            end_datetime,
            scope,
        })
    }

    /// Combines the range with start and end times of day in the court timezone
    pub fn from_range(
        range: &DateRange,
        start: TimeOfDay,
        end: TimeOfDay,
        scope: OffDayScope,
        tz: &Tz,
    ) -> Result<Self, ScheduleValidationError> {
        let start_datetime = localize(range.from(), start, tz)?;
        let end_datetime = localize(range.to(), end, tz)?;
        Self::new(start_datetime, end_datetime, scope)
    }

    pub fn start_datetime(&self) -> &DateTime<FixedOffset> {
        &self.start_datetime
    }

    pub fn end_datetime(&self) -> &DateTime<FixedOffset> {
        &self.end_datetime
    }

    pub fn scope(&self) -> OffDayScope {
        self.scope
    }
}

/// Resolves a wall clock date and time in `tz` to a fixed offset timestamp.
/// Ambiguous local times (DST fall back) resolve to the earliest instant.
pub fn localize(
    date: NaiveDate,
    time: TimeOfDay,
    tz: &Tz,
) -> Result<DateTime<FixedOffset>, ScheduleValidationError> {
    let nonexistent = || ScheduleValidationError::NonexistentLocalTime {
        datetime: format!("{} {}", date, time),
        timezone: tz.name().to_string(),
    };

    let naive = date
        .and_hms_opt(time.hours(), time.minutes(), 0)
        .ok_or_else(nonexistent)?;
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(nonexistent)?;
    Ok(local.with_timezone(&local.offset().fix()))
}

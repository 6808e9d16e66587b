use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Returned by `parse_time_to_minutes` for values that are not `HH:MM`
pub const INVALID_TIME: i32 = -1;

/// Lenient `HH:MM` parser returning minutes since midnight.
///
/// Missing values, values without a colon and non-numeric parts yield
/// `INVALID_TIME`, as do values whose minute count does not fit in an `i32`.
/// Hours and minutes are otherwise not range checked, so `25:99` parses to
/// `1599`. Use `TimeOfDay` when the value must be a real time of day.
pub fn parse_time_to_minutes(time: Option<&str>) -> i32 {
    let time = match time {
        Some(time) if !time.is_empty() && time.contains(':') => time,
        _ => return INVALID_TIME,
    };

    let mut parts = time.split(':');
    let hours = parts.next().map(|h| h.trim().parse::<i32>());
    let minutes = parts.next().map(|m| m.trim().parse::<i32>());
    match (hours, minutes) {
        (Some(Ok(hours)), Some(Ok(minutes))) => hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .unwrap_or(INVALID_TIME),
        _ => INVALID_TIME,
    }
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

/// A validated wall clock time with minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidTimeOfDayError {
    #[error("Time: `{0}` is not formatted as HH:MM")]
    Malformed(String),
    #[error("Time: `{0}` is outside of 00:00 - 23:59")]
    OutOfRange(String),
}

impl TimeOfDay {
    pub const START_OF_DAY: TimeOfDay = TimeOfDay {
        hours: 0,
        minutes: 0,
    };
    pub const END_OF_DAY: TimeOfDay = TimeOfDay {
        hours: 23,
        minutes: 59,
    };

    pub fn new(hours: u32, minutes: u32) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(Self { hours, minutes })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hours * 60 + self.minutes
    }
}

impl std::cmp::PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.minutes_since_midnight()
            .cmp(&other.minutes_since_midnight())
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(':').collect::<Vec<_>>();
        let (hours, minutes) = match parts.as_slice() {
            [hours, minutes] if is_digits(*hours) && is_digits(*minutes) => (*hours, *minutes),
            _ => return Err(InvalidTimeOfDayError::Malformed(s.to_string())),
        };

        // All digits, so a failed parse means the value is too large
        hours
            .parse::<u32>()
            .ok()
            .zip(minutes.parse::<u32>().ok())
            .and_then(|(hours, minutes)| Self::new(hours, minutes))
            .ok_or_else(|| InvalidTimeOfDayError::OutOfRange(s.to_string()))
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct TimeOfDayVisitor;

        impl<'de> Visitor<'de> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A time of day formatted as HH:MM")
            }

            fn visit_str<E>(self, value: &str) -> Result<TimeOfDay, E>
            where
                E: serde::de::Error,
            {
                value.parse::<TimeOfDay>().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}

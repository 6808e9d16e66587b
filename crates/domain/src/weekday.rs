use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every weekday, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// The weekly opening pattern a court owner picks in the court form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeekdayPattern {
    Daily,
    MondayToFriday,
    MondayToSaturday,
}

#[derive(Error, Debug, PartialEq)]
#[error("Unknown weekday pattern: `{0}`")]
pub struct InvalidWeekdayPatternError(String);

impl FromStr for WeekdayPattern {
    type Err = InvalidWeekdayPatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "mondayToFriday" => Ok(Self::MondayToFriday),
            "mondayToSaturday" => Ok(Self::MondayToSaturday),
            _ => Err(InvalidWeekdayPatternError(s.to_string())),
        }
    }
}

impl WeekdayPattern {
    /// The weekdays this pattern opens on, in canonical order
    pub fn expand(&self) -> Vec<Weekday> {
        Weekday::ALL
            .iter()
            .copied()
            .filter(|day| match self {
                Self::Daily => true,
                Self::MondayToFriday => !matches!(day, Weekday::Saturday | Weekday::Sunday),
                Self::MondayToSaturday => *day != Weekday::Sunday,
            })
            .collect()
    }
}

/// Expands a raw pattern value from the form.
///
/// Unknown values expand to no weekdays at all, which callers must treat as
/// "no weekday selected".
pub fn expand_weekday_pattern(pattern: &str) -> Vec<Weekday> {
    pattern
        .parse::<WeekdayPattern>()
        .map(|p| p.expand())
        .unwrap_or_default()
}

use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::utils::StrExt;

#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:04}-{:02}-{:02}", year, month, day)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidDate {
    #[error("expected a `YYYY-MM-DD` date, got `{0}`")]
    Malformed(String),
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
}

impl Date {
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, InvalidDate> {
        if month == 0 || month > 12 || day == 0 || day > Self::days_in_month(year, month) {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[must_use]
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[must_use]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    // Days since 0000-03-01 in the proleptic gregorian calendar, with the
    // year shifted so that it starts in march and leap days come last.
    fn days_from_civil(&self) -> i64 {
        let year = self.year as i64 - (self.month < 3) as i64;
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let shifted_month = (self.month as i64 + 9) % 12;
        let day_of_year = (153 * shifted_month + 2) / 5 + self.day as i64 - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        era * 146097 + day_of_era
    }

    /// Signed number of days from `self` to `other`.
    #[must_use]
    pub fn days_until(&self, other: &Self) -> i64 {
        other.days_from_civil() - self.days_from_civil()
    }

    /// The inclusive day count of a trip lasting from `start` to `end`,
    /// so a weekend trip from saturday to sunday counts as 2 days.
    ///
    /// Returns `None` when the range is inverted.
    #[must_use]
    pub fn trip_duration_days(start: Self, end: Self) -> Option<i64> {
        let days = start.days_until(&end);
        (days >= 0).then(|| days + 1)
    }
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidDate::Malformed(string.to_string());

        let [year, month, day] = string.split_exact::<3>("-");

        let year = year.ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
        let month = month.ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
        let day = day.ok_or_else(malformed)?.parse().map_err(|_| malformed())?;

        Self::new(year, month, day)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:02}:{:02}", hour, minute)]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidTimeStamp {
    #[error("time is out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: u8, minute: u8 },
    #[error("expected a `HH:MM` time, got `{0}`")]
    Malformed(String),
}

impl TimeStamp {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTimeStamp> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTimeStamp::OutOfRange { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    // u16::MAX is 2^16 - 1 = 65535
    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeStamp {
    type Err = InvalidTimeStamp;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidTimeStamp::Malformed(string.to_string());

        let (hour, minute) = string.split_once(':').ok_or_else(malformed)?;
        let hour = hour.parse().map_err(|_| malformed())?;
        let minute = minute.parse().map_err(|_| malformed())?;

        Self::new(hour, minute)
    }
}

// TODO: delegate by using attribute
impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

#[macro_export]
macro_rules! time_stamp {
    ( $hour:literal : $minute:literal ) => {
        $crate::time::TimeStamp::new($hour, $minute).unwrap()
    };
}

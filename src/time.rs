use std::{env, fmt, str::FromStr};

use chrono::{Duration, Locale, NaiveTime, Timelike};

use crate::error::{Error, Result};

/// A local time of day, always within 00:00:00..=23:59:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl WallClockTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::TimeOutOfRange { hour, minute, second });
        }
        Ok(Self { hour, minute, second })
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }

    pub fn second(self) -> u32 {
        self.second
    }
}

impl From<NaiveTime> for WallClockTime {
    fn from(time: NaiveTime) -> Self {
        // `second()` never reports the leap second, it lives in the nanos
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { hour, minute, second } = self;
        write!(f, "{hour:02}:{minute:02}:{second:02}")
    }
}

/// Hour and minute picked by the user, seconds are never editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerTime {
    pub hour: u32,
    pub minute: u32,
}

impl PickerTime {
    /// Whole minutes to add to `live` so that it shows this picker time.
    pub fn offset_from(self, live: WallClockTime) -> Duration {
        let picked = i64::from(self.hour * 60 + self.minute);
        let current = i64::from(live.hour() * 60 + live.minute());
        Duration::minutes(picked - current)
    }
}

impl FromStr for PickerTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidPickerInput(input.to_owned());

        let (hour, minute) = input.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        // `u32::from_str` would also take a leading `+`
        if !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self { hour, minute })
    }
}

impl fmt::Display for PickerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Locale for the time label, from `LC_ALL`, `LC_TIME` or `LANG`, in that order.
pub fn system_locale() -> Locale {
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| parse_locale(&value))
        .unwrap_or(Locale::POSIX)
}

/// Accepts POSIX locale names such as `de_DE.UTF-8` or `sr_RS@latin`.
pub fn parse_locale(value: &str) -> Option<Locale> {
    let name = value.split(&['.', '@'][..]).next().unwrap_or_default();
    match name {
        "" | "C" | "POSIX" => Some(Locale::POSIX),
        name => Locale::try_from(name).ok(),
    }
}

//! A bookable half-hour time of day.
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Time of day in 24-hour form, aligned to the full or half hour.
///
/// The fields are private so that the only way to get one is through
/// [TimeSlot::new] or parsing, both of which reject anything but
/// minute 0 or 30 and hours up to 23.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    pub fn new(hour: u8, minute: u8) -> Option<TimeSlot> {
        if hour <= 23 && (minute == 0 || minute == 30) {
            Some(TimeSlot { hour, minute })
        } else {
            None
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0).unwrap() // unwrap is safe because the constructor checks the range
    }

    /// The slot half an hour later, or `None` when that would be midnight
    /// of the following day.
    pub fn next(&self) -> Option<TimeSlot> {
        if self.minute == 0 {
            TimeSlot::new(self.hour, 30)
        } else {
            TimeSlot::new(self.hour + 1, 0)
        }
    }
}

impl Display for TimeSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        if source.is_empty() {
            return Err(ParseTimeSlotError::Blank);
        }

        let mut parts = source.split(':');
        let hour = parts
            .next()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ParseTimeSlotError::malformed(source))?;
        let minute = parts
            .next()
            .filter(|m| m.len() == 2)
            .ok_or_else(|| ParseTimeSlotError::malformed(source))?;
        let digits = |field: &str| field.bytes().all(|b| b.is_ascii_digit());
        if parts.next().is_some() || hour.len() > 2 || !digits(hour) || !digits(minute) {
            return Err(ParseTimeSlotError::malformed(source));
        }

        let hour = hour.parse::<u8>()?;
        let minute = minute.parse::<u8>()?;

        TimeSlot::new(hour, minute).ok_or(ParseTimeSlotError::OutOfRange { hour, minute })
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ParseTimeSlotError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        source.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTimeSlotError {
    #[error("Could not parse blank string as a time slot")]
    Blank,
    #[error("Could not parse `{input}` as a time slot, expected HH:MM")]
    Malformed { input: String },
    #[error("Could not parse number in time slot: {0}")]
    Number(#[from] std::num::ParseIntError),
    #[error("Time {hour}:{minute:02} is not on the full or half hour of a day")]
    OutOfRange { hour: u8, minute: u8 },
}

impl ParseTimeSlotError {
    fn malformed(source: &str) -> Self {
        Self::Malformed {
            input: source.to_string(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_full_hour() {
        let slot: TimeSlot = "20:00".parse().unwrap();
        assert_eq!(slot, TimeSlot { hour: 20, minute: 0 })
    }

    #[test]
    fn parse_half_hour_single_digit() {
        let slot: TimeSlot = "8:30".parse().unwrap();
        assert_eq!(slot, TimeSlot { hour: 8, minute: 30 })
    }

    #[test]
    fn display_zero_padded() {
        let slot = TimeSlot::new(8, 0).unwrap();
        assert_eq!(slot.to_string(), "08:00")
    }

    #[test]
    fn not_aligned() {
        let err = "21:15".parse::<TimeSlot>().unwrap_err();
        assert_eq!(err, ParseTimeSlotError::OutOfRange { hour: 21, minute: 15 })
    }

    #[test]
    fn midnight_of_next_day() {
        let err = "24:00".parse::<TimeSlot>().unwrap_err();
        assert_eq!(err, ParseTimeSlotError::OutOfRange { hour: 24, minute: 0 })
    }

    #[test]
    fn missing_colon() {
        match "2000".parse::<TimeSlot>().unwrap_err() {
            ParseTimeSlotError::Malformed { input } => assert_eq!(input, "2000"),
            err => panic!("Unexpected error: {:?}", err),
        }
    }

    #[test]
    fn with_seconds() {
        match "20:00:00".parse::<TimeSlot>().unwrap_err() {
            ParseTimeSlotError::Malformed { .. } => (),
            err => panic!("Unexpected error: {:?}", err),
        }
    }

    #[test]
    fn not_a_number() {
        match "ab:00".parse::<TimeSlot>().unwrap_err() {
            ParseTimeSlotError::Malformed { input } => assert_eq!(input, "ab:00"),
            err => panic!("Unexpected error: {:?}", err),
        }
    }

    #[test]
    fn signed_fields() {
        for source in &["+8:00", "08:+0", "-8:00"] {
            match source.parse::<TimeSlot>().unwrap_err() {
                ParseTimeSlotError::Malformed { .. } => (),
                err => panic!("Unexpected error for {}: {:?}", source, err),
            }
        }
    }

    #[test]
    fn blank() {
        assert_eq!("".parse::<TimeSlot>().unwrap_err(), ParseTimeSlotError::Blank)
    }

    #[test]
    fn next_stops_before_midnight() {
        let last = TimeSlot::new(23, 30).unwrap();
        assert_eq!(last.next(), None);
        assert_eq!(
            TimeSlot::new(23, 0).unwrap().next(),
            Some(last)
        );
    }

    #[test]
    fn ordered_by_time_of_day() {
        let early: TimeSlot = "09:30".parse().unwrap();
        let late: TimeSlot = "10:00".parse().unwrap();
        assert!(early < late);
    }

    #[test]
    fn deserialize_from_yaml_string() {
        let slot: TimeSlot = serde_yaml::from_str("\"21:30\"").unwrap();
        assert_eq!(slot, TimeSlot::new(21, 30).unwrap());
    }
}

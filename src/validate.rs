//! Final check of a chosen date and time before a booking is handed on.
//!
//! The slots offered to a customer were computed against a `now` that may
//! be minutes old by the time the form is submitted, so the pair is checked
//! again here against a freshly sampled `now`.

use crate::args::Validate;
use crate::clock::clock;
use crate::slots::available_slots;
use crate::time_slot::TimeSlot;
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, info};

/// A date and slot that were bookable at the time of validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Valid {
    date: NaiveDate,
    time: TimeSlot,
}

impl Valid {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> TimeSlot {
        self.time
    }

    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.time.to_naive_time())
    }
}

pub fn validate(
    date: Option<NaiveDate>,
    time: Option<TimeSlot>,
    now: NaiveDateTime,
) -> Result<Valid, BookingTimeError> {
    let date = date.ok_or(BookingTimeError::MissingDate)?;
    let time = time.ok_or(BookingTimeError::MissingTime)?;

    let start = date.and_time(time.to_naive_time());
    if start <= now {
        debug!("Rejecting {} since it is not after {}", start, now);
        return Err(BookingTimeError::PastDateTime { date, time });
    }

    if !available_slots(date, now).contains(&time) {
        debug!("Rejecting {} since it is outside business hours", start);
        return Err(BookingTimeError::SlotUnavailable { date, time });
    }

    Ok(Valid { date, time })
}

/// Validates the pair given on the command line and prints it when bookable.
#[tracing::instrument]
pub fn check(opts: &Validate) -> Result<(), BookingTimeError> {
    let now = clock(opts.now, opts.timezone).now();
    let valid = validate(Some(opts.date), Some(opts.time), now)?;
    info!("{} is bookable as of {}", valid.start(), now);
    println!("{} {}", valid.date(), valid.time());
    Ok(())
}

/// Reasons a customer has to pick another date or time. These are
/// expected outcomes of user input, not faults.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BookingTimeError {
    #[error("Please choose a date for the reading")]
    MissingDate,
    #[error("Please choose a time for the reading")]
    MissingTime,
    #[error("The chosen time {date} {time} has already passed")]
    PastDateTime { date: NaiveDate, time: TimeSlot },
    #[error("Readings are not offered at {time} on {date}")]
    SlotUnavailable { date: NaiveDate, time: TimeSlot },
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(source: &str) -> Option<NaiveDate> {
        Some(source.parse().unwrap())
    }

    fn time(source: &str) -> Option<TimeSlot> {
        Some(source.parse().unwrap())
    }

    fn now(source: &str) -> NaiveDateTime {
        source.parse().unwrap()
    }

    #[test]
    fn saturday_morning_from_friday() {
        let valid = validate(date("2024-06-08"), time("10:00"), now("2024-06-07T09:00:00")).unwrap();
        assert_eq!(valid.date(), "2024-06-08".parse().unwrap());
        assert_eq!(valid.time().to_string(), "10:00");
        assert_eq!(valid.start(), now("2024-06-08T10:00:00"));
    }

    #[test]
    fn weekday_before_opening() {
        let err = validate(date("2024-06-10"), time("19:30"), now("2024-06-10T09:00:00")).unwrap_err();
        match err {
            BookingTimeError::SlotUnavailable { .. } => (),
            err => panic!("Unexpected error: {:?}", err),
        }
    }

    #[test]
    fn exactly_now_is_past() {
        let err = validate(date("2024-06-10"), time("20:00"), now("2024-06-10T20:00:00")).unwrap_err();
        match err {
            BookingTimeError::PastDateTime { .. } => (),
            err => panic!("Unexpected error: {:?}", err),
        }
    }

    #[test]
    fn yesterday_is_past() {
        let err = validate(date("2024-06-09"), time("10:00"), now("2024-06-10T08:00:00")).unwrap_err();
        match err {
            BookingTimeError::PastDateTime { .. } => (),
            err => panic!("Unexpected error: {:?}", err),
        }
    }

    #[test]
    fn later_today() {
        assert!(validate(date("2024-06-10"), time("21:30"), now("2024-06-10T21:15:00")).is_ok())
    }

    #[test]
    fn missing_date_reported_first() {
        assert_eq!(
            validate(None, None, now("2024-06-10T21:15:00")),
            Err(BookingTimeError::MissingDate)
        )
    }

    #[test]
    fn missing_time() {
        assert_eq!(
            validate(date("2024-06-11"), None, now("2024-06-10T21:15:00")),
            Err(BookingTimeError::MissingTime)
        )
    }

    #[test]
    fn validating_twice_is_identical() {
        let at = now("2024-06-10T12:00:00");
        assert_eq!(
            validate(date("2024-06-10"), time("22:00"), at),
            validate(date("2024-06-10"), time("22:00"), at)
        )
    }
}

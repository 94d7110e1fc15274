//! Business hours policy: which part of a day can be booked, depending on
//! whether the day is on a weekend or not.
//!
//! Windows are half-open, the start hour is inclusive and the end hour is
//! exclusive. An end hour of 24 means the window runs until midnight, but
//! midnight itself belongs to the next day and is never part of it.

use crate::time_slot::TimeSlot;
use chrono::{Datelike, NaiveDate, Weekday};
use std::iter::Iterator;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DayClassification {
    Weekday,
    Weekend,
}

impl DayClassification {
    pub fn of(date: NaiveDate) -> DayClassification {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayClassification::Weekend,
            _ => DayClassification::Weekday,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SlotWindow {
    start_hour: u8,
    end_hour: u8,
}

#[derive(Debug, Clone)]
pub struct SlotWindowIter {
    next: Option<TimeSlot>,
    end_hour: u8,
}

impl SlotWindow {
    /// Readings all day on weekends, evenings only on weekdays.
    pub fn for_day(classification: DayClassification) -> SlotWindow {
        match classification {
            DayClassification::Weekend => SlotWindow {
                start_hour: 8,
                end_hour: 24,
            },
            DayClassification::Weekday => SlotWindow {
                start_hour: 20,
                end_hour: 24,
            },
        }
    }

    pub fn for_date(date: NaiveDate) -> SlotWindow {
        Self::for_day(DayClassification::of(date))
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    pub fn slots(&self) -> SlotWindowIter {
        SlotWindowIter {
            next: TimeSlot::new(self.start_hour, 0).filter(|_| self.start_hour < self.end_hour),
            end_hour: self.end_hour,
        }
    }
}

impl Iterator for SlotWindowIter {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next().filter(|n| n.hour() < self.end_hour);
        Some(current)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(source: &str) -> NaiveDate {
        source.parse().unwrap()
    }

    #[test]
    fn saturday_and_sunday_are_weekend() {
        assert_eq!(DayClassification::of(date("2024-06-08")), DayClassification::Weekend);
        assert_eq!(DayClassification::of(date("2024-06-09")), DayClassification::Weekend);
    }

    #[test]
    fn monday_through_friday_are_weekdays() {
        for day in 10..=14 {
            let weekday = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
            assert_eq!(DayClassification::of(weekday), DayClassification::Weekday);
        }
    }

    #[test]
    fn weekend_window() {
        let window = SlotWindow::for_date(date("2024-06-08"));
        assert_eq!(window.start_hour(), 8);
        assert_eq!(window.end_hour(), 24);
    }

    #[test]
    fn weekday_window() {
        let window = SlotWindow::for_date(date("2024-06-10"));
        assert_eq!(window.start_hour(), 20);
        assert_eq!(window.end_hour(), 24);
    }

    #[test]
    fn iterate_weekday_window() {
        let slots: Vec<String> = SlotWindow::for_day(DayClassification::Weekday)
            .slots()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            slots,
            vec!["20:00", "20:30", "21:00", "21:30", "22:00", "22:30", "23:00", "23:30"]
        )
    }

    #[test]
    fn iterate_window_ending_before_midnight() {
        let window = SlotWindow {
            start_hour: 10,
            end_hour: 11,
        };
        let slots: Vec<String> = window.slots().map(|s| s.to_string()).collect();
        assert_eq!(slots, vec!["10:00", "10:30"])
    }

    #[test]
    fn iterate_empty_window() {
        let window = SlotWindow {
            start_hour: 12,
            end_hour: 12,
        };
        assert_eq!(window.slots().count(), 0)
    }
}

use crate::args::Slots;
use crate::clock::clock;
use crate::format::display_12h;
use crate::time_slot::TimeSlot;
use crate::window::SlotWindow;
use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use tracing::{debug, info};

/// All half-hour slots offered on the given date, in ascending order.
pub fn generate_slots(date: NaiveDate) -> Vec<TimeSlot> {
    SlotWindow::for_date(date).slots().collect()
}

/// Removes slots that are already over when `date` is the same day as `now`.
///
/// `now` must be given in the business timezone. Dates after today are
/// passed through unchanged.
///
/// Calling this with a date before today is a bug in the caller, since
/// the date picker never offers past dates. Debug builds panic, release
/// builds return no slots at all.
pub fn filter_past(slots: Vec<TimeSlot>, date: NaiveDate, now: NaiveDateTime) -> Vec<TimeSlot> {
    match date.cmp(&now.date()) {
        Ordering::Greater => slots,
        Ordering::Equal => {
            let now = now.time();
            slots
                .into_iter()
                .filter(|slot| slot.to_naive_time() > now)
                .collect()
        }
        Ordering::Less => {
            debug_assert!(false, "Expected {} to not be before {}", date, now.date());
            vec![]
        }
    }
}

/// Slots that can still be booked on `date` as of `now`.
pub fn available_slots(date: NaiveDate, now: NaiveDateTime) -> Vec<TimeSlot> {
    filter_past(generate_slots(date), date, now)
}

/// Prints the slots still available on the requested date, one per line.
#[tracing::instrument]
pub fn list_slots(opts: &Slots) {
    let now = clock(opts.now, opts.timezone).now();
    let window = SlotWindow::for_date(opts.date);
    debug!(
        "Listing slots as of {}, business hours {}:00 to {}:00",
        now,
        window.start_hour(),
        window.end_hour()
    );

    if opts.date < now.date() {
        info!("{} is in the past, no slots available", opts.date);
        return;
    }

    let available = available_slots(opts.date, now);
    if available.is_empty() {
        info!("No slots left on {}", opts.date);
    }
    for slot in available {
        if opts.twelve_hour {
            println!("{}", display_12h(slot));
        } else {
            println!("{}", slot);
        }
    }
}

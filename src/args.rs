use crate::access::Area;
use crate::time_slot::TimeSlot;
use argh::FromArgs;
use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::PathBuf;

/// List and check bookable reading slots, validate booking requests and
/// check access to member areas.
#[derive(FromArgs, Debug)]
pub struct TopLevel {
    /// log debug output to stderr.
    #[argh(switch, short = 'v')]
    pub verbose: bool,
    #[argh(subcommand)]
    pub invocation: Invocation,
}

/// Inner top-level command.
#[derive(FromArgs, Deserialize, Debug)]
#[argh(subcommand)]
#[serde(rename_all = "snake_case")]
pub enum Invocation {
    #[serde(skip)]
    Run(Run),
    Slots(Slots),
    Validate(Validate),
    Book(Book),
    Access(Access),
}

/// Take run parameters from a specified YAML configuration file.
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "run")]
pub struct Run {
    #[argh(positional)]
    pub config: PathBuf,
}

/// List the slots that can still be booked on the given date.
#[derive(FromArgs, Deserialize, Debug)]
#[argh(subcommand, name = "slots")]
pub struct Slots {
    /// date of the reading, e.g. 2024-06-10.
    #[argh(positional)]
    pub date: NaiveDate,
    /// local time to check against instead of the current time, e.g. 2024-06-10T21:15:00.
    #[argh(option, short = 'n')]
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
    /// timezone of the business, e.g. Europe/Berlin, which is also the default.
    #[argh(option, short = 't')]
    #[serde(default)]
    pub timezone: Option<Tz>,
    /// show times as e.g. 8:30 PM instead of 20:30.
    #[argh(switch)]
    #[serde(default)]
    pub twelve_hour: bool,
}

/// Check that a reading can be booked at the given date and time.
#[derive(FromArgs, Deserialize, Debug)]
#[argh(subcommand, name = "validate")]
pub struct Validate {
    /// date of the reading, e.g. 2024-06-10.
    #[argh(positional)]
    pub date: NaiveDate,
    /// time of the reading on the full or half hour, e.g. 20:30.
    #[argh(positional)]
    pub time: TimeSlot,
    /// local time to check against instead of the current time, e.g. 2024-06-10T21:15:00.
    #[argh(option, short = 'n')]
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
    /// timezone of the business, e.g. Europe/Berlin, which is also the default.
    #[argh(option, short = 't')]
    #[serde(default)]
    pub timezone: Option<Tz>,
}

/// Check a booking form submission in YAML format and print the booking
/// request that would be stored.
#[derive(FromArgs, Deserialize, Debug)]
#[argh(subcommand, name = "book")]
pub struct Book {
    /// path to a YAML file with name, email, type, date, time and note.
    #[argh(positional)]
    pub draft: PathBuf,
    /// local time to check against instead of the current time, e.g. 2024-06-10T21:15:00.
    #[argh(option, short = 'n')]
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
    /// timezone of the business, e.g. Europe/Berlin, which is also the default.
    #[argh(option, short = 't')]
    #[serde(default)]
    pub timezone: Option<Tz>,
}

/// Check whether a user profile may enter an area of the site.
#[derive(FromArgs, Deserialize, Debug)]
#[argh(subcommand, name = "access")]
pub struct Access {
    /// path to a YAML file with role and subscription of the user.
    #[argh(positional)]
    pub profile: PathBuf,
    /// one of public, booking, vip or admin.
    #[argh(positional)]
    pub area: Area,
}

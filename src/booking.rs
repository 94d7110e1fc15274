//! Booking requests as they are handed on for storage.
//!
//! Form input arrives loosely typed, every field may be missing or blank.
//! It is checked once here and turned into a [BookingRequest] whose
//! fields can then be relied upon.

use crate::args::Book;
use crate::clock::clock;
use crate::time_slot::{ParseTimeSlotError, TimeSlot};
use crate::validate::{validate, BookingTimeError};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

pub type Result<T> = std::result::Result<T, BookingError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingType {
    General,
    Love,
    Career,
    YesNo,
}

impl FromStr for ReadingType {
    type Err = BookingError;

    fn from_str(source: &str) -> Result<Self> {
        match source {
            "general" => Ok(ReadingType::General),
            "love" => Ok(ReadingType::Love),
            "career" => Ok(ReadingType::Career),
            "yes_no" => Ok(ReadingType::YesNo),
            other => Err(BookingError::UnknownReadingType {
                input: other.to_string(),
            }),
        }
    }
}

impl Display for ReadingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadingType::General => "general",
            ReadingType::Love => "love",
            ReadingType::Career => "career",
            ReadingType::YesNo => "yes_no",
        };
        f.write_str(name)
    }
}

/// Unchecked form input.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "type")]
    pub reading_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    name: String,
    email: String,
    #[serde(rename = "type")]
    reading_type: ReadingType,
    date: NaiveDate,
    time: TimeSlot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl BookingRequest {
    /// Checks every field of the draft, including whether the chosen slot
    /// is still bookable as of `now`.
    pub fn from_draft(draft: &BookingDraft, now: NaiveDateTime) -> Result<BookingRequest> {
        let name = non_blank(&draft.name).ok_or(BookingError::MissingName)?;
        let email = non_blank(&draft.email).ok_or(BookingError::MissingEmail)?;
        if !is_plausible_email(&email) {
            return Err(BookingError::InvalidEmail { input: email });
        }
        let reading_type = non_blank(&draft.reading_type)
            .ok_or(BookingError::MissingReadingType)?
            .parse::<ReadingType>()?;

        let date = non_blank(&draft.date)
            .map(|date| {
                date.parse::<NaiveDate>()
                    .map_err(|e| BookingError::date_format(e, &date))
            })
            .transpose()?;
        let time = non_blank(&draft.time)
            .map(|time| time.parse::<TimeSlot>())
            .transpose()?;
        let valid = validate(date, time, now)?;

        Ok(BookingRequest {
            name,
            email,
            reading_type,
            date: valid.date(),
            time: valid.time(),
            note: non_blank(&draft.note),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn reading_type(&self) -> ReadingType {
        self.reading_type
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> TimeSlot {
        self.time
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

fn non_blank(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        _ => false,
    }
}

/// Reads a draft from YAML, checks it and prints the resulting booking
/// request as YAML.
#[tracing::instrument]
pub fn book(opts: &Book) -> Result<()> {
    let file = File::open(&opts.draft).map_err(BookingError::DraftRead)?;
    let draft: BookingDraft = serde_yaml::from_reader(file)?;
    let now = clock(opts.now, opts.timezone).now();
    debug!("Checking booking draft as of {}", now);

    let request = BookingRequest::from_draft(&draft, now)?;
    debug!(
        "Request from {} <{}>, note: {}",
        request.name(),
        request.email(),
        request.note().unwrap_or("none")
    );
    info!(
        "Booking request for a {} reading on {} at {} is valid",
        request.reading_type(),
        request.date(),
        request.time()
    );
    print!("{}", serde_yaml::to_string(&request)?);
    Ok(())
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("`{input}` does not look like an email address")]
    InvalidEmail { input: String },
    #[error("Please choose a type of reading")]
    MissingReadingType,
    #[error("Unknown type of reading `{input}`, expected one of general, love, career, yes_no")]
    UnknownReadingType { input: String },
    #[error("Could not parse `{input}` as a date, expected YYYY-MM-DD: {source}")]
    DateFormat {
        source: chrono::ParseError,
        input: String,
    },
    #[error("{0}")]
    TimeFormat(#[from] ParseTimeSlotError),
    #[error("{0}")]
    Time(#[from] BookingTimeError),
    #[error("Could not open booking draft: {0}")]
    DraftRead(std::io::Error),
    #[error("Could not read or write booking as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BookingError {
    fn date_format(source: chrono::ParseError, input: &str) -> Self {
        Self::DateFormat {
            source,
            input: input.to_string(),
        }
    }
}

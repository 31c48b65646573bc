use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BirthDateError;

/// Wire format of a stored birth date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date the elapsed time is measured from
///
/// Serialized as an ISO-8601 date (`YYYY-MM-DD`). There is no time of day;
/// the reference instant is midnight UTC, which is how a browser reads a bare
/// ISO date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse user or storage input, ignoring surrounding whitespace
    pub fn parse(input: &str) -> Result<Self, BirthDateError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(BirthDateError::Empty);
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|source| BirthDateError::Malformed {
                input: trimmed.to_string(),
                source,
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight UTC of the birth date
    pub fn start_instant(&self) -> DateTime<Utc> {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    /// Value written to the store
    pub fn to_iso_string(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for BirthDate {
    type Err = BirthDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BirthDate {
    type Error = BirthDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<BirthDate> for String {
    fn from(date: BirthDate) -> Self {
        date.to_iso_string()
    }
}

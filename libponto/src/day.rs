use crate::error::FormatError;
use crate::parser;

use chrono::NaiveDate;

use std::fmt;
use std::str::FromStr;

/// Calendar day as written in the ledger. Fields are kept verbatim, no
/// calendar validation happens here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day {
    year: u16,
    month: u8,
    day: u8,
}

impl Day {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Day { year, month, day }
    }

    /// The matching calendar date, `None` for things like `2024-02-30`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year.into(), self.month.into(), self.day.into())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Day {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_date(s)
    }
}

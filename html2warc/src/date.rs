//! Contains [WarcDate], the creation timestamp shared by all records of a
//! single run.

use chrono::{DateTime, Local};
use std::{fmt, ops::Deref};

/// ISO-8601 local time with microseconds, eg. `2015-12-30T14:05:09.123456`.
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Creation timestamp, rendered once and reused for `WARC-Date` and `DATE`
/// lines of every record written during a run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WarcDate {
    inner: String,
}
impl WarcDate {
    /// Current local time.
    pub fn now() -> Self {
        Self::from_date_time(&Local::now())
    }

    /// Renders given point in time.
    pub fn from_date_time(date_time: &DateTime<Local>) -> Self {
        Self {
            inner: date_time.format(FORMAT).to_string(),
        }
    }

    /// Uses string as is, without validation. Mostly for tests, where fixed
    /// timestamp length is needed.
    pub fn from_string(inner: String) -> Self {
        Self { inner }
    }
}
impl Deref for WarcDate {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl fmt::Display for WarcDate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

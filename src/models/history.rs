use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// Timestamp layout used in the archive sheet.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the dinner archive. All fields are stored as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub date: String,
    pub recipe: String,
    pub location: String,
}

impl HistoryEntry {
    pub fn new(
        date: impl Into<String>,
        recipe: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            recipe: recipe.into(),
            location: location.into(),
        }
    }

    /// Build an entry stamped with `at`, formatted as `YYYY-MM-DD HH:MM:SS`.
    pub fn at<Tz: TimeZone>(at: &DateTime<Tz>, recipe: &str, location: &str) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self::new(at.format(DATE_FORMAT).to_string(), recipe, location)
    }
}

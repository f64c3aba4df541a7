//! Maps an anchor and the current day onto a pattern cell
//!
//! Every date is a local calendar date in its own timezone. The distance
//! between two dates is the difference of those local dates, so an anchor
//! recorded in one zone keeps its meaning after the configured zone changes.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io::configuration::{CYCLE_DATE_FORMAT, DAYS_PER_WEEK};
use crate::io::error::{Result, invalid_setting};

/// Calendar date observed in a named timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleDate {
    /// Local calendar date
    pub date: NaiveDate,
    /// Zone the date was observed in
    pub timezone: Tz,
}

impl CycleDate {
    /// Local date of an instant in the given timezone
    pub fn from_instant(instant: DateTime<Utc>, timezone: Tz) -> Self {
        Self {
            date: instant.with_timezone(&timezone).date_naive(),
            timezone,
        }
    }

    /// Parse the stored anchor, a `YYYY-MM-DD` date and IANA timezone name
    ///
    /// # Errors
    ///
    /// Returns an error if either the date or the timezone cannot be parsed
    pub fn parse_anchor(date: &str, timezone: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(date, CYCLE_DATE_FORMAT)
            .map_err(|e| invalid_setting("firstCycle", &date, &e))?;
        let timezone = parse_timezone("firstCycleTimezone", timezone)?;
        Ok(Self { date, timezone })
    }

    /// Date in storage format
    pub fn format(&self) -> String {
        self.date.format(CYCLE_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for CycleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.format(), self.timezone.name())
    }
}

/// Parse an IANA timezone name
///
/// # Errors
///
/// Returns an invalid setting error naming `key` if the zone is unknown
pub fn parse_timezone(key: &'static str, name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| invalid_setting(key, &name, &e))
}

/// Cursor into the pattern, derived fresh on every cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Days since the start of the first pattern column
    #[serde(rename = "totalDaysSinceStartOfFirstColumn")]
    pub total_offset_days: u64,
    /// Fractional weeks since the start of the first column
    pub total_weeks: f64,
    /// Pattern column (week)
    #[serde(rename = "currentColumn")]
    pub column: u64,
    /// Pattern row (weekday), may reach 7 at a week boundary
    #[serde(rename = "currentRow")]
    pub row: u64,
}

/// Position of `current` relative to an anchor that started `anchor_offset` cells in
///
/// # Errors
///
/// Returns an invalid setting error for `firstPosition` if the total cell
/// count does not fit in a `u64`
pub fn calculate_position(
    anchor: &CycleDate,
    anchor_offset: u64,
    current: &CycleDate,
) -> Result<Position> {
    let days_between = current
        .date
        .signed_duration_since(anchor.date)
        .num_days()
        .unsigned_abs();

    let total_offset_days = days_between.checked_add(anchor_offset).ok_or_else(|| {
        invalid_setting(
            "firstPosition",
            &anchor_offset,
            &format!("{days_between} days past the anchor overflows the cell count"),
        )
    })?;
    let total_weeks = total_offset_days as f64 / DAYS_PER_WEEK as f64;

    let column = total_weeks.floor();
    let row = ((total_weeks - column) * DAYS_PER_WEEK as f64).round();

    Ok(Position {
        total_offset_days,
        total_weeks,
        column: column as u64,
        row: row as u64,
    })
}

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Zone used whenever a requested timezone is missing or unknown.
pub const FALLBACK_TIMEZONE: Tz = Tz::UTC;

/// Calendar facts about "today" in the requested zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedDate {
    pub date: NaiveDate,
    pub timezone: Tz,
    pub year: i32,
    pub is_leap_year: bool,
    pub total_days: u32,
    /// 1-based ordinal, `1..=total_days`.
    pub day_of_year: u32,
}

impl ResolvedDate {
    /// Build from a local calendar date. `timezone` is recorded, not applied.
    pub fn from_local_date(date: NaiveDate, timezone: Tz) -> Self {
        let year = date.year();
        let is_leap_year = is_leap_year(year);
        let total_days = days_in_year(year);
        let day_of_year = date.ordinal();
        debug_assert!((1..=total_days).contains(&day_of_year));
        Self {
            date,
            timezone,
            year,
            is_leap_year,
            total_days,
            day_of_year,
        }
    }

    pub fn days_left(&self) -> u32 {
        self.total_days - self.day_of_year
    }

    /// Share of the year elapsed, including today, in percent.
    pub fn percent(&self) -> f64 {
        f64::from(self.day_of_year) / f64::from(self.total_days) * 100.0
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Parse an IANA zone name, falling back to UTC for anything unrecognized.
pub fn parse_timezone(name: &str) -> Tz {
    let name = name.trim();
    if name.is_empty() {
        return FALLBACK_TIMEZONE;
    }
    match name.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            tracing::warn!(timezone = name, "unknown timezone, falling back to UTC");
            FALLBACK_TIMEZONE
        }
    }
}

/// Resolve the local calendar date of `instant` in `timezone`.
pub fn resolve(timezone: Tz, instant: DateTime<Utc>) -> ResolvedDate {
    let local = instant.with_timezone(&timezone).date_naive();
    ResolvedDate::from_local_date(local, timezone)
}

/// Like [`resolve`], but takes the zone by name. Unknown names resolve in UTC.
pub fn resolve_named(timezone: &str, instant: DateTime<Utc>) -> ResolvedDate {
    resolve(parse_timezone(timezone), instant)
}

#[cfg(test)]
#[path = "../../tests/unit/date/resolver.rs"]
mod tests;

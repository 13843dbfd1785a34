// src/domain/clock.rs

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Accepted wall-clock layouts, tried in order after RFC 3339.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%y, %I:%M %p",
    "%m/%d/%Y, %I:%M %p",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// The reference instant every view derivation reads "now" from.
///
/// The web layer builds one per request from the system clock; tests pin it.
/// Record timestamps are stored in UTC and projected into this clock's offset
/// before any calendar-date comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewClock {
    now: DateTime<FixedOffset>,
}

impl ViewClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    pub fn system() -> Self {
        Self::new(Local::now().fixed_offset())
    }

    pub fn now_utc(&self) -> DateTime<Utc> {
        self.now.with_timezone(&Utc)
    }

    pub fn offset(&self) -> FixedOffset {
        self.now.timezone()
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Local calendar date of a stored timestamp (time of day discarded).
    pub fn local_date(&self, ts: &DateTime<Utc>) -> NaiveDate {
        ts.with_timezone(&self.offset()).date_naive()
    }

    /// Whole days elapsed since `ts`, floored.
    pub fn days_since(&self, ts: &DateTime<Utc>) -> i64 {
        (self.now_utc() - *ts).num_days()
    }

    pub fn ago(&self, days: i64) -> DateTime<Utc> {
        self.now_utc() - Duration::days(days)
    }

    /// Parses a user- or export-supplied timestamp.
    ///
    /// Values without an offset are read as wall time in this clock's offset;
    /// date-only values land on local midnight. `None` when nothing matches.
    pub fn parse_local(&self, raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        let naive = DATETIME_FORMATS
            .iter()
            .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })?;

        self.offset()
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

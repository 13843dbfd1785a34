// src/domain/calendar.rs

use crate::domain::clock::ViewClock;
use crate::domain::job::{JobRecord, JobStatus};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::Serialize;

pub const GRID_DAYS: usize = 42;
pub const WEEKDAY_HEADERS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Interview,
    Applied,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub job_id: String,
    pub kind: EventKind,
    pub title: String,
    pub company: String,
    pub at: DateTime<Utc>,
    pub link: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarGrid {
    pub year: i32,
    /// 1-based.
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarGrid {
    pub fn title(&self) -> String {
        month_title(self.year, self.month)
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    pub fn event_count(&self, kind: EventKind) -> usize {
        self.days
            .iter()
            .flat_map(|d| d.events.iter())
            .filter(|e| e.kind == kind)
            .count()
    }
}

pub fn month_title(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{name} {year}")
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Sunday on or before the first of the month.
fn grid_start(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_sub_signed(Duration::days(first.weekday().num_days_from_sunday() as i64))
}

/// Six-week grid for `month` (1-based). `None` for an invalid month, or when
/// the grid would run past the representable date range.
///
/// Each record contributes at most one interview event (on its interview
/// date) and one applied event (on its applied date, only while the status is
/// `applied`).
pub fn build_calendar(
    records: &[JobRecord],
    year: i32,
    month: u32,
    clock: &ViewClock,
) -> Option<CalendarGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let start = grid_start(first)?;
    let today = clock.today();

    let mut days: Vec<CalendarDay> = (0..GRID_DAYS)
        .map(|i| {
            let date = start.checked_add_signed(Duration::days(i as i64))?;
            Some(CalendarDay {
                date,
                is_current_month: date.month() == month,
                is_today: date == today,
                events: Vec::new(),
            })
        })
        .collect::<Option<_>>()?;

    let mut place = |date: NaiveDate, event: CalendarEvent| {
        let offset = (date - start).num_days();
        if (0..GRID_DAYS as i64).contains(&offset) {
            days[offset as usize].events.push(event);
        }
    };

    for job in records {
        if let Some(at) = job.interview_date {
            place(
                clock.local_date(&at),
                CalendarEvent {
                    job_id: job.id.clone(),
                    kind: EventKind::Interview,
                    title: job.role.clone(),
                    company: job.company.clone(),
                    at,
                    link: job.url.clone(),
                    notes: job.notes.clone(),
                },
            );
        }

        if let (Some(at), true) = (job.applied_date, job.has_status(JobStatus::Applied)) {
            place(
                clock.local_date(&at),
                CalendarEvent {
                    job_id: job.id.clone(),
                    kind: EventKind::Applied,
                    title: format!("Applied: {}", job.role),
                    company: job.company.clone(),
                    at,
                    link: None,
                    notes: None,
                },
            );
        }
    }

    Some(CalendarGrid { year, month, days })
}

/// Interviews scheduled at or after now.
pub fn upcoming_interviews(records: &[JobRecord], clock: &ViewClock) -> usize {
    let now = clock.now_utc();
    records
        .iter()
        .filter(|j| j.interview_date.is_some_and(|at| at >= now))
        .count()
}

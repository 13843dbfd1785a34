// src/domain/weekly.rs

use crate::domain::change::percentage_change;
use crate::domain::clock::ViewClock;
use crate::domain::job::JobRecord;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub day: &'static str,
    /// Applications on this weekday of the current week.
    pub applications: usize,
    /// Same weekday, previous week.
    pub previous: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub days: Vec<DayBucket>,
    pub current_total: usize,
    pub previous_total: usize,
    pub percentage_change: i64,
}

impl WeeklySummary {
    pub fn has_data(&self) -> bool {
        self.current_total > 0
    }

    /// Largest count across both weeks, for scaling bars.
    pub fn peak(&self) -> usize {
        self.days
            .iter()
            .map(|d| d.applications.max(d.previous))
            .max()
            .unwrap_or(0)
    }
}

/// Monday of the ISO week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

/// Buckets applications per weekday for this week and last week.
///
/// A record is dated by `applied_date`, falling back to `created_at`, and
/// only its local calendar date counts.
pub fn weekly_summary(records: &[JobRecord], clock: &ViewClock) -> WeeklySummary {
    let current_start = week_start(clock.today());
    let previous_start = current_start - Duration::days(7);

    let mut current = [0usize; 7];
    let mut previous = [0usize; 7];

    for job in records {
        let day = clock.local_date(&job.activity_date());

        let offset = (day - current_start).num_days();
        if (0..7).contains(&offset) {
            current[offset as usize] += 1;
        }

        let offset = (day - previous_start).num_days();
        if (0..7).contains(&offset) {
            previous[offset as usize] += 1;
        }
    }

    let current_total: usize = current.iter().sum();
    let previous_total: usize = previous.iter().sum();

    let days = DAY_LABELS
        .into_iter()
        .enumerate()
        .map(|(i, day)| DayBucket {
            day,
            applications: current[i],
            previous: previous[i],
        })
        .collect();

    WeeklySummary {
        week_start: current_start,
        days,
        current_total,
        previous_total,
        percentage_change: percentage_change(previous_total, current_total),
    }
}

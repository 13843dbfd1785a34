// src/domain/board.rs

use crate::domain::clock::ViewClock;
use crate::domain::job::{JobRecord, JobStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardCard {
    pub id: String,
    pub company: String,
    pub role: String,
    pub avatar: String,
    pub salary: Option<String>,
    pub location: Option<String>,
    /// Days since `applied_date`, if any.
    pub days_ago: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardColumn {
    pub status: JobStatus,
    pub title: &'static str,
    pub cards: Vec<BoardCard>,
    /// Matching records, including the ones past the display cap.
    pub total: usize,
}

impl BoardColumn {
    pub fn hidden(&self) -> usize {
        self.total - self.cards.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub query: String,
    pub show_limit: usize,
    pub columns: Vec<BoardColumn>,
}

impl Board {
    pub fn matched(&self) -> usize {
        self.columns.iter().map(|c| c.total).sum()
    }

    pub fn has_more(&self) -> bool {
        self.columns.iter().any(|c| c.hidden() > 0)
    }

    /// Limit at which every matched card is shown.
    pub fn show_all_limit(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.total)
            .max()
            .unwrap_or(0)
            .max(self.show_limit)
    }
}

/// Two-letter avatar text for a company name.
pub fn company_avatar(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

/// Splits `records` into the fixed status columns.
///
/// The text filter runs first. Input order is kept within a column, at most
/// `show_limit` cards are kept per column, and records whose status is not in
/// the closed set land nowhere.
pub fn partition(
    records: &[JobRecord],
    query: &str,
    show_limit: usize,
    clock: &ViewClock,
) -> Board {
    let needle = query.trim().to_lowercase();

    let mut columns: Vec<BoardColumn> = JobStatus::ALL
        .iter()
        .map(|&status| BoardColumn {
            status,
            title: status.title(),
            cards: Vec::new(),
            total: 0,
        })
        .collect();

    for job in records.iter().filter(|j| j.matches(&needle)) {
        let Some(status) = job.known_status() else {
            continue;
        };
        let Some(column) = columns.iter_mut().find(|c| c.status == status) else {
            continue;
        };

        column.total += 1;
        if column.cards.len() < show_limit {
            column.cards.push(BoardCard {
                id: job.id.clone(),
                company: job.company.clone(),
                role: job.role.clone(),
                avatar: company_avatar(&job.company),
                salary: job.salary.clone(),
                location: job.location.clone(),
                days_ago: job.applied_date.map(|d| clock.days_since(&d)),
            });
        }
    }

    Board {
        query: query.trim().to_string(),
        show_limit,
        columns,
    }
}

// src/domain/table.rs

use crate::domain::job::{JobRecord, JobStatus};
use crate::errors::ServerError;

/// Status dropdown on the applications table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    pub fn parse(raw: Option<&str>) -> Result<Self, ServerError> {
        match raw.map(str::trim) {
            None | Some("") | Some("all") => Ok(StatusFilter::All),
            Some(other) => JobStatus::parse(other)
                .map(StatusFilter::Only)
                .ok_or_else(|| ServerError::BadRequest(format!("unknown status filter '{other}'"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(s) => s.as_str(),
        }
    }

    fn admits(&self, job: &JobRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(s) => job.has_status(*s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub all: usize,
    pub to_apply: usize,
    pub applied: usize,
    pub interviewing: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn get(&self, status: JobStatus) -> usize {
        match status {
            JobStatus::ToApply => self.to_apply,
            JobStatus::Applied => self.applied,
            JobStatus::Interviewing => self.interviewing,
            JobStatus::Offer => self.offer,
            JobStatus::Rejected => self.rejected,
        }
    }
}

pub fn status_counts(records: &[JobRecord]) -> StatusCounts {
    let mut counts = StatusCounts {
        all: records.len(),
        ..StatusCounts::default()
    };
    for job in records {
        match job.known_status() {
            Some(JobStatus::ToApply) => counts.to_apply += 1,
            Some(JobStatus::Applied) => counts.applied += 1,
            Some(JobStatus::Interviewing) => counts.interviewing += 1,
            Some(JobStatus::Offer) => counts.offer += 1,
            Some(JobStatus::Rejected) => counts.rejected += 1,
            None => {}
        }
    }
    counts
}

/// Rows matching both the search text and the status filter, in input order.
pub fn filter_applications<'a>(
    records: &'a [JobRecord],
    query: &str,
    filter: StatusFilter,
) -> Vec<&'a JobRecord> {
    let needle = query.trim().to_lowercase();
    records
        .iter()
        .filter(|j| j.matches(&needle) && filter.admits(j))
        .collect()
}

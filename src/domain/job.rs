// src/domain/job.rs

use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Lifecycle stage of an application. The set is closed; anything else found
/// in storage is kept as raw text on the record and never matches a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    ToApply,
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStatus {
    /// Board column order.
    pub const ALL: [JobStatus; 5] = [
        JobStatus::ToApply,
        JobStatus::Applied,
        JobStatus::Interviewing,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "to_apply" => Some(JobStatus::ToApply),
            "applied" => Some(JobStatus::Applied),
            "interviewing" => Some(JobStatus::Interviewing),
            "offer" => Some(JobStatus::Offer),
            "rejected" => Some(JobStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::ToApply => "to_apply",
            JobStatus::Applied => "applied",
            JobStatus::Interviewing => "interviewing",
            JobStatus::Offer => "offer",
            JobStatus::Rejected => "rejected",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            JobStatus::ToApply => "To Apply",
            JobStatus::Applied => "Applied",
            JobStatus::Interviewing => "Interviewing",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `jobs` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    pub id: String,
    pub user_id: String,
    pub company: String,
    pub role: String,
    /// Raw stored value; see [`JobRecord::known_status`].
    pub status: String,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub applied_date: Option<DateTime<Utc>>,
    pub interview_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobRecord {
    pub fn known_status(&self) -> Option<JobStatus> {
        JobStatus::parse(&self.status)
    }

    pub fn has_status(&self, status: JobStatus) -> bool {
        self.known_status() == Some(status)
    }

    /// Label for badges; unknown values are shown as stored.
    pub fn status_label(&self) -> &str {
        match self.known_status() {
            Some(s) => s.title(),
            None => &self.status,
        }
    }

    /// Date used for weekly bucketing.
    pub fn activity_date(&self) -> DateTime<Utc> {
        self.applied_date.unwrap_or(self.created_at)
    }

    /// Case-insensitive substring match on company or role.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.company.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
    }
}

/// Validated fields for creating or replacing a job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDraft {
    pub company: String,
    pub role: String,
    pub status: JobStatus,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub applied_date: Option<DateTime<Utc>>,
    pub interview_date: Option<DateTime<Utc>>,
}

impl JobDraft {
    /// Build a draft from loose form values.
    ///
    /// Company and role are trimmed and required, status must be one of the
    /// closed set, blank optional fields become `None` and a URL must be an
    /// absolute http(s) link.
    pub fn from_parts(
        company: &str,
        role: &str,
        status: &str,
        location: Option<&str>,
        salary: Option<&str>,
        url: Option<&str>,
        notes: Option<&str>,
    ) -> Result<Self, ServerError> {
        let company = company.trim();
        if company.is_empty() {
            return Err(ServerError::BadRequest("company is required".into()));
        }
        let role = role.trim();
        if role.is_empty() {
            return Err(ServerError::BadRequest("role is required".into()));
        }
        let status = JobStatus::parse(status.trim())
            .ok_or_else(|| ServerError::BadRequest(format!("unknown status '{}'", status.trim())))?;

        let url = match non_blank(url) {
            Some(u) => Some(validate_url(&u)?),
            None => None,
        };

        Ok(JobDraft {
            company: company.to_string(),
            role: role.to_string(),
            status,
            location: non_blank(location),
            salary: non_blank(salary),
            url,
            notes: non_blank(notes),
            applied_date: None,
            interview_date: None,
        })
    }

    pub fn with_dates(
        mut self,
        applied_date: Option<DateTime<Utc>>,
        interview_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.applied_date = applied_date;
        self.interview_date = interview_date;
        self
    }
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

pub(crate) fn validate_url(raw: &str) -> Result<String, ServerError> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| ServerError::BadRequest(format!("invalid url '{raw}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed.to_string()),
        other => Err(ServerError::BadRequest(format!(
            "url must be http or https, got '{other}'"
        ))),
    }
}

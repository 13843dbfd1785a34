// src/imports/linkedin.rs

use crate::domain::job::validate_url;
use crate::domain::{JobDraft, JobStatus, ViewClock};
use crate::errors::ServerError;
use serde::Deserialize;
use std::io::{Cursor, Read};

/// File inside the LinkedIn data export that lists submitted applications.
pub const APPLIED_JOBS_CSV: &str = "Applied_Jobs.csv";

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// One CSV row. Columns we don't know about are ignored.
#[derive(Debug, Deserialize)]
struct AppliedJobRow {
    #[serde(rename = "Company Name", default)]
    company: Option<String>,
    #[serde(rename = "Job Title", default)]
    role: Option<String>,
    #[serde(rename = "Job URL", alias = "Job Url", default)]
    url: Option<String>,
    #[serde(rename = "Application Date", default)]
    applied: Option<String>,
}

#[derive(Debug, Default)]
pub struct ImportBatch {
    pub drafts: Vec<JobDraft>,
    /// Rows dropped for missing company or role.
    pub skipped: usize,
}

/// Entry point for an uploaded body: a ZIP export or the bare CSV.
pub fn parse_upload(body: &[u8], clock: &ViewClock) -> Result<ImportBatch, ServerError> {
    let csv_text = if body.starts_with(ZIP_MAGIC) {
        read_applied_jobs_csv(body)?
    } else {
        String::from_utf8(body.to_vec())
            .map_err(|_| ServerError::ImportError("upload is neither a ZIP archive nor UTF-8 CSV".into()))?
    };
    parse_applied_jobs(&csv_text, clock)
}

/// Pulls `Applied_Jobs.csv` out of the archive, wherever it sits.
pub fn read_applied_jobs_csv(archive: &[u8]) -> Result<String, ServerError> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))
        .map_err(|e| ServerError::ImportError(format!("unreadable ZIP archive: {e}")))?;

    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .map_err(|e| ServerError::ImportError(format!("bad ZIP entry: {e}")))?;

        let is_target = entry
            .name()
            .rsplit('/')
            .next()
            .is_some_and(|name| name == APPLIED_JOBS_CSV);
        if !entry.is_file() || !is_target {
            continue;
        }

        let mut text = String::new();
        entry
            .read_to_string(&mut text)
            .map_err(|e| ServerError::ImportError(format!("failed to read {APPLIED_JOBS_CSV}: {e}")))?;
        return Ok(text);
    }

    Err(ServerError::ImportError(format!(
        "{APPLIED_JOBS_CSV} not found in the ZIP file."
    )))
}

/// Turns CSV text into drafts with status `applied`.
///
/// Rows without a company or a role are skipped. An unparseable date or URL
/// only clears that field.
pub fn parse_applied_jobs(csv_text: &str, clock: &ViewClock) -> Result<ImportBatch, ServerError> {
    let csv_text = csv_text.trim_start_matches('\u{feff}');
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let mut batch = ImportBatch::default();

    for row in reader.deserialize::<AppliedJobRow>() {
        let row = row.map_err(|e| ServerError::ImportError(format!("malformed CSV: {e}")))?;

        let company = row.company.unwrap_or_default();
        let role = row.role.unwrap_or_default();
        if company.trim().is_empty() || role.trim().is_empty() {
            batch.skipped += 1;
            continue;
        }

        let applied_date = row.applied.as_deref().and_then(|d| clock.parse_local(d));
        if applied_date.is_none() && row.applied.as_deref().is_some_and(|d| !d.is_empty()) {
            tracing::debug!(value = ?row.applied, "unparseable application date dropped");
        }

        batch.drafts.push(JobDraft {
            company: company.trim().to_string(),
            role: role.trim().to_string(),
            status: JobStatus::Applied,
            location: None,
            salary: None,
            url: row
                .url
                .as_deref()
                .filter(|u| !u.is_empty())
                .and_then(|u| validate_url(u).ok()),
            notes: None,
            applied_date,
            interview_date: None,
        });
    }

    Ok(batch)
}

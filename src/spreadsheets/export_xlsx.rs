use crate::domain::{JobRecord, ViewClock};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 9] = [
    "Company",
    "Role",
    "Status",
    "Location",
    "Salary",
    "URL",
    "Applied",
    "Interview",
    "Notes",
];

/// Builds the applications workbook in memory.
///
/// Dates are written as `YYYY-MM-DD` in the clock's offset so the sheet
/// matches what the table view shows.
pub fn write_applications_workbook(
    jobs: &[&JobRecord],
    clock: &ViewClock,
) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Applications")
        .map_err(|e| ServerError::XlsxError(format!("Failed to name worksheet: {}", e)))?;

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    let date = |ts: Option<&chrono::DateTime<chrono::Utc>>| {
        ts.map(|t| clock.local_date(t).format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    for (i, job) in jobs.iter().enumerate() {
        let r = (i + 1) as u32;
        let cells = [
            job.company.clone(),
            job.role.clone(),
            job.status_label().to_string(),
            job.location.clone().unwrap_or_default(),
            job.salary.clone().unwrap_or_default(),
            job.url.clone().unwrap_or_default(),
            date(job.applied_date.as_ref()),
            date(job.interview_date.as_ref()),
            job.notes.clone().unwrap_or_default(),
        ];

        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string(r, col as u16, value).map_err(|e| {
                ServerError::XlsxError(format!(
                    "Failed to write {} for row {}: {}",
                    HEADERS[col], r, e
                ))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_applications_xlsx(jobs: &[&JobRecord], clock: &ViewClock) -> ResultResp {
    let buffer = write_applications_workbook(jobs, clock)?;
    let filename = format!("applications_{}.xlsx", clock.today().format("%Y-%m-%d"));
    xlsx_response(buffer, &filename)
}

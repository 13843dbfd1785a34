use crate::config::AppConfig;
use crate::db::jobs;
use crate::db::Database;
use crate::domain::board::partition;
use crate::domain::calendar::{build_calendar, upcoming_interviews};
use crate::domain::insights::{calculate_insights, recommendations};
use crate::domain::table::{filter_applications, status_counts, StatusFilter};
use crate::domain::weekly::weekly_summary;
use crate::domain::{JobDraft, ViewClock};
use crate::errors::ServerError;
use crate::imports::parse_upload;
use crate::responses::{
    html_response, html_response_with_status, json_response, see_other, ResultResp,
};
use crate::spreadsheets::export_applications_xlsx;
use crate::templates::pages::{
    applications_page, board_page, calendar_page, dashboard_page, import_page, job_form_page,
    ApplicationsVm, DashboardVm, ImportSummary, JobFormVm,
};
use astra::Request;
use chrono::Datelike;
use std::collections::HashMap;
use std::io::Read;
use std::time::Instant;

/// Largest request body we read (LinkedIn exports are a few MB).
const MAX_BODY_BYTES: u64 = 20 * 1024 * 1024;

/// Recent activity list length on the dashboard.
const RECENT_ACTIVITY: usize = 4;

pub fn handle(req: Request, db: &Database, cfg: &AppConfig) -> ResultResp {
    handle_at(req, db, cfg, &ViewClock::system())
}

/// Same as [`handle`] with an explicit "now".
pub fn handle_at(mut req: Request, db: &Database, cfg: &AppConfig, clock: &ViewClock) -> ResultResp {
    let started = Instant::now();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let params = parse_query(req.uri().query());

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let owner = cfg.owner_id.as_str();

    let result = match (method.as_str(), segments.as_slice()) {
        ("GET", [""]) | ("GET", ["dashboard"]) => dashboard(db, owner, clock),
        ("GET", ["dashboard", "weekly.json"]) => {
            let records = jobs::list_jobs(db, owner)?;
            json_response(&weekly_summary(&records, clock))
        }

        ("GET", ["applications"]) => applications(db, owner, &params, clock),
        ("GET", ["applications", "export"]) => export(db, owner, &params, clock),
        ("GET", ["board"]) => board(db, owner, &params, cfg, clock),
        ("GET", ["calendar"]) => calendar(db, owner, &params, clock),

        ("GET", ["jobs", "new"]) => html_response(job_form_page(&JobFormVm::blank())),
        ("POST", ["jobs"]) => {
            let form = parse_form(&read_body(&mut req)?);
            save_job(db, owner, None, &form, clock)
        }
        ("GET", ["jobs", id, "edit"]) => {
            let job = jobs::get_job(db, owner, id)?;
            html_response(job_form_page(&JobFormVm::from_record(&job, clock)))
        }
        ("POST", ["jobs", id]) => {
            let form = parse_form(&read_body(&mut req)?);
            save_job(db, owner, Some(*id), &form, clock)
        }
        ("POST", ["jobs", id, "delete"]) => {
            jobs::delete_job(db, owner, id)?;
            tracing::info!(job_id = %id, "job deleted");
            see_other("/applications")
        }

        ("GET", ["import"]) => html_response(import_page(None)),
        ("POST", ["import"]) => {
            let body = read_body(&mut req)?;
            import(db, owner, &body, clock)
        }

        _ => Err(ServerError::NotFound),
    };

    tracing::debug!(
        %method,
        %path,
        ok = result.is_ok(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request handled"
    );
    result
}

fn dashboard(db: &Database, owner: &str, clock: &ViewClock) -> ResultResp {
    let records = jobs::list_jobs(db, owner)?;
    let insights = calculate_insights(&records, clock);
    let weekly = weekly_summary(&records, clock);
    let recs = recommendations(&insights);

    html_response(dashboard_page(&DashboardVm {
        insights: &insights,
        weekly: &weekly,
        recommendations: &recs,
        recent: &records[..records.len().min(RECENT_ACTIVITY)],
        upcoming_interviews: upcoming_interviews(&records, clock),
        clock,
    }))
}

fn applications(
    db: &Database,
    owner: &str,
    params: &HashMap<String, String>,
    clock: &ViewClock,
) -> ResultResp {
    let query = params.get("q").map(String::as_str).unwrap_or("");
    let filter = StatusFilter::parse(params.get("status").map(String::as_str))?;

    let records = jobs::list_jobs(db, owner)?;
    let rows = filter_applications(&records, query, filter);

    html_response(applications_page(&ApplicationsVm {
        query,
        filter,
        counts: status_counts(&records),
        rows: &rows,
        clock,
    }))
}

fn export(
    db: &Database,
    owner: &str,
    params: &HashMap<String, String>,
    clock: &ViewClock,
) -> ResultResp {
    let query = params.get("q").map(String::as_str).unwrap_or("");
    let filter = StatusFilter::parse(params.get("status").map(String::as_str))?;

    let records = jobs::list_jobs(db, owner)?;
    let rows = filter_applications(&records, query, filter);
    tracing::info!(rows = rows.len(), "exporting applications");
    export_applications_xlsx(&rows, clock)
}

fn board(
    db: &Database,
    owner: &str,
    params: &HashMap<String, String>,
    cfg: &AppConfig,
    clock: &ViewClock,
) -> ResultResp {
    let query = params.get("q").map(String::as_str).unwrap_or("");
    let limit = match params.get("limit").map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ServerError::BadRequest(format!("invalid limit '{raw}'")))?
            .max(1),
        None => cfg.board_page,
    };

    let records = jobs::list_jobs(db, owner)?;
    html_response(board_page(&partition(&records, query, limit, clock), cfg.board_page))
}

fn calendar(
    db: &Database,
    owner: &str,
    params: &HashMap<String, String>,
    clock: &ViewClock,
) -> ResultResp {
    let today = clock.today();
    let year = int_param(params, "year")?.unwrap_or(today.year());
    let month = int_param(params, "month")?.unwrap_or(today.month());

    let records = jobs::list_jobs(db, owner)?;
    let grid = build_calendar(&records, year, month, clock)
        .ok_or_else(|| ServerError::BadRequest(format!("no calendar for {year}-{month}")))?;

    html_response(calendar_page(&grid, upcoming_interviews(&records, clock)))
}

/// Creates (`id == None`) or updates a job from a submitted form.
/// Validation failures re-render the form with a 400.
fn save_job(
    db: &Database,
    owner: &str,
    id: Option<&str>,
    form: &HashMap<String, String>,
    clock: &ViewClock,
) -> ResultResp {
    // Make sure the target exists before validating, so a bad id is a 404.
    if let Some(id) = id {
        jobs::get_job(db, owner, id)?;
    }

    let draft = match draft_from_form(form, clock) {
        Ok(draft) => draft,
        Err(ServerError::BadRequest(msg)) => {
            tracing::warn!(error = %msg, "job form rejected");
            let mut vm = form_vm(form);
            vm.id = id.map(str::to_string);
            vm.error = Some(msg);
            return html_response_with_status(400, job_form_page(&vm));
        }
        Err(e) => return Err(e),
    };

    match id {
        Some(id) => {
            jobs::update_job(db, owner, id, &draft, clock.now_utc())?;
            tracing::info!(job_id = %id, status = %draft.status, "job updated");
        }
        None => {
            let id = jobs::insert_job(db, owner, &draft, clock.now_utc())?;
            tracing::info!(job_id = %id, status = %draft.status, "job created");
        }
    }
    see_other("/applications")
}

fn import(db: &Database, owner: &str, body: &[u8], clock: &ViewClock) -> ResultResp {
    if body.is_empty() {
        return Err(ServerError::ImportError("No file uploaded.".into()));
    }

    let batch = parse_upload(body, clock)?;
    if batch.drafts.is_empty() {
        return Err(ServerError::ImportError(
            "The CSV file did not contain any new job applications.".into(),
        ));
    }

    let imported = jobs::insert_jobs(db, owner, &batch.drafts, clock.now_utc())?;
    tracing::info!(imported, skipped = batch.skipped, "linkedin import finished");

    html_response(import_page(Some(&ImportSummary {
        imported,
        skipped: batch.skipped,
    })))
}

fn field<'a>(form: &'a HashMap<String, String>, name: &str) -> &'a str {
    form.get(name).map(String::as_str).unwrap_or("")
}

fn draft_from_form(form: &HashMap<String, String>, clock: &ViewClock) -> Result<JobDraft, ServerError> {
    let date = |name: &str| -> Result<_, ServerError> {
        let raw = field(form, name).trim();
        if raw.is_empty() {
            return Ok(None);
        }
        clock
            .parse_local(raw)
            .map(Some)
            .ok_or_else(|| ServerError::BadRequest(format!("invalid {} '{raw}'", name.replace('_', " "))))
    };

    Ok(JobDraft::from_parts(
        field(form, "company"),
        field(form, "role"),
        field(form, "status"),
        Some(field(form, "location")),
        Some(field(form, "salary")),
        Some(field(form, "url")),
        Some(field(form, "notes")),
    )?
    .with_dates(date("applied_date")?, date("interview_date")?))
}

fn form_vm(form: &HashMap<String, String>) -> JobFormVm {
    let value = |name: &str| field(form, name).to_string();
    JobFormVm {
        id: None,
        company: value("company"),
        role: value("role"),
        status: value("status"),
        location: value("location"),
        salary: value("salary"),
        url: value("url"),
        notes: value("notes"),
        applied_date: value("applied_date"),
        interview_date: value("interview_date"),
        error: None,
    }
}

fn int_param<T: std::str::FromStr>(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<Option<T>, ServerError> {
    match params.get(name).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid {name} '{raw}'"))),
        None => Ok(None),
    }
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read request body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(buf)
}

fn parse_form(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

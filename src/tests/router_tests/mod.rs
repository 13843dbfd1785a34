mod board_tests;
mod calendar_tests;
mod dashboard_tests;
mod import_tests;
mod jobs_tests;

use crate::config::AppConfig;
use crate::db::{jobs, Database};
use crate::domain::clock::test_support::clock_at;
use crate::domain::{JobDraft, ViewClock};
use crate::errors::ServerError;
use crate::router::handle_at;
use crate::tests::utils::test_config;
use astra::{Request, Response};
use chrono::{DateTime, Utc};

/// Wednesday 2024-03-20 12:00 UTC.
pub(crate) fn clock() -> ViewClock {
    clock_at(2024, 3, 20, 12)
}

pub(crate) fn send(req: Request, db: &Database) -> Result<Response, ServerError> {
    let cfg: AppConfig = test_config();
    handle_at(req, db, &cfg, &clock())
}

/// Inserts a job for the test owner and returns its id.
pub(crate) fn seed(
    db: &Database,
    company: &str,
    role: &str,
    status: &str,
    applied: Option<DateTime<Utc>>,
    interview: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
) -> String {
    let draft = JobDraft::from_parts(company, role, status, None, None, None, None)
        .unwrap()
        .with_dates(applied, interview);
    jobs::insert_job(db, &test_config().owner_id, &draft, created_at).unwrap()
}

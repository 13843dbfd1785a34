// src/db/jobs.rs
use crate::db::connection::Database;
use crate::domain::{JobDraft, JobRecord};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const JOB_COLUMNS: &str = r#"
    id, user_id, company, role, status, location, salary, url, notes,
    applied_date, interview_date, created_at, updated_at
"#;

fn job_from_row(row: &Row<'_>) -> rusqlite::Result<JobRecord> {
    Ok(JobRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        company: row.get(2)?,
        role: row.get(3)?,
        status: row.get(4)?,
        location: row.get(5)?,
        salary: row.get(6)?,
        url: row.get(7)?,
        notes: row.get(8)?,
        applied_date: row.get(9)?,
        interview_date: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

/// Snapshot of a user's jobs, newest first.
pub fn list_jobs(db: &Database, user_id: &str) -> Result<Vec<JobRecord>, ServerError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE user_id = ?1 ORDER BY created_at DESC, id"
        ))?;

        let rows = stmt.query_map(params![user_id], job_from_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })
}

pub fn get_job(db: &Database, user_id: &str, id: &str) -> Result<JobRecord, ServerError> {
    db.with_conn(|conn| {
        conn.query_row(
            &format!("SELECT {JOB_COLUMNS} FROM jobs WHERE user_id = ?1 AND id = ?2"),
            params![user_id, id],
            job_from_row,
        )
        .optional()?
        .ok_or(ServerError::NotFound)
    })
}

fn insert_one(
    conn: &Connection,
    user_id: &str,
    draft: &JobDraft,
    now: DateTime<Utc>,
) -> Result<String, ServerError> {
    let id = Uuid::new_v4().to_string();
    conn.execute(
        r#"
        INSERT INTO jobs (
            id, user_id, company, role, status, location, salary, url, notes,
            applied_date, interview_date, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
        "#,
        params![
            id,
            user_id,
            draft.company,
            draft.role,
            draft.status.as_str(),
            draft.location,
            draft.salary,
            draft.url,
            draft.notes,
            draft.applied_date,
            draft.interview_date,
            now,
            now,
        ],
    )?;
    Ok(id)
}

/// Inserts a job and returns its new id.
pub fn insert_job(
    db: &Database,
    user_id: &str,
    draft: &JobDraft,
    now: DateTime<Utc>,
) -> Result<String, ServerError> {
    db.with_conn(|conn| insert_one(conn, user_id, draft, now))
}

/// Inserts every draft or none of them.
pub fn insert_jobs(
    db: &Database,
    user_id: &str,
    drafts: &[JobDraft],
    now: DateTime<Utc>,
) -> Result<usize, ServerError> {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;
        for draft in drafts {
            insert_one(&tx, user_id, draft, now)?;
        }
        tx.commit()?;
        Ok(drafts.len())
    })
}

/// Replaces the editable fields of a job. `created_at` never changes.
pub fn update_job(
    db: &Database,
    user_id: &str,
    id: &str,
    draft: &JobDraft,
    now: DateTime<Utc>,
) -> Result<(), ServerError> {
    let changed = db.with_conn(|conn| {
        Ok(conn.execute(
            r#"
            UPDATE jobs SET
                company = ?1, role = ?2, status = ?3, location = ?4, salary = ?5,
                url = ?6, notes = ?7, applied_date = ?8, interview_date = ?9,
                updated_at = ?10
            WHERE user_id = ?11 AND id = ?12
            "#,
            params![
                draft.company,
                draft.role,
                draft.status.as_str(),
                draft.location,
                draft.salary,
                draft.url,
                draft.notes,
                draft.applied_date,
                draft.interview_date,
                now,
                user_id,
                id,
            ],
        )?)
    })?;

    if changed == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

pub fn delete_job(db: &Database, user_id: &str, id: &str) -> Result<(), ServerError> {
    let deleted = db.with_conn(|conn| {
        Ok(conn.execute(
            "DELETE FROM jobs WHERE user_id = ?1 AND id = ?2",
            params![user_id, id],
        )?)
    })?;

    if deleted == 0 {
        return Err(ServerError::NotFound);
    }
    Ok(())
}

use super::{seed, send};
use crate::db::jobs;
use crate::domain::clock::test_support::utc;
use crate::errors::ServerError;
use crate::tests::utils::{body_bytes, body_string, get, init_test_db, post_form, test_config};

fn owner() -> String {
    test_config().owner_id
}

#[test]
fn create_job_redirects_and_lists() {
    let db = init_test_db();

    let resp = send(
        post_form(
            "/jobs",
            "company=Acme+Corp&role=Platform+Engineer&status=applied&location=Remote\
             &salary=&url=https%3A%2F%2Facme.example%2Fjobs%2F1&notes=&applied_date=2024-03-18T10%3A30\
             &interview_date=",
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/applications");

    let stored = jobs::list_jobs(&db, &owner()).unwrap();
    assert_eq!(stored.len(), 1);
    let job = &stored[0];
    assert_eq!(job.company, "Acme Corp");
    assert_eq!(job.status, "applied");
    assert_eq!(job.location.as_deref(), Some("Remote"));
    assert_eq!(job.salary, None);
    assert_eq!(job.applied_date, Some(utc(2024, 3, 18, 10) + chrono::Duration::minutes(30)));
    assert_eq!(job.created_at, utc(2024, 3, 20, 12));

    let mut page = send(get("/applications"), &db).unwrap();
    let body = body_string(&mut page);
    assert!(body.contains("Acme Corp"));
    assert!(body.contains("Platform Engineer"));
    assert!(body.contains("All (1)"));
    assert!(body.contains("Applied (1)"));
}

#[test]
fn invalid_form_is_rerendered_with_400() {
    let db = init_test_db();

    let mut resp = send(
        post_form("/jobs", "company=Acme&role=&status=applied"),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
    let body = body_string(&mut resp);
    assert!(body.contains("role is required"));
    assert!(body.contains("value=\"Acme\""));
    assert!(jobs::list_jobs(&db, &owner()).unwrap().is_empty());

    let resp = send(
        post_form("/jobs", "company=Acme&role=Dev&status=applied&url=ftp%3A%2F%2Fx"),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);

    let resp = send(
        post_form("/jobs", "company=Acme&role=Dev&status=applied&applied_date=someday"),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 400);
}

#[test]
fn edit_update_and_delete() {
    let db = init_test_db();
    let id = seed(&db, "Acme", "Dev", "applied", None, None, utc(2024, 3, 1, 9));

    let mut edit = send(get(&format!("/jobs/{id}/edit")), &db).unwrap();
    assert_eq!(edit.status(), 200);
    assert!(body_string(&mut edit).contains("Edit application"));

    let resp = send(
        post_form(
            &format!("/jobs/{id}"),
            "company=Acme&role=Dev&status=interviewing&interview_date=2024-03-22T14%3A00",
        ),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 302);

    let job = jobs::get_job(&db, &owner(), &id).unwrap();
    assert_eq!(job.status, "interviewing");
    assert_eq!(job.interview_date, Some(utc(2024, 3, 22, 14)));
    assert_eq!(job.created_at, utc(2024, 3, 1, 9));

    let resp = send(post_form(&format!("/jobs/{id}/delete"), ""), &db).unwrap();
    assert_eq!(resp.status(), 302);
    assert!(jobs::list_jobs(&db, &owner()).unwrap().is_empty());

    assert!(matches!(
        send(post_form(&format!("/jobs/{id}/delete"), ""), &db),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(
        send(get(&format!("/jobs/{id}/edit")), &db),
        Err(ServerError::NotFound)
    ));
}

#[test]
fn applications_filter_by_text_and_status() {
    let db = init_test_db();
    seed(&db, "Acme", "Backend Engineer", "applied", None, None, utc(2024, 3, 1, 9));
    seed(&db, "Globex", "Frontend Engineer", "offer", None, None, utc(2024, 3, 2, 9));
    seed(&db, "Initech", "Analyst", "applied", None, None, utc(2024, 3, 3, 9));

    let mut resp = send(get("/applications?q=engineer&status=applied"), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Acme"));
    assert!(!body.contains("Globex</"));
    assert!(!body.contains("Initech</"));
    // Counts cover the whole snapshot.
    assert!(body.contains("All (3)"));
    assert!(body.contains("Offer (1)"));

    assert!(matches!(
        send(get("/applications?status=ghosted"), &db),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn export_returns_a_workbook() {
    let db = init_test_db();
    seed(&db, "Acme", "Dev", "applied", Some(utc(2024, 3, 18, 9)), None, utc(2024, 3, 18, 9));

    let mut resp = send(get("/applications/export?status=all"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"applications_2024-03-20.xlsx\""
    );
    assert!(body_bytes(&mut resp).starts_with(b"PK"));
}

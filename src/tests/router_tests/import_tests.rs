use super::send;
use crate::db::jobs;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use astra::Response;
use crate::tests::utils::{body_string, get, init_test_db, post_bytes, test_config};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

const CSV: &str = "Application Date,Contact Email,Contact Phone Number,Company Name,Job Title,Job URL,Resume Name,Question And Answers\n";

fn export_zip(csv: &str) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut w = zip::ZipWriter::new(&mut buf);
        w.start_file("Jobs/Job Applications.csv", SimpleFileOptions::default())
            .unwrap();
        w.write_all(b"unrelated").unwrap();
        w.start_file("Jobs/Applied_Jobs.csv", SimpleFileOptions::default())
            .unwrap();
        w.write_all(csv.as_bytes()).unwrap();
        w.finish().unwrap();
    }
    buf.into_inner()
}

#[test]
fn import_page_renders() {
    let db = init_test_db();
    let mut resp = send(get("/import"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("Import from LinkedIn"));
}

#[test]
fn zip_upload_inserts_applied_jobs() {
    let db = init_test_db();
    let csv = format!(
        "{CSV}\"3/12/24, 9:15 AM\",,,Acme,Data Engineer,,,\n\
         \"3/14/24, 4:02 PM\",,,Globex,,,,\n\
         \"3/15/24, 11:00 AM\",,,Initech,Analyst,,,\n"
    );

    let mut resp = send(post_bytes("/import", export_zip(&csv)), &db).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Imported <strong>2</strong> applications"));
    assert!(body.contains("skipped 1 rows"));

    let stored = jobs::list_jobs(&db, &test_config().owner_id).unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|j| j.status == "applied"));
    assert!(stored.iter().all(|j| j.applied_date.is_some()));
}

#[test]
fn raw_csv_upload_is_accepted() {
    let db = init_test_db();
    let csv = format!("{CSV}2024-03-12,,,Acme,Data Engineer,,,\n");

    let resp = send(post_bytes("/import", csv.into_bytes()), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(jobs::list_jobs(&db, &test_config().owner_id).unwrap().len(), 1);
}

#[test]
fn empty_or_useless_uploads_are_rejected() {
    let db = init_test_db();

    assert!(matches!(
        send(post_bytes("/import", Vec::new()), &db),
        Err(ServerError::ImportError(_))
    ));

    let only_blank_rows = format!("{CSV},,,,,,,\n");
    match send(post_bytes("/import", export_zip(&only_blank_rows)), &db) {
        Err(ServerError::ImportError(msg)) => {
            assert_eq!(msg, "The CSV file did not contain any new job applications.")
        }
        other => panic!("expected import error, got {:?}", other.map(|r| r.status())),
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut w = zip::ZipWriter::new(&mut buf);
        w.start_file("Connections.csv", SimpleFileOptions::default()).unwrap();
        w.write_all(b"First Name\nAda\n").unwrap();
        w.finish().unwrap();
    }
    assert!(matches!(
        send(post_bytes("/import", buf.into_inner()), &db),
        Err(ServerError::ImportError(msg)) if msg.contains("Applied_Jobs.csv not found")
    ));

    assert!(jobs::list_jobs(&db, &test_config().owner_id).unwrap().is_empty());
}

/// The page the server sends for a rejected request.
fn rendered_error(result: Result<Response, ServerError>) -> Response {
    match result {
        Ok(resp) => panic!("expected a rejection, got {}", resp.status()),
        Err(err) => error_to_response(err),
    }
}

#[test]
fn failed_import_page_carries_the_reason() {
    let db = init_test_db();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut w = zip::ZipWriter::new(&mut buf);
        w.start_file("Connections.csv", SimpleFileOptions::default()).unwrap();
        w.write_all(b"First Name\nAda\n").unwrap();
        w.finish().unwrap();
    }
    let mut resp = rendered_error(send(post_bytes("/import", buf.into_inner()), &db));
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("Applied_Jobs.csv not found in the ZIP file."));

    let mut resp = rendered_error(send(post_bytes("/import", export_zip(&format!("{CSV},,,,,,,\n"))), &db));
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp)
        .contains("The CSV file did not contain any new job applications."));
}

#[test]
fn import_script_shows_server_response_on_failure() {
    let db = init_test_db();
    let mut resp = send(get("/import"), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("document.write(await resp.text())"));
    assert!(!body.contains("resp.ok"));
}

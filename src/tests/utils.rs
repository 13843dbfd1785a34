use crate::config::AppConfig;
use crate::db::connection::{init_db, Database};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use uuid::Uuid;

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!("job_tracker_test_{}.sqlite", Uuid::new_v4()));
    let db = Database::new(path.to_string_lossy().into_owned());

    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

/// Defaults, with the owner every test request acts as.
pub fn test_config() -> AppConfig {
    AppConfig {
        owner_id: "tester".into(),
        ..AppConfig::default()
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn post_bytes(uri: &str, bytes: Vec<u8>) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/octet-stream")
        .body(Body::from(bytes))
        .unwrap()
}

pub fn body_bytes(resp: &mut Response) -> Vec<u8> {
    let mut buf = Vec::new();
    resp.body_mut().reader().read_to_end(&mut buf).unwrap();
    buf
}

pub fn body_string(resp: &mut Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

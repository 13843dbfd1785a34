use super::{seed, send};
use crate::domain::clock::test_support::utc;
use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn defaults_to_the_current_month() {
    let db = init_test_db();

    let mut resp = send(get("/calendar"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("March 2024"));
    assert!(body.contains("year=2024&amp;month=2"));
    assert!(body.contains("year=2024&amp;month=4"));
    assert_eq!(body.matches("<td class=\"day").count(), 42);
}

#[test]
fn shows_interview_and_applied_events() {
    let db = init_test_db();
    seed(&db, "Acme", "Backend Engineer", "interviewing", None, Some(utc(2024, 3, 15, 14)), utc(2024, 3, 1, 9));
    seed(&db, "Globex", "SRE", "applied", Some(utc(2024, 3, 4, 9)), None, utc(2024, 3, 4, 9));
    // Applied date but no longer `applied`: no event.
    seed(&db, "Initech", "Analyst", "rejected", Some(utc(2024, 3, 5, 9)), None, utc(2024, 3, 5, 9));

    let mut resp = send(get("/calendar?year=2024&month=3"), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Backend Engineer · Acme"));
    assert!(body.contains("Applied: SRE · Globex"));
    assert!(!body.contains("Initech"));
    assert!(body.contains("1 interviews and 1 applications shown"));
}

#[test]
fn rejects_invalid_month() {
    let db = init_test_db();
    assert!(matches!(
        send(get("/calendar?year=2024&month=13"), &db),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        send(get("/calendar?month=march"), &db),
        Err(ServerError::BadRequest(_))
    ));
    // Valid month, but the six-week grid would leave the supported date range.
    assert!(matches!(
        send(get("/calendar?year=262142&month=12"), &db),
        Err(ServerError::BadRequest(_))
    ));
}

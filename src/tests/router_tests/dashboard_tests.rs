use super::{seed, send};
use crate::domain::clock::test_support::utc;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn empty_dashboard_renders() {
    let db = init_test_db();

    let mut resp = send(get("/"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Dashboard"));
    assert!(body.contains("No applications yet."));
    assert!(body.contains("No applications yet this week."));
}

#[test]
fn dashboard_shows_counts_and_recent_activity() {
    let db = init_test_db();
    seed(&db, "Acme", "Backend Engineer", "interviewing", None, Some(utc(2024, 3, 25, 15)), utc(2024, 3, 18, 9));
    seed(&db, "Globex", "SRE", "applied", Some(utc(2024, 3, 19, 10)), None, utc(2024, 3, 19, 10));

    let mut resp = send(get("/dashboard"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Acme"));
    assert!(body.contains("Globex"));
    assert!(body.contains("1 upcoming"));
    // 1 of 2 records has heard back.
    assert!(body.contains("50.0%"));
}

#[test]
fn weekly_json_has_seven_buckets() {
    let db = init_test_db();
    // Monday and Tuesday of the current week, plus one the week before.
    seed(&db, "A", "Dev", "applied", Some(utc(2024, 3, 18, 9)), None, utc(2024, 3, 18, 9));
    seed(&db, "B", "Dev", "applied", Some(utc(2024, 3, 19, 9)), None, utc(2024, 3, 19, 9));
    seed(&db, "C", "Dev", "applied", Some(utc(2024, 3, 12, 9)), None, utc(2024, 3, 12, 9));

    let mut resp = send(get("/dashboard/weekly.json"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(&mut resp)).unwrap();
    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "Mon");
    assert_eq!(days[0]["applications"], 1);
    assert_eq!(days[1]["previous"], 1);
    assert_eq!(json["current_total"], 2);
    assert_eq!(json["previous_total"], 1);
    assert_eq!(json["percentage_change"], 100);
    assert_eq!(json["week_start"], "2024-03-18");
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db();
    assert!(matches!(
        send(get("/nope"), &db),
        Err(crate::errors::ServerError::NotFound)
    ));
}

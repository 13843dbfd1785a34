use super::{seed, send};
use crate::domain::clock::test_support::utc;
use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, init_test_db};

#[test]
fn board_groups_by_status_and_drops_unknown() {
    let db = init_test_db();
    seed(&db, "Acme", "Dev", "applied", Some(utc(2024, 3, 17, 12)), None, utc(2024, 3, 17, 12));
    let bogus = seed(&db, "Bogus Inc", "Dev", "applied", None, None, utc(2024, 3, 18, 12));
    db.with_conn(|conn| {
        conn.execute("UPDATE jobs SET status = 'ghosted' WHERE id = ?1", [&bogus])?;
        Ok(())
    })
    .unwrap();

    let mut resp = send(get("/board"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    for title in ["To Apply", "Applied", "Interviewing", "Offer", "Rejected"] {
        assert!(body.contains(title), "missing column {title}");
    }
    assert!(body.contains("Acme"));
    assert!(body.contains("Applied 3 days ago"));
    assert!(!body.contains("Bogus Inc"));
    assert!(body.contains("1 matching"));
}

#[test]
fn show_more_raises_the_limit() {
    let db = init_test_db();
    for i in 0..6 {
        seed(&db, &format!("Company {i}"), "Dev", "applied", None, None, utc(2024, 3, 1, i));
    }

    let mut resp = send(get("/board"), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("+2 more"));
    assert!(body.contains("limit=8"));
    assert!(body.contains("Show all"));
    assert!(body.contains("limit=6"));

    let mut resp = send(get("/board?limit=8"), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(!body.contains("more</p>"));
    assert!(!body.contains("Show more"));

    assert!(matches!(
        send(get("/board?limit=lots"), &db),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn board_search_is_case_insensitive() {
    let db = init_test_db();
    seed(&db, "Acme", "Backend Engineer", "offer", None, None, utc(2024, 3, 1, 9));
    seed(&db, "Globex", "Designer", "offer", None, None, utc(2024, 3, 2, 9));

    let mut resp = send(get("/board?q=BACKEND"), &db).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Acme"));
    assert!(!body.contains("Globex"));
}

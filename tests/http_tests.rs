//! Handler-level tests: each handler is called directly with a seeded
//! database behind the shared state, sidestepping the TCP listener.

mod common;

use axum::extract::State;
use chrono::{FixedOffset, Utc};
use common::{init_schema, seed_scan, seed_worker, temp_db};
use gearcheck::core::compliance::MatchPolicy;
use gearcheck::http::AppState;
use gearcheck::http::handlers;
use gearcheck::models::scan::NewScan;
use gearcheck::models::worker::NewWorker;

fn state(db_path: &str) -> AppState {
    AppState {
        db_path: db_path.to_string(),
        offset: FixedOffset::east_opt(0).unwrap(),
        policy: MatchPolicy::Tag,
    }
}

fn seed_roster(db: &str) -> i64 {
    seed_worker(
        db,
        &NewWorker {
            name: Some("Somsak".to_string()),
            position: Some("fitter".to_string()),
            hat_tag: Some("HAT-1".to_string()),
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn health_answers_ok() {
    assert_eq!(handlers::health().await, "ok");
}

#[tokio::test]
async fn get_all_worker_returns_the_roster() {
    let db = temp_db("http_all");
    init_schema(&db);
    seed_roster(&db);

    let result = handlers::get_all_worker(State(state(&db))).await.unwrap();
    let workers = result.0;
    assert_eq!(workers.len(), 1);
    assert_eq!(workers[0].name.as_deref(), Some("Somsak"));
    assert_eq!(workers[0].hat_tag.as_deref(), Some("HAT-1"));
}

#[tokio::test]
async fn get_today_worker_derives_status_from_todays_scans() {
    let db = temp_db("http_today");
    init_schema(&db);
    let id = seed_roster(&db);
    seed_scan(
        &db,
        &NewScan {
            worker_id: Some(id),
            scan_time: Some(Utc::now()),
            scanned_tag_id: Some("HAT-1".to_string()),
            equipment_label: None,
            source: "device".to_string(),
        },
    );

    let result = handlers::get_today_worker(State(state(&db))).await.unwrap();
    let statuses = result.0;
    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].hat_status);
    assert!(!statuses[0].shirt_status);
    assert!(statuses[0].latest_scan.is_some());
}

#[tokio::test]
async fn get_scan_lists_only_todays_events() {
    let db = temp_db("http_scans");
    init_schema(&db);
    let id = seed_roster(&db);

    seed_scan(
        &db,
        &NewScan {
            worker_id: Some(id),
            scan_time: Some(Utc::now()),
            scanned_tag_id: Some("HAT-1".to_string()),
            equipment_label: None,
            source: "device".to_string(),
        },
    );
    // two days old, must not appear
    seed_scan(
        &db,
        &NewScan {
            worker_id: Some(id),
            scan_time: Some(Utc::now() - chrono::Duration::days(2)),
            scanned_tag_id: Some("HAT-1".to_string()),
            equipment_label: None,
            source: "device".to_string(),
        },
    );

    let result = handlers::get_scan(State(state(&db))).await.unwrap();
    let scans = result.0;
    assert_eq!(scans.len(), 1);
    assert_eq!(scans[0].scanned_tag_id.as_deref(), Some("HAT-1"));
}

#[tokio::test]
async fn errors_become_500_with_json_body() {
    use axum::response::IntoResponse;

    // nonexistent directory forces an open failure
    let bogus = "/nonexistent/dir/gearcheck.sqlite";
    let err = handlers::get_all_worker(State(state(bogus)))
        .await
        .err()
        .expect("open should fail");
    let response = err.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

mod common;

use common::{gc, init_schema, temp_db};
use predicates::prelude::*;

#[test]
fn init_creates_database_and_config() {
    let home = std::env::temp_dir().join(format!("gearcheck_home_{}", std::process::id()));
    std::fs::create_dir_all(&home).unwrap();
    let db = temp_db("init");

    gc().env("HOME", &home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized"));

    assert!(std::path::Path::new(&db).exists());
    assert!(home.join(".gearcheck").join("gearcheck.conf").exists());
}

#[test]
fn enroll_then_workers_lists_the_roster() {
    let db = temp_db("enroll");
    init_schema(&db);

    gc().args([
        "--db", &db, "enroll", "--name", "Somchai", "--position", "welder",
        "--hat-tag", "HAT-001", "--boot-tag", "BOOT-001",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Enrolled worker 1"));

    gc().args(["--db", &db, "workers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Somchai"))
        .stdout(predicate::str::contains("HAT-001"))
        .stdout(predicate::str::contains("welder"));
}

#[test]
fn record_then_scans_lists_the_day() {
    let db = temp_db("record");
    init_schema(&db);

    gc().args([
        "--db", &db, "enroll", "--name", "Nok", "--hat-tag", "H-9",
    ])
    .assert()
    .success();

    gc().args([
        "--db", &db, "record", "1", "--tag", "H-9", "--at", "2026-01-15 08:30",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Recorded scan 1 for worker 1"));

    gc().args(["--db", &db, "scans", "--date", "2026-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H-9"))
        .stdout(predicate::str::contains("2026-01-15 08:30"));

    // a different day is empty
    gc().args(["--db", &db, "scans", "--date", "2026-01-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scans on 2026-01-16"));
}

#[test]
fn status_json_reports_tag_matched_slot() {
    let db = temp_db("status_json");
    init_schema(&db);

    gc().args([
        "--db", &db, "enroll", "--name", "Ploy", "--hat-tag", "HAT-7", "--glove-tag", "GLV-7",
    ])
    .assert()
    .success();

    gc().args([
        "--db", &db, "record", "1", "--tag", "HAT-7", "--at", "2026-02-01 07:45",
    ])
    .assert()
    .success();

    gc().args(["--db", &db, "status", "--date", "2026-02-01", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hat_status\": true"))
        .stdout(predicate::str::contains("\"glove_status\": false"))
        .stdout(predicate::str::contains("\"name\": \"Ploy\""));
}

#[test]
fn status_policies_diverge_on_mismatched_tag_with_label() {
    let db = temp_db("policies");
    init_schema(&db);

    gc().args(["--db", &db, "enroll", "--name", "Chai", "--glove-tag", "GLV-1"])
        .assert()
        .success();

    // Tag read does not match any assignment, but the device asserted Glove
    gc().args([
        "--db", &db, "record", "1", "--tag", "WRONG", "--label", "Glove",
        "--at", "2026-02-01 09:00",
    ])
    .assert()
    .success();

    gc().args([
        "--db", &db, "status", "--date", "2026-02-01", "--policy", "tag", "--json",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"glove_status\": false"));

    gc().args([
        "--db", &db, "status", "--date", "2026-02-01", "--policy", "label", "--json",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"glove_status\": true"));
}

#[test]
fn record_for_unknown_worker_warns_but_stores() {
    let db = temp_db("unknown");
    init_schema(&db);

    gc().args(["--db", &db, "record", "42", "--label", "Hat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not enrolled"))
        .stdout(predicate::str::contains("Recorded scan 1 for worker 42"));
}

#[test]
fn status_rejects_malformed_date() {
    let db = temp_db("bad_date");
    init_schema(&db);

    gc().args(["--db", &db, "status", "--date", "01/15/2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn status_rejects_unknown_policy() {
    let db = temp_db("bad_policy");
    init_schema(&db);

    gc().args(["--db", &db, "status", "--policy", "strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid matching policy"));
}

#[test]
fn malformed_scan_time_is_tolerated() {
    let db = temp_db("badtime");
    init_schema(&db);

    gc().args(["--db", &db, "enroll", "--name", "Tik", "--hat-tag", "H1"])
        .assert()
        .success();

    // raw row with unparseable scan_time that still sorts inside the
    // 2026-01-15 window for the default +07:00 offset
    {
        let pool = gearcheck::db::DbPool::new(&db).unwrap();
        pool.conn
            .execute(
                "INSERT INTO scans (worker_id, scan_time, scanned_tag_id, source)
                 VALUES (1, '2026-01-15 12:34:5x', 'H1', 'device')",
                [],
            )
            .unwrap();
    }

    gc().args(["--db", &db, "status", "--date", "2026-01-15", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hat_status\": false"))
        .stdout(predicate::str::contains("\"latest_scan\": null"));
}

#[test]
fn migrate_drops_legacy_status_columns_and_keeps_rows() {
    let db = temp_db("legacy");
    {
        let pool = gearcheck::db::DbPool::new(&db).unwrap();
        pool.conn
            .execute_batch(
                "CREATE TABLE workers (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT, position TEXT,
                    hat_tag TEXT, shirt_tag TEXT, boot_tag TEXT, glove_tag TEXT,
                    hat_status INTEGER, shirt_status INTEGER,
                    boot_status INTEGER, glove_status INTEGER,
                    lastest_scan TEXT,
                    created_at TEXT NOT NULL DEFAULT (datetime('now'))
                 );
                 INSERT INTO workers (name, hat_tag, hat_status)
                 VALUES ('Legacy Worker', 'H1', 1);",
            )
            .unwrap();
    }

    gc().args(["--db", &db, "db", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stored status columns removed"));

    gc().args(["--db", &db, "workers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Legacy Worker"))
        .stdout(predicate::str::contains("H1"));
}

#[test]
fn db_info_and_check_report() {
    let db = temp_db("dbinfo");
    init_schema(&db);

    gc().args(["--db", &db, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"));

    gc().args(["--db", &db, "db", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("workers: 0"))
        .stdout(predicate::str::contains("scans:   0"));
}

#[test]
fn log_records_lifecycle_operations() {
    let db = temp_db("log");
    init_schema(&db);

    gc().args(["--db", &db, "enroll", "--name", "Dao"])
        .assert()
        .success();

    gc().args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migration_applied"))
        .stdout(predicate::str::contains("enroll"));
}

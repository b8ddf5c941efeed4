#![allow(dead_code)]

use assert_cmd::Command;
use gearcheck::db::{DbPool, init_db};
use gearcheck::models::scan::NewScan;
use gearcheck::models::worker::NewWorker;
use std::path::PathBuf;

/// Command builder for the gearcheck binary.
pub fn gc() -> Command {
    Command::cargo_bin("gearcheck").unwrap()
}

/// Fresh database path in the temp dir, unique per test name and process.
pub fn temp_db(tag: &str) -> String {
    let mut p: PathBuf = std::env::temp_dir();
    p.push(format!("gearcheck_test_{}_{}.sqlite", tag, std::process::id()));
    let _ = std::fs::remove_file(&p);
    p.to_string_lossy().to_string()
}

/// Create the schema directly, without going through `init` (which would
/// also write a config file under $HOME).
pub fn init_schema(db_path: &str) {
    let pool = DbPool::new(db_path).unwrap();
    init_db(&pool.conn, true).unwrap();
}

pub fn seed_worker(db_path: &str, worker: &NewWorker) -> i64 {
    let pool = DbPool::new(db_path).unwrap();
    gearcheck::db::queries::insert_worker(&pool.conn, worker).unwrap()
}

pub fn seed_scan(db_path: &str, scan: &NewScan) -> i64 {
    let pool = DbPool::new(db_path).unwrap();
    gearcheck::db::queries::insert_scan(&pool.conn, scan).unwrap()
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wq() -> Command {
    cargo_bin_cmd!("workquota")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_workquota.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB schema and register the two users most tests rely on
pub fn init_db(db_path: &str) {
    // init DB (creates tables, runs migrations)
    wq().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wq().args([
        "--db", db_path, "user", "--add", "alice", "--name", "Alice",
    ])
    .assert()
    .success();

    wq().args(["--db", db_path, "user", "--add", "bob", "--name", "Bob"])
        .assert()
        .success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    // one valid 3-day interval and one unvalidated single day for alice
    wq().args([
        "--db",
        db_path,
        "--user",
        "alice",
        "add",
        "2024-01-01",
        "2024-01-03",
        "--location",
        "Farm A",
        "--valid",
    ])
    .assert()
    .success();

    wq().args([
        "--db",
        db_path,
        "--user",
        "alice",
        "add",
        "2024-02-10",
        "2024-02-10",
    ])
    .assert()
    .success();
}

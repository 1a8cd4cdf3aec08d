use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, wq};

fn add_valid_interval(db_path: &str, begin: &str, end: &str) {
    wq().args([
        "--db", db_path, "--user", "alice", "add", begin, end, "--valid",
    ])
    .assert()
    .success();
}

#[test]
fn test_progress_is_additive() {
    let db_path = setup_test_db("progress_additive");
    init_db(&db_path);

    // 3 + 5 valid days
    add_valid_interval(&db_path, "2024-01-01", "2024-01-03");
    add_valid_interval(&db_path, "2024-02-01", "2024-02-05");

    wq().args(["--db", &db_path, "--user", "alice", "progress"])
        .assert()
        .success()
        .stdout(contains("Days worked"))
        .stdout(contains("8"))
        .stdout(contains("80"));
}

#[test]
fn test_invalid_intervals_do_not_count() {
    let db_path = setup_test_db("progress_invalid_excluded");
    init_db(&db_path);

    add_valid_interval(&db_path, "2024-01-01", "2024-01-03");

    // unvalidated interval, must not contribute
    wq().args([
        "--db",
        &db_path,
        "--user",
        "alice",
        "add",
        "2024-03-01",
        "2024-03-20",
    ])
    .assert()
    .success();

    wq().args(["--db", &db_path, "--user", "alice", "progress"])
        .assert()
        .success()
        .stdout(contains("3"))
        .stdout(contains("85"));
}

#[test]
fn test_progress_not_clamped_when_quota_exceeded() {
    let db_path = setup_test_db("progress_exceeded");
    init_db(&db_path);

    // 90 valid days, quota is 88
    add_valid_interval(&db_path, "2024-01-01", "2024-03-30");

    wq().args(["--db", &db_path, "--user", "alice", "progress"])
        .assert()
        .success()
        .stdout(contains("90"))
        .stdout(contains("-2"));
}

#[test]
fn test_progress_is_per_owner() {
    let db_path = setup_test_db("progress_per_owner");
    init_db(&db_path);

    add_valid_interval(&db_path, "2024-01-01", "2024-01-03");

    // bob logged nothing: full quota remaining
    wq().args(["--db", &db_path, "--user", "bob", "progress"])
        .assert()
        .success()
        .stdout(contains("0"))
        .stdout(contains("88"));
}

#[test]
fn test_unmarking_removes_contribution() {
    let db_path = setup_test_db("progress_unmark");
    init_db(&db_path);

    add_valid_interval(&db_path, "2024-01-01", "2024-01-03");

    wq().args([
        "--db", &db_path, "--user", "alice", "mark", "1", "--invalid",
    ])
    .assert()
    .success();

    wq().args(["--db", &db_path, "--user", "alice", "progress"])
        .assert()
        .success()
        .stdout(contains("88"));
}

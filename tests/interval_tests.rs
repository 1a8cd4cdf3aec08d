use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_data, setup_test_db, wq};

#[test]
fn test_add_single_day_counts_one() {
    let db_path = setup_test_db("add_single_day");
    init_db(&db_path);

    wq().args([
        "--db",
        &db_path,
        "--user",
        "alice",
        "add",
        "2024-01-01",
        "2024-01-01",
    ])
    .assert()
    .success()
    .stdout(contains("1 day").and(contains("UNKNOWN")));
}

#[test]
fn test_add_inclusive_range_count() {
    let db_path = setup_test_db("add_inclusive_range");
    init_db(&db_path);

    // 2024-01-01 → 2024-01-03 covers both endpoints
    wq().args([
        "--db",
        &db_path,
        "--user",
        "alice",
        "add",
        "2024-01-01",
        "2024-01-03",
    ])
    .assert()
    .success()
    .stdout(contains("3 days"));
}

#[test]
fn test_add_without_location_stores_unknown() {
    let db_path = setup_test_db("add_unknown_location");
    init_db(&db_path);

    wq().args([
        "--db",
        &db_path,
        "--user",
        "alice",
        "add",
        "2024-03-05",
        "2024-03-07",
    ])
    .assert()
    .success();

    wq().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("UNKNOWN"));
}

#[test]
fn test_add_rejects_malformed_date() {
    let db_path = setup_test_db("add_bad_date");
    init_db(&db_path);

    wq().args([
        "--db",
        &db_path,
        "--user",
        "alice",
        "add",
        "01/05/2024",
        "2024-05-03",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_shows_logged_intervals_in_creation_order() {
    let db_path = setup_test_db("list_creation_order");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-02-10"))
        .stdout(contains("Alice"))
        .stdout(contains("Work that counts:"))
        .stdout(contains("Other work:"));
}

#[test]
fn test_edit_notes_only_keeps_days() {
    let db_path = setup_test_db("edit_notes_only");
    init_db_with_data(&db_path);

    wq().args([
        "--db", &db_path, "--user", "alice", "edit", "1", "--notes", "harvest",
    ])
    .assert()
    .success()
    .stdout(contains("3 days"));

    wq().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("harvest"))
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-01-03"));
}

#[test]
fn test_edit_dates_recomputes_days() {
    let db_path = setup_test_db("edit_recompute_days");
    init_db_with_data(&db_path);

    // extend interval 1 from 3 days to 5
    wq().args([
        "--db",
        &db_path,
        "--user",
        "alice",
        "edit",
        "1",
        "--end",
        "2024-01-05",
    ])
    .assert()
    .success()
    .stdout(contains("5 days"));
}

#[test]
fn test_edit_without_fields_is_rejected() {
    let db_path = setup_test_db("edit_no_fields");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "alice", "edit", "1"])
        .assert()
        .failure()
        .stderr(contains("Nothing to do"));
}

#[test]
fn test_edit_missing_interval_fails() {
    let db_path = setup_test_db("edit_missing");
    init_db(&db_path);

    wq().args([
        "--db", &db_path, "--user", "alice", "edit", "999", "--notes", "x",
    ])
    .assert()
    .failure()
    .stderr(contains("No interval found with id 999"));
}

#[test]
fn test_mark_interval_valid_and_invalid() {
    let db_path = setup_test_db("mark_toggle");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "alice", "mark", "2", "--valid"])
        .assert()
        .success()
        .stdout(contains("marked as valid"));

    wq().args([
        "--db", &db_path, "--user", "alice", "mark", "2", "--invalid",
    ])
    .assert()
    .success()
    .stdout(contains("marked as invalid"));
}

#[test]
fn test_delete_removes_interval() {
    let db_path = setup_test_db("delete_interval");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "alice", "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    // the deleted interval no longer appears
    wq().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("2024-02-10").not());

    // and a second delete of the same id fails
    wq().args(["--db", &db_path, "--user", "alice", "del", "2", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No interval found with id 2"));
}

#[test]
fn test_delete_missing_interval_fails() {
    let db_path = setup_test_db("delete_missing");
    init_db(&db_path);

    wq().args(["--db", &db_path, "--user", "alice", "del", "42", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No interval found with id 42"));
}

#[test]
fn test_two_submissions_get_distinct_ids() {
    let db_path = setup_test_db("distinct_ids");
    init_db(&db_path);

    wq().args([
        "--db",
        &db_path,
        "--user",
        "alice",
        "add",
        "2024-04-01",
        "2024-04-02",
    ])
    .assert()
    .success()
    .stdout(contains("#1"));

    wq().args([
        "--db",
        &db_path,
        "--user",
        "alice",
        "add",
        "2024-04-03",
        "2024-04-04",
    ])
    .assert()
    .success()
    .stdout(contains("#2"));

    wq().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("2024-04-01"))
        .stdout(contains("2024-04-03"));
}

#[test]
fn test_calendar_renders_month_header() {
    let db_path = setup_test_db("calendar_header");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "alice", "calendar", "2024-01"])
        .assert()
        .success()
        .stdout(contains("January 2024"))
        .stdout(contains("Mo Tu We Th Fr Sa Su"));
}

#[test]
fn test_calendar_highlights_every_day_of_span() {
    let db_path = setup_test_db("calendar_span");
    init_db_with_data(&db_path);

    // 2024-01-01 → 2024-01-03 counts toward the quota: all three days
    // render green, both endpoints included. Day 4 does not.
    wq().args(["--db", &db_path, "--user", "alice", "calendar", "2024-01"])
        .assert()
        .success()
        .stdout(contains("\u{1b}[32m 1\u{1b}[0m"))
        .stdout(contains("\u{1b}[32m 2\u{1b}[0m"))
        .stdout(contains("\u{1b}[32m 3\u{1b}[0m"))
        .stdout(contains("\u{1b}[32m 4\u{1b}[0m").not());

    // 2024-02-10 is logged but not validated: yellow, not green
    wq().args(["--db", &db_path, "--user", "alice", "calendar", "2024-02"])
        .assert()
        .success()
        .stdout(contains("\u{1b}[33m10\u{1b}[0m"))
        .stdout(contains("\u{1b}[32m10\u{1b}[0m").not());
}

#[test]
fn test_mutations_append_to_internal_log() {
    let db_path = setup_test_db("internal_log");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "alice", "del", "2", "--yes"])
        .assert()
        .success();

    wq().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("submit"))
        .stdout(contains("Logged 3 day(s) 2024-01-01 → 2024-01-03 for alice"))
        .stdout(contains("delete"))
        .stdout(contains("Deleted interval 2"));
}

use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, temp_out, wq};

#[test]
fn test_export_csv_contains_intervals() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");

    wq().args([
        "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("id,owner,begin,end,days,location,status,notes"));
    assert!(content.contains("2024-01-01"));
    assert!(content.contains("Farm A"));
    assert!(content.contains(",3,"));
}

#[test]
fn test_export_json_contains_intervals() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    wq().args([
        "--db", &db_path, "--user", "alice", "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"owner_id\": \"alice\""));
    assert!(content.contains("\"days\": 3"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "existing").expect("write placeholder");

    wq().args([
        "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));

    // with --force the export goes through
    wq().args([
        "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &out,
        "--force",
    ])
    .assert()
    .success();
}

#[test]
fn test_export_is_caller_scoped() {
    let db_path = setup_test_db("export_caller_scope");
    init_db_with_data(&db_path);

    wq().args([
        "--db",
        &db_path,
        "--user",
        "bob",
        "add",
        "2024-07-01",
        "2024-07-04",
    ])
    .assert()
    .success();

    let out = temp_out("export_caller_scope", "csv");

    wq().args([
        "--db", &db_path, "--user", "alice", "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("alice"));
    assert!(!content.contains("bob"));
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, setup_test_db, wq};

#[test]
fn test_edit_requires_ownership() {
    let db_path = setup_test_db("auth_edit");
    init_db_with_data(&db_path);

    // interval 1 belongs to alice
    wq().args([
        "--db", &db_path, "--user", "bob", "edit", "1", "--notes", "mine now",
    ])
    .assert()
    .failure()
    .stderr(contains("owned by another user"));
}

#[test]
fn test_mark_requires_ownership() {
    let db_path = setup_test_db("auth_mark");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "bob", "mark", "1", "--invalid"])
        .assert()
        .failure()
        .stderr(contains("owned by another user"));
}

#[test]
fn test_delete_requires_ownership() {
    let db_path = setup_test_db("auth_delete");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "bob", "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("owned by another user"));

    // the record survived the rejected delete
    wq().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"));
}

#[test]
fn test_list_is_scoped_to_caller() {
    let db_path = setup_test_db("auth_list_scope");
    init_db_with_data(&db_path);

    wq().args([
        "--db",
        &db_path,
        "--user",
        "bob",
        "add",
        "2024-06-01",
        "2024-06-02",
    ])
    .assert()
    .success();

    // alice does not see bob's interval
    wq().args(["--db", &db_path, "--user", "alice", "list"])
        .assert()
        .success()
        .stdout(contains("2024-06-01").not());

    // bob does not see alice's
    wq().args(["--db", &db_path, "--user", "bob", "list"])
        .assert()
        .success()
        .stdout(contains("2024-06-01"))
        .stdout(contains("2024-01-01").not());
}

#[test]
fn test_public_feed_disabled_by_default() {
    let db_path = setup_test_db("auth_public_feed");
    init_db_with_data(&db_path);

    wq().args(["--db", &db_path, "--user", "alice", "list", "--all"])
        .assert()
        .failure()
        .stderr(contains("shared feed is disabled"));
}

#[test]
fn test_public_feed_enabled_lists_all_owners() {
    let db_path = setup_test_db("auth_public_feed_on");
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

    // point HOME at a config file that opts into the shared feed
    let home = env::temp_dir().join("workquota_feed_home");
    fs::create_dir_all(home.join(".workquota")).unwrap();
    fs::write(
        home.join(".workquota").join("workquota.conf"),
        format!(
            "database: {}\ndefault_user: alice\npublic_feed: true\n",
            db_path
        ),
    )
    .unwrap();

    wq().env("HOME", &home)
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob"))
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-07-01"));
}

#[test]
fn test_unregistered_owner_fails_profile_lookup() {
    let db_path = setup_test_db("auth_missing_profile");

    wq().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // "ghost" has intervals but no profile in the directory
    wq().args([
        "--db",
        &db_path,
        "--user",
        "ghost",
        "add",
        "2024-01-01",
        "2024-01-02",
    ])
    .assert()
    .success();

    wq().args(["--db", &db_path, "--user", "ghost", "list"])
        .assert()
        .failure()
        .stderr(contains("No profile found for user 'ghost'"));
}

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{clock_at, init_site, pc, setup_test_config, setup_test_db, temp_out};

/// Seed two users inside the 2025-08-10 → 2025-08-24 window:
/// ann works two complete days (480 + 540 minutes), bob never clocks out.
fn seed_window(db: &str, cfg: &str) {
    clock_at(db, cfg, "ann@example.com", "Entry", "2025-08-12T13:00:00Z");
    clock_at(db, cfg, "ann@example.com", "Exit", "2025-08-12T21:00:00Z");
    clock_at(db, cfg, "ann@example.com", "Entry", "2025-08-13T13:00:00Z");
    clock_at(db, cfg, "ann@example.com", "Exit", "2025-08-13T22:00:00Z");
    clock_at(db, cfg, "bob@example.com", "Entry", "2025-08-12T13:00:00Z");
}

#[test]
fn report_shows_daily_rows_and_totals() {
    let db = setup_test_db("report_rows");
    let cfg = setup_test_config("report_rows");
    init_site(&db, &cfg);
    seed_window(&db, &cfg);

    pc()
        .args([
            "--db",
            &db,
            "--config",
            &cfg,
            "report",
            "--page",
            "1",
            "--per",
            "1",
            "--at",
            "2025-08-15T12:00:00Z",
        ])
        .assert()
        .success()
        .stdout(contains("Window 2025-08-10 → 2025-08-24"))
        .stdout(contains("ann@example.com"))
        .stdout(contains("08:00"))
        .stdout(contains("09:00"))
        .stdout(contains("MissingExit"))
        .stdout(contains("1020"));
}

#[test]
fn non_admin_report_is_restricted_to_the_caller() {
    let db = setup_test_db("report_self");
    let cfg = setup_test_config("report_self");
    init_site(&db, &cfg);
    seed_window(&db, &cfg);

    pc()
        .args([
            "--db",
            &db,
            "--config",
            &cfg,
            "report",
            "--per",
            "1",
            "--at",
            "2025-08-15T12:00:00Z",
            "--as-user",
            "Bob@Example.com",
            "--filter",
            "ann",
        ])
        .assert()
        .success()
        .stdout(contains("bob@example.com"))
        // the text filter is admin-only and must be ignored here
        .stdout(contains("ann@example.com").not());
}

#[test]
fn admin_filter_narrows_the_report() {
    let db = setup_test_db("report_filter");
    let cfg = setup_test_config("report_filter");
    init_site(&db, &cfg);
    seed_window(&db, &cfg);

    pc()
        .args([
            "--db",
            &db,
            "--config",
            &cfg,
            "report",
            "--per",
            "1",
            "--at",
            "2025-08-15T12:00:00Z",
            "--filter",
            "bob",
        ])
        .assert()
        .success()
        .stdout(contains("bob@example.com"))
        .stdout(contains("ann@example.com").not());
}

#[test]
fn csv_export_writes_daily_rows() {
    let db = setup_test_db("export_csv");
    let cfg = setup_test_config("export_csv");
    let out = temp_out("export_csv", "csv");
    init_site(&db, &cfg);
    seed_window(&db, &cfg);

    pc()
        .args([
            "--db",
            &db,
            "--config",
            &cfg,
            "export",
            "--file",
            &out,
            "--start",
            "2025-08-10",
            "--end",
            "2025-08-24",
        ])
        .assert()
        .success()
        .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("User,Email,Day,Entry(UTC)"));
    assert!(content.contains("ann@example.com,2025-08-12"));
    assert!(content.contains("480"));
    assert!(content.contains("MissingExit"));
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db = setup_test_db("export_overwrite");
    let cfg = setup_test_config("export_overwrite");
    let out = temp_out("export_overwrite", "csv");
    init_site(&db, &cfg);
    seed_window(&db, &cfg);

    let export_args: [&str; 11] = [
        "--db",
        &db,
        "--config",
        &cfg,
        "export",
        "--file",
        &out,
        "--start",
        "2025-08-10",
        "--end",
        "2025-08-24",
    ];

    pc().args(export_args).assert().success();
    pc().args(export_args)
        .assert()
        .failure()
        .stderr(contains("already exists"));
    pc().args(export_args)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn export_can_be_restricted_to_one_user() {
    let db = setup_test_db("export_user");
    let cfg = setup_test_config("export_user");
    let out = temp_out("export_user", "csv");
    init_site(&db, &cfg);
    seed_window(&db, &cfg);

    pc()
        .args([
            "--db",
            &db,
            "--config",
            &cfg,
            "export",
            "--file",
            &out,
            "--start",
            "2025-08-10",
            "--end",
            "2025-08-24",
            "--user",
            "ann@example.com",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("ann@example.com"));
    assert!(!content.contains("bob@example.com"));
}

#[test]
fn json_export_writes_daily_rows() {
    let db = setup_test_db("export_json");
    let cfg = setup_test_config("export_json");
    let out = temp_out("export_json", "json");
    init_site(&db, &cfg);
    seed_window(&db, &cfg);

    pc()
        .args([
            "--db",
            &db,
            "--config",
            &cfg,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--start",
            "2025-08-10",
            "--end",
            "2025-08-24",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 3); // two ann days + one bob day

    let ann_12 = rows
        .iter()
        .find(|r| r["email"] == "ann@example.com" && r["day"] == "2025-08-12")
        .expect("ann row");
    assert_eq!(ann_12["minutes"], 480);
}

#[test]
fn audit_log_records_operations() {
    let db = setup_test_db("audit_log");
    let cfg = setup_test_config("audit_log");
    init_site(&db, &cfg);
    clock_at(&db, &cfg, "ann@example.com", "Entry", "2025-08-12T13:00:00Z");

    pc()
        .args(["--db", &db, "--config", &cfg, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("clock"))
        .stdout(contains("Entry recorded"));
}

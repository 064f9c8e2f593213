#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique test config path inside the system temp dir and remove any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Downtown Toronto test site.
pub const SITE_LAT: &str = "43.6532";
pub const SITE_LON: &str = "-79.3832";

/// Initialize config + DB with the standard test site: 100 m fence,
/// 50 m accuracy limit, America/Toronto, anchor 2025-07-27.
pub fn init_site(db_path: &str, cfg_path: &str) {
    pc()
        .args([
            "--db",
            db_path,
            "--config",
            cfg_path,
            "init",
            "--site-lat",
            SITE_LAT,
            "--site-lon",
            SITE_LON,
            "--fence",
            "100",
            "--min-accuracy",
            "50",
            "--zone",
            "America/Toronto",
            "--anchor",
            "2025-07-27",
        ])
        .assert()
        .success();
}

/// Record one on-site clock event at a fixed instant.
pub fn clock_at(db_path: &str, cfg_path: &str, user: &str, action: &str, at: &str) {
    pc()
        .args([
            "--db", db_path, "--config", cfg_path, "clock", action, "--user", user, "--lat",
            SITE_LAT, "--lon", SITE_LON, "--acc", "10", "--at", at,
        ])
        .assert()
        .success();
}

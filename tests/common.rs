#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so no real
/// configuration file is picked up.
pub fn rpz() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rpresenze_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rpresenze");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique data file path inside the system temp dir and remove any
/// existing file
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpresenze.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the data file and record week 2025-W02 (Mon 6 - Fri 10 Jan):
/// Monday +30, Tuesday +15, Wednesday open, Thursday even, Friday open at
/// 07:50.
pub fn init_data_with_week(data_path: &str) {
    rpz()
        .args(["--data", data_path, "--test", "init"])
        .assert()
        .success();

    for (date, start, end) in [
        ("2025-01-06", "08:00", Some("16:30")),
        ("2025-01-07", "08:00", Some("16:15")),
        ("2025-01-08", "08:00", None),
        ("2025-01-09", "08:00", Some("16:00")),
        ("2025-01-10", "07:50", None),
    ] {
        let mut args = vec!["--data", data_path, "add", date, "--in", start];
        if let Some(e) = end {
            args.extend(["--out", e]);
        }
        rpz().args(&args).assert().success();
    }
}

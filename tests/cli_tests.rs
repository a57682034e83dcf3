use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_data_with_week, rpz, setup_test_data, temp_out};

#[test]
fn test_init_creates_empty_data_file() {
    let data = setup_test_data("cli_init");

    rpz()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Data file"));

    let content = std::fs::read_to_string(&data).unwrap();
    assert_eq!(content.trim(), "{}");
}

#[test]
fn test_add_and_show_day() {
    let data = setup_test_data("cli_add_day");

    rpz()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    rpz()
        .args([
            "--data",
            &data,
            "add",
            "2025-01-07",
            "--in",
            "08:00",
            "--out",
            "17:00",
        ])
        .assert()
        .success()
        .stdout(contains("Recorded 2 event(s)"));

    rpz()
        .args(["--data", &data, "day", "2025-01-07", "--json"])
        .assert()
        .success()
        .stdout(contains("\"gross_minutes\": 540"))
        .stdout(contains("\"minutes\": 510"))
        .stdout(contains("\"text\": \"+1h 0m\""));

    rpz()
        .args(["--data", &data, "day", "2025-01-07"])
        .assert()
        .success()
        .stdout(contains("2025-01-07 (Tue)"))
        .stdout(contains("08h 30m"));
}

#[test]
fn test_add_rejects_bad_input() {
    let data = setup_test_data("cli_add_bad");

    rpz()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    rpz()
        .args(["--data", &data, "add", "2025-01-07", "--in", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rpz()
        .args(["--data", &data, "add", "07/01/2025", "--in", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rpz()
        .args(["--data", &data, "add", "2025-01-07", "--out", "12:00"])
        .assert()
        .failure()
        .stderr(contains("without an open clock-in"));
}

#[test]
fn test_week_report_and_friday_suggestion() {
    let data = setup_test_data("cli_week");
    init_data_with_week(&data);

    rpz()
        .args(["--data", &data, "friday", "--week", "2025-W02", "--json"])
        .assert()
        .success()
        .stdout(contains("\"adjusted_target\": 315"))
        .stdout(contains("\"exit_time\": \"13:05\""));

    rpz()
        .args(["--data", &data, "week", "--date", "2025-01-08"])
        .assert()
        .success()
        .stdout(contains("2025-W02"))
        .stdout(contains("Balance"))
        .stdout(contains("Exit at:       13:05"));

    rpz()
        .args(["--data", &data, "week", "--week", "2025-W02", "--json"])
        .assert()
        .success()
        // 480 + 465 + 0 + 450 + 0
        .stdout(contains("\"total_minutes\": 1395"))
        .stdout(contains("\"remaining_minutes\": 765"));
}

#[test]
fn test_friday_without_friday_prints_info() {
    let data = setup_test_data("cli_no_friday");

    rpz()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    rpz()
        .args(["--data", &data, "friday", "--week", "2025-W02"])
        .assert()
        .success()
        .stdout(contains("No Friday suggestion"));

    rpz()
        .args(["--data", &data, "friday", "--week", "2025-02"])
        .assert()
        .failure()
        .stderr(contains("Invalid week key"));
}

#[test]
fn test_special_day_replaces_entries() {
    let data = setup_test_data("cli_special");
    init_data_with_week(&data);

    rpz()
        .args(["--data", &data, "special", "2025-01-08", "smart-working"])
        .assert()
        .success()
        .stdout(contains("Replaced 1 existing"))
        .stdout(contains("7.5h"));

    rpz()
        .args(["--data", &data, "day", "2025-01-08", "--json"])
        .assert()
        .success()
        .stdout(contains("\"type\": \"smart-working\""))
        .stdout(contains("\"minutes\": 450"));

    rpz()
        .args(["--data", &data, "special", "2025-01-08", "holiday"])
        .assert()
        .failure()
        .stderr(contains("Invalid entry type"));
}

#[test]
fn test_delete_needs_confirmation() {
    let data = setup_test_data("cli_del");
    init_data_with_week(&data);

    // no answer on stdin → cancelled
    rpz()
        .args(["--data", &data, "del", "2025-01-06"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rpz()
        .args(["--data", &data, "del", "2025-01-06", "--entry", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted 1"));

    rpz()
        .args(["--data", &data, "day", "2025-01-06", "--json"])
        .assert()
        .success()
        .stdout(contains("clock-in").and(contains("clock-out").not()));
}

#[test]
fn test_export_then_import() {
    let data = setup_test_data("cli_export_src");
    init_data_with_week(&data);

    let out = temp_out("cli_export", "json");
    rpz()
        .args([
            "--data", &data, "export", "--file", &out, "--week", "2025-W02",
        ])
        .assert()
        .success()
        .stdout(contains("Exported 5 day(s)"));

    // existing file, no --force, refusal on stdin
    rpz()
        .args(["--data", &data, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));

    let target = setup_test_data("cli_export_dst");
    rpz()
        .args(["--data", &target, "--test", "init"])
        .assert()
        .success();

    rpz()
        .args(["--data", &target, "import", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Imported 5 day(s)"));

    rpz()
        .args(["--data", &target, "friday", "--week", "2025-W02", "--json"])
        .assert()
        .success()
        .stdout(contains("\"exit_time\": \"13:05\""));
}

#[test]
fn test_unpadded_week_key_finds_the_stored_week() {
    let data = setup_test_data("cli_week_unpadded");
    init_data_with_week(&data);

    rpz()
        .args(["--data", &data, "week", "--week", "2025-W2", "--json"])
        .assert()
        .success()
        .stdout(contains("\"week\": \"2025-W02\""))
        .stdout(contains("\"total_minutes\": 1395"));

    rpz()
        .args(["--data", &data, "friday", "--week", "2025-W2", "--json"])
        .assert()
        .success()
        .stdout(contains("\"exit_time\": \"13:05\""));

    let out = temp_out("cli_week_unpadded", "json");
    rpz()
        .args(["--data", &data, "export", "--file", &out, "--week", "2025-W2"])
        .assert()
        .success()
        .stdout(contains("Exported 5 day(s)"));
}

#[test]
fn test_import_rejects_unpadded_date_keys() {
    let data = setup_test_data("cli_import_bad_key");
    rpz()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    let file = temp_out("cli_import_bad_key", "json");
    std::fs::write(
        &file,
        r#"{"2025-W02":{"2025-1-6":[{"type":"clock-in","time":"08:00"},{"type":"clock-out","time":"16:30"}]}}"#,
    )
    .unwrap();

    rpz()
        .args(["--data", &data, "import", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 2025-1-6"));

    rpz()
        .args(["--data", &data, "week", "--week", "2025-W02", "--json"])
        .assert()
        .success()
        .stdout(contains("\"total_minutes\": 0"));
}

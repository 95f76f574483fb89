use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "budget";

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).unwrap();
    cmd.env("BUDGET_SHEETS_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    budget(&dir).arg("init").assert().success();
    dir
}

#[test]
fn init_creates_workbook() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete!").and(contains("general, needs, wants")));

    assert!(dir.path().join("workbook.json").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn init_twice_needs_force() {
    let dir = initialized();
    budget(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("--force"));
    budget(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn show_prints_sheet() {
    let dir = initialized();
    budget(&dir)
        .args(["show", "general"])
        .assert()
        .success()
        .stdout(contains("monthly income").and(contains("December")));
}

#[test]
fn show_unknown_sheet_fails() {
    let dir = initialized();
    budget(&dir)
        .args(["show", "holidays"])
        .assert()
        .failure()
        .stderr(contains("Sheet not found: holidays"));
}

#[test]
fn export_writes_csv_to_stdout() {
    let dir = initialized();
    budget(&dir)
        .args(["export", "general"])
        .assert()
        .success()
        .stdout(contains("month,monthly income,savings,discretionary\nJanuary,,,\n"));
}

#[test]
fn clear_month_keeps_label() {
    let dir = initialized();
    budget(&dir)
        .args(["clear-month", "needs", "--month", "3"])
        .assert()
        .success()
        .stdout(contains("Cleared March in 'needs'"));
}

#[test]
fn config_shows_paths() {
    let dir = initialized();
    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("workbook.json").and(contains("Housing, Vehicle, Insurance, Food, Banking")));
}

#[test]
fn run_without_workbook_points_to_init() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .arg("run")
        .assert()
        .failure()
        .stderr(contains("budget init"));
}

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("oneleft_cli")
        .unwrap()
        .env("ONELEFT_CLI_SCRIPT", "1")
        .env("ONELEFT_HOME", home.path())
        .env("NO_COLOR", "1")
        .write_stdin(input)
        .assert()
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = TempDir::new().unwrap();
    script(&home, "limit 200\nspend 50\nspend 30\nstatus\nexit\n")
        .success()
        .stdout(contains("Limit set: 200"))
        .stdout(contains("\u{2212}50"))
        .stdout(contains("120 of 200"))
        .stdout(contains("60% left (healthy)"));

    assert!(home.path().join("state.json").exists());
}

#[test]
fn state_survives_between_runs() {
    let home = TempDir::new().unwrap();
    script(&home, "limit 100\nspend 25.5\n").success();
    script(&home, "status\nhistory\n")
        .success()
        .stdout(contains("74.50 of 100"))
        .stdout(contains("Started: 100"))
        .stdout(contains("\u{2212}25.50"));
}

#[test]
fn overspend_is_flagged_and_undoable() {
    let home = TempDir::new().unwrap();
    script(&home, "limit 100\nspend 150\nundo\nstatus\n")
        .success()
        .stdout(contains("(over budget!)"))
        .stdout(contains("Undone"))
        .stdout(contains("100 of 100"));
}

#[test]
fn invalid_input_is_reported_without_failing() {
    let home = TempDir::new().unwrap();
    script(&home, "spend 10\nlimit 0\nlimit abc\nstatsu\n")
        .success()
        .stdout(contains("No limit set"))
        .stdout(contains("not an amount greater than 0"))
        .stdout(contains("Suggestion: `status`?"));
}

#[test]
fn reset_requires_confirmation_flag() {
    let home = TempDir::new().unwrap();
    script(&home, "limit 100\nreset\nstatus\nreset --yes\nstatus\n")
        .success()
        .stdout(contains("reset --yes"))
        .stdout(contains("100 of 100"))
        .stdout(contains("Everything cleared"))
        .stdout(contains("No limit set"));
}

#[test]
fn theme_selection_is_persisted() {
    let home = TempDir::new().unwrap();
    script(&home, "theme ocean\n")
        .success()
        .stdout(contains("Theme set to Ocean"));
    script(&home, "theme\nthemes\n")
        .success()
        .stdout(contains("Theme: Ocean"))
        .stdout(contains("* 2  Ocean"))
        .stdout(contains("Purple").and(contains("Light")));
}

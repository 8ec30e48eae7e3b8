//! End-to-end tests for the kalender binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn kalender() -> Command {
    let mut cmd = Command::cargo_bin("kalender").unwrap();
    cmd.env("KALENDER_TEST_TIME", "2024-06-10")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn current_month_by_default() {
    kalender()
        .assert()
        .success()
        .stdout(predicate::str::contains("Juni 2024"))
        .stdout(predicate::str::contains("Må Ti On To Fr Lö Sö"))
        .stdout(predicate::str::contains("Måndag 2024-06-10"))
        .stdout(predicate::str::contains("Inga aktiviteter denna dag ännu."));
}

#[test]
fn output_is_plain_when_piped() {
    kalender()
        .args(["6", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn next_month_rolls_over_year() {
    kalender()
        .args(["12", "2024", "--next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Januari 2025"))
        .stdout(predicate::str::contains("Onsdag 2025-01-01"))
        .stdout(predicate::str::contains("Nyårsdagen"));
}

#[test]
fn previous_month_rolls_back_year() {
    kalender()
        .args(["januari", "2024", "-p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2023"));
}

#[test]
fn holiday_listing() {
    kalender()
        .args(["-H", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-29  Fr  Långfredagen"))
        .stdout(predicate::str::contains("2024-06-22  Lö  Midsommardagen"))
        .stdout(predicate::str::contains("Må Ti On").not());
}

#[test]
fn three_month_view() {
    kalender()
        .args(["-3", "-c", "3", "6", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("Maj 2024 +Juni 2024 +Juli 2024").unwrap());
}

#[test]
fn selected_day_with_activities() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("activities.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "1", "title": "Dans", "date": "2024-06-22", "startTime": "10:00", "endTime": "11:30"},
            {"id": "2", "title": "Utflykt", "date": "2024-06-22", "allDay": true, "description": "Ta med fika"},
            {"id": "3", "title": "", "date": "2024-06-22"}
        ]"#,
    )
    .unwrap();

    kalender()
        .arg("-a")
        .arg(&path)
        .args(["-d", "2024-06-22"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lördag 2024-06-22"))
        .stdout(predicate::str::contains("Midsommardagen"))
        .stdout(
            predicate::str::is_match("(?s)Hela dagen +Utflykt.*Ta med fika.*10:00–11:30 +Dans")
                .unwrap(),
        )
        .stderr(predicate::str::contains("skipping invalid activity"));
}

#[test]
fn invalid_month_fails() {
    kalender()
        .args(["smarch", "2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("kalender: Invalid month: smarch"));
}

#[test]
fn missing_activities_file_fails() {
    kalender()
        .args(["-a", "/nonexistent/activities.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot read /nonexistent/activities.json",
        ));
}

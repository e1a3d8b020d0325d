use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TRIP: &str = "shanghai-japan-3days";

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn waypoint_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("waypoint").expect("Failed to find waypoint binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path.to_str().unwrap());
    cmd
}

fn start_trip(temp_dir: &TempDir) {
    waypoint_cmd(temp_dir)
        .args(["trip", "start", TRIP])
        .assert()
        .success();
}

#[test]
fn test_cli_help_output() {
    Command::cargo_bin("waypoint")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trip"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("comment"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_cli_plan_help() {
    Command::cargo_bin("waypoint")
        .unwrap()
        .args(["plan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("dismiss"))
        .stdout(predicate::str::contains("reminders"));
}

#[test]
fn test_cli_version_output() {
    Command::cargo_bin("waypoint")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waypoint"));
}

#[test]
fn test_cli_without_subcommand_lists_trips() {
    let temp_dir = create_cli_test_environment();

    waypoint_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("`shanghai-japan-3days`"))
        .stdout(predicate::str::contains("`beijing-korea-2days`"))
        .stdout(predicate::str::contains("Shanghai Pudong -> Tokyo Narita"));
}

#[test]
fn test_cli_without_subcommand_shows_active_trip() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Shanghai to Tokyo in 3 days"))
        .stdout(predicate::str::contains("## Day 3"));
}

#[test]
fn test_cli_trip_start() {
    let temp_dir = create_cli_test_environment();

    waypoint_cmd(&temp_dir)
        .args(["trip", "start", TRIP])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Shanghai to Tokyo in 3 days"))
        .stdout(predicate::str::contains("0/16 plans completed (0%)"))
        .stdout(predicate::str::contains("## Day 1"))
        .stdout(predicate::str::contains("- ➤ 0. 08:00"));

    waypoint_cmd(&temp_dir)
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(`shanghai-japan-3days`) (active)"));
}

#[test]
fn test_cli_trip_start_unknown() {
    let temp_dir = create_cli_test_environment();

    waypoint_cmd(&temp_dir)
        .args(["trip", "start", "atlantis-1day"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trip 'atlantis-1day' not found"));
}

#[test]
fn test_cli_plan_requires_active_trip() {
    let temp_dir = create_cli_test_environment();

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "0", "--at", "08:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active trip"));
}

#[test]
fn test_cli_complete_late_moves_later_plans() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "0", "--at", "08:20"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Completed plan 0: Depart Shanghai Pudong",
        ))
        .stdout(predicate::str::contains(
            "Later plans moved by 20 minutes (15 changed).",
        ));

    waypoint_cmd(&temp_dir)
        .args(["trip", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- ✓ 0. 08:20"))
        .stdout(predicate::str::contains("- ➤ 1. 12:20"))
        .stdout(predicate::str::contains("(moved from 12:00)"));
}

#[test]
fn test_cli_complete_rejects_bad_time() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "0", "--at", "25:99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'time'"));
}

#[test]
fn test_cli_uncomplete_plan() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "2", "--at", "14:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Right on time; no plans moved."));

    waypoint_cmd(&temp_dir)
        .args(["plan", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Marked plan 1 (Arrive at Tokyo Narita) and every later plan as not completed.",
        ));

    waypoint_cmd(&temp_dir)
        .args(["plan", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/16 plans completed"));
}

#[test]
fn test_cli_late_plan_resolution() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "4", "--at", "23:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Late plans"))
        .stdout(predicate::str::contains(
            "5. **Dinner: sushi** (food): 19:00 -> 01:30 (next day)",
        ))
        .stdout(predicate::str::contains("10. **Dinner: tempura**"));

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "5", "--at", "23:45"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("resolve or dismiss them first"));

    waypoint_cmd(&temp_dir)
        .args(["plan", "resolve", "--keep", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 late plan(s):"))
        .stdout(predicate::str::contains("Dinner: sushi"));

    waypoint_cmd(&temp_dir)
        .args(["plan", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5/15 plans completed (33%)"));
}

#[test]
fn test_cli_resolve_defaults_to_keeping_late_plans() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "4", "--at", "23:30"])
        .assert()
        .success();

    waypoint_cmd(&temp_dir)
        .args(["plan", "resolve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept every late plan."));

    waypoint_cmd(&temp_dir)
        .args(["plan", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5/16 plans completed"));
}

#[test]
fn test_cli_resolve_drop_all() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "4", "--at", "23:30"])
        .assert()
        .success();

    waypoint_cmd(&temp_dir)
        .args(["plan", "resolve", "--drop-all", "--keep", "5"])
        .assert()
        .failure();

    waypoint_cmd(&temp_dir)
        .args(["plan", "resolve", "--drop-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 late plan(s):"));

    waypoint_cmd(&temp_dir)
        .args(["plan", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5/14 plans completed"));
}

#[test]
fn test_cli_dismiss_without_pending() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "dismiss"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no late plans awaiting a decision"));
}

#[test]
fn test_cli_dismiss_keeps_plans() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "4", "--at", "23:30"])
        .assert()
        .success();

    waypoint_cmd(&temp_dir)
        .args(["plan", "dismiss"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Done: Left 2 late plan(s) in the itinerary",
        ));

    waypoint_cmd(&temp_dir)
        .args(["plan", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5/16 plans completed"));
}

#[test]
fn test_cli_reminders() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "0", "--at", "08:20"])
        .assert()
        .success();

    waypoint_cmd(&temp_dir)
        .args(["plan", "reminders", "--at", "13:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- 14:20 (in 80 min)"))
        .stdout(predicate::str::contains(
            "Transfer to hotel is about to start, get ready to leave.",
        ))
        .stdout(predicate::str::contains("It is 19:20: time for Dinner: sushi."));

    waypoint_cmd(&temp_dir)
        .args(["plan", "reminders", "--at", "23:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming plans for today."));
}

#[test]
fn test_cli_comments() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["comment", "add", "1", "Smooth landing", "--rating", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added comment 1 to plan 1"))
        .stdout(predicate::str::contains("★★★★★ Smooth landing"));

    waypoint_cmd(&temp_dir)
        .args(["comment", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "## Comments on 1. Arrive at Tokyo Narita",
        ))
        .stdout(predicate::str::contains(
            "Average rating: 5.0/5 from 1 comment(s)",
        ));

    waypoint_cmd(&temp_dir)
        .args(["comment", "list", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No comments yet."));
}

#[test]
fn test_cli_comment_rating_out_of_range() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["comment", "add", "1", "Great", "--rating", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'rating'"));
}

#[test]
fn test_cli_trip_reset() {
    let temp_dir = create_cli_test_environment();
    start_trip(&temp_dir);

    waypoint_cmd(&temp_dir)
        .args(["plan", "complete", "0", "--at", "09:00"])
        .assert()
        .success();

    waypoint_cmd(&temp_dir)
        .args(["trip", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Done: Trip 'shanghai-japan-3days' is back to its original itinerary",
        ));

    waypoint_cmd(&temp_dir)
        .args(["trip", "show", "--trip", TRIP])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has not been started"));

    waypoint_cmd(&temp_dir)
        .args(["trip", "start", TRIP])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/16 plans completed"))
        .stdout(predicate::str::contains("- ➤ 1. 12:00").not());
}

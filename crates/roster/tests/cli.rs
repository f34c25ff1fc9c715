#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `roster` command isolated from the user's config files and `ROSTER_*` variables.
fn roster_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("roster"));
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    for var in [
        "ROSTER_BREAKPOINT",
        "ROSTER_LAYOUT_FLOOR",
        "ROSTER_PAGE_SIZE",
        "ROSTER_SKILLS_PREVIEW",
        "ROSTER_CELL_PX",
        "ROSTER_DATA",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn naked_invocation_lists_first_grid_page() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1-10 of 24 employees · page 1/3"));
}

#[test]
fn filter_by_status_on_wide_viewport() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["--width", "2400", "list", "--filter", "isActive=Inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filters: isActive: Inactive"))
        .stdout(predicate::str::contains("Dmitri Volkov"))
        .stdout(predicate::str::contains("Uriel Cohen"))
        .stdout(predicate::str::contains("Ada Moss").not())
        .stdout(predicate::str::contains(
            "Showing 1-5 of 5 employees (filtered from 24)",
        ));
}

#[test]
fn filters_combine_within_and_across_facets() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args([
            "--width",
            "2400",
            "list",
            "-f",
            "department=Sales",
            "-f",
            "department=Finance",
            "-f",
            "location=London",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dmitri Volkov"))
        .stdout(predicate::str::contains("Quinn Harper"))
        .stdout(predicate::str::contains("Ingrid Larsen").not())
        .stdout(predicate::str::contains("Showing 1-4 of 4 employees"));
}

#[test]
fn narrow_viewport_uses_compact_table() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["--width", "400", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust, Go, …"))
        .stdout(predicate::str::contains("Showing 24 of 24 employees"))
        .stdout(predicate::str::contains("page").not());
}

#[test]
fn search_matches_department_substring() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["--width", "2400", "list", "--search", "ENG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Moss"))
        .stdout(predicate::str::contains("Bruno Costa").not());
}

#[test]
fn no_matches_prints_empty_state() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["list", "--search", "zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("No employees found."));
}

#[test]
fn sort_orders_grid_rows() {
    let home = TempDir::new().unwrap();
    let output = roster_cmd(&home)
        .args(["--width", "2400", "list", "--sort", "salary:desc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let rosa = stdout.find("Rosa Méndez").unwrap();
    let wen = stdout.find("Wen Zhou").unwrap();
    assert!(rosa < wen);
    assert!(!stdout.contains("Uriel Cohen"));
}

#[test]
fn unknown_facet_is_an_error() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["list", "--filter", "shoe=42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Api Error: Unknown facet: shoe"));
}

#[test]
fn unknown_option_warns_and_shows_nothing() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["list", "--filter", "location=Mars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No employees found."))
        .stdout(predicate::str::contains("warning: No employee has location 'Mars'"));
}

#[test]
fn stats_as_json() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["--json", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 24"))
        .stdout(predicate::str::contains("\"active\": 19"))
        .stdout(predicate::str::contains("\"inactive\": 5"));
}

#[test]
fn facets_lists_options() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .arg("facets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Department (department)"))
        .stdout(predicate::str::contains("  [ ] Engineering"))
        .stdout(predicate::str::contains("  [ ] Inactive"));
}

#[test]
fn columns_report_compact_mode() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["--width", "400", "columns"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Mode: compact table (viewport 400px, layout 420px",
        ));
}

#[test]
fn data_file_replaces_bundled_roster() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("people.json");
    fs::write(
        &path,
        r#"[{"id": 1, "firstName": "Zed", "lastName": "Quist", "email": "zed@corp.example",
            "department": "Legal", "position": "Counsel", "location": "Rome", "age": 50,
            "salary": 150000, "performanceRating": 4.1, "projectsCompleted": 3,
            "hireDate": "2011-06-01", "isActive": true}]"#,
    )
    .unwrap();

    roster_cmd(&home)
        .args(["--width", "2400", "--data"])
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zed Quist"))
        .stdout(predicate::str::contains("$150K"))
        .stdout(predicate::str::contains("Showing 1-1 of 1 employees"));
}

#[test]
fn missing_data_file_fails() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["--data", "nope.json", "stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn project_config_changes_page_size() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("roster.toml"), "page_size = 5\n").unwrap();
    roster_cmd(&home)
        .args(["--width", "1024", "list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 6-10 of 24 employees · page 2/5"));
}

#[test]
fn shell_applies_toggles() {
    let home = TempDir::new().unwrap();
    roster_cmd(&home)
        .args(["--width", "2400", "shell"])
        .write_stdin("toggle department Sales\napply\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: Some filter changes have not been applied yet.",
        ))
        .stdout(predicate::str::contains("Filters: department: Sales"))
        .stdout(predicate::str::contains("Showing 1-4 of 4 employees (filtered from 24)"));
}

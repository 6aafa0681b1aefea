use assert_cmd::Command;
use predicates::prelude::*;

fn natview() -> Command {
    let mut cmd = Command::cargo_bin("natview").unwrap();
    cmd.env_remove("NATVIEW_LOCAL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_options() {
    natview()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--print"))
        .stdout(predicate::str::contains("--max-supply"));
}

#[test]
fn prints_home_with_default_supply() {
    natview()
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("NAT\n"))
        .stdout(predicate::str::contains("Max supply: 21,000,000,000,000,000"))
        .stdout(predicate::str::contains(
            "Total available: 15,750,000,000,000,000",
        ))
        .stdout(predicate::str::contains("Reference fee: 0.00000546 BTC (546 sats)"))
        .stdout(predicate::str::contains("Local build").not());
}

#[test]
fn prints_paper_route() {
    natview()
        .args(["--print", "/natpaper"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Abstract\n"))
        .stdout(predicate::str::contains("100,000,000 satoshis"));
}

#[test]
fn print_starts_at_anchor() {
    natview()
        .args(["--print", "/natpaper#fees"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fees\n"))
        .stdout(predicate::str::contains("Abstract").not());
}

#[test]
fn unknown_anchor_prints_whole_page() {
    natview()
        .args(["--print", "/natpaper#nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Abstract\n"));
}

#[test]
fn unknown_route_fails() {
    natview()
        .args(["--print", "/nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route for path: /nope"));
}

#[test]
fn supply_overrides_use_exact_arithmetic() {
    natview()
        .args([
            "--print",
            "--max-supply",
            "9007199254740993",
            "--remaining",
            "1",
            "--fee-sats",
            "150000000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total available: 9,007,199,254,740,992"))
        .stdout(predicate::str::contains("Reference fee: 1.5 BTC (150,000,000 sats)"));
}

#[test]
fn non_numeric_supply_is_rejected() {
    natview()
        .args(["--print", "--max-supply", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument 'lots'"));
}

#[test]
fn local_flag_from_environment() {
    natview()
        .env("NATVIEW_LOCAL", "true")
        .arg("--print")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Local build"));
}

#[test]
fn local_flag_from_cli() {
    natview()
        .env("NATVIEW_LOCAL", "false")
        .args(["--print", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Local build"));
}

#[test]
fn log_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("natview.log");

    natview()
        .args(["--print", "--log"])
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting natview"));
    assert!(contents.contains("Router starting at /"));
}

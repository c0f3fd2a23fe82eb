use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn fixture() -> TempDir {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("foo.rb"), b"").unwrap();
    fs::write(temp.path().join("zap.txt"), b"").unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src").join("foobar.rb"), b"").unwrap();
    temp
}

fn pathpick() -> Command {
    Command::cargo_bin("pathpick").unwrap()
}

#[test]
fn one_shot_prints_one_match_per_line() {
    let temp = fixture();
    pathpick()
        .arg("foo")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("foo.rb"))
        .stdout(predicate::str::contains("zap.txt").not());
}

#[test]
fn limit_keeps_only_the_best_match() {
    let temp = fixture();
    pathpick()
        .arg("foo")
        .arg("--root")
        .arg(temp.path())
        .arg("--limit")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::eq("foo.rb\n"));
}

#[test]
fn empty_abbreviation_lists_the_scan_order() {
    let temp = fixture();
    pathpick()
        .arg("")
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::eq("foo.rb\nsrc/foobar.rb\nzap.txt\n"));
}

#[test]
fn json_flag_prints_an_array() {
    let temp = fixture();
    pathpick()
        .arg("foo")
        .arg("--root")
        .arg(temp.path())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn abbreviation_is_required_without_pipe() {
    pathpick().assert().failure();
}

#[test]
fn pipe_mode_serves_queries_and_recovers_from_bad_ones() {
    let temp = fixture();
    pathpick()
        .arg("--pipe")
        .arg("--root")
        .arg(temp.path())
        .write_stdin(concat!(
            r#"{"abbrev": "foo", "options": {"limit": 2}}"#,
            "\n",
            r#"{"abbrev": "foo"}"#,
            "\n",
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"matches\""))
        .stdout(predicate::str::contains("\"error\""));
}

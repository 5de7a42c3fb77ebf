use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cargo_bin() -> &'static str {
    "jsonclean"
}

#[test]
fn cli_stdin_stdout_basic() {
    let mut cmd = Command::cargo_bin(cargo_bin()).unwrap();
    let input = "{\"a\": 1, // comment\n\"b\": 2,}\n";
    cmd.write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::eq("{\n  \"a\": 1,\n  \"b\": 2\n}"));
}

#[test]
fn cli_file_to_file() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    fs::write(&inp, "{/* c */\"x\": [1,2,],}").unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args([inp.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success();
    let s = fs::read_to_string(out).unwrap();
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v, serde_json::json!({"x": [1, 2]}));
}

#[test]
fn cli_in_place() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("inplace.json");
    fs::write(&inp, "// note\n{\"a\": 1,}").unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--in-place", inp.to_str().unwrap()])
        .assert()
        .success();
    let s = fs::read_to_string(&inp).unwrap();
    assert_eq!(s, "{\n  \"a\": 1\n}");
}

#[test]
fn cli_in_place_leaves_file_untouched_on_failure() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("bad.json");
    let original = "{\"a\": } // malformed";
    fs::write(&inp, original).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--in-place", inp.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error at line"));
    assert_eq!(fs::read_to_string(&inp).unwrap(), original);
}

#[test]
fn cli_check_mode() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, "{\"a\": 1, /* ok */}").unwrap();
    fs::write(&bad, "{\"a\": }").unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--check", good.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--check", bad.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("^"));
}

#[test]
fn cli_compact_output() {
    let mut cmd = Command::cargo_bin(cargo_bin()).unwrap();
    cmd.args(["--compact"])
        .write_stdin("{\"a\": 1, // c\n\"b\": 2,}")
        .assert()
        .success()
        .stdout(predicate::eq("{\"a\":1,\"b\":2}"));
}

#[test]
fn cli_log_to_stderr() {
    let mut cmd = Command::cargo_bin(cargo_bin()).unwrap();
    cmd.args(["--log"])
        .write_stdin("{\"a\": 1, // c\n\"b\": 2,}")
        .assert()
        .success()
        .stderr(predicate::str::contains("stripped line comment"))
        .stderr(predicate::str::contains("removed trailing comma"));
}

#[test]
fn cli_unknown_option_exits_2() {
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--bogus"])
        .assert()
        .failure()
        .code(2);
}

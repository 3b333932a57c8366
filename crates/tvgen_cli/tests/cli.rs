use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn tvgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tvgen"))
}

fn fixture(stem: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../tvgen_datasets/tests/fixtures")
        .join(format!("{stem}.txt"));
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

#[test]
fn help_lists_generators() {
    tvgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gcd"))
        .stdout(predicate::str::contains("sorter"))
        .stdout(predicate::str::contains("net-msg"))
        .stdout(predicate::str::contains("src-sink"));
}

#[test]
fn gcd_default_matches_fixture() {
    tvgen()
        .args(["gcd", "random-b"])
        .assert()
        .success()
        .stdout(fixture("gcd-random-b"));
}

#[test]
fn sorter_default_matches_fixture() {
    tvgen()
        .args(["sorter", "sorted-fwd"])
        .assert()
        .success()
        .stdout(fixture("sorter-sorted-fwd"));
}

#[test]
fn net_msg_default_matches_fixture() {
    tvgen()
        .arg("net-msg")
        .assert()
        .success()
        .stdout(fixture("net-msg"));
}

#[test]
fn src_sink_default_matches_fixture() {
    tvgen()
        .args(["src-sink", "ordered"])
        .assert()
        .success()
        .stdout(fixture("src-sink-ordered"));
}

#[test]
fn unknown_variant_fails_without_output() {
    for (generator, variant) in [("gcd", "random-c"), ("sorter", "random-a"), ("src-sink", "both")] {
        tvgen()
            .args([generator, variant])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("unrecognized"))
            .stderr(predicate::str::contains(variant));
    }
}

#[test]
fn missing_variant_is_usage_error() {
    tvgen()
        .arg("src-sink")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn net_msg_rejects_variant() {
    tvgen()
        .args(["net-msg", "random"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn seed_override_changes_output() {
    let default = tvgen().arg("net-msg").output().unwrap().stdout;
    let reseeded = tvgen()
        .args(["net-msg", "--seed", "1"])
        .output()
        .unwrap()
        .stdout;
    assert_ne!(default, reseeded);

    let hex = tvgen()
        .args(["net-msg", "--seed", "0xdeadbeef"])
        .output()
        .unwrap()
        .stdout;
    assert_eq!(default, hex);
}

#[test]
fn chacha_engine_is_deterministic() {
    let run = || {
        tvgen()
            .args(["--engine", "chacha8", "sorter", "random"])
            .output()
            .unwrap()
    };
    let a = run();
    let b = run();
    assert!(a.status.success());
    assert_eq!(a.stdout, b.stdout);
    assert_ne!(String::from_utf8(a.stdout).unwrap(), fixture("sorter-random"));
}

#[test]
fn config_file_changes_trial_count() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("tvgen.toml");
    fs::write(&config, "[gcd]\ntrials = 3\n").unwrap();

    let out = tvgen()
        .args(["--config", config.to_str().unwrap(), "gcd", "random-a"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    let expected: String = fixture("gcd-random-a").lines().take(4).skip(1).fold(
        String::from("num_inputs = 3 ;\n"),
        |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        },
    );
    assert_eq!(text, expected);
}

#[test]
fn invalid_config_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("tvgen.toml");
    fs::write(&config, "[sorter]\ntrials = 2\nlatency = 3\n").unwrap();

    tvgen()
        .args(["--config", config.to_str().unwrap(), "sorter", "random"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("validation error"));
}

#[test]
fn missing_config_file_fails() {
    tvgen()
        .args(["--config", "/nonexistent/tvgen.toml", "net-msg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read configuration"));
}

#[test]
fn json_format_output() {
    let out = tvgen()
        .args(["src-sink", "unordered", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["generator"], "src-sink");
    assert_eq!(value["variant"], "unordered");
    assert_eq!(value["src"].as_array().unwrap().len(), 100);
}

#[test]
fn output_file_receives_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gcd.v");
    tvgen()
        .args(["gcd", "random-a", "--output", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), fixture("gcd-random-a"));
}

#[test]
fn all_regenerates_every_fixture() {
    let dir = tempfile::tempdir().unwrap();
    tvgen()
        .args(["all", "--out-dir", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    for stem in [
        "gcd-random-a",
        "gcd-random-b",
        "sorter-random",
        "sorter-sorted-fwd",
        "sorter-sorted-rev",
        "net-msg",
        "src-sink-ordered",
        "src-sink-unordered",
    ] {
        let written = fs::read_to_string(dir.path().join(format!("{stem}.v"))).unwrap();
        assert_eq!(written, fixture(stem), "{stem}");
    }
}

#[test]
fn list_prints_every_dataset() {
    tvgen()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("gcd random-a\n"))
        .stdout(predicate::str::contains("sorter sorted-rev\n"))
        .stdout(predicate::str::contains("net-msg\n"))
        .stdout(predicate::str::contains("src-sink unordered\n"));
}

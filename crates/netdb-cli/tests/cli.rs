use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("netdb"))
}

fn fixture(name: &str) -> PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .expect("crates dir")
        .join("netdb-core")
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

#[test]
fn protocol_lookup_by_name_and_number() {
    cmd()
        .args(["protocol", "tcp"])
        .assert()
        .success()
        .stdout(contains("tcp\t6"));
    cmd()
        .args(["protocol", "17"])
        .assert()
        .success()
        .stdout(contains("udp\t17"));
}

#[test]
fn service_lookup_respects_protocol() {
    cmd()
        .args(["service", "domain", "--proto", "udp"])
        .assert()
        .success()
        .stdout(contains("domain\t53/udp"));
    cmd()
        .args(["service", "53", "--proto", "tcp"])
        .assert()
        .success()
        .stdout(contains("domain\t53/tcp"));
}

#[test]
fn ethertype_lookup_accepts_hex_and_aliases() {
    cmd()
        .args(["ethertype", "0x0800"])
        .assert()
        .success()
        .stdout(contains("IPv4\t0800"));
    cmd()
        .args(["ethertype", "86DD"])
        .assert()
        .success()
        .stdout(contains("IPv6\t86DD"));
    cmd()
        .args(["ethertype", "ip"])
        .assert()
        .success()
        .stdout(contains("IPv4"));
}

#[test]
fn unknown_name_exits_with_one_and_hint() {
    cmd()
        .args(["protocol", "frotz"])
        .assert()
        .code(1)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn json_output_is_valid() {
    let assert = cmd().args(["--json", "protocol", "udp"]).assert().success();
    let value: Value = serde_json::from_str(&stdout_of(&assert)).expect("valid json");
    assert_eq!(value["name"], "udp");
    assert_eq!(value["number"], 17);
}

#[test]
fn pretty_json_service_includes_protocol() {
    let assert = cmd()
        .args(["--pretty", "service", "http", "--proto", "tcp"])
        .assert()
        .success();
    let stdout = stdout_of(&assert);
    assert!(stdout.contains('\n'));
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["port"], 80);
    assert_eq!(value["protocol"]["number"], 6);
}

#[test]
fn file_only_database_hides_builtin_entries() {
    cmd()
        .arg("--no-builtin")
        .arg("--protocols")
        .arg(fixture("protocols"))
        .args(["protocol", "schwuppdiwupp"])
        .assert()
        .success()
        .stdout(contains("ratzfatz\t123"));
    cmd()
        .arg("--no-builtin")
        .arg("--protocols")
        .arg(fixture("protocols"))
        .args(["protocol", "tcp"])
        .assert()
        .code(1);
}

#[test]
fn service_file_resolves_against_loaded_protocols() {
    cmd()
        .arg("--no-builtin")
        .arg("--protocols")
        .arg(fixture("protocols"))
        .arg("--services")
        .arg(fixture("services"))
        .args(["service", "burn"])
        .assert()
        .success()
        .stdout(contains("crash\t666/foobar"));
    cmd()
        .arg("--no-builtin")
        .arg("--protocols")
        .arg(fixture("protocols"))
        .arg("--services")
        .arg(fixture("services"))
        .args(["service", "orphan"])
        .assert()
        .code(1);
}

#[test]
fn file_overlays_builtin_table() {
    cmd()
        .arg("--ethertypes")
        .arg(fixture("ethertypes"))
        .args(["ethertype", "test"])
        .assert()
        .success()
        .stdout(contains("test\t9000"));
    cmd()
        .arg("--ethertypes")
        .arg(fixture("ethertypes"))
        .args(["ethertype", "ARP"])
        .assert()
        .success();
}

#[test]
fn invalid_protocol_file_is_an_error() {
    cmd()
        .arg("--protocols")
        .arg(fixture("broken-protocols"))
        .args(["protocol", "ok"])
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("line 2")));
}

#[test]
fn missing_file_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    cmd()
        .arg("--protocols")
        .arg(temp.path().join("missing"))
        .args(["protocol", "tcp"])
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn glob_must_match_a_single_file() {
    let pattern = fixture("proto*");
    cmd()
        .arg("--no-builtin")
        .arg("--protocols")
        .arg(&pattern)
        .args(["protocol", "foobar"])
        .assert()
        .success()
        .stdout(contains("foobar\t12"));

    let ambiguous = fixture("*protocols");
    cmd()
        .arg("--protocols")
        .arg(&ambiguous)
        .args(["protocol", "tcp"])
        .assert()
        .code(2)
        .stderr(contains("multiple files match"));
}

#[test]
fn list_prints_every_record_in_order() {
    let assert = cmd()
        .arg("--no-builtin")
        .arg("--ethertypes")
        .arg(fixture("ethertypes"))
        .args(["list", "ethertypes"])
        .assert()
        .success();
    let stdout = stdout_of(&assert);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("RoMON\t88BF"));
    assert!(lines[1].starts_with("test\t9000"));
}

#[test]
fn list_json_is_an_array() {
    let assert = cmd()
        .arg("--no-builtin")
        .arg("--protocols")
        .arg(fixture("protocols"))
        .args(["--json", "list", "protocols"])
        .assert()
        .success();
    let value: Value = serde_json::from_str(&stdout_of(&assert)).expect("valid json");
    let numbers: Vec<u64> = value
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["number"].as_u64().expect("number"))
        .collect();
    assert_eq!(numbers, vec![12, 123, 234]);
}

#[test]
fn config_file_selects_sources() {
    let temp = TempDir::new().expect("tempdir");
    let config = temp.path().join("netdb.json");
    let body = serde_json::json!({
        "protocols": fixture("protocols"),
        "builtin": false,
    });
    std::fs::write(&config, body.to_string()).expect("write config");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["protocol", "baz"])
        .assert()
        .success()
        .stdout(contains("baz\t234"));
    cmd()
        .arg("--config")
        .arg(&config)
        .args(["protocol", "udp"])
        .assert()
        .code(1);
}

#[test]
fn config_with_unknown_field_is_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let config = temp.path().join("netdb.json");
    std::fs::write(&config, r#"{ "protocol": "/etc/protocols" }"#).expect("write config");

    cmd()
        .arg("--config")
        .arg(&config)
        .args(["protocol", "tcp"])
        .assert()
        .code(2)
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn long_version_mentions_build_metadata() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("netdb"));
}

#[test]
fn system_files_layer_over_builtin() {
    cmd()
        .args(["--system", "protocol", "tcp"])
        .assert()
        .success()
        .stdout(contains("tcp\t6"));
    cmd()
        .arg("--system")
        .arg("--protocols")
        .arg(fixture("protocols"))
        .args(["protocol", "ratzfatz"])
        .assert()
        .success()
        .stdout(contains("ratzfatz\t123"));
}

#[test]
fn system_conflicts_with_config() {
    let temp = TempDir::new().expect("tempdir");
    let config = temp.path().join("netdb.json");
    std::fs::write(&config, "{}").expect("write config");

    cmd()
        .arg("--system")
        .arg("--config")
        .arg(&config)
        .args(["protocol", "tcp"])
        .assert()
        .code(2);
}

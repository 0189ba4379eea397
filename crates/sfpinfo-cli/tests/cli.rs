use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sfpinfo"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn golden_input(case: &str) -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join(case)
        .join("input.hex")
}

fn sample_dump() -> std::path::PathBuf {
    golden_input("sfp_fiber")
}

#[test]
fn help_supports_decode_and_parse() {
    cmd().arg("a0").arg("decode").arg("--help").assert().success();
    cmd().arg("a0").arg("parse").arg("--help").assert().success();
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.bin");
    let report = temp.path().join("report.json");

    cmd()
        .arg("a0")
        .arg("decode")
        .arg(missing)
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn unsupported_extension_rejected() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("module.json");
    std::fs::write(&input, "{}").expect("write input");

    cmd()
        .arg("a0")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .assert()
        .failure()
        .stderr(contains("unsupported input format"));
}

#[test]
fn stdout_outputs_json() {
    let assert = cmd()
        .arg("a0")
        .arg("decode")
        .arg(sample_dump())
        .arg("--stdout")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["module"]["identifier"]["name"], "SFP/SFP+");
    assert_eq!(value["module"]["lengths"][2]["field"], "om1");
    assert_eq!(value["module"]["lengths"][2]["meters"], 250);
    assert_ne!(value["generated_at"], "1970-01-01T00:00:00Z");
}

#[test]
fn report_written_to_file() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("a0")
        .arg("decode")
        .arg(sample_dump())
        .arg("-o")
        .arg(&report)
        .arg("--pretty")
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let json = std::fs::read_to_string(&report).expect("read report");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["input"]["format"], "hex");
    assert_eq!(value["input"]["map_bytes"], 64);
}

#[test]
fn stdout_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("a0")
        .arg("decode")
        .arg(sample_dump())
        .arg("--stdout")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("a0")
        .arg("decode")
        .arg(sample_dump())
        .arg("-o")
        .arg(report)
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .code(2)
        .stderr(contains("cannot be used with"));
}

#[test]
fn compact_flag_writes_single_line_json() {
    let assert = cmd()
        .arg("a0")
        .arg("decode")
        .arg(sample_dump())
        .arg("--stdout")
        .arg("--compact")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout");
    assert_eq!(stdout.trim_end().lines().count(), 1);
    let value: Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["report_version"], 1);
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("a0")
        .arg("decode")
        .arg(sample_dump())
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn text_output_interprets_lengths() {
    cmd()
        .arg("a0")
        .arg("decode")
        .arg(sample_dump())
        .arg("--text")
        .assert()
        .success()
        .stdout(
            contains("Byte 0 - Identifier: 0x03 (SFP/SFP+)")
                .and(contains("Byte 17 - Length OM1 (62.5 um)"))
                .and(contains("Length: 250 m"))
                .and(contains("Byte 18 - Length OM4 (50 um)")),
        );
}

#[test]
fn text_output_shows_extended_lower_bound() {
    cmd()
        .arg("a0")
        .arg("decode")
        .arg(golden_input("sfp_extended_lengths"))
        .arg("--text")
        .assert()
        .success()
        .stdout(contains("Length: more than 2540 m").and(contains("Length: more than 25400 m")));
}

#[test]
fn strict_fails_for_unknown_module() {
    cmd()
        .arg("a0")
        .arg("decode")
        .arg(golden_input("unknown_identifier"))
        .arg("--stdout")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("module is not SFP/SFP+").and(contains("0x7F")));
}

#[test]
fn strict_passes_for_sfp_module() {
    cmd()
        .arg("a0")
        .arg("decode")
        .arg(golden_input("sfp_copper_dac"))
        .arg("--text")
        .arg("--strict")
        .assert()
        .success()
        .stdout(contains("Byte 18 - Length copper cable").and(contains("Length: 3 m")));
}

#[test]
fn short_binary_dump_hints_map_size() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("module.bin");
    std::fs::write(&input, vec![0x03u8; 64]).expect("write input");

    cmd()
        .arg("a0")
        .arg("decode")
        .arg(input)
        .arg("--stdout")
        .arg("--map-size")
        .arg("128")
        .assert()
        .failure()
        .stderr(contains("short transfer").and(contains("--map-size")));
}

#[test]
fn invalid_map_size_rejected() {
    cmd()
        .arg("a0")
        .arg("decode")
        .arg(sample_dump())
        .arg("--stdout")
        .arg("--map-size")
        .arg("100")
        .assert()
        .failure()
        .stderr(contains("unsupported map size").and(contains("hint:")));
}

#[test]
fn hexdump_prints_offsets() {
    cmd()
        .arg("a0")
        .arg("hexdump")
        .arg(sample_dump())
        .assert()
        .success()
        .stdout(contains("00: 03 00").and(contains("\n30: ")));
}

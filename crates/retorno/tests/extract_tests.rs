//! End-to-end tests for the retorno-extract binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

fn latin1_fixture() -> PathBuf {
    project_root().join("crates/retorno-importer/tests/fixtures/itau_latin1.ret")
}

fn utf8_fixture() -> PathBuf {
    project_root().join("crates/retorno-parser/tests/fixtures/itau_retorno.ret")
}

fn retorno_extract(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_retorno-extract"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run retorno-extract")
}

#[test]
fn test_text_listing() {
    let fixture = latin1_fixture();
    let output = retorno_extract(&[fixture.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].contains("ACME COMERCIO DE PECAS LTDA"));
    assert_eq!(
        lines[1],
        "(CAIXA ELETRONICO BANCO ITAU - DISPONIVEL) 16/01/2015 - 00012345 - 1.500,00"
    );
    assert_eq!(
        lines[2],
        "(OUTROS BANCOS - PELO CODIGO DE BARRAS - A COMPENSAR) 19/01/2015 - 00012346 - 23.456,78"
    );
    assert_eq!(lines[3], "(not settled) --/--/---- - 00012347 - 0,00");
    assert_eq!(lines[4], "3 entries, 24.956,78 credited");
    assert!(stdout.contains("No problems found"));
}

#[test]
fn test_machine_decimals() {
    let fixture = latin1_fixture();
    let output = retorno_extract(&["--machine", fixture.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- 00012346 - 23456.78"));
    assert!(stdout.contains("3 entries, 24956.78 credited"));
}

#[test]
fn test_json_output() {
    let fixture = utf8_fixture();
    let output = retorno_extract(&[
        "--format",
        "json",
        "--encoding",
        "utf8",
        fixture.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["error_count"], 0);
    let result = &json["files"][0]["result"];
    assert_eq!(result["issuer"], "341");
    assert_eq!(result["entries"].as_array().unwrap().len(), 3);
    assert_eq!(result["entries"][1]["credited"], "23456.78");
}

#[test]
fn test_decode_errors_exit_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.ret");
    let content = std::fs::read(latin1_fixture()).unwrap();
    let text: String = content.iter().map(|&b| char::from(b)).collect();
    let lines: Vec<&str> = text.split("\r\n").collect();
    let broken = format!("{}\r\n{}\r\n{}\r\n", lines[0], &lines[1][..390], lines[4]);
    std::fs::write(&path, broken.chars().map(|c| c as u8).collect::<Vec<u8>>()).unwrap();

    let output = retorno_extract(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("error[R0001]"), "{stdout}");

    let strict = retorno_extract(&["--strict", path.to_str().unwrap()]);
    assert_eq!(strict.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&strict.stdout).contains("file rejected"));
}

#[test]
fn test_missing_file_exit_two() {
    let output = retorno_extract(&["/nonexistent/CN01.RET"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_unsupported_bank_exit_two() {
    let fixture = latin1_fixture();
    let output = retorno_extract(&["--bank", "237", fixture.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stdout).contains("unsupported issuer '237'"));
}

#[test]
fn test_quiet_prints_nothing() {
    let fixture = latin1_fixture();
    let output = retorno_extract(&["--quiet", fixture.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_files_is_usage_error() {
    let output = retorno_extract(&[]);
    assert_eq!(output.status.code(), Some(2));
}

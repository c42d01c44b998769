use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn sonic_cmd() -> Command {
    Command::cargo_bin("sonic").unwrap()
}

#[test]
fn test_lex_file_human_format_prints_token_lines() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "let a = 1").unwrap();

    sonic_cmd()
        .arg("lex")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword(let) \"let\""))
        .stdout(predicate::str::contains("Identifier \"a\""));
}

#[test]
fn test_lex_file_json_format_prints_json_array() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "let").unwrap();

    sonic_cmd()
        .arg("lex")
        .arg("--format")
        .arg("json")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\""))
        .stdout(predicate::str::contains("Keyword(let)"));
}

#[test]
fn test_lex_stdin_reads_source_from_standard_input() {
    sonic_cmd()
        .arg("lex")
        .arg("--stdin")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicate::str::contains("Identifier \"x\""));
}

#[test]
fn test_lex_failure_exits_nonzero_with_diagnostic_on_stderr() {
    sonic_cmd()
        .arg("lex")
        .arg("--stdin")
        .write_stdin("\"oops")
        .assert()
        .failure()
        .stderr(predicate::str::contains("UnterminatedString"))
        .stderr(predicate::str::contains("near:"));
}

#[test]
fn test_lex_missing_file_reports_io_error() {
    sonic_cmd()
        .arg("lex")
        .arg("/nonexistent/path/source.sonic")
        .assert()
        .failure();
}

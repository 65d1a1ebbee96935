//! Integration tests for the render command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn docshape_cmd() -> Command {
    let mut cmd = Command::cargo_bin("docshape").unwrap();
    cmd.env_remove("DOCSHAPE_TRANSFORM");
    cmd
}

fn setup_documents() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.json");
    fs::write(
        &path,
        r#"[
            { "_id": "a", "bar": { "foo": 1 }, "baz": 11 },
            { "_id": "b", "bar": { "foo": 2 }, "baz": 22 }
        ]"#,
    )
    .unwrap();
    let config = dir.path().join("config.yml");
    fs::write(&config, "render:\n  transform: identity\n").unwrap();
    (dir, path.to_str().unwrap().to_string())
}

fn config_path(dir: &TempDir) -> String {
    dir.path().join("config.yml").to_str().unwrap().to_string()
}

#[test]
fn test_default_output_is_raw_json() {
    let (dir, docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .arg("render")
        .arg(&docs)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"[{"_id":"a","bar":{"foo":1},"baz":11}"#));
}

#[test]
fn test_csv_from_flags() {
    let (dir, docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .arg("render")
        .arg(&docs)
        .args(["-o", "csv", "--include-docs", "-k", "bar.foo,baz"])
        .args(["--csv-labels", "foo,baz", "--csv-delimiter", ","])
        .assert()
        .success()
        .stdout("foo,baz\n1,11\n2,22\n");
}

#[test]
fn test_query_string_and_content_type() {
    let (dir, docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .arg("render")
        .arg(&docs)
        .args(["--query", "o=xml&include_docs=true&k=baz", "--show-content-type"])
        .assert()
        .success()
        .stdout("<docs><doc><baz>11</baz></doc><doc><baz>22</baz></doc></docs>")
        .stderr(predicate::str::contains("Content-Type: application/xml"));
}

#[test]
fn test_flags_override_query() {
    let (dir, docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .arg("render")
        .arg(&docs)
        .args(["--query", "o=xml&include_docs=true&k=baz", "-o", "csv"])
        .assert()
        .success()
        .stdout("baz\n11\n22\n");
}

#[test]
fn test_callback_from_stdin() {
    let (dir, _docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .args(["render", "--callback", "show"])
        .write_stdin(r#"{"x": 1}"#)
        .assert()
        .success()
        .stdout(r#"show({"x":1})"#);
}

#[test]
fn test_invalid_callback_exit_code() {
    let (dir, docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .arg("render")
        .arg(&docs)
        .args(["--callback", "alert(1)"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not a valid function name"));
}

#[test]
fn test_csv_rejects_non_row_documents() {
    let (dir, _docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .args(["render", "-o", "csv", "--include-docs"])
        .write_stdin(r#"["a simple string", "other simple string"]"#)
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_unknown_transform_fails() {
    let (dir, docs) = setup_documents();
    let config = dir.path().join("bad.yml");
    fs::write(&config, "render:\n  transform: com.example.Parser\n").unwrap();

    docshape_cmd()
        .arg("--config")
        .arg(config.to_str().unwrap())
        .arg("render")
        .arg(&docs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown transform"));
}

#[test]
fn test_strip_meta_transform() {
    let (dir, docs) = setup_documents();
    let config = dir.path().join("strip.yml");
    fs::write(&config, "render:\n  transform: strip-meta\n").unwrap();

    docshape_cmd()
        .arg("--config")
        .arg(config.to_str().unwrap())
        .arg("render")
        .arg(&docs)
        .args(["-o", "csv", "--include-docs"])
        .assert()
        .success()
        .stdout("bar.foo;baz\n1;11\n2;22\n");
}

#[test]
fn test_unwrap_rows() {
    let (dir, _docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .args(["render", "--unwrap-rows", "-o", "json", "--include-docs", "-k", "title"])
        .write_stdin(r#"[{"rows": [{"id": "1", "doc": {"title": "T1", "n": 1}}]}]"#)
        .assert()
        .success()
        .stdout(r#"{"title":"T1"}"#);
}

#[test]
fn test_malformed_input() {
    let (dir, _docs) = setup_documents();

    docshape_cmd()
        .arg("--config")
        .arg(config_path(&dir))
        .arg("render")
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

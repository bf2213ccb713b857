//! End-to-end tests for the tokenframe binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_fixture(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create fixture");
    file.write_all(content.as_bytes()).expect("write fixture");
    file
}

fn tokenframe() -> Command {
    Command::cargo_bin("tokenframe").expect("binary builds")
}

#[test]
fn words_to_csv() {
    let input = write_fixture(".csv", "id,text\n1,Hello world\n2,Good morning\n");

    tokenframe()
        .arg(input.path())
        .args(["-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,word"))
        .stdout(predicate::str::contains("1,hello"))
        .stdout(predicate::str::contains("1,world"))
        .stdout(predicate::str::contains("2,morning"));
}

#[test]
fn original_column_dropped_by_default() {
    let input = write_fixture(".csv", "id,text\n1,Hello\n");

    tokenframe()
        .arg(input.path())
        .args(["-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text").not());
}

#[test]
fn keep_original_column() {
    let input = write_fixture(".csv", "id,text\n1,Hello\n");

    tokenframe()
        .arg(input.path())
        .args(["-f", "csv", "--keep-original"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,text,word"));
}

#[test]
fn ngrams_collapse_across_rows() {
    let input = write_fixture(".csv", "doc,text\n1,end of\n1,the line\n");

    tokenframe()
        .arg(input.path())
        .args(["-f", "csv", "-u", "ngrams", "--n", "2", "-o", "ngram"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,of the"));
}

#[test]
fn metadata_tag_round_trips_through_json() {
    let input = write_fixture(".csv", "text\nHello world\n");

    tokenframe()
        .arg(input.path())
        .args(["-f", "json", "--tag", "origin=corpus-a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"origin\": \"corpus-a\""));
}

#[test]
fn unknown_unit_is_an_error() {
    let input = write_fixture(".csv", "text\nHello\n");

    tokenframe()
        .arg(input.path())
        .args(["-u", "stanzas"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown token unit"));
}

#[test]
fn markup_format_rejects_non_word_units() {
    let input = write_fixture(".csv", "text\n<p>Hello</p>\n");

    tokenframe()
        .arg(input.path())
        .args(["--format", "html", "-u", "sentences"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn html_markup_is_stripped() {
    let input = write_fixture(".csv", "text\n<p>Hello <b>world</b></p>\n");

    tokenframe()
        .arg(input.path())
        .args(["-f", "csv", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"))
        .stdout(predicate::str::contains("world"))
        .stdout(predicate::str::contains("<p>").not());
}

#[test]
fn json_input_with_nested_column_fails() {
    let input = write_fixture(
        ".json",
        r#"[{"text": "hello", "tags": ["a", "b"]}]"#,
    );

    tokenframe()
        .arg(input.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("non-scalar"));
}

#[test]
fn regex_unit_splits_on_pattern() {
    let input = write_fixture(".csv", "text\none-two-three\n");

    tokenframe()
        .arg(input.path())
        .args(["-f", "csv", "-u", "regex", "--pattern", "-", "-o", "piece"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one"))
        .stdout(predicate::str::contains("two"))
        .stdout(predicate::str::contains("three"));
}

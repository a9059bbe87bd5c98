use assert_fs::prelude::*;
use predicates::prelude::*;

const TEXT: &str = "The cat sat. The cat played. Dogs bark loudly.";

#[test]
fn summarizes_stdin() {
    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .args(["--ratio", "0.34"])
        .write_stdin(TEXT)
        .assert()
        .success()
        .stdout("The cat sat.\n");
}

#[test]
fn summarizes_file_with_sentence_count() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("para.txt").write_str(TEXT).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .current_dir(&dir)
        .args(["--sentences", "2", "para.txt"])
        .assert()
        .success()
        .stdout("The cat sat. The cat played.\n");
}

#[test]
fn multiple_files_get_headers() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("a.txt").write_str(TEXT).unwrap();
    dir.child("b.txt").write_str("Just one sentence.").unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .current_dir(&dir)
        .args(["-n", "1", "a.txt", "b.txt"])
        .assert()
        .success()
        .stdout("==> a.txt <==\nThe cat sat.\n\n==> b.txt <==\nJust one sentence.\n");
}

#[test]
fn invalid_ratio_is_rejected() {
    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .args(["--ratio", "1.5"])
        .write_stdin(TEXT)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(
            "Invalid ratio. Use a number between 0 and 1 (e.g., 0.3).",
        ));
}

#[test]
fn invalid_max_chars_is_rejected() {
    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .args(["--max-chars", "0"])
        .write_stdin(TEXT)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid max chars. Use a positive integer."));
}

#[test]
fn empty_input_is_rejected() {
    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .write_stdin("   \n")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Please paste a paragraph to summarize."));
}

#[test]
fn json_output_has_scores() {
    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .args(["--json", "--max-chars", "5"])
        .write_stdin("Dogs bark loudly.")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\": \"Dogs \""))
        .stdout(predicate::str::contains("\"truncated\": true"))
        .stdout(predicate::str::contains("\"total_sentences\": 1"));
}

#[test]
fn huge_max_chars_means_no_limit() {
    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .args(["--max-chars", "99999999999999999999", "--sentences", "1"])
        .write_stdin(TEXT)
        .assert()
        .success()
        .stdout("The cat sat.\n");
}

#[test]
fn debug_log_lists_top_words() {
    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .arg("-vv")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .write_stdin(TEXT)
        .assert()
        .success()
        .stdout("The cat sat.\n")
        .stderr(predicate::str::contains("frequency table built"))
        .stderr(predicate::str::contains("\"cat\""));
}

#[test]
fn spec_file_sets_options() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("opts.json").write_str(r#"{ "v": 1, "sentences": 2 }"#).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .current_dir(&dir)
        .args(["--spec", "opts.json"])
        .write_stdin(TEXT)
        .assert()
        .success()
        .stdout("The cat sat. The cat played.\n");
}

#[test]
fn flags_override_spec_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("opts.json").write_str(r#"{ "v": 1, "sentences": 2 }"#).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .current_dir(&dir)
        .args(["--spec", "opts.json", "--sentences", "3"])
        .write_stdin(TEXT)
        .assert()
        .success()
        .stdout(format!("{TEXT}\n"));
}

#[test]
fn invalid_spec_file_is_rejected() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("opts.json").write_str(r#"{ "v": 1, "ratio": 5 }"#).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .current_dir(&dir)
        .args(["--spec", "opts.json"])
        .write_stdin(TEXT)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("/ratio"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = assert_fs::TempDir::new().unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("rapid-summarizer")
        .current_dir(&dir)
        .arg("nope.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("reading nope.txt"));
}

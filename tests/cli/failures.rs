//! Tests for fail-fast behavior when a fetch or write fails.

use crate::support::*;

#[test]
fn test_missing_secret_fails() {
    let t = Test::new();

    let output = t.fetch(&[("does-not-exist", "out.txt")]);
    assert_run_failed(&output);
    assert_stderr_contains(&output, "error retrieving secret does-not-exist");
    assert_files(&t, &[]);
}

#[test]
fn test_second_fetch_failure_keeps_first_file() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.fetch(&[
        ("api-key", "api.txt"),
        ("does-not-exist", "missing.txt"),
        ("jwt-secret", "jwt.txt"),
    ]);
    assert_run_failed(&output);
    assert_stdout_contains(&output, "secret api-key has been written to");
    assert_stderr_contains(&output, "does-not-exist");
    assert_files(&t, &["api.txt"]);
}

#[test]
fn test_binary_mode_on_text_secret() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.fetch_binary(&[("api-key", "api.bin")]);
    assert_run_failed(&output);
    assert_stderr_contains(&output, "secret api-key has no binary data");
    assert_stderr_contains(&output, "drop --binary");
    assert_files(&t, &[]);
}

#[test]
fn test_text_mode_on_binary_secret() {
    let t = Test::new();
    t.binary_secret("keystore", KEYSTORE_BYTES);

    let output = t.fetch(&[("keystore", "keystore.jks")]);
    assert_run_failed(&output);
    assert_stderr_contains(&output, "secret keystore has no string data");
    assert_stderr_contains(&output, "pass --binary");
    assert_files(&t, &[]);
}

#[test]
fn test_empty_secret_has_no_string_data() {
    let t = Test::new();
    t.text_secret("blank", "");

    let output = t.fetch(&[("blank", "blank.txt")]);
    assert_run_failed(&output);
    assert_stderr_contains(&output, "secret blank has no string data");
    assert_files(&t, &[]);
}

#[test]
fn test_unwritable_path_stops_run() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.fetch(&[
        ("api-key", "no-such-dir/api.txt"),
        ("jwt-secret", "jwt.txt"),
    ]);
    assert_run_failed(&output);
    assert_stderr_contains(&output, "error writing secret api-key");
    assert_files(&t, &[]);
}

#[test]
fn test_kind_mismatch_mid_run_stops_later_pairs() {
    let t = Test::with_secrets(STANDARD_SECRETS);
    t.binary_secret("keystore", KEYSTORE_BYTES);

    let output = t.fetch(&[
        ("api-key", "api.txt"),
        ("keystore", "keystore.jks"),
        ("jwt-secret", "jwt.txt"),
    ]);
    assert_run_failed(&output);
    assert_files(&t, &["api.txt"]);
}

//! Tests for invocation errors and CLI flags.
//!
//! Validation runs before any secret source is contacted, so these pass
//! without AWS credentials or fixtures.

use crate::support::*;
use proptest::prelude::*;

#[test]
fn test_help_lists_flags() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("--secret"));
    assert!(out.contains("--output"));
    assert!(out.contains("--binary"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("secrets-to-file"));
}

#[test]
fn test_no_arguments_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_run_failed(&output);
    assert_stderr_contains(&output, "both --secret and --output must be provided");
}

#[test]
fn test_secret_without_output_fails() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.cmd().args(["-s", "api-key"]).output().unwrap();
    assert_run_failed(&output);
    assert_stderr_contains(&output, "both --secret and --output must be provided");
    assert_files(&t, &[]);
}

#[test]
fn test_output_without_secret_fails() {
    let t = Test::new();

    let output = t.cmd().args(["-o", "out.txt"]).output().unwrap();
    assert_run_failed(&output);
    assert_files(&t, &[]);
}

#[test]
fn test_length_mismatch_fails_before_fetching() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t
        .cmd()
        .args(["-s", "api-key", "-s", "jwt-secret", "-o", "api.txt"])
        .output()
        .unwrap();
    assert_run_failed(&output);
    assert_stderr_contains(&output, "the number of secrets (2) and output files (1) must match");
    assert_stderr_contains(&output, "one --output per --secret");
    assert_files(&t, &[]);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let t = Test::new();

    let output = t.cmd().arg("--version-stage").output().unwrap();
    assert_usage_error(&output);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn mismatched_counts_always_fail(secrets in 1usize..4, outputs in 1usize..4) {
        prop_assume!(secrets != outputs);
        let t = Test::new();

        let mut cmd = t.cmd();
        for i in 0..secrets {
            cmd.args(["-s", &format!("secret-{}", i)]);
        }
        for i in 0..outputs {
            cmd.args(["-o", &format!("out-{}", i)]);
        }
        let output = cmd.output().unwrap();

        prop_assert!(!output.status.success());
        prop_assert!(stderr(&output).contains("must match"));
        prop_assert_eq!(std::fs::read_dir(t.dir.path()).unwrap().count(), 0);
    }
}

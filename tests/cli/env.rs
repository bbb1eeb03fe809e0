//! Tests for environment variable binding.

use crate::support::*;

#[test]
fn test_env_vars_supply_all_options() {
    let t = Test::new();
    t.binary_secret("keystore", KEYSTORE_BYTES);

    let output = t
        .cmd()
        .env("SECRET", "keystore")
        .env("OUTPUT", "keystore.jks")
        .env("BINARY", "true")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.read("keystore.jks"), KEYSTORE_BYTES);
}

#[test]
fn test_env_lists_are_comma_separated() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t
        .cmd()
        .env("SECRET", "api-key,jwt-secret")
        .env("OUTPUT", "api.txt,jwt.txt")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.read("api.txt"), b"sk-test-12345");
    assert_eq!(t.read("jwt.txt"), b"super-secret-jwt-token");
}

#[test]
fn test_flags_override_env_vars() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t
        .cmd()
        .env("SECRET", "jwt-secret")
        .env("OUTPUT", "from-env.txt")
        .args(["-s", "api-key", "-o", "from-flag.txt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.read("from-flag.txt"), b"sk-test-12345");
    assert!(!t.exists("from-env.txt"));
}

#[test]
fn test_binary_env_false_keeps_text_mode() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t
        .cmd()
        .env("BINARY", "false")
        .args(["-s", "api-key", "-o", "api.txt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.read("api.txt"), b"sk-test-12345");
}

#[test]
fn test_binary_env_accepts_boolish_values() {
    for value in ["1", "t", "TRUE", "True", "yes", "on"] {
        let t = Test::new();
        t.binary_secret("keystore", KEYSTORE_BYTES);

        let output = t
            .cmd()
            .env("BINARY", value)
            .args(["-s", "keystore", "-o", "keystore.jks"])
            .output()
            .unwrap();
        assert_success(&output);
        assert_eq!(t.read("keystore.jks"), KEYSTORE_BYTES, "BINARY={}", value);
    }
}

#[test]
fn test_binary_env_zero_keeps_text_mode() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t
        .cmd()
        .env("BINARY", "0")
        .args(["-s", "api-key", "-o", "api.txt"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(t.read("api.txt"), b"sk-test-12345");
}

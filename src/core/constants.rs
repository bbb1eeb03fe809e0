//! Constants used throughout secrets-to-file.

/// Environment variable holding the log filter (overrides `--verbose`).
pub const LOG_ENV: &str = "SECRETS_TO_FILE_LOG";

/// Environment variable naming the fixture directory for the `test-source` backend.
pub const FIXTURES_ENV: &str = "SECRETS_TO_FILE_FIXTURES";

/// Fixture file extension for text secrets.
pub const TEXT_FIXTURE_EXT: &str = "txt";

/// Fixture file extension for binary secrets.
pub const BINARY_FIXTURE_EXT: &str = "bin";

/// Permission bits for newly created output files (rw-r--r--).
#[cfg(unix)]
pub const OUTPUT_MODE: u32 = 0o644;

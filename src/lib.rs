//! secrets-to-file - Fetch secrets from AWS Secrets Manager into files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Flags, env binding, execute
//! │   └── output        # Terminal output helpers
//! ├── config            # RunConfig built from the command line
//! ├── error             # Error types
//! └── core/             # Core library components
//!     ├── validation    # Secret/output pairing checks
//!     ├── source/       # Secret backends
//!     │   ├── mod       # SecretSource trait
//!     │   ├── aws       # AWS Secrets Manager
//!     │   ├── fixture   # Fixture directory (test-source)
//!     │   └── memory    # In-memory (tests)
//!     ├── materialize   # Payload kind dispatch and file write
//!     ├── pipeline      # Sequential, fail-fast orchestration
//!     └── types         # SecretRequest, SecretPayload, PayloadKind
//! ```
//!
//! # Behavior
//!
//! - Secrets and outputs pair up by position and must have equal length
//! - Text (`SecretString`) by default, binary (`SecretBinary`) with `--binary`
//! - Pairs run one at a time; the first failure aborts the run

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

//! Core library components.
//!
//! Validation, secret sources, materialization and the pipeline that ties
//! them together. Nothing here parses flags or prints to the terminal.

pub mod constants;
pub mod materialize;
pub mod pipeline;
pub mod source;
pub mod types;
pub mod validation;

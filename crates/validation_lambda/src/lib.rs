//! Lambda-facing handlers for the validation service.
//!
//! This crate owns runtime integration details (event unwrapping, response
//! envelopes, structured telemetry, and the `lambda_runtime` entrypoints)
//! on top of the pure rules in `crates/validation_core`.

pub mod handlers;
pub mod telemetry;

//! Shared input-validation domain primitives.
//!
//! This crate owns the request/response contracts, the validation policy,
//! and the rule pipeline. It intentionally excludes AWS SDK and Lambda
//! runtime concerns; see `crates/validation_lambda` for those.

pub mod contract;
pub mod policy;
pub mod rules;

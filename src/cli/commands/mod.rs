//! CLI command implementations.

pub mod check_runtime;
pub mod features;
pub mod show;

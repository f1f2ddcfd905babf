//! Infrastructure layer module
//!
//! Adapters behind the domain ports:
//! - Manifest loading (figment)
//! - Process environment access
//! - In-memory configuration store
//! - Host runtime probe
//! - Logging infrastructure

pub mod config;
pub mod env;
pub mod logging;
pub mod runtime;
pub mod store;

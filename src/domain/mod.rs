//! Domain layer for agent configuration
//!
//! Plain data types describing resolved configuration, the errors raised
//! while building it, and the ports the resolver talks through.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConfigError, ConfigResult};

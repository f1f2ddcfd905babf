//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON formatting
//! - stdout, stderr or file destinations (tracing-appender)
//! - License key redaction

pub mod config;
pub mod logger;
pub mod redaction;

pub use config::{LogConfig, LogDestination, LogFormat};
pub use logger::LoggerImpl;
pub use redaction::redact_license_key;

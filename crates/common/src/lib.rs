//! Common utilities shared by the hospital query services.
//!
//! This crate provides:
//! - Layered configuration loading (files, `APP_` variables, legacy variables)
//! - Tracing subscriber initialisation

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, DatabaseConfig, ServerConfig, TelemetryConfig};
pub use telemetry::init_tracing;

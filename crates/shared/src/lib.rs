//! Shared errors and configuration for Converto.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, RateEntry, ServerConfig};
pub use error::AppError;

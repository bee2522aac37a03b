//! Shared utilities and common types for the airtime top-up server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, server, logging)
//! - The `{ "error": ... }` response body
//! - Phone number helpers for log masking

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, ServerConfig};
pub use types::ErrorBody;
pub use utils::phone;

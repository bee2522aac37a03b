//! Configuration types shared by the server crates
//!
//! - `environment` - deployment environment detection
//! - `logging` - log level and output format per environment
//! - `server` - HTTP server bind settings

pub mod environment;
pub mod logging;
pub mod server;

pub use environment::Environment;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

//! Zendit Airtime API
//!
//! - `config` - credentials, base URLs and timeout from the environment
//! - `client` - `AirtimeProvider` implementation over `reqwest`

pub mod client;
pub mod config;

pub use client::ZenditClient;
pub use config::ZenditConfig;

//! # Airtime Top-up Core
//!
//! Domain layer for the top-up flow: request validation, operator selection,
//! the submission payload, the provider abstraction and the service that
//! runs token → carrier lookup → top-up in order.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;

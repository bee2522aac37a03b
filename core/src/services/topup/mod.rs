//! Airtime top-up service module
//!
//! This module runs the top-up pipeline against an [`AirtimeProvider`]:
//! - Client-credentials token exchange
//! - Carrier lookup for the phone number (first match wins)
//! - Top-up submission with a fresh correlation id
//!
//! Every step runs once and in order; any failure ends the request.

pub mod mock;
mod service;
mod traits;
mod types;


pub use service::TopUpService;
pub use traits::AirtimeProvider;
pub use types::{ProviderReply, TopUpOutcome};

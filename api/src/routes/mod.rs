//! Route handlers
//!
//! - `topup` - the airtime top-up endpoint
//! - `health` - liveness probe

pub mod health;
pub mod topup;

//! Business services containing domain logic and use cases.

pub mod topup;

// Re-export commonly used types
pub use topup::{AirtimeProvider, ProviderReply, TopUpOutcome, TopUpService};

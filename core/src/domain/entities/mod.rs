//! Request-scoped domain entities

pub mod operator;
pub mod topup;


pub use operator::{Operator, OperatorLookup};
pub use topup::{TopUpRequest, TopUpSubmission};

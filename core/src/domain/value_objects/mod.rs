//! Value objects for the domain layer

pub mod amount;
pub mod credentials;
pub mod custom_identifier;

pub use amount::Amount;
pub use credentials::{AccessToken, ClientCredentials};
pub use custom_identifier::CustomIdentifierGenerator;

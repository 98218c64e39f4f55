use aws_smithy_types::DateTime;

pub mod broker;
pub mod credentials;

/// Short-lived credentials proven to belong to the expected spoke account.
///
/// Owned exclusively by the caller after return; never persisted or renewed
/// by the broker. Expiry is controlled by the provider.
#[derive(Debug, Clone)]
pub struct AssumedCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
    pub expiration: DateTime,
    /// Account id the credentials actually resolved to
    pub account_id: String,
}

pub use broker::{BrokerError, SpokeBroker};

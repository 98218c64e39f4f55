pub mod aws;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;

pub use aws::{AssumedCredentials, BrokerError, SpokeBroker};
pub use config::BrokerConfig;

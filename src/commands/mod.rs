pub mod assume;
pub mod identity;

pub use assume::AssumeCommand;
pub use identity::IdentityCommand;

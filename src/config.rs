use std::env;

use crate::constants::{DEFAULT_HUB_PROFILE, DEFAULT_REGION, DEFAULT_SPOKE_ROLE_NAME};

/// Broker configuration, resolved once at the composition root.
///
/// `spoke_account_id` is required for a successful broker call but is not
/// enforced here: the broker rejects an empty value as a configuration error
/// before making any network call, so an incomplete environment surfaces
/// through the same error taxonomy as every other failure.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Named profile holding the hub-side base identity
    pub hub_profile: String,
    /// Expected hub account id. Informational only; the hub identity is
    /// never verified against it, only the spoke identity is checked.
    pub hub_account_id: Option<String>,
    /// Account whose role is assumed
    pub spoke_account_id: String,
    /// Role name assumed in the spoke account
    pub spoke_role_name: String,
    /// Region used for all STS calls
    pub region: String,
}

impl BrokerConfig {
    /// Config with defaults for everything but the target account.
    pub fn new(spoke_account_id: impl Into<String>) -> Self {
        Self {
            hub_profile: DEFAULT_HUB_PROFILE.to_string(),
            hub_account_id: None,
            spoke_account_id: spoke_account_id.into(),
            spoke_role_name: DEFAULT_SPOKE_ROLE_NAME.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// Unset or empty variables fall back to their defaults. A missing
    /// SPOKE_ACCOUNT_ID yields an empty account id that the broker rejects
    /// on the first call.
    pub fn from_env() -> Self {
        Self {
            hub_profile: env_or("HUB_PROFILE", DEFAULT_HUB_PROFILE),
            hub_account_id: env::var("HUB_ACCOUNT_ID").ok().filter(|v| !v.is_empty()),
            spoke_account_id: env::var("SPOKE_ACCOUNT_ID").unwrap_or_default(),
            spoke_role_name: env_or("SPOKE_ROLE_NAME", DEFAULT_SPOKE_ROLE_NAME),
            region: env_or("REGION", DEFAULT_REGION),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 5] = [
        "HUB_PROFILE",
        "HUB_ACCOUNT_ID",
        "SPOKE_ACCOUNT_ID",
        "SPOKE_ROLE_NAME",
        "REGION",
    ];

    fn snapshot() -> Vec<(&'static str, Option<String>)> {
        KEYS.iter().map(|key| (*key, env::var(key).ok())).collect()
    }

    fn clear() {
        for key in KEYS {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    fn restore(saved: Vec<(&'static str, Option<String>)>) {
        for (key, value) in saved {
            unsafe {
                match value {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        let saved = snapshot();
        clear();

        let config = BrokerConfig::from_env();
        assert_eq!(config.hub_profile, "hub-me");
        assert_eq!(config.hub_account_id, None);
        assert_eq!(config.spoke_account_id, "");
        assert_eq!(config.spoke_role_name, "SpokeECSRole");
        assert_eq!(config.region, "us-west-2");

        restore(saved);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        let saved = snapshot();
        clear();

        unsafe {
            env::set_var("HUB_PROFILE", "hub-prod");
            env::set_var("HUB_ACCOUNT_ID", "111111111111");
            env::set_var("SPOKE_ACCOUNT_ID", "222222222222");
            env::set_var("SPOKE_ROLE_NAME", "SpokeAdminRole");
            env::set_var("REGION", "eu-central-1");
        }

        let config = BrokerConfig::from_env();
        assert_eq!(config.hub_profile, "hub-prod");
        assert_eq!(config.hub_account_id.as_deref(), Some("111111111111"));
        assert_eq!(config.spoke_account_id, "222222222222");
        assert_eq!(config.spoke_role_name, "SpokeAdminRole");
        assert_eq!(config.region, "eu-central-1");

        restore(saved);
    }

    #[test]
    #[serial]
    fn test_from_env_treats_empty_as_unset() {
        let saved = snapshot();
        clear();

        unsafe {
            env::set_var("HUB_PROFILE", "");
            env::set_var("HUB_ACCOUNT_ID", "");
            env::set_var("REGION", "");
        }

        let config = BrokerConfig::from_env();
        assert_eq!(config.hub_profile, "hub-me");
        assert_eq!(config.hub_account_id, None);
        assert_eq!(config.region, "us-west-2");

        restore(saved);
    }

    #[test]
    fn test_new_defaults_everything_but_the_account() {
        let config = BrokerConfig::new("222222222222");
        assert_eq!(config.hub_profile, "hub-me");
        assert_eq!(config.hub_account_id, None);
        assert_eq!(config.spoke_account_id, "222222222222");
        assert_eq!(config.spoke_role_name, "SpokeECSRole");
        assert_eq!(config.region, "us-west-2");
    }
}

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sts::Client as StsClient;
use clap::Args;
use tracing::{debug, info};

use crate::config::BrokerConfig;

/// Print which account and principal a profile currently resolves to.
///
/// The broker never verifies the hub identity; this command lets an operator
/// check it by hand.
#[derive(Debug, Clone, Args)]
pub struct IdentityCommand {
    #[arg(long, help = "Profile to introspect (defaults to the hub profile)")]
    pub profile: Option<String>,

    #[arg(long, help = "AWS region for the STS call (overrides REGION)")]
    pub region: Option<String>,
}

impl IdentityCommand {
    pub async fn execute(self, hub_profile: Option<&str>) -> Result<()> {
        let env_config = BrokerConfig::from_env();
        let profile = self
            .profile
            .as_deref()
            .or(hub_profile)
            .unwrap_or(&env_config.hub_profile);
        let region = self.region.unwrap_or_else(|| env_config.region.clone());

        info!("Resolving caller identity for profile: {}", profile);
        debug!("Region: {}", region);

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(Region::new(region))
            .load()
            .await;

        let client = StsClient::new(&sdk_config);
        let identity = client
            .get_caller_identity()
            .send()
            .await
            .context("Failed to resolve caller identity")?;

        println!("Account: {}", identity.account().unwrap_or("unknown"));
        println!("Arn:     {}", identity.arn().unwrap_or("unknown"));
        println!("UserId:  {}", identity.user_id().unwrap_or("unknown"));

        Ok(())
    }
}

use anyhow::{Context, Result};
use aws_smithy_types::date_time::Format;
use clap::Args;
use tracing::info;

use crate::{
    aws::{self, SpokeBroker},
    config::BrokerConfig,
    constants::DEFAULT_OUTPUT_PROFILE,
};

#[derive(Debug, Clone, Args)]
pub struct AssumeCommand {
    #[arg(
        short = 'a',
        long,
        help = "Spoke account id to assume into (overrides SPOKE_ACCOUNT_ID)"
    )]
    pub account: Option<String>,

    #[arg(
        short = 'r',
        long,
        help = "Role name to assume in the spoke account (overrides SPOKE_ROLE_NAME)"
    )]
    pub role: Option<String>,

    #[arg(long, help = "AWS region for STS calls (overrides REGION)")]
    pub region: Option<String>,

    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUTPUT_PROFILE,
        help = "Profile the assumed credentials are written to"
    )]
    pub output_profile: String,
}

impl AssumeCommand {
    pub async fn execute(self, hub_profile: Option<&str>) -> Result<()> {
        // Environment first, flags win
        let mut config = BrokerConfig::from_env();
        if let Some(profile) = hub_profile {
            config.hub_profile = profile.to_string();
        }
        if let Some(account) = self.account {
            config.spoke_account_id = account;
        }
        if let Some(role) = self.role {
            config.spoke_role_name = role;
        }
        if let Some(region) = self.region {
            config.region = region;
        }

        info!(
            "Brokering credentials for spoke account: {}",
            config.spoke_account_id
        );

        let broker = SpokeBroker::from_hub_profile(&config).await;
        let credentials = broker
            .assume_spoke_session(&config)
            .await
            .context("Failed to broker spoke credentials")?;

        aws::credentials::save_credentials(&self.output_profile, &credentials)
            .await
            .context("Failed to save spoke credentials")?;

        println!(
            "Credentials for account {} saved to the {} profile.",
            credentials.account_id, self.output_profile
        );
        println!(
            "Credentials will expire at: {}",
            credentials
                .expiration
                .fmt(Format::DateTime)
                .unwrap_or_else(|_| "unknown".to_string())
        );

        Ok(())
    }
}

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{AssumeCommand, IdentityCommand};
use crate::constants::DEFAULT_OUTPUT_PROFILE;

#[derive(Debug, Clone, Parser)]
#[command(name = "spoke", version, about = "Hub-to-spoke AWS credential broker", long_about = None, arg_required_else_help = false)]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        global = true,
        help = "Hub AWS profile holding the base identity (overrides HUB_PROFILE)"
    )]
    pub hub_profile: Option<String>,

    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Assume the spoke role and save verified credentials")]
    Assume(AssumeCommand),
    #[command(about = "Show the caller identity of a profile")]
    Identity(IdentityCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let hub_profile = self.hub_profile;
        let command = self.command.unwrap_or(Commands::Assume(AssumeCommand {
            account: None,
            role: None,
            region: None,
            output_profile: DEFAULT_OUTPUT_PROFILE.to_string(),
        }));

        match command {
            Commands::Assume(cmd) => cmd.execute(hub_profile.as_deref()).await,
            Commands::Identity(cmd) => cmd.execute(hub_profile.as_deref()).await,
        }
    }
}

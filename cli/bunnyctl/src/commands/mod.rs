//! CLI commands.

mod exists;
mod rules;
mod validate;

use anyhow::{Context, Result};
use bunny_client::{ConnectionSettings, ElasticClient};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// bunny - Validate index and alias names and inspect cluster indices.
#[derive(Debug, Parser)]
#[command(name = "bunny")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    /// Cluster URL.
    #[arg(long, global = true, env = "ELASTIC_BUNNY_URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate index or alias names.
    Validate(validate::ValidateCommand),

    /// Check whether an index exists.
    Exists(exists::ExistsCommand),

    /// List the naming rules, in evaluation order.
    Rules(rules::RulesCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub async fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: OutputFormat::parse(&self.format),
            url: self.url,
        };

        match self.command {
            Commands::Validate(cmd) => cmd.run(ctx).await,
            Commands::Exists(cmd) => cmd.run(ctx).await,
            Commands::Rules(cmd) => cmd.run(ctx).await,
            Commands::Version => {
                println!("bunny {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
    pub url: Option<String>,
}

impl CommandContext {
    /// Connection settings from the environment, with `--url` taking precedence.
    pub fn settings(&self) -> Result<ConnectionSettings> {
        let mut settings =
            ConnectionSettings::from_env().context("Failed to load connection settings")?;
        if let Some(url) = &self.url {
            settings.url = url.clone();
        }
        Ok(settings)
    }

    /// Get a cluster client.
    pub fn client(&self) -> Result<ElasticClient> {
        let settings = self.settings()?;
        ElasticClient::new(&settings).context("Failed to create cluster client")
    }
}

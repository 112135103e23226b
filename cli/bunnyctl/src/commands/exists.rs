//! Exists command.

use anyhow::Result;
use bunny_client::IndexExists;
use bunny_names::IndexName;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Check whether an index exists in the cluster.
///
/// The name is validated before the cluster is contacted.
#[derive(Debug, Args)]
pub struct ExistsCommand {
    /// Index name.
    index: String,
}

#[derive(Debug, Serialize)]
struct ExistsView<'a> {
    index: &'a str,
    exists: bool,
}

impl ExistsCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let name = IndexName::parse(&self.index).map_err(CliError::from)?;

        let client = ctx.client()?;
        debug!(url = %client.base_url(), index = %name, "querying cluster");
        let exists = client.exists(&name).await.map_err(CliError::from)?;

        match ctx.format {
            OutputFormat::Json => print_single(&ExistsView {
                index: name.as_str(),
                exists,
            }),
            OutputFormat::Table if exists => {
                print_success(&format!("Index '{}' exists", name));
            }
            OutputFormat::Table => {
                print_info(&format!("Index '{}' does not exist", name));
            }
        }

        Ok(())
    }
}

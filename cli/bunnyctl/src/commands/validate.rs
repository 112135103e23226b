//! Validate command.

use anyhow::Result;
use bunny_names::{NameKind, ResourceName};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Validate index or alias names.
///
/// Exits with status 1 if any name is invalid.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Names to validate.
    #[arg(required = true)]
    names: Vec<String>,

    /// Kind of name to validate as.
    #[arg(long, value_enum, default_value_t = KindArg::Index)]
    kind: KindArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Index,
    Alias,
}

impl From<KindArg> for NameKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Index => NameKind::Index,
            KindArg::Alias => NameKind::Alias,
        }
    }
}

/// Outcome of validating one name.
#[derive(Debug, Clone, Serialize, Tabled)]
struct ValidationReport {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Kind")]
    kind: NameKind,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Rule", display = "display_option")]
    rule: Option<String>,

    #[tabled(rename = "Message", display = "display_option")]
    message: Option<String>,
}

fn display_option(opt: &Option<String>) -> String {
    opt.as_deref().unwrap_or("-").to_string()
}

impl ValidationReport {
    fn new(kind: NameKind, name: &str) -> Self {
        match ResourceName::parse(kind, name) {
            Ok(_) => Self {
                name: name.to_string(),
                kind,
                valid: true,
                rule: None,
                message: None,
            },
            Err(err) => Self {
                name: name.to_string(),
                kind,
                valid: false,
                rule: err.rule().map(|r| r.to_string()),
                message: Some(err.to_string()),
            },
        }
    }
}

impl ValidateCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let kind = NameKind::from(self.kind);
        let reports: Vec<_> = self
            .names
            .iter()
            .map(|name| ValidationReport::new(kind, name))
            .collect();

        print_output(&reports, ctx.format);

        let invalid = reports.iter().filter(|r| !r.valid).count();
        if invalid > 0 {
            return Err(CliError::InvalidNames {
                invalid,
                total: reports.len(),
            }
            .into());
        }
        Ok(())
    }
}

//! Rules command.

use anyhow::Result;
use bunny_names::Rule;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// List the naming rules, in evaluation order.
#[derive(Debug, Args)]
pub struct RulesCommand {}

#[derive(Debug, Serialize, Tabled)]
struct RuleView {
    #[tabled(rename = "#")]
    order: usize,

    #[tabled(rename = "Rule")]
    rule: &'static str,

    #[tabled(rename = "Description")]
    description: String,
}

fn rule_views() -> Vec<RuleView> {
    Rule::ALL
        .iter()
        .enumerate()
        .map(|(i, rule)| RuleView {
            order: i + 1,
            rule: rule.as_str(),
            description: rule.describe(),
        })
        .collect()
}

impl RulesCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        print_output(&rule_views(), ctx.format);
        Ok(())
    }
}

//! bunnyctl (bunny) - CLI for index and alias names
//!
//! Validates names against the cluster's naming rules and checks whether
//! indices exist.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Prefer RUST_LOG, fall back to BUNNY_LOG_LEVEL
    let log_level = std::env::var("BUNNY_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let json_logs = is_json_format(std::env::var("BUNNY_LOG_FORMAT").ok().as_deref());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into()))
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();

    if let Err(e) = cli.run().await {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}

fn is_json_format(format: Option<&str>) -> bool {
    format.is_some_and(|f| f.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_selection() {
        assert!(is_json_format(Some("json")));
        assert!(is_json_format(Some("JSON")));
        assert!(!is_json_format(Some("pretty")));
        assert!(!is_json_format(None));
    }
}

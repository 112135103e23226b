//! Error handling and display for the CLI.

use bunny_client::ClientError;
use bunny_names::NameError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    InvalidName(#[from] NameError),

    #[error("{invalid} of {total} names are invalid")]
    InvalidNames { invalid: usize, total: usize },

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidName(_) | CliError::InvalidNames { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `bunny rules` to see the naming rules.".yellow()
                );
            }
            CliError::Client(ClientError::Network(_)) => {
                eprintln!(
                    "\n{}",
                    "Hint: Check that the cluster is reachable at --url or ELASTIC_BUNNY_URL."
                        .yellow()
                );
            }
            CliError::Client(ClientError::UnexpectedStatus { status: 401, .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: Set ELASTIC_BUNNY_USERNAME and ELASTIC_BUNNY_PASSWORD.".yellow()
                );
            }
            CliError::Client(ClientError::UnexpectedStatus { status: 403, .. }) => {
                eprintln!(
                    "\n{}",
                    "Hint: The configured user may not have access to this index.".yellow()
                );
            }
            _ => {}
        }
    }
}

use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};
use scripts::{cli::Cli, commands::deploy};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // Variables already present in the environment take precedence over `.env`
    dotenvy::dotenv().ok();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            // Bad arguments are a failed run like any other
            _ => {
                let _ = e.print();
                return ExitCode::FAILURE;
            }
        },
    };

    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    match deploy(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Deployment failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! LLM command-line client
//!
//! Sends a prompt to the configured chat completions endpoint and prints the
//! rendered answer

use std::process::ExitCode;

use clap::Parser;
use llmcli::cli::Args;
use llmcli::utils::logging::init_logging;
use llmcli::{app, version_info, Settings};
use tracing::{debug, error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let args = Args::parse();

    let settings = match Settings::new() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(2);
        }
    };
    init_logging(&settings.logging);
    debug!("{}", version_info());

    match app::run(&args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error_type = e.error_type(), "{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

//! airsig - air-signature demo CLI
//!
//! ```bash
//! airsig register --username alice --email alice@example.com \
//!     --password password123 --confirm-password password123
//! airsig enroll --pretty
//! airsig authenticate
//! airsig dashboard --pretty
//! ```

use std::process::ExitCode;

use airsig_cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match airsig_cli::run(cli).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.error_code());
            ExitCode::FAILURE
        }
    }
}
